//! Plain-text search documents for an external fuzzy matcher.
//!
//! The crate does not rank fuzzy matches itself. It turns lexicon entries
//! and guide pages into flat text documents and accepts any ranking
//! implementation through the [`FuzzySearch`] trait.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lexicon::Lexicon;

/// Where a search document came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    /// A lexicon entry
    Vocab,
    /// A guide page title
    Guide,
}

/// A flat text document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDocument {
    /// Whether `index` points into the lexicon or the guide pages
    pub kind: DocumentKind,
    /// Position of the source entry or page
    pub index: usize,
    /// Text to match against
    pub text: String,
}

/// One ranked result; lower scores are better
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchHit {
    /// Position in the document list the searcher was built over
    pub document: usize,
    /// Relative offset of the first matching term, in `[0, 1]`
    pub score: f64,
}

/// A ranking capability injected by the caller
pub trait FuzzySearch {
    /// Rank documents against a query, best first
    fn search(&self, query: &str) -> Vec<SearchHit>;
}

/// Add simple English stemming variants to a phrase.
///
/// Each whitespace token contributes its lower-cased form plus variants for
/// `-ing`, `-ed`, `-es` and `-s` endings. Forms are deduplicated in
/// first-seen order.
pub fn expand_english_variants(phrase: &str) -> String {
    let mut forms: Vec<String> = Vec::new();
    let mut add = |form: String| {
        if !forms.contains(&form) {
            forms.push(form);
        }
    };

    for token in phrase.split_whitespace() {
        let lower = token.to_lowercase();
        add(lower.clone());
        if let Some(stem) = lower.strip_suffix("ing") {
            add(stem.to_string());
            add(format!("{}e", stem));
            add(format!("to {}", stem));
        }
        if let Some(stem) = lower.strip_suffix("ed") {
            add(stem.to_string());
            add(format!("{}e", stem));
        }
        if let Some(stem) = lower.strip_suffix("es") {
            add(stem.to_string());
        }
        if let Some(stem) = lower.strip_suffix('s') {
            add(stem.to_string());
        }
    }

    forms.join(" ")
}

/// One document per lexicon entry: english, variants, tovian, roots, ipa
pub fn vocab_documents(lexicon: &Lexicon) -> Vec<SearchDocument> {
    lexicon
        .iter()
        .enumerate()
        .map(|(index, e)| SearchDocument {
            kind: DocumentKind::Vocab,
            index,
            text: format!(
                "{} {} {} {} {}",
                e.english,
                expand_english_variants(&e.english),
                e.tovian,
                e.roots,
                e.ipa
            ),
        })
        .collect()
}

/// One document per guide page, holding its title
pub fn guide_documents(pages: &[GuidePage]) -> Vec<SearchDocument> {
    pages
        .iter()
        .enumerate()
        .map(|(index, page)| SearchDocument {
            kind: DocumentKind::Guide,
            index,
            text: page.title.clone(),
        })
        .collect()
}

/// Vocabulary documents followed by guide documents
pub fn combined_documents(lexicon: &Lexicon, pages: &[GuidePage]) -> Vec<SearchDocument> {
    let mut docs = vocab_documents(lexicon);
    docs.extend(guide_documents(pages));
    docs
}

/// Case-insensitive substring ranking.
///
/// Every query term must occur in the document; the score is the offset
/// of the first term relative to the document length.
pub struct SubstringSearch {
    texts: Vec<String>,
}

impl SubstringSearch {
    /// Index the lowercased text of each document
    pub fn new(documents: &[SearchDocument]) -> Self {
        SubstringSearch {
            texts: documents.iter().map(|d| d.text.to_lowercase()).collect(),
        }
    }
}

impl FuzzySearch for SubstringSearch {
    fn search(&self, query: &str) -> Vec<SearchHit> {
        let terms: Vec<String> = query.split_whitespace().map(|t| t.to_lowercase()).collect();
        let Some(first) = terms.first() else {
            return Vec::new();
        };

        let mut hits: Vec<SearchHit> = self
            .texts
            .iter()
            .enumerate()
            .filter(|(_, text)| terms.iter().all(|t| text.contains(t.as_str())))
            .filter_map(|(document, text)| {
                let offset = text.find(first.as_str())?;
                Some(SearchHit {
                    document,
                    score: offset as f64 / text.len().max(1) as f64,
                })
            })
            .collect();
        hits.sort_by(|a, b| a.score.total_cmp(&b.score));
        hits
    }
}

/// An entry of the guide manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidePage {
    /// Slug, e.g. `mood-voice`
    pub id: String,
    /// Page path relative to the guide root
    pub path: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
}

impl GuidePage {
    /// Build a manifest entry from a page slug and its markdown source
    pub fn from_markdown(slug: &str, markdown: &str) -> Self {
        let (title, summary) = extract_title_summary(markdown, &slug_to_title(slug));
        GuidePage {
            id: slug.to_string(),
            path: format!("{}.html", slug),
            title,
            summary,
        }
    }
}

static H1_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#\s+(.+?)\s*$").expect("Invalid regex"));

static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("Invalid regex"));

/// `mood-voice` -> `Mood voice`
pub fn slug_to_title(slug: &str) -> String {
    let spaced = slug.replace('-', " ");
    let spaced = spaced.trim();
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Title from the first `# ` heading (or `fallback`), summary from the
/// first line that is neither blank, a heading nor a code fence
pub fn extract_title_summary(markdown: &str, fallback: &str) -> (String, String) {
    let title = H1_RE
        .captures(markdown)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| fallback.to_string());

    let summary = markdown
        .lines()
        .map(str::trim)
        .find(|t| !t.is_empty() && !t.starts_with('#') && !t.starts_with("```"))
        .map(|t| LINK_RE.replace_all(t, "$1").into_owned())
        .unwrap_or_default();

    (title, summary)
}

/// Parse a guide manifest (a JSON array of pages)
pub fn parse_manifest(json: &str) -> Result<Vec<GuidePage>> {
    Ok(serde_json::from_str(json)?)
}
