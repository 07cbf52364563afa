//! Token-by-token glossing of Tovian text.
//!
//! Every input token yields exactly one row, in input order. Hyphenated
//! tokens are glossed segment by segment; anything else is resolved as a
//! whole.

use serde::{Deserialize, Serialize};

use crate::entry::LexicalEntry;
use crate::lexicon::Lexicon;
use crate::matcher::best_match_token;
use crate::tokenizer::tokenize_tovian;

/// Gloss shown for a single-segment token that nothing resolves
pub const NO_MATCH: &str = "(no match)";

/// Gloss shown for an unresolved segment inside a compound
pub const UNKNOWN_SEGMENT: &str = "(?)";

/// Separator between segment glosses
pub const GLOSS_JOINER: &str = " + ";

/// Separator between segment roots
pub const ROOTS_JOINER: &str = " | ";

/// Non-breaking hyphen used to display compound segments
pub const SEGMENT_JOINER: char = '\u{2011}';

/// One hyphen-delimited piece of a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Segment text as written
    pub text: String,
    /// Entry the segment resolved to
    pub entry: Option<LexicalEntry>,
}

/// Annotation for one token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossRow {
    /// The token as written
    pub token: String,
    /// Hyphen-delimited segments (one for a plain token)
    pub segments: Vec<Segment>,
    /// English gloss, or `NO_MATCH`
    pub english_gloss: String,
    /// IPA of the resolved pieces
    pub ipa: String,
    /// Roots of the resolved pieces
    pub roots: String,
}

impl GlossRow {
    /// Whether this is a plain token that nothing resolved.
    ///
    /// Callers should render such rows differently from a real gloss.
    pub fn is_no_match(&self) -> bool {
        self.segments.len() == 1 && self.segments[0].entry.is_none()
    }

    /// Whether the token was split on hyphens
    pub fn is_compound(&self) -> bool {
        self.segments.len() > 1
    }

    /// Text for a "segments" column: the matched form for a plain token,
    /// the segments joined with a non-breaking hyphen for a compound.
    pub fn segment_display(&self) -> String {
        if self.is_compound() {
            let texts: Vec<&str> = self.segments.iter().map(|s| s.text.as_str()).collect();
            return texts.join(&SEGMENT_JOINER.to_string());
        }
        self.segments
            .first()
            .and_then(|s| s.entry.as_ref())
            .map(|e| e.tovian.clone())
            .unwrap_or_default()
    }
}

fn gloss_compound(token: &str, pieces: Vec<&str>, lexicon: &Lexicon) -> GlossRow {
    let segments: Vec<Segment> = pieces
        .into_iter()
        .map(|text| Segment {
            text: text.to_string(),
            entry: best_match_token(lexicon, text).cloned(),
        })
        .collect();

    let gloss: Vec<&str> = segments
        .iter()
        .map(|s| s.entry.as_ref().map_or(UNKNOWN_SEGMENT, |e| e.english.as_str()))
        .collect();
    let ipa: Vec<&str> = segments
        .iter()
        .filter_map(|s| s.entry.as_ref())
        .map(|e| e.ipa.as_str())
        .filter(|ipa| !ipa.is_empty())
        .collect();
    let roots: Vec<&str> = segments
        .iter()
        .filter_map(|s| s.entry.as_ref())
        .map(|e| e.roots.as_str())
        .filter(|roots| !roots.is_empty())
        .collect();

    GlossRow {
        token: token.to_string(),
        english_gloss: gloss.join(GLOSS_JOINER),
        ipa: ipa.join(" "),
        roots: roots.join(ROOTS_JOINER),
        segments,
    }
}

fn gloss_plain(token: &str, lexicon: &Lexicon) -> GlossRow {
    let entry = best_match_token(lexicon, token).cloned();
    let (english_gloss, ipa, roots) = match &entry {
        Some(e) => (e.english.clone(), e.ipa.clone(), e.roots.clone()),
        None => (NO_MATCH.to_string(), String::new(), String::new()),
    };
    GlossRow {
        token: token.to_string(),
        segments: vec![Segment {
            text: token.to_string(),
            entry,
        }],
        english_gloss,
        ipa,
        roots,
    }
}

/// Gloss a single token
pub fn gloss_token(token: &str, lexicon: &Lexicon) -> GlossRow {
    let pieces: Vec<&str> = token.split('-').collect();
    if pieces.len() > 1 {
        gloss_compound(token, pieces, lexicon)
    } else {
        gloss_plain(token, lexicon)
    }
}

/// Gloss a token stream, one row per token
pub fn gloss<T: AsRef<str>>(tokens: &[T], lexicon: &Lexicon) -> Vec<GlossRow> {
    tokens
        .iter()
        .map(|t| gloss_token(t.as_ref(), lexicon))
        .collect()
}

/// Tokenize Tovian text and gloss the result
pub fn gloss_text(text: &str, lexicon: &Lexicon) -> Vec<GlossRow> {
    gloss(&tokenize_tovian(text), lexicon)
}
