//! Rule-based English to Tovian draft translation.
//!
//! The engine targets simple `SUBJECT VERB [PREP [DET] NOUN]` clauses and
//! produces an SOV draft: subject pronoun, case-marked object, tense
//! auxiliary, verb. Words outside that frame are dropped when a verb is
//! found. Without a verb every word is carried over in order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::case_phrase::{detect_case_phrase, CasePhrase};
use crate::lexicon::Lexicon;
use crate::matcher::{best_match_token, lookup_english};
use crate::normalize::strip_trailing_punct;
use crate::rules::is_verb;
use crate::tense::{resolve, Agreement};
use crate::tokenizer::tokenize_english;

/// Vowels subject to elision at the end of the verb form
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// One English word and its Tovian rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappedWord {
    /// The word with trailing punctuation removed
    pub english: String,
    /// The resolved Tovian form, or the English word when nothing resolved
    pub tovian: String,
    /// IPA of the resolved entry, empty if unresolved
    pub ipa: String,
    /// Whether the resolved entry's head word is a known verb
    pub is_verb: bool,
    /// Whether a lexicon entry resolved
    pub resolved: bool,
}

impl MappedWord {
    fn of(lexicon: &Lexicon, word: &str) -> Self {
        let english = strip_trailing_punct(word).to_string();
        match lookup_english(lexicon, &english) {
            Some(entry) => MappedWord {
                tovian: entry.tovian.clone(),
                ipa: entry.ipa.clone(),
                is_verb: is_verb(&entry.english_head()),
                resolved: true,
                english,
            },
            // Punctuation-only words ("...", "--") pass through as written
            None => MappedWord {
                tovian: if english.is_empty() {
                    word.to_string()
                } else {
                    english.clone()
                },
                ipa: String::new(),
                is_verb: false,
                resolved: false,
                english,
            },
        }
    }
}

/// The structured result of drafting one sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftSentence {
    /// Tense and person selected for the clause
    pub agreement: Agreement,
    /// The case-marked phrase, if one was detected
    pub case_phrase: Option<CasePhrase>,
    /// Every input word, mapped, in input order
    pub words: Vec<MappedWord>,
    /// Position of the main verb
    pub verb_position: Option<usize>,
    /// Verb with person suffix after elision
    pub verb_form: Option<String>,
    /// Output forms in order
    pub parts: Vec<String>,
    /// Mapped words left out of the verb clause
    pub remainder: Vec<String>,
}

impl DraftSentence {
    /// The draft as one space-joined string
    pub fn text(&self) -> String {
        self.parts.join(" ")
    }

    /// Whether the draft was built around a verb (SOV) or is a word-by-word fallback
    pub fn has_verb(&self) -> bool {
        self.verb_position.is_some()
    }
}

/// Display lines for a draft
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Tovian draft
    pub tovian: String,
    /// Latin-script rendering (identical to `tovian`)
    pub romanization: String,
    /// Best-effort IPA, one item per draft word
    pub ipa: String,
}

/// Collapse a run of identical vowels at the end of a form to one vowel
pub fn elide_final_vowels(form: &str) -> String {
    let mut chars: Vec<char> = form.chars().collect();
    if let Some(&last) = chars.last() {
        if VOWELS.contains(&last) {
            while chars.len() >= 2 && chars[chars.len() - 2] == last {
                chars.pop();
            }
        }
    }
    chars.into_iter().collect()
}

/// Build the structured draft for an English sentence
pub fn draft(lexicon: &Lexicon, text: &str) -> DraftSentence {
    let words = tokenize_english(text);
    let agreement = resolve(&words);
    let case_phrase = detect_case_phrase(lexicon, &words);
    let mapped: Vec<MappedWord> = words.iter().map(|w| MappedWord::of(lexicon, w)).collect();
    let verb_position = mapped.iter().position(|m| m.is_verb);

    let mut parts: Vec<String> = Vec::new();
    if let Some(pronoun) = agreement.person.subject_pronoun {
        parts.push(pronoun.to_string());
    }

    let (verb_form, remainder) = match verb_position {
        Some(vi) => {
            let form = elide_final_vowels(&format!("{}{}", mapped[vi].tovian, agreement.person.suffix));
            let consumed = |i: usize| case_phrase.as_ref().map_or(false, |cp| cp.consumes(i));
            let remainder: Vec<String> = mapped
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != vi && !consumed(i))
                .map(|(_, m)| m.tovian.clone())
                .filter(|t| !t.is_empty())
                .collect();

            if let Some(cp) = &case_phrase {
                parts.push(cp.prefixed_noun.clone());
            }
            parts.push(agreement.auxiliary().to_string());
            parts.push(form.clone());
            (Some(form), remainder)
        }
        None => {
            parts.push(agreement.auxiliary().to_string());
            parts.extend(mapped.iter().map(|m| m.tovian.clone()));
            (None, Vec::new())
        }
    };
    parts.retain(|p| !p.is_empty());

    debug!(
        verb = ?verb_position,
        dropped = remainder.len(),
        "drafted sentence"
    );

    DraftSentence {
        agreement,
        case_phrase,
        words: mapped,
        verb_position,
        verb_form,
        parts,
        remainder,
    }
}

/// Best-effort IPA for a draft: each word's IPA with inner spaces removed,
/// or the word itself when no entry (or no IPA) is found
pub fn draft_ipa(lexicon: &Lexicon, draft_text: &str) -> String {
    let items: Vec<String> = draft_text
        .split_whitespace()
        .map(|tok| match best_match_token(lexicon, tok) {
            Some(entry) if !entry.ipa.is_empty() => entry.ipa.split_whitespace().collect(),
            _ => tok.to_string(),
        })
        .collect();
    items.join(" ")
}

/// Translate an English sentence into a Tovian draft.
///
/// Blank input yields an empty translation.
pub fn translate(lexicon: &Lexicon, text: &str) -> Translation {
    if text.trim().is_empty() {
        return Translation::default();
    }
    let tovian = draft(lexicon, text).text();
    let ipa = draft_ipa(lexicon, &tovian);
    Translation {
        romanization: tovian.clone(),
        tovian,
        ipa,
    }
}
