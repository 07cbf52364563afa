//! Tense and person selection from surface cues.
//!
//! Cues are matched over the whole sentence, not per clause: a "will"
//! anywhere makes the sentence future. Multi-clause input gets one tense.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rules::{subject_cue, DEFAULT_PERSON_SUFFIX, FUTURE_CUES, PAST_CUES};

/// Tense of the draft clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tense {
    #[default]
    Present,
    Past,
    Future,
}

impl Tense {
    /// Tovian auxiliary carrying this tense
    pub fn auxiliary(&self) -> &'static str {
        match self {
            Tense::Present => "fa",
            Tense::Past => "fe",
            Tense::Future => "fo",
        }
    }
}

static FUTURE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\b({})\b", FUTURE_CUES.join("|"))).expect("Invalid regex")
});

// A word ending in -ed counts as a past cue alongside the listed words
static PAST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(ed\b|{})\b", PAST_CUES.join("|"))).expect("Invalid regex")
});

/// Select the tense of a sentence. Future cues win over past cues.
pub fn resolve_tense(text: &str) -> Tense {
    let lower = text.to_lowercase();
    if FUTURE_RE.is_match(&lower) {
        Tense::Future
    } else if PAST_RE.is_match(&lower) {
        Tense::Past
    } else {
        Tense::Present
    }
}

/// Person marking derived from the first word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Person {
    /// Suffix appended to the main verb
    pub suffix: &'static str,
    /// Explicit subject pronoun, if the first word calls for one
    pub subject_pronoun: Option<&'static str>,
}

impl Default for Person {
    fn default() -> Self {
        Person {
            suffix: DEFAULT_PERSON_SUFFIX,
            subject_pronoun: None,
        }
    }
}

/// Select person marking from the first word only.
///
/// The suffix stays `a` unless the first word is exactly "you" (any case);
/// "i" yields the pronoun `na` but keeps the default suffix.
pub fn resolve_person<S: AsRef<str>>(words: &[S]) -> Person {
    let first = words
        .first()
        .map(|w| w.as_ref().to_lowercase())
        .unwrap_or_default();

    match subject_cue(&first) {
        Some(cue) => Person {
            suffix: cue.suffix.unwrap_or(DEFAULT_PERSON_SUFFIX),
            subject_pronoun: cue.pronoun,
        },
        None => Person::default(),
    }
}

/// Tense and person for one sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Agreement {
    /// Picks the auxiliary
    pub tense: Tense,
    /// Picks the subject pronoun and verb suffix
    pub person: Person,
}

impl Agreement {
    /// The tense auxiliary
    pub fn auxiliary(&self) -> &'static str {
        self.tense.auxiliary()
    }
}

/// Resolve tense and person over a whitespace-split sentence
pub fn resolve<S: AsRef<str>>(words: &[S]) -> Agreement {
    let joined: Vec<&str> = words.iter().map(|w| w.as_ref()).collect();
    let agreement = Agreement {
        tense: resolve_tense(&joined.join(" ")),
        person: resolve_person(words),
    };
    debug!(
        aux = agreement.auxiliary(),
        suffix = agreement.person.suffix,
        "resolved agreement"
    );
    agreement
}
