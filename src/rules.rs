//! Closed word sets that drive the draft translator.
//!
//! The tables are plain data. Control flow in `case_phrase`, `tense` and
//! `translate` only ever consults them through the lookup functions below,
//! so extending a set never touches the engines.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Grammatical role marked by a case prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Case {
    /// Location: in, at, on
    Locative,
    /// Instrument or agent: with, by
    Instrumental,
    /// Beneficiary: for
    Benefactive,
    /// Source: from, away
    Ablative,
    /// Goal: to, towards
    Allative,
    /// Accompaniment: together
    Comitative,
}

impl Case {
    /// The Tovian prefix for this case, hyphen included
    pub fn prefix(&self) -> &'static str {
        match self {
            Case::Locative => "ti-",
            Case::Instrumental => "si-",
            Case::Benefactive => "lhu-",
            Case::Ablative => "di-",
            Case::Allative => "su-",
            Case::Comitative => "yi-",
        }
    }

    /// Convert to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Case::Locative => "LOC",
            Case::Instrumental => "INS",
            Case::Benefactive => "BEN",
            Case::Ablative => "ABL",
            Case::Allative => "ALL",
            Case::Comitative => "COM",
        }
    }
}

/// English prepositions and the case they introduce
pub static PREPOSITION_CASES: &[(&str, Case)] = &[
    ("in", Case::Locative),
    ("at", Case::Locative),
    ("on", Case::Locative),
    ("with", Case::Instrumental),
    ("by", Case::Instrumental),
    ("for", Case::Benefactive),
    ("from", Case::Ablative),
    ("away", Case::Ablative),
    ("to", Case::Allative),
    ("towards", Case::Allative),
    ("together", Case::Comitative),
];

/// Determiners that may sit between a preposition and its noun
pub static DETERMINERS: &[&str] = &["the", "a", "an"];

/// The determiner that selects the indefinite prefix
pub const INDEFINITE_DETERMINER: &str = "a";

/// Definiteness prefix for an indefinite noun phrase
pub const INDEFINITE_PREFIX: &str = "o-";

/// Definiteness prefix for every other noun phrase
pub const DEFINITE_PREFIX: &str = "a-";

/// English head words whose entries are treated as verbs
pub static VERBS: &[&str] = &[
    "see", "speak", "go", "walk", "be", "have", "do", "eat", "sleep", "love", "know", "want",
    "give", "take", "come", "make", "say", "think", "hear", "look",
];

/// Words that mark future tense anywhere in a sentence
pub static FUTURE_CUES: &[&str] = &["will", "tomorrow"];

/// Words that mark past tense anywhere in a sentence (besides an `-ed` ending)
pub static PAST_CUES: &[&str] = &["yesterday", "ago"];

/// What a sentence-initial subject word contributes to the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectCue {
    /// Lower-case English word
    pub word: &'static str,
    /// Person suffix placed on the verb, if this cue overrides the default
    pub suffix: Option<&'static str>,
    /// Tovian subject pronoun emitted at the head of the clause
    pub pronoun: Option<&'static str>,
}

/// Person suffix used when no subject cue overrides it
pub const DEFAULT_PERSON_SUFFIX: &str = "a";

/// Sentence-initial subject words.
///
/// Only "you" changes the person suffix; "i" only selects the pronoun.
pub static SUBJECT_CUES: &[SubjectCue] = &[
    SubjectCue {
        word: "i",
        suffix: None,
        pronoun: Some("na"),
    },
    SubjectCue {
        word: "you",
        suffix: Some("o"),
        pronoun: Some("wa"),
    },
];

static PREPOSITION_MAP: Lazy<HashMap<&'static str, Case>> =
    Lazy::new(|| PREPOSITION_CASES.iter().copied().collect());

static VERB_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| VERBS.iter().copied().collect());

/// Case introduced by a lower-case preposition
pub fn preposition_case(word: &str) -> Option<Case> {
    PREPOSITION_MAP.get(word).copied()
}

/// Whether a lower-case word is a determiner
pub fn is_determiner(word: &str) -> bool {
    DETERMINERS.contains(&word)
}

/// Whether a lower-case English head word names a verb
pub fn is_verb(head: &str) -> bool {
    VERB_SET.contains(head)
}

/// Subject cue for a lower-case sentence-initial word
pub fn subject_cue(word: &str) -> Option<&'static SubjectCue> {
    SUBJECT_CUES.iter().find(|cue| cue.word == word)
}
