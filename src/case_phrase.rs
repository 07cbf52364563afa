//! Detection of one prepositional phrase and its case-marked rendering.
//!
//! The detector looks for `PREP [DET] NOUN` in an English word list and
//! rewrites it as a single Tovian word: definiteness prefix, case prefix,
//! noun. Only the first phrase whose noun resolves is used.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lexicon::Lexicon;
use crate::matcher::lookup_english;
use crate::rules::{
    is_determiner, preposition_case, Case, DEFINITE_PREFIX, INDEFINITE_DETERMINER,
    INDEFINITE_PREFIX,
};

/// A case-marked noun phrase and the word positions it replaces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasePhrase {
    /// e.g. `a-ti-nata` for "in the house"
    pub prefixed_noun: String,
    /// Positions of preposition, determiner (if any) and noun
    pub consumed_positions: BTreeSet<usize>,
    /// Case selected by the preposition
    pub case: Case,
}

impl CasePhrase {
    /// Whether a word position was folded into the phrase
    pub fn consumes(&self, position: usize) -> bool {
        self.consumed_positions.contains(&position)
    }
}

/// Find the first `PREP [DET] NOUN` whose noun is in the lexicon.
///
/// A preposition whose noun does not resolve is skipped and the scan
/// continues. Returns `None` if no candidate resolves.
pub fn detect_case_phrase<S: AsRef<str>>(lexicon: &Lexicon, words: &[S]) -> Option<CasePhrase> {
    let lower: Vec<String> = words.iter().map(|w| w.as_ref().to_lowercase()).collect();

    for (i, word) in lower.iter().enumerate() {
        let Some(case) = preposition_case(word) else {
            continue;
        };

        let determiner = lower.get(i + 1).filter(|w| is_determiner(w));
        let j = if determiner.is_some() { i + 2 } else { i + 1 };
        let Some(head) = words.get(j) else {
            continue;
        };
        let Some(noun) = lookup_english(lexicon, head.as_ref()) else {
            debug!(preposition = %word, head = head.as_ref(), "case phrase noun unresolved");
            continue;
        };

        let definiteness = match determiner {
            Some(det) if det.as_str() == INDEFINITE_DETERMINER => INDEFINITE_PREFIX,
            _ => DEFINITE_PREFIX,
        };
        let prefixed_noun = format!("{}{}{}", definiteness, case.prefix(), noun.tovian);

        let mut consumed_positions = BTreeSet::from([i, j]);
        if determiner.is_some() {
            consumed_positions.insert(i + 1);
        }

        debug!(phrase = %prefixed_noun, case = case.as_str(), "case phrase detected");
        return Some(CasePhrase {
            prefixed_noun,
            consumed_positions,
            case,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::LexicalEntry;

    fn make_test_lexicon() -> Lexicon {
        Lexicon::from_entries(vec![
            LexicalEntry::new("house", "nata", "", ""),
            LexicalEntry::new("friend", "meli", "", ""),
        ])
    }

    #[test]
    fn test_definite_locative() {
        let phrase = detect_case_phrase(&make_test_lexicon(), &["in", "the", "house"]).unwrap();
        assert_eq!(phrase.prefixed_noun, "a-ti-nata");
        assert_eq!(phrase.consumed_positions, BTreeSet::from([0, 1, 2]));
        assert_eq!(phrase.case, Case::Locative);
    }

    #[test]
    fn test_indefinite_determiner() {
        let phrase = detect_case_phrase(&make_test_lexicon(), &["with", "a", "friend"]).unwrap();
        assert_eq!(phrase.prefixed_noun, "o-si-meli");
    }

    #[test]
    fn test_an_is_definite_prefix() {
        // Only "a" selects o-
        let phrase = detect_case_phrase(&make_test_lexicon(), &["for", "an", "friend"]).unwrap();
        assert_eq!(phrase.prefixed_noun, "a-lhu-meli");
    }

    #[test]
    fn test_bare_noun() {
        let phrase = detect_case_phrase(&make_test_lexicon(), &["I", "go", "to", "House."]).unwrap();
        assert_eq!(phrase.prefixed_noun, "a-su-nata");
        assert_eq!(phrase.consumed_positions, BTreeSet::from([2, 3]));
        assert!(phrase.consumes(3));
        assert!(!phrase.consumes(1));
    }

    #[test]
    fn test_unresolved_noun_continues_scan() {
        let words = ["at", "the", "market", "from", "the", "house"];
        let phrase = detect_case_phrase(&make_test_lexicon(), &words).unwrap();
        assert_eq!(phrase.prefixed_noun, "a-di-nata");
        assert_eq!(phrase.consumed_positions, BTreeSet::from([3, 4, 5]));
    }

    #[test]
    fn test_only_first_phrase() {
        let words = ["in", "the", "house", "with", "a", "friend"];
        let phrase = detect_case_phrase(&make_test_lexicon(), &words).unwrap();
        assert_eq!(phrase.prefixed_noun, "a-ti-nata");
    }

    #[test]
    fn test_none() {
        let lex = make_test_lexicon();
        assert!(detect_case_phrase(&lex, &["I", "see", "the", "house"]).is_none());
        assert!(detect_case_phrase(&lex, &["in", "the"]).is_none());
        assert!(detect_case_phrase::<&str>(&lex, &[]).is_none());
    }
}
