//! Lexical lookup with ordered fallback strategies.
//!
//! Each direction has a fixed list of strategies. The first strategy that
//! finds anything wins, and within a strategy the first entry in lexicon
//! order wins. There is no scoring: the tie-break is lexicon order, which
//! the source data keeps stable.

use tracing::debug;

use crate::entry::LexicalEntry;
use crate::lexicon::Lexicon;
use crate::normalize::{depunctuate, normalize_english, normalize_tovian, strip_trailing_punct};

/// A lookup strategy over an already normalized query
pub type Strategy = for<'a> fn(&'a Lexicon, &str) -> Option<&'a LexicalEntry>;

/// Tovian strategies, in evaluation order
pub static TOVIAN_STRATEGIES: &[(&str, Strategy)] = &[
    ("exact", exact_tovian),
    ("depunctuated", depunctuated_tovian),
    ("prefix", prefix_tovian),
];

/// English strategies, in evaluation order
pub static ENGLISH_STRATEGIES: &[(&str, Strategy)] = &[
    ("exact", exact_english),
    ("prefix", prefix_english),
];

/// Normalized token equals the normalized tovian form
pub fn exact_tovian<'a>(lexicon: &'a Lexicon, query: &str) -> Option<&'a LexicalEntry> {
    lexicon
        .keyed()
        .find(|(_, keys)| keys.tovian == query)
        .map(|(entry, _)| entry)
}

/// Equality after removing hyphens and apostrophes from both sides
pub fn depunctuated_tovian<'a>(lexicon: &'a Lexicon, query: &str) -> Option<&'a LexicalEntry> {
    let bare = depunctuate(query);
    lexicon
        .keyed()
        .find(|(_, keys)| keys.tovian_bare == bare)
        .map(|(entry, _)| entry)
}

/// The token starts with a known form (agglutinated or compound surface form)
pub fn prefix_tovian<'a>(lexicon: &'a Lexicon, query: &str) -> Option<&'a LexicalEntry> {
    lexicon
        .keyed()
        .find(|(_, keys)| !keys.tovian.is_empty() && query.starts_with(keys.tovian.as_str()))
        .map(|(entry, _)| entry)
}

/// Normalized english equals the query
pub fn exact_english<'a>(lexicon: &'a Lexicon, query: &str) -> Option<&'a LexicalEntry> {
    lexicon
        .keyed()
        .find(|(_, keys)| keys.english == query)
        .map(|(entry, _)| entry)
}

/// Normalized english starts with the query ("go" finds "go (motion)")
pub fn prefix_english<'a>(lexicon: &'a Lexicon, query: &str) -> Option<&'a LexicalEntry> {
    if query.is_empty() {
        return None;
    }
    lexicon
        .keyed()
        .find(|(_, keys)| keys.english.starts_with(query))
        .map(|(entry, _)| entry)
}

fn run<'a>(
    strategies: &[(&str, Strategy)],
    lexicon: &'a Lexicon,
    query: &str,
) -> Option<&'a LexicalEntry> {
    strategies.iter().find_map(|(name, strategy)| {
        let hit = strategy(lexicon, query);
        if let Some(entry) = hit {
            debug!(query, strategy = *name, tovian = %entry.tovian, "lexicon hit");
        }
        hit
    })
}

/// Resolve a Tovian token (or segment) to at most one entry
pub fn best_match_token<'a>(lexicon: &'a Lexicon, token: &str) -> Option<&'a LexicalEntry> {
    run(TOVIAN_STRATEGIES, lexicon, &normalize_tovian(token))
}

/// Resolve an English word to at most one entry.
///
/// Trailing `.,!?;:` is stripped first. A word that is nothing but
/// punctuation resolves to nothing.
pub fn lookup_english<'a>(lexicon: &'a Lexicon, word: &str) -> Option<&'a LexicalEntry> {
    run(
        ENGLISH_STRATEGIES,
        lexicon,
        &normalize_english(strip_trailing_punct(word)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> Lexicon {
        Lexicon::from_entries(vec![LexicalEntry::new("water", "tovi", "to.vi", "tov")])
    }

    #[test]
    fn test_exact() {
        let lex = water();
        assert_eq!(best_match_token(&lex, "tovi").unwrap().english, "water");
        assert_eq!(best_match_token(&lex, "TOVI").unwrap().english, "water");
    }

    #[test]
    fn test_depunctuated() {
        let lex = water();
        assert!(exact_tovian(&lex, "tovi-").is_none());
        assert_eq!(best_match_token(&lex, "tovi-").unwrap().english, "water");
        assert_eq!(best_match_token(&lex, "to'vi").unwrap().english, "water");
    }

    #[test]
    fn test_prefix_compound() {
        let lex = water();
        assert_eq!(best_match_token(&lex, "toviwa").unwrap().english, "water");
    }

    #[test]
    fn test_no_match() {
        let lex = water();
        assert!(best_match_token(&lex, "xyz").is_none());
        assert!(best_match_token(&lex, "").is_none());
        assert!(best_match_token(&lex, "tov").is_none());
    }

    #[test]
    fn test_strategy_order_beats_lexicon_order() {
        // The prefix hit comes first in the lexicon but exact must win
        let lex = Lexicon::from_entries(vec![
            LexicalEntry::new("water", "tovi", "", ""),
            LexicalEntry::new("river", "toviwa", "", ""),
        ]);
        assert_eq!(best_match_token(&lex, "toviwa").unwrap().english, "river");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let lex = Lexicon::from_entries(vec![
            LexicalEntry::new("water", "tovi", "", ""),
            LexicalEntry::new("rain", "tovi", "", ""),
        ]);
        assert_eq!(best_match_token(&lex, "tovi").unwrap().english, "water");
    }

    #[test]
    fn test_curly_apostrophe_matches_straight() {
        let lex = Lexicon::from_entries(vec![LexicalEntry::new("night", "ka'na", "", "")]);
        let hit = exact_tovian(&lex, &normalize_tovian("ka\u{2019}na"));
        assert_eq!(hit.unwrap().english, "night");
    }

    #[test]
    fn test_lookup_english() {
        let lex = Lexicon::from_entries(vec![
            LexicalEntry::new("go (motion)", "vel", "", ""),
            LexicalEntry::new("house", "nata", "", ""),
        ]);
        assert_eq!(lookup_english(&lex, "House.").unwrap().tovian, "nata");
        assert_eq!(lookup_english(&lex, "go").unwrap().tovian, "vel");
        assert!(lookup_english(&lex, "houses").is_none());
        assert!(lookup_english(&lex, "?!").is_none());
    }
}
