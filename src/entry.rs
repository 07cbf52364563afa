//! Lexical entries.
//!
//! An entry is one row of the dictionary table. Entries are never mutated
//! after the lexicon is built.

use serde::{Deserialize, Serialize};

/// Marker that retires an entry from every lookup
pub const OBSOLETE_MARKER: &str = "(obsolete)";

/// A single dictionary row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalEntry {
    /// English headword or phrase
    pub english: String,
    /// Tovian romanized form (may carry class prefixes, hyphens, apostrophes)
    pub tovian: String,
    /// Broad IPA transcription
    pub ipa: String,
    /// Etymological roots, free text
    pub roots: String,
}

impl LexicalEntry {
    /// Create an entry from its four fields
    pub fn new(english: &str, tovian: &str, ipa: &str, roots: &str) -> Self {
        LexicalEntry {
            english: english.to_string(),
            tovian: tovian.to_string(),
            ipa: ipa.to_string(),
            roots: roots.to_string(),
        }
    }

    /// Whether the english field carries the obsolete marker (any case)
    pub fn is_obsolete(&self) -> bool {
        self.english.to_lowercase().contains(OBSOLETE_MARKER)
    }

    /// Whether this entry may take part in lookups
    pub fn is_usable(&self) -> bool {
        !self.english.is_empty() && !self.tovian.is_empty() && !self.is_obsolete()
    }

    /// First word of the english field, lower-cased.
    ///
    /// Used to classify entries such as "go (motion)" or "see clearly" by
    /// their head verb.
    pub fn english_head(&self) -> String {
        self.english
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_lowercase()
    }
}

impl std::fmt::Display for LexicalEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.tovian, self.english)?;
        if !self.ipa.is_empty() {
            write!(f, " /{}/", self.ipa)?;
        }
        Ok(())
    }
}
