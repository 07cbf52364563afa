//! Surface-form normalization for Tovian and English.
//!
//! Every lookup in the crate compares normalized forms, so these functions
//! are the single place where case folding and apostrophe handling live.

use unicode_normalization::UnicodeNormalization;

/// The apostrophe every variant is folded into
pub const APOSTROPHE: char = '\'';

/// Apostrophe variants accepted in Tovian input
pub const APOSTROPHE_VARIANTS: &[char] = &[
    '\'',       // APOSTROPHE
    '\u{2019}', // RIGHT SINGLE QUOTATION MARK
    '\u{2018}', // LEFT SINGLE QUOTATION MARK
    '\u{02BC}', // MODIFIER LETTER APOSTROPHE
];

/// Trailing punctuation stripped from English words before lookup
pub const TRAILING_PUNCT: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Check whether a character is any apostrophe variant
pub fn is_apostrophe(c: char) -> bool {
    APOSTROPHE_VARIANTS.contains(&c)
}

/// Normalize a Tovian surface form: NFC, lower-case, one apostrophe.
///
/// Total and idempotent; an empty input yields an empty string.
pub fn normalize_tovian(s: &str) -> String {
    s.to_lowercase()
        .nfc()
        .map(|c| if is_apostrophe(c) { APOSTROPHE } else { c })
        .collect()
}

/// Normalize an English surface form (lower-case only)
pub fn normalize_english(s: &str) -> String {
    s.to_lowercase()
}

/// Strip a run of trailing `.,!?;:` from a word
pub fn strip_trailing_punct(s: &str) -> &str {
    s.trim_end_matches(TRAILING_PUNCT)
}

/// Remove hyphens and apostrophes from an already normalized Tovian form
pub fn depunctuate(normalized: &str) -> String {
    normalized
        .chars()
        .filter(|&c| c != '-' && c != APOSTROPHE)
        .collect()
}
