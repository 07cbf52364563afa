//! Token representation.
//!
//! A Token is a word-like run of the input text together with its byte
//! position, so that callers can map results back onto the original string.

use serde::{Deserialize, Serialize};

/// The type of a chunk of raw text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChunkType {
    /// Letters, apostrophes and hyphens
    #[default]
    Word,
    /// Any other non-space characters
    Punct,
    /// Whitespace
    Space,
}

impl ChunkType {
    /// Convert to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkType::Word => "WORD",
            ChunkType::Punct => "PUNCT",
            ChunkType::Space => "SPACE",
        }
    }
}

/// A single token from the tokenization process
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The raw text of the token
    pub text: String,

    /// Starting byte offset in the original string
    pub start: usize,

    /// Length in bytes
    pub len: usize,
}

impl Token {
    /// Create a token with text and position
    pub fn with_text(text: String, start: usize, len: usize) -> Self {
        Token { text, start, len }
    }

    /// Byte offset one past the end of the token
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Hyphen-separated segments of the token.
    ///
    /// Empty segments are kept, so "tovi-" has two segments.
    pub fn segments(&self) -> Vec<&str> {
        self.text.split('-').collect()
    }

    /// Whether the token is a hyphenated compound
    pub fn is_compound(&self) -> bool {
        self.text.contains('-')
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
