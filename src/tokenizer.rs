//! Tokenizers for Tovian and English input.
//!
//! Tovian text is chunked into runs and only the word runs are kept, so
//! internal hyphens and apostrophes stay inside their token. English text
//! is only split on whitespace; punctuation stays attached to the word and is
//! stripped at lookup time.

use crate::chunker::Chunker;
use crate::token::{ChunkType, Token};

/// Split Tovian text into word tokens, in left-to-right order.
///
/// Punctuation and whitespace are dropped; an empty input yields no tokens.
pub fn tokenize_tovian(text: &str) -> Vec<Token> {
    Chunker::new(text)
        .make_chunks()
        .into_iter()
        .filter(|chunk| chunk.chunk_type == ChunkType::Word)
        .map(|chunk| Token::with_text(chunk.text(text).to_string(), chunk.start, chunk.len))
        .collect()
}

/// Split English text on whitespace
pub fn tokenize_english(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
