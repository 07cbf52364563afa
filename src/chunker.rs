//! Chunking of raw text into runs.
//!
//! This module segments text into maximal runs of word characters,
//! punctuation and whitespace, which the tokenizer then filters.

use crate::normalize::is_apostrophe;
use crate::token::ChunkType;

/// A chunk of text with its type and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The type of this chunk
    pub chunk_type: ChunkType,
    /// Starting byte offset in the original string
    pub start: usize,
    /// Length in bytes
    pub len: usize,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(chunk_type: ChunkType, start: usize, len: usize) -> Self {
        Chunk {
            chunk_type,
            start,
            len,
        }
    }

    /// The slice of `text` covered by this chunk
    pub fn text<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.start + self.len]
    }
}

/// Classify a single character
pub fn char_type(c: char) -> ChunkType {
    if c.is_alphabetic() || c == '-' || is_apostrophe(c) {
        ChunkType::Word
    } else if c.is_whitespace() {
        ChunkType::Space
    } else {
        ChunkType::Punct
    }
}

/// Chunker over a borrowed string
pub struct Chunker<'a> {
    text: &'a str,
}

impl<'a> Chunker<'a> {
    /// Create a new chunker for the given string
    pub fn new(text: &'a str) -> Self {
        Chunker { text }
    }

    /// Get the original string
    pub fn string(&self) -> &'a str {
        self.text
    }

    /// Chunk the text into maximal runs of the same type
    pub fn make_chunks(&self) -> Vec<Chunk> {
        let mut chunks: Vec<Chunk> = Vec::new();

        for (i, c) in self.text.char_indices() {
            let ty = char_type(c);
            match chunks.last_mut() {
                Some(last) if last.chunk_type == ty => last.len += c.len_utf8(),
                _ => chunks.push(Chunk::new(ty, i, c.len_utf8())),
            }
        }

        chunks
    }
}
