//! # tovian-gloss
//!
//! Glossing and rule-based draft translation for Tovian, a constructed
//! language with agglutinative case prefixes and SOV word order.
//!
//! Two pipelines share one read-only [`Lexicon`]:
//!
//! - **Tovian → English**: tokenize, then resolve each token (or each
//!   hyphen-delimited segment) through ordered lookup strategies.
//! - **English → Tovian**: map words through the lexicon, pick tense and
//!   person from surface cues, build one case-marked phrase and emit an
//!   SOV draft.
//!
//! ## Quick Start
//!
//! ```rust
//! use tovian_gloss::{Engine, Lexicon};
//!
//! let csv = "english,tovian,ipa,roots\nsee,ven,ven,\nhouse,nata,na.ta,nat";
//! let engine = Engine::new(Lexicon::from_csv(csv).unwrap());
//!
//! let rows = engine.gloss_text("nata");
//! assert_eq!(rows[0].english_gloss, "house");
//!
//! let draft = engine.translate("I see in the house");
//! assert_eq!(draft.tovian, "na a-ti-nata fa vena");
//! ```
//!
//! ## Python Bindings
//!
//! The crate builds as a Python extension module with the `python` feature.

pub mod calendar;
pub mod case_phrase;
pub mod chunker;
pub mod engine;
pub mod entry;
pub mod error;
pub mod gloss;
pub mod lexicon;
pub mod matcher;
pub mod normalize;
pub mod rules;
pub mod search;
pub mod source;
pub mod tense;
pub mod token;
pub mod tokenizer;
pub mod translate;

// Python bindings (only compiled when the "python" feature is enabled)
#[cfg(feature = "python")]
pub mod python;

// Re-export main types for convenience
pub use calendar::{word_of_the_day, CalendarTables, WordOfTheDay};
pub use case_phrase::{detect_case_phrase, CasePhrase};
pub use chunker::{Chunk, Chunker};
pub use engine::Engine;
pub use entry::LexicalEntry;
pub use error::{GlossError, Result};
pub use gloss::{gloss, gloss_text, gloss_token, GlossRow, Segment};
pub use lexicon::{Lexicon, LexiconBuilder, LoadReport};
pub use matcher::{best_match_token, lookup_english};
pub use normalize::{normalize_english, normalize_tovian};
pub use rules::Case;
pub use search::{FuzzySearch, GuidePage, SearchDocument, SearchHit, SubstringSearch};
pub use source::load_lexicon;
pub use tense::{Agreement, Person, Tense};
pub use token::{ChunkType, Token};
pub use tokenizer::{tokenize_english, tokenize_tovian};
pub use translate::{draft, translate, DraftSentence, Translation};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
