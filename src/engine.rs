//! A shared-lexicon facade over the glossing and drafting functions.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::calendar::{word_of_the_day, CalendarTables, WordOfTheDay};
use crate::gloss::{gloss, gloss_text, GlossRow};
use crate::lexicon::Lexicon;
use crate::search::{combined_documents, GuidePage, SearchDocument};
use crate::token::Token;
use crate::tokenizer::tokenize_tovian;
use crate::translate::{draft, translate, DraftSentence, Translation};

/// Glossing and draft translation over one lexicon.
///
/// Cloning is cheap; clones share the same lexicon and can be sent to
/// other threads.
#[derive(Debug, Clone)]
pub struct Engine {
    /// The lexicon (shared reference)
    lexicon: Arc<Lexicon>,
}

impl Engine {
    /// Create a new engine owning the given lexicon
    pub fn new(lexicon: Lexicon) -> Self {
        Engine {
            lexicon: Arc::new(lexicon),
        }
    }

    /// Create a new engine with a shared lexicon reference
    pub fn with_arc(lexicon: Arc<Lexicon>) -> Self {
        Engine { lexicon }
    }

    /// Get a reference to the lexicon
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Get the Arc reference to the lexicon (for sharing)
    pub fn lexicon_arc(&self) -> Arc<Lexicon> {
        Arc::clone(&self.lexicon)
    }

    /// Split Tovian text into word tokens
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        tokenize_tovian(text)
    }

    /// Gloss pre-tokenized input, one row per token
    pub fn gloss<T: AsRef<str>>(&self, tokens: &[T]) -> Vec<GlossRow> {
        gloss(tokens, &self.lexicon)
    }

    /// Tokenize and gloss Tovian text
    pub fn gloss_text(&self, text: &str) -> Vec<GlossRow> {
        gloss_text(text, &self.lexicon)
    }

    /// Draft a Tovian rendering of an English sentence
    pub fn translate(&self, text: &str) -> Translation {
        translate(&self.lexicon, text)
    }

    /// The structured draft, for inspection
    pub fn draft(&self, text: &str) -> DraftSentence {
        draft(&self.lexicon, text)
    }

    /// Search documents for the lexicon and the given guide pages
    pub fn documents(&self, pages: &[GuidePage]) -> Vec<SearchDocument> {
        combined_documents(&self.lexicon, pages)
    }

    /// Numbers and calendar tables drawn from the lexicon
    pub fn calendar(&self) -> CalendarTables {
        CalendarTables::from_lexicon(&self.lexicon)
    }

    /// The featured entry for `date`
    pub fn word_of_the_day(&self, date: NaiveDate) -> Option<WordOfTheDay> {
        word_of_the_day(&self.lexicon, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::LexicalEntry;

    fn make_test_engine() -> Engine {
        Engine::new(Lexicon::from_entries(vec![
            LexicalEntry::new("water", "tovi", "to.vi", "tov"),
            LexicalEntry::new("see", "ven", "ven", ""),
            LexicalEntry::new("house", "nata", "na.ta", "nat"),
        ]))
    }

    #[test]
    fn test_gloss_text() {
        let engine = make_test_engine();
        let rows = engine.gloss_text("tovi, nata!");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].english_gloss, "water");
        assert_eq!(rows[1].english_gloss, "house");
    }

    #[test]
    fn test_translate() {
        let engine = make_test_engine();
        assert_eq!(engine.translate("I see the house").tovian, "na fa vena");
    }

    #[test]
    fn test_shared_lexicon() {
        let engine = make_test_engine();
        let other = Engine::with_arc(engine.lexicon_arc());
        assert!(Arc::ptr_eq(&engine.lexicon_arc(), &other.lexicon_arc()));
        assert_eq!(other.lexicon().len(), 3);
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();

        let engine = make_test_engine();
        let handle = std::thread::spawn(move || engine.translate("You see water").tovian);
        assert_eq!(handle.join().unwrap(), "wa fa veno");
    }
}
