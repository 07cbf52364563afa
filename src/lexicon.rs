//! The lexicon: an ordered, read-only list of dictionary entries.
//!
//! Entry order is the order of the source table and is significant: every
//! lookup strategy returns the first entry that satisfies it. Normalized
//! keys are computed once at build time so that lookups never allocate per
//! entry.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, trace};

use crate::entry::LexicalEntry;
use crate::error::{GlossError, Result};
use crate::normalize::{depunctuate, normalize_english, normalize_tovian};

/// Normalized lookup keys for one entry
#[derive(Debug, Clone)]
pub(crate) struct EntryKeys {
    /// `normalize_tovian(entry.tovian)`
    pub tovian: String,
    /// Tovian key with hyphens and apostrophes removed
    pub tovian_bare: String,
    /// `normalize_english(entry.english)`
    pub english: String,
}

impl EntryKeys {
    fn of(entry: &LexicalEntry) -> Self {
        let tovian = normalize_tovian(&entry.tovian);
        let tovian_bare = depunctuate(&tovian);
        EntryKeys {
            tovian,
            tovian_bare,
            english: normalize_english(&entry.english),
        }
    }
}

/// A frozen, ordered collection of usable entries
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<LexicalEntry>,
    keys: Vec<EntryKeys>,
}

impl Lexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Lexicon::default()
    }

    /// Build a lexicon from entries, dropping unusable ones
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = LexicalEntry>,
    {
        let mut builder = LexiconBuilder::new();
        for entry in entries {
            builder.push(entry);
        }
        builder.build()
    }

    /// Parse a comma-delimited table with a header row
    pub fn from_csv(text: &str) -> Result<Self> {
        let mut builder = LexiconBuilder::new();
        builder.load_csv(text)?;
        Ok(builder.build())
    }

    /// Wrap in an `Arc` for sharing between engines or threads
    pub fn into_shared(self) -> Arc<Lexicon> {
        Arc::new(self)
    }

    /// Number of usable entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the lexicon has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in source order
    pub fn entries(&self) -> &[LexicalEntry] {
        &self.entries
    }

    /// Iterate over entries in source order
    pub fn iter(&self) -> std::slice::Iter<'_, LexicalEntry> {
        self.entries.iter()
    }

    /// Get an entry by position
    pub fn get(&self, index: usize) -> Option<&LexicalEntry> {
        self.entries.get(index)
    }

    /// Iterate over entries paired with their normalized keys
    pub(crate) fn keyed(&self) -> impl Iterator<Item = (&LexicalEntry, &EntryKeys)> {
        self.entries.iter().zip(self.keys.iter())
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a LexicalEntry;
    type IntoIter = std::slice::Iter<'a, LexicalEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Counts from a table load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Rows turned into entries
    pub kept: usize,
    /// Rows missing english/tovian or marked obsolete
    pub skipped: usize,
}

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    english: usize,
    tovian: usize,
    ipa: Option<usize>,
    roots: Option<usize>,
}

impl Columns {
    /// Positional layout `english,tovian,ipa,roots`
    const POSITIONAL: Columns = Columns {
        english: 0,
        tovian: 1,
        ipa: Some(2),
        roots: Some(3),
    };

    fn from_header(header: &str) -> Result<Self> {
        let names: Vec<String> = header.split(',').map(|h| h.trim().to_lowercase()).collect();
        let find = |name: &str| names.iter().position(|n| n == name);

        let (english, tovian, ipa, roots) = (find("english"), find("tovian"), find("ipa"), find("roots"));
        if english.is_none() && tovian.is_none() && ipa.is_none() && roots.is_none() {
            // Unnamed header: fall back to column order
            if names.len() < 2 {
                return Err(GlossError::MissingColumn("tovian"));
            }
            return Ok(Columns::POSITIONAL);
        }

        Ok(Columns {
            english: english.ok_or(GlossError::MissingColumn("english"))?,
            tovian: tovian.ok_or(GlossError::MissingColumn("tovian"))?,
            ipa,
            roots,
        })
    }
}

/// Builder for loading a Lexicon from tabular text
pub struct LexiconBuilder {
    lexicon: Lexicon,
    report: LoadReport,
}

impl LexiconBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        LexiconBuilder {
            lexicon: Lexicon::new(),
            report: LoadReport::default(),
        }
    }

    /// Append an entry, skipping it if it is not usable
    pub fn push(&mut self, entry: LexicalEntry) -> bool {
        if !entry.is_usable() {
            trace!(english = %entry.english, tovian = %entry.tovian, "skipping unusable entry");
            self.report.skipped += 1;
            return false;
        }
        self.lexicon.keys.push(EntryKeys::of(&entry));
        self.lexicon.entries.push(entry);
        self.report.kept += 1;
        true
    }

    /// Load rows from CSV text (header row, comma-delimited, no quoting).
    ///
    /// Blank lines are ignored. Rows missing `english` or `tovian`, and rows
    /// whose english field is marked obsolete, are skipped silently.
    pub fn load_csv(&mut self, csv_content: &str) -> Result<LoadReport> {
        let mut lines = csv_content
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.trim().is_empty());

        let header = lines.next().ok_or(GlossError::EmptyLexicon)?;
        let columns = Columns::from_header(header)?;
        let before = self.report;

        for line in lines {
            let fields: Vec<&str> = line.split(',').collect();
            let field = |i: Option<usize>| {
                i.and_then(|i| fields.get(i))
                    .map(|s| s.trim())
                    .unwrap_or("")
            };

            self.push(LexicalEntry::new(
                field(Some(columns.english)),
                field(Some(columns.tovian)),
                field(columns.ipa),
                field(columns.roots),
            ));
        }

        let report = LoadReport {
            kept: self.report.kept - before.kept,
            skipped: self.report.skipped - before.skipped,
        };
        info!(kept = report.kept, skipped = report.skipped, "loaded lexicon table");
        Ok(report)
    }

    /// Totals across every load so far
    pub fn report(&self) -> LoadReport {
        self.report
    }

    /// Build and return the Lexicon
    pub fn build(self) -> Lexicon {
        self.lexicon
    }
}

impl Default for LexiconBuilder {
    fn default() -> Self {
        Self::new()
    }
}
