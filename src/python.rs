//! Python bindings for tovian-gloss using PyO3
//!
//! This module provides Python-compatible wrappers around the glossing and
//! draft translation engine.

use std::sync::Arc;

use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::engine::Engine;
use crate::entry::LexicalEntry;
use crate::error::GlossError;
use crate::gloss::GlossRow as RustGlossRow;
use crate::lexicon::{Lexicon, LexiconBuilder};
use crate::source;
use crate::token::Token as RustToken;
use crate::tokenizer::tokenize_tovian;
use crate::translate::Translation as RustTranslation;

fn to_py_err(e: GlossError) -> PyErr {
    match e {
        GlossError::Io { .. } => PyIOError::new_err(e.to_string()),
        GlossError::Network(_) => PyRuntimeError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

/// A Python-compatible Token class
#[pyclass(name = "Token")]
#[derive(Clone)]
pub struct PyToken {
    #[pyo3(get)]
    pub text: String,
    #[pyo3(get)]
    pub start: usize,
    #[pyo3(get)]
    pub len: usize,
}

impl From<RustToken> for PyToken {
    fn from(t: RustToken) -> Self {
        PyToken {
            text: t.text,
            start: t.start,
            len: t.len,
        }
    }
}

#[pymethods]
impl PyToken {
    fn __repr__(&self) -> String {
        format!("Token('{}', start={})", self.text, self.start)
    }

    fn __str__(&self) -> String {
        self.text.clone()
    }

    /// Hyphen-delimited segments of the token
    fn segments(&self) -> Vec<String> {
        self.text.split('-').map(String::from).collect()
    }
}

/// One gloss row
#[pyclass(name = "GlossRow")]
#[derive(Clone)]
pub struct PyGlossRow {
    #[pyo3(get)]
    pub token: String,
    #[pyo3(get)]
    pub segments: String,
    #[pyo3(get)]
    pub english_gloss: String,
    #[pyo3(get)]
    pub ipa: String,
    #[pyo3(get)]
    pub roots: String,
    #[pyo3(get)]
    pub is_no_match: bool,
}

impl From<RustGlossRow> for PyGlossRow {
    fn from(row: RustGlossRow) -> Self {
        PyGlossRow {
            segments: row.segment_display(),
            is_no_match: row.is_no_match(),
            token: row.token,
            english_gloss: row.english_gloss,
            ipa: row.ipa,
            roots: row.roots,
        }
    }
}

#[pymethods]
impl PyGlossRow {
    fn __repr__(&self) -> String {
        format!("GlossRow('{}', gloss='{}')", self.token, self.english_gloss)
    }

    /// Convert to dictionary
    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new_bound(py);
        dict.set_item("token", &self.token)?;
        dict.set_item("segments", &self.segments)?;
        dict.set_item("english_gloss", &self.english_gloss)?;
        dict.set_item("ipa", &self.ipa)?;
        dict.set_item("roots", &self.roots)?;
        dict.set_item("is_no_match", self.is_no_match)?;
        Ok(dict)
    }
}

/// A draft translation
#[pyclass(name = "Translation")]
#[derive(Clone)]
pub struct PyTranslation {
    #[pyo3(get)]
    pub tovian: String,
    #[pyo3(get)]
    pub romanization: String,
    #[pyo3(get)]
    pub ipa: String,
}

impl From<RustTranslation> for PyTranslation {
    fn from(t: RustTranslation) -> Self {
        PyTranslation {
            tovian: t.tovian,
            romanization: t.romanization,
            ipa: t.ipa,
        }
    }
}

#[pymethods]
impl PyTranslation {
    fn __repr__(&self) -> String {
        format!("Translation('{}')", self.tovian)
    }

    fn __str__(&self) -> String {
        self.tovian.clone()
    }
}

/// Glossing and draft translation engine
///
/// Example:
///     >>> from tovian_gloss import GlossEngine
///     >>> engine = GlossEngine("dictionary.csv")
///     >>> for row in engine.gloss_text("tovi-nata"):
///     ...     print(row.token, row.english_gloss)
///     >>> engine.translate("I see the house").tovian
#[pyclass(name = "GlossEngine")]
pub struct PyGlossEngine {
    /// Shared lexicon reference - avoids clones on each call
    lexicon: Arc<Lexicon>,
}

impl PyGlossEngine {
    fn engine(&self) -> Engine {
        Engine::with_arc(Arc::clone(&self.lexicon))
    }

    /// Rebuild the lexicon with extra rows appended after the current ones
    fn extend(&mut self, add: impl FnOnce(&mut LexiconBuilder) -> Result<(), GlossError>) -> PyResult<()> {
        let mut builder = LexiconBuilder::new();
        for entry in self.lexicon.iter() {
            builder.push(entry.clone());
        }
        add(&mut builder).map_err(to_py_err)?;
        self.lexicon = Arc::new(builder.build());
        Ok(())
    }
}

#[pymethods]
impl PyGlossEngine {
    /// Create a new GlossEngine.
    ///
    /// Args:
    ///     lexicon: Path or http(s) URL of a lexicon CSV (optional).
    ///         Without it the engine starts empty.
    #[new]
    #[pyo3(signature = (lexicon=None))]
    fn new(lexicon: Option<&str>) -> PyResult<Self> {
        let lexicon = match lexicon {
            Some(src) => source::load_lexicon(src).map_err(to_py_err)?,
            None => Lexicon::new(),
        };
        Ok(PyGlossEngine {
            lexicon: Arc::new(lexicon),
        })
    }

    /// Append rows from CSV text (header row required)
    fn load_csv(&mut self, csv_content: &str) -> PyResult<()> {
        self.extend(|b| b.load_csv(csv_content).map(|_| ()))
    }

    /// Append rows from a CSV file
    fn load_csv_file(&mut self, path: &str) -> PyResult<()> {
        let content = std::fs::read_to_string(path).map_err(|e| PyIOError::new_err(e.to_string()))?;
        self.load_csv(&content)
    }

    /// Add a single entry; returns False if it is unusable
    #[pyo3(signature = (english, tovian, ipa="", roots=""))]
    fn add_entry(&mut self, english: &str, tovian: &str, ipa: &str, roots: &str) -> PyResult<bool> {
        let mut kept = false;
        self.extend(|b| {
            kept = b.push(LexicalEntry::new(english, tovian, ipa, roots));
            Ok(())
        })?;
        Ok(kept)
    }

    /// Tokenize and gloss Tovian text
    fn gloss_text(&self, text: &str) -> Vec<PyGlossRow> {
        self.engine()
            .gloss_text(text)
            .into_iter()
            .map(PyGlossRow::from)
            .collect()
    }

    /// Gloss a list of tokens
    fn gloss(&self, tokens: Vec<String>) -> Vec<PyGlossRow> {
        self.engine()
            .gloss(tokens.as_slice())
            .into_iter()
            .map(PyGlossRow::from)
            .collect()
    }

    /// Draft a Tovian translation of an English sentence
    fn translate(&self, text: &str) -> PyTranslation {
        self.engine().translate(text).into()
    }

    /// Get the number of entries in the lexicon
    fn __len__(&self) -> usize {
        self.lexicon.len()
    }

    fn __repr__(&self) -> String {
        format!("GlossEngine(entries={})", self.lexicon.len())
    }
}

/// Split Tovian text into word tokens
#[pyfunction]
fn tokenize(text: &str) -> Vec<PyToken> {
    tokenize_tovian(text).into_iter().map(PyToken::from).collect()
}

/// Get the default cached lexicon path
#[pyfunction]
fn default_lexicon_path() -> String {
    source::default_lexicon_path().to_string_lossy().to_string()
}

/// Download a lexicon CSV into the cache
///
/// Args:
///     url: http(s) URL of the lexicon CSV
///     dest: Destination path (optional, defaults to the cache path)
///
/// Returns:
///     Path of the written file
#[cfg(feature = "download")]
#[pyfunction]
#[pyo3(signature = (url, dest=None))]
fn download_lexicon(url: &str, dest: Option<&str>) -> PyResult<String> {
    let path = source::download_lexicon(url, dest.map(std::path::Path::new)).map_err(to_py_err)?;
    Ok(path.to_string_lossy().to_string())
}

/// Create the Python module
#[pymodule]
fn tovian_gloss(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyToken>()?;
    m.add_class::<PyGlossRow>()?;
    m.add_class::<PyTranslation>()?;
    m.add_class::<PyGlossEngine>()?;
    m.add_function(wrap_pyfunction!(tokenize, m)?)?;
    m.add_function(wrap_pyfunction!(default_lexicon_path, m)?)?;

    // Only available with the download feature
    #[cfg(feature = "download")]
    m.add_function(wrap_pyfunction!(download_lexicon, m)?)?;

    // Add version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
