//! Obtaining the lexicon resource from disk or over HTTP.
//!
//! The engine itself never touches the filesystem; callers load a
//! [`Lexicon`] once through this module and share it.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{GlossError, Result};
use crate::lexicon::Lexicon;

/// File name of the cached lexicon table
pub const DEFAULT_LEXICON_FILE: &str = "dictionary.csv";

/// Environment variable naming a lexicon path or URL
pub const LEXICON_ENV: &str = "TOVIAN_LEXICON";

/// Directory holding the cached lexicon.
/// Returns `<cache dir>/tovian-gloss/`
pub fn default_cache_dir() -> PathBuf {
    #[cfg(feature = "download")]
    {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tovian-gloss")
    }
    #[cfg(not(feature = "download"))]
    {
        PathBuf::from(".")
    }
}

/// Path of the cached lexicon table
pub fn default_lexicon_path() -> PathBuf {
    default_cache_dir().join(DEFAULT_LEXICON_FILE)
}

/// Pick a lexicon source: explicit value, then `TOVIAN_LEXICON`, then the cache
pub fn resolve_source(explicit: Option<&str>) -> String {
    explicit
        .map(String::from)
        .or_else(|| std::env::var(LEXICON_ENV).ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| default_lexicon_path().to_string_lossy().into_owned())
}

/// Whether a source names a remote resource
pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Read and parse a lexicon table from a local file
pub fn load_lexicon_path(path: &Path) -> Result<Lexicon> {
    let text = fs::read_to_string(path).map_err(|source| GlossError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "reading lexicon");
    Lexicon::from_csv(&text)
}

/// Fetch the raw lexicon table from a URL
#[cfg(feature = "download")]
pub fn fetch_lexicon(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent("tovian-gloss")
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| GlossError::Network(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| GlossError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(GlossError::Network(format!(
            "failed to download lexicon: HTTP {}",
            response.status()
        )));
    }

    response.text().map_err(|e| GlossError::Network(e.to_string()))
}

/// Download a lexicon table into `dest` (the cache path by default).
///
/// The table is parsed before it is written, so a malformed download never
/// replaces a good cached copy.
#[cfg(feature = "download")]
pub fn download_lexicon(url: &str, dest: Option<&Path>) -> Result<PathBuf> {
    let dest = dest.map(PathBuf::from).unwrap_or_else(default_lexicon_path);

    info!(url, "downloading lexicon");
    let text = fetch_lexicon(url)?;
    let lexicon = Lexicon::from_csv(&text)?;

    if let Some(dir) = dest.parent() {
        fs::create_dir_all(dir).map_err(|source| GlossError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    fs::write(&dest, &text).map_err(|source| GlossError::Io {
        path: dest.clone(),
        source,
    })?;

    info!(path = %dest.display(), entries = lexicon.len(), "cached lexicon");
    Ok(dest)
}

/// Load a lexicon from a path or an `http(s)://` URL
pub fn load_lexicon(source: &str) -> Result<Lexicon> {
    if is_url(source) {
        #[cfg(feature = "download")]
        {
            let text = fetch_lexicon(source)?;
            return Lexicon::from_csv(&text);
        }
        #[cfg(not(feature = "download"))]
        {
            return Err(GlossError::Network(format!(
                "cannot fetch '{}': built without the download feature",
                source
            )));
        }
    }
    load_lexicon_path(Path::new(source))
}
