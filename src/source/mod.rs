// Document acquisition — turns user input into raw text for the pipeline.
//
// A document is given inline, as a local file, or as a URL. Any failure to
// obtain the text is logged and resolved to an empty string, so the scoring
// pipeline never sees an error from this layer.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

pub mod html;
pub mod traits;
pub mod web;

use traits::TextFetcher;

/// Where one document's text comes from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentInput {
    Text(String),
    /// Local UTF-8 file. Not accepted over HTTP.
    #[serde(skip)]
    File(PathBuf),
    Url(String),
}

impl DocumentInput {
    /// Pick the input from whatever the user supplied.
    ///
    /// A file wins over a URL, and inline text wins over both. Blank URLs
    /// count as not supplied.
    pub fn choose(text: Option<String>, file: Option<PathBuf>, url: Option<String>) -> Option<Self> {
        if let Some(text) = text {
            return Some(DocumentInput::Text(text));
        }
        if let Some(path) = file {
            return Some(DocumentInput::File(path));
        }
        url.filter(|u| !u.trim().is_empty()).map(DocumentInput::Url)
    }

    /// Short description for logs and error messages.
    pub fn describe(&self) -> String {
        match self {
            DocumentInput::Text(_) => "inline text".to_string(),
            DocumentInput::File(path) => path.display().to_string(),
            DocumentInput::Url(url) => url.clone(),
        }
    }
}

/// Read a local file as UTF-8 text.
pub fn read_text_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    String::from_utf8(bytes).with_context(|| format!("{} is not valid UTF-8", path.display()))
}

/// Obtain the text for `input`, propagating failures.
pub async fn load(input: &DocumentInput, fetcher: &dyn TextFetcher) -> Result<String> {
    match input {
        DocumentInput::Text(text) => Ok(text.clone()),
        DocumentInput::File(path) => read_text_file(path),
        DocumentInput::Url(url) => fetcher.fetch_text(url).await,
    }
}

/// Obtain the text for `input`, or an empty string if it could not be obtained.
pub async fn resolve(input: &DocumentInput, fetcher: &dyn TextFetcher) -> String {
    match load(input, fetcher).await {
        Ok(text) => text,
        Err(e) => {
            warn!(source = %input.describe(), error = %format!("{e:#}"), "Could not obtain document text");
            String::new()
        }
    }
}
