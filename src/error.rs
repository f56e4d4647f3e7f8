use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while fetching or scraping character pages.
///
/// Missing markup is never reported here: extractors fall back to empty
/// values instead.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport-level failure from the HTTP client
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The listing endpoint answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// Reading or writing a local file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration or response JSON could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A selector built from configuration did not parse
    #[error("Invalid selector `{0}`")]
    Selector(String),

    /// A non-HTTP page source could not provide a page
    #[error("Failed to load {url}: {message}")]
    Source { url: String, message: String },
}

impl ScrapeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScrapeError::Io {
            path: path.into(),
            source,
        }
    }
}
