//! Error taxonomy for the network boundaries.
//!
//! Every error here is recoverable by design: a failed index load degrades to
//! an empty corpus, a failed list fetch keeps the last-known-good items, a
//! failed field update rolls the optimistic change back. Nothing in this
//! crate propagates a network failure as a panic.

use std::fmt;

/// Why a search-index load failed.
#[derive(Debug)]
pub enum LoadError {
    /// Reading the index file failed.
    Io(std::io::Error),
    /// The HTTP request itself failed (connect, DNS, TLS).
    Http(String),
    /// The endpoint answered with a non-2xx status.
    Status(u16),
    /// The payload was not a JSON array of content records.
    Parse(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "index read failed: {}", e),
            LoadError::Http(e) => write!(f, "index fetch failed: {}", e),
            LoadError::Status(code) => write!(f, "index fetch returned status {}", code),
            LoadError::Parse(e) => write!(f, "index payload malformed: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse(e)
    }
}

/// Why an admin list fetch or field update failed.
#[derive(Debug)]
pub enum FetchError {
    /// The request never completed.
    Failed(String),
    /// The endpoint answered with a non-2xx status.
    Status(u16),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Failed(e) => write!(f, "request failed: {}", e),
            FetchError::Status(code) => write!(f, "request returned status {}", code),
        }
    }
}

impl std::error::Error for FetchError {}
