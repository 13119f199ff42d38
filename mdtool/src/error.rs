use std::{io, path::PathBuf};

use thiserror::Error;

/// Result alias used throughout the mdtool crate.
pub type Result<T> = std::result::Result<T, MdtoolError>;

/// Top-level error type for the mdtool crate.
#[derive(Debug, Error)]
pub enum MdtoolError {
  #[error(transparent)]
  Usage(#[from] UsageError),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("Failed to read {}: {source}", path.display())]
  Read { path: PathBuf, source: io::Error },

  #[error("Failed to create {}: {source}", path.display())]
  Create { path: PathBuf, source: io::Error },

  #[error("Failed to fetch {url}: {source}")]
  Fetch {
    url:    String,
    source: reqwest::Error,
  },

  #[error("Failed to fetch {url}: server responded with {status}")]
  Status {
    url:    String,
    status: reqwest::StatusCode,
  },

  #[error("Failed to open browser at {url}: {source}")]
  Browser { url: String, source: io::Error },

  #[error("Preview server error: {0}")]
  Preview(String),
}

/// Invalid command line invocations. Detected before any I/O happens.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsageError {
  #[error(
    "ambiguous option: {0}; did you mean +ta[bles] or +ty[pographer]?"
  )]
  AmbiguousOption(String),

  #[error("too many documents: expected at most 2 (input and output), got {0}")]
  TooManyDocuments(usize),
}
