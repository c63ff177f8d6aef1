//! Error types for dishfinder.
//!
//! Parsing a document never fails on content: malformed sections and lines are
//! skipped. What can fail is getting at the document, reading configuration, or
//! asking an embedding backend for a vector.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a catalog or its configuration.
#[derive(Error, Debug)]
pub enum CatalogError {
  /// The source document could not be read.
  #[error("cannot read document {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// A configuration file could not be deserialized.
  #[error("config error: {0}")]
  Config(#[from] serde_json::Error),

  /// A dish matcher pattern failed to compile.
  #[error("invalid pattern: {0}")]
  InvalidPattern(String),
}

/// Errors raised by an embedding backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmbedError {
  /// The text produced no features to embed.
  #[error("nothing to embed in {0:?}")]
  Empty(String),

  /// A vector did not have the dimension the index was built with.
  #[error("dimension mismatch: expected {expected}, got {actual}")]
  Dimension { expected: usize, actual: usize },

  /// Backend-specific failure.
  #[error("embedding backend failed: {0}")]
  Backend(String),
}

/// Result alias defaulting to [`CatalogError`].
pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
