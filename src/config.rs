//! Finder configuration, loadable from JSON.

use crate::error::{CatalogError, Result};
use crate::parser::ParserConfig;
use crate::types::SearchOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parser and search settings for one finder.
///
/// Every field falls back to its default, so `{}` is a valid config and a
/// file only needs the keys it changes:
///
/// ```json
/// { "parser": { "default_cuisine": "Thai" }, "search": { "top_k": 3 } }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinderConfig {
  #[serde(default)]
  pub parser: ParserConfig,
  #[serde(default)]
  pub search: SearchOptions,
}

impl FinderConfig {
  pub fn from_json_str(json: &str) -> Result<Self> {
    Ok(serde_json::from_str(json)?)
  }

  /// Reads a JSON config file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_json_str(&json)
  }
}
