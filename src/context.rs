//! Context provided to tier searchers during a search operation.

use crate::catalog::Catalog;
use crate::searchers::tokenizer::{normalize_query, token_set};
use std::collections::HashSet;

/// Everything a tier needs to answer one query.
///
/// Built once per [`DishFinder::search`](crate::engine::DishFinder::search)
/// call and shared, read-only, by every tier of the cascade.
pub struct SearchContext<'c> {
  /// The catalog being searched.
  pub catalog: &'c Catalog,
  /// The query as typed.
  pub raw: String,
  /// Trimmed, lower-cased query.
  pub query: String,
  /// Distinct query tokens, see [`tokenize`](crate::searchers::tokenizer::tokenize).
  pub tokens: HashSet<String>,
}

impl<'c> SearchContext<'c> {
  pub fn new(catalog: &'c Catalog, raw: &str) -> Self {
    let query = normalize_query(raw);
    Self {
      catalog,
      tokens: token_set(&query),
      raw: raw.trim().to_string(),
      query,
    }
  }

  /// True when the query has no content to match on.
  pub fn is_blank(&self) -> bool {
    self.query.is_empty()
  }
}
