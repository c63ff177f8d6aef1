//! Lookup structures over the dish corpus.

use crate::searchers::tokenizer::token_set;
use crate::types::{DishId, DishRecord};
use std::collections::HashMap;

/// Exact-name and token lookup tables over a set of dishes.
///
/// Keys are lower-cased. Each key maps to the ids registered under it in
/// registration order, with no id appearing twice under the same key. The
/// index is built once and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogIndex {
  exact: HashMap<String, Vec<DishId>>,
  tokens: HashMap<String, Vec<DishId>>,
  /// Distinct lower-cased names in first-seen order.
  names: Vec<String>,
}

impl CatalogIndex {
  /// Builds the index from dishes in catalog order.
  ///
  /// Each dish is registered under its lower-cased full name and under every
  /// distinct token of that name (see [`tokenize`](crate::searchers::tokenizer::tokenize)).
  pub fn build<'a, I>(dishes: I) -> Self
  where
    I: IntoIterator<Item = (DishId, &'a DishRecord)>,
  {
    let mut index = Self::default();

    for (id, dish) in dishes {
      let key = dish.name.to_lowercase();

      for token in token_set(&key) {
        register(&mut index.tokens, token, id);
      }

      if !index.exact.contains_key(&key) {
        index.names.push(key.clone());
      }
      register(&mut index.exact, key, id);
    }

    index
  }

  /// Dishes whose lower-cased name equals `name` exactly.
  pub fn exact(&self, name: &str) -> &[DishId] {
    self.exact.get(name).map(Vec::as_slice).unwrap_or(&[])
  }

  /// Dishes whose name contains `token`.
  pub fn token(&self, token: &str) -> &[DishId] {
    self.tokens.get(token).map(Vec::as_slice).unwrap_or(&[])
  }

  /// Distinct lower-cased dish names in first-seen order.
  pub fn names(&self) -> &[String] {
    &self.names
  }

  pub fn exact_keys(&self) -> impl Iterator<Item = &str> {
    self.exact.keys().map(String::as_str)
  }

  pub fn token_keys(&self) -> impl Iterator<Item = &str> {
    self.tokens.keys().map(String::as_str)
  }

  /// Number of distinct names.
  pub fn len(&self) -> usize {
    self.names.len()
  }

  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }
}

fn register(map: &mut HashMap<String, Vec<DishId>>, key: String, id: DishId) {
  let ids = map.entry(key).or_default();
  if ids.last() != Some(&id) {
    ids.push(id);
  }
}
