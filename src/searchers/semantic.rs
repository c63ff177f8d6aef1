//! Semantic tier: nearest dish vectors in an embedding space.

use crate::context::SearchContext;
use crate::index::EmbeddingIndex;
use crate::searcher::TierSearcher;
use crate::types::{MatchResult, MatchTier};
use tracing::warn;

/// A tier that asks an [`EmbeddingIndex`] for the dishes closest to the query.
///
/// A distance `d` becomes the score `1 / (1 + d)`. The tier never fails a
/// search: an encoding error is logged and the tier contributes nothing, and
/// an empty query vector means the backend has no representation to offer.
pub struct SemanticSearch<I: EmbeddingIndex> {
  index: I,
}

impl<I: EmbeddingIndex> SemanticSearch<I> {
  pub fn new(index: I) -> Self {
    Self { index }
  }

  pub fn index(&self) -> &I {
    &self.index
  }
}

/// Maps a distance in `[0, inf)` to a similarity in `(0, 1]`.
pub fn distance_to_score(distance: f32) -> f32 {
  if distance.is_nan() || distance < 0.0 {
    return 0.0;
  }
  1.0 / (1.0 + distance)
}

impl<I: EmbeddingIndex> TierSearcher for SemanticSearch<I> {
  fn tier(&self) -> MatchTier {
    MatchTier::Semantic
  }

  fn search<'c>(&self, context: &SearchContext<'c>, quota: usize) -> Vec<MatchResult<'c>> {
    if quota == 0 || context.is_blank() || self.index.is_empty() {
      return Vec::new();
    }

    let vector = match self.index.encode(&context.raw) {
      Ok(vector) => vector,
      Err(err) => {
        warn!(query = %context.raw, error = %err, "query encoding failed, skipping semantic tier");
        return Vec::new();
      }
    };
    if vector.is_empty() {
      return Vec::new();
    }

    let catalog = context.catalog;
    self
      .index
      .nearest_neighbors(&vector, quota)
      .into_iter()
      .filter_map(|(id, distance)| {
        let dish = catalog.dish(id)?;
        Some(MatchResult::new(id, dish, distance_to_score(distance), MatchTier::Semantic))
      })
      .collect()
  }
}
