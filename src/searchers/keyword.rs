//! Keyword tier: token overlap between the query and dish names.

use crate::context::SearchContext;
use crate::searcher::TierSearcher;
use crate::searchers::tokenizer::{overlap_ratio, token_set};
use crate::types::{DishId, MatchResult, MatchTier};
use std::collections::BTreeSet;

/// The last-resort tier.
///
/// Scores a dish by `|query ∩ name| / max(|query|, |name|)` over token sets.
/// Only dishes sharing at least one token with the query can score above
/// zero, so candidates come straight from the token index. Results are ranked
/// by descending overlap, ties in catalog order.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordSearch {
  /// Overlap a dish must exceed.
  threshold: f32,
}

impl KeywordSearch {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_threshold(mut self, threshold: f32) -> Self {
    self.threshold = threshold;
    self
  }
}

impl TierSearcher for KeywordSearch {
  fn tier(&self) -> MatchTier {
    MatchTier::Keyword
  }

  fn search<'c>(&self, context: &SearchContext<'c>, _quota: usize) -> Vec<MatchResult<'c>> {
    if context.tokens.is_empty() {
      return Vec::new();
    }

    let catalog = context.catalog;
    let candidates: BTreeSet<DishId> = context
      .tokens
      .iter()
      .flat_map(|token| catalog.index().token(token).iter().copied())
      .collect();

    let mut results: Vec<MatchResult<'c>> = candidates
      .into_iter()
      .filter_map(|id| {
        let dish = catalog.dish(id)?;
        let score = overlap_ratio(&context.tokens, &token_set(&dish.name));
        (score > self.threshold).then(|| MatchResult::new(id, dish, score, MatchTier::Keyword))
      })
      .collect();

    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    results
  }
}
