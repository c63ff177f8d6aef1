//! Exact-name tier.

use crate::context::SearchContext;
use crate::searcher::TierSearcher;
use crate::types::{MatchResult, MatchTier};

/// Looks the normalized query up in the exact-name map.
///
/// Every hit scores `1.0`; hits keep catalog order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactSearch;

impl TierSearcher for ExactSearch {
  fn tier(&self) -> MatchTier {
    MatchTier::Exact
  }

  fn search<'c>(&self, context: &SearchContext<'c>, _quota: usize) -> Vec<MatchResult<'c>> {
    let catalog = context.catalog;
    catalog
      .index()
      .exact(&context.query)
      .iter()
      .filter_map(|&id| {
        let dish = catalog.dish(id)?;
        Some(MatchResult::new(id, dish, 1.0, MatchTier::Exact))
      })
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::searchers::fixture;
  use crate::types::DishId;

  #[test]
  fn test_exact_hits_in_catalog_order() {
    let catalog = fixture::catalog();
    let context = SearchContext::new(&catalog, "  PAD thai ");
    let results = ExactSearch.search(&context, 5);

    let ids: Vec<_> = results.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![DishId(0), DishId(3)]);
    assert!(results.iter().all(|m| m.score == 1.0 && m.tier == MatchTier::Exact));
    assert_eq!(results[1].dish.restaurant_name, "Pak Choi");
  }

  #[test]
  fn test_partial_name_is_not_exact() {
    let catalog = fixture::catalog();
    assert!(ExactSearch.search(&SearchContext::new(&catalog, "pad"), 5).is_empty());
  }
}
