//! Substring tier.

use crate::context::SearchContext;
use crate::searcher::TierSearcher;
use crate::types::{MatchResult, MatchTier};

/// Matches dishes whose lower-cased name contains the query, or is contained
/// in it. All hits share one fixed score and keep catalog order.
#[derive(Debug, Clone, Copy)]
pub struct SubstringSearch {
  score: f32,
}

impl SubstringSearch {
  /// Creates a substring tier with the default score of `0.9`.
  pub fn new() -> Self {
    Self { score: 0.9 }
  }

  /// Sets the score assigned to every hit.
  pub fn with_score(mut self, score: f32) -> Self {
    self.score = score;
    self
  }
}

impl Default for SubstringSearch {
  fn default() -> Self {
    Self::new()
  }
}

impl TierSearcher for SubstringSearch {
  fn tier(&self) -> MatchTier {
    MatchTier::Substring
  }

  fn search<'c>(&self, context: &SearchContext<'c>, _quota: usize) -> Vec<MatchResult<'c>> {
    if context.is_blank() {
      return Vec::new();
    }

    let query = context.query.as_str();
    context
      .catalog
      .dishes()
      .filter(|(_, dish)| {
        let name = dish.name.to_lowercase();
        name.contains(query) || query.contains(name.as_str())
      })
      .map(|(id, dish)| MatchResult::new(id, dish, self.score, MatchTier::Substring))
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::searchers::fixture;
  use crate::types::DishId;

  fn ids(query: &str) -> Vec<DishId> {
    let catalog = fixture::catalog();
    let context = SearchContext::new(&catalog, query);
    SubstringSearch::new()
      .search(&context, 5)
      .iter()
      .map(|m| m.id)
      .collect()
  }

  #[test]
  fn test_query_inside_name() {
    assert_eq!(ids("Curry"), vec![DishId(1)]);
    assert_eq!(ids("noodle"), vec![DishId(4)]);
  }

  #[test]
  fn test_name_inside_query() {
    assert_eq!(ids("dan dan noodles with chili oil"), vec![DishId(4)]);
  }

  #[test]
  fn test_score_and_blank_query() {
    let catalog = fixture::catalog();
    let results = SubstringSearch::new()
      .with_score(0.75)
      .search(&SearchContext::new(&catalog, "thai"), 5);
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|m| m.score == 0.75));

    assert!(ids("   ").is_empty());
  }
}
