//! The `TierSearcher` trait, which defines the interface for cascade tiers.

use crate::context::SearchContext;
use crate::types::{MatchResult, MatchTier};

/// One matching strategy of the retrieval cascade.
///
/// A tier proposes candidates in its natural order, best first. The
/// [`DishFinder`](crate::engine::DishFinder) walks tiers in cascade order and
/// keeps a candidate only if no earlier tier already claimed that dish, so a
/// tier never needs to know what ran before it.
///
/// The `Send` and `Sync` bounds are required so that a finder can serve
/// concurrent queries.
pub trait TierSearcher: Send + Sync {
  /// Returns the tier this searcher implements.
  fn tier(&self) -> MatchTier;

  /// Proposes matches for the query in `context`.
  ///
  /// # Arguments
  ///
  /// * `context` - The query and the catalog it runs against.
  /// * `quota` - How many more results the cascade can accept. Tiers may use
  ///   it to bound their work; returning more is allowed, the engine
  ///   truncates.
  fn search<'c>(&self, context: &SearchContext<'c>, quota: usize) -> Vec<MatchResult<'c>>;
}
