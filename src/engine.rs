//! The retrieval engine that walks the tier cascade.

use crate::catalog::Catalog;
use crate::context::SearchContext;
use crate::index::{EmbeddingIndex, NoEmbeddings};
use crate::searcher::TierSearcher;
use crate::searchers::{ExactSearch, FuzzyMatcher, FuzzySearch, KeywordSearch, SemanticSearch, SubstringSearch};
use crate::types::{DishId, MatchResult, SearchOptions};
use std::collections::HashSet;
use tracing::debug;

#[cfg(feature = "fuzzy")]
use crate::searchers::StrsimMatcher;

/// Answers free-text queries against one immutable [`Catalog`].
///
/// `DishFinder` owns the catalog and an ordered list of tiers. A search runs
/// the tiers in cascade order (exact, substring, fuzzy, semantic, keyword)
/// and stops as soon as `top_k` dishes are collected. The first tier to
/// propose a dish claims it: later tiers cannot add it again, even with a
/// higher score, and results are never re-ranked across tiers.
///
/// The finder holds no mutable state, so one instance can serve concurrent
/// queries from several threads.
///
/// Create a `DishFinder` using the [`DishFinderBuilder`].
///
/// # Examples
///
/// ```rust
/// use dishfinder::prelude::*;
///
/// let document = "## 1. Thong Thai\n**Cuisine:** Thai\n- Pad Thai - 7€\n- Tom Yam Gai - 3€\n";
///
/// let catalog = Catalog::from_document(document, &ParserConfig::default()).unwrap();
/// let finder = DishFinder::builder(catalog).build();
///
/// let results = finder.search("pad thai", 3);
/// assert_eq!(results[0].dish.name, "Pad Thai");
/// assert_eq!(results[0].tier, MatchTier::Exact);
/// ```
pub struct DishFinder {
  catalog: Catalog,
  /// Tiers in cascade order.
  tiers: Vec<Box<dyn TierSearcher>>,
  options: SearchOptions,
}

impl DishFinder {
  /// Creates a new `DishFinderBuilder` over `catalog`.
  pub fn builder(catalog: Catalog) -> DishFinderBuilder {
    DishFinderBuilder::new(catalog)
  }

  /// Returns at most `top_k` dishes matching `query`, best tier first.
  ///
  /// A blank query or a `top_k` of zero yields no results. A query nothing
  /// matches also yields no results; searching never fails.
  ///
  /// # Arguments
  ///
  /// * `query` - Free text as typed by a user.
  /// * `top_k` - The maximum number of results.
  pub fn search(&self, query: &str, top_k: usize) -> Vec<MatchResult<'_>> {
    if top_k == 0 {
      return Vec::new();
    }

    let context = SearchContext::new(&self.catalog, query);
    if context.is_blank() {
      debug!("blank query");
      return Vec::new();
    }

    let mut results: Vec<MatchResult<'_>> = Vec::with_capacity(top_k);
    let mut seen: HashSet<DishId> = HashSet::new();

    for tier in &self.tiers {
      let quota = top_k - results.len();
      if quota == 0 {
        break;
      }

      let proposed = tier.search(&context, quota);
      let before = results.len();
      for m in proposed {
        if results.len() == top_k {
          break;
        }
        if seen.insert(m.id) {
          results.push(m);
        }
      }

      debug!(
        tier = %tier.tier(),
        added = results.len() - before,
        remaining = top_k - results.len(),
        "tier searched"
      );
    }

    results
  }

  /// Searches with the configured default result count.
  pub fn find(&self, query: &str) -> Vec<MatchResult<'_>> {
    self.search(query, self.options.top_k)
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  pub fn options(&self) -> &SearchOptions {
    &self.options
  }

  /// The tiers in the order they run.
  pub fn tiers(&self) -> impl Iterator<Item = &dyn TierSearcher> + '_ {
    self.tiers.iter().map(|t| t.as_ref())
  }
}

/// A builder for creating `DishFinder` instances.
///
/// The cascade order is fixed. The builder only decides which optional tiers
/// take part and which backends they use:
///
/// - the substring tier follows [`SearchOptions::substring`];
/// - the fuzzy tier uses [`StrsimMatcher`] when the `fuzzy` feature is on,
///   or the matcher given to [`fuzzy`](Self::fuzzy);
/// - the semantic tier uses the index given to
///   [`embeddings`](Self::embeddings), and [`NoEmbeddings`] otherwise.
pub struct DishFinderBuilder {
  catalog: Catalog,
  options: SearchOptions,
  fuzzy: Option<Box<dyn FuzzyMatcher>>,
  embeddings: Option<Box<dyn EmbeddingIndex>>,
}

impl DishFinderBuilder {
  pub fn new(catalog: Catalog) -> Self {
    Self {
      catalog,
      options: SearchOptions::default(),
      fuzzy: default_fuzzy(),
      embeddings: None,
    }
  }

  /// Sets the search options.
  pub fn options(mut self, options: SearchOptions) -> Self {
    self.options = options;
    self
  }

  /// Uses `matcher` for the fuzzy tier.
  pub fn fuzzy<M: FuzzyMatcher + 'static>(mut self, matcher: M) -> Self {
    self.fuzzy = Some(Box::new(matcher));
    self
  }

  /// Removes the fuzzy tier from the cascade.
  pub fn without_fuzzy(mut self) -> Self {
    self.fuzzy = None;
    self
  }

  /// Uses `index` for the semantic tier.
  pub fn embeddings<I: EmbeddingIndex + 'static>(mut self, index: I) -> Self {
    self.embeddings = Some(Box::new(index));
    self
  }

  /// Builds the `DishFinder` with the configured tiers.
  pub fn build(self) -> DishFinder {
    let options = self.options;
    let mut tiers: Vec<Box<dyn TierSearcher>> = vec![Box::new(ExactSearch)];

    if options.substring {
      tiers.push(Box::new(SubstringSearch::new().with_score(options.substring_score)));
    }

    if let Some(matcher) = self.fuzzy {
      tiers.push(Box::new(FuzzySearch::new(matcher).with_threshold(options.fuzzy_threshold)));
    }

    let embeddings = self
      .embeddings
      .unwrap_or_else(|| Box::new(NoEmbeddings) as Box<dyn EmbeddingIndex>);
    tiers.push(Box::new(SemanticSearch::new(embeddings)));

    tiers.push(Box::new(KeywordSearch::new().with_threshold(options.keyword_threshold)));

    debug!(tiers = tiers.len(), "dish finder built");

    DishFinder {
      catalog: self.catalog,
      tiers,
      options,
    }
  }
}

#[cfg(feature = "fuzzy")]
fn default_fuzzy() -> Option<Box<dyn FuzzyMatcher>> {
  Some(Box::new(StrsimMatcher::default()))
}

#[cfg(not(feature = "fuzzy"))]
fn default_fuzzy() -> Option<Box<dyn FuzzyMatcher>> {
  None
}
