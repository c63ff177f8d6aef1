//! Fuzzy name tier: approximate string similarity over distinct dish names.

use crate::context::SearchContext;
use crate::searcher::TierSearcher;
use crate::types::{MatchResult, MatchTier};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A string similarity measure used by [`FuzzySearch`].
///
/// Implementations may score on any non-negative scale; the tier divides by
/// [`max_score`](FuzzyMatcher::max_score) so that thresholds and results are
/// always in `[0, 1]`.
pub trait FuzzyMatcher: Send + Sync {
  /// Similarity of two lower-cased strings, `0` meaning unrelated.
  fn similarity(&self, a: &str, b: &str) -> f64;

  /// The score of two identical strings.
  fn max_score(&self) -> f64 {
    1.0
  }
}

impl<T: FuzzyMatcher + ?Sized> FuzzyMatcher for Box<T> {
  fn similarity(&self, a: &str, b: &str) -> f64 {
    (**self).similarity(a, b)
  }

  fn max_score(&self) -> f64 {
    (**self).max_score()
  }
}

/// The similarity algorithms offered by [`StrsimMatcher`].
#[cfg(feature = "fuzzy")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FuzzyAlgorithm {
  /// `1 - distance / max_len`, robust to dropped or swapped letters.
  #[default]
  NormalizedLevenshtein,
  /// Levenshtein with adjacent transpositions counted as one edit.
  NormalizedDamerauLevenshtein,
  /// Favors strings that share a prefix.
  JaroWinkler,
  /// Bigram overlap, insensitive to word order.
  SorensenDice,
}

/// A [`FuzzyMatcher`] backed by the `strsim` crate.
#[cfg(feature = "fuzzy")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StrsimMatcher {
  algorithm: FuzzyAlgorithm,
}

#[cfg(feature = "fuzzy")]
impl StrsimMatcher {
  pub fn new(algorithm: FuzzyAlgorithm) -> Self {
    Self { algorithm }
  }

  pub fn algorithm(&self) -> FuzzyAlgorithm {
    self.algorithm
  }
}

#[cfg(feature = "fuzzy")]
impl FuzzyMatcher for StrsimMatcher {
  fn similarity(&self, a: &str, b: &str) -> f64 {
    match self.algorithm {
      FuzzyAlgorithm::NormalizedLevenshtein => strsim::normalized_levenshtein(a, b),
      FuzzyAlgorithm::NormalizedDamerauLevenshtein => strsim::normalized_damerau_levenshtein(a, b),
      FuzzyAlgorithm::JaroWinkler => strsim::jaro_winkler(a, b),
      FuzzyAlgorithm::SorensenDice => strsim::sorensen_dice(a, b),
    }
  }
}

/// A tier that compares the query with every distinct dish name.
///
/// Names scoring strictly above the threshold are ranked by descending
/// similarity, ties in first-seen order. Each name then expands to every dish
/// that carries it, in catalog order, so two restaurants serving "Pad Thai"
/// both surface from a single fuzzy hit.
pub struct FuzzySearch<M: FuzzyMatcher> {
  matcher: M,
  /// Normalized similarity a name must exceed, between 0.0 and 1.0.
  threshold: f32,
}

impl<M: FuzzyMatcher> FuzzySearch<M> {
  /// Creates a new `FuzzySearch` with a default threshold of 0.6.
  pub fn new(matcher: M) -> Self {
    Self {
      matcher,
      threshold: 0.6,
    }
  }

  /// Sets a custom similarity threshold.
  pub fn with_threshold(mut self, threshold: f32) -> Self {
    self.threshold = threshold;
    self
  }

  pub fn matcher(&self) -> &M {
    &self.matcher
  }

  /// Similarity of `query` and `name` on the `[0, 1]` scale.
  pub fn score(&self, query: &str, name: &str) -> f32 {
    let max = self.matcher.max_score();
    if max <= 0.0 {
      return 0.0;
    }
    ((self.matcher.similarity(query, name) / max) as f32).clamp(0.0, 1.0)
  }

  /// Distinct names above the threshold, best first, as `(position, score)`.
  fn rank_names(&self, query: &str, names: &[String]) -> Vec<(usize, f32)> {
    #[cfg(feature = "parallel")]
    let iter = names.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = names.iter();

    let mut ranked: Vec<(usize, f32)> = iter
      .enumerate()
      .map(|(pos, name)| (pos, self.score(query, name)))
      .filter(|&(_, score)| score > self.threshold)
      .collect();

    // Stable, so equal scores keep first-seen order.
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked
  }
}

impl<M: FuzzyMatcher> TierSearcher for FuzzySearch<M> {
  fn tier(&self) -> MatchTier {
    MatchTier::Fuzzy
  }

  fn search<'c>(&self, context: &SearchContext<'c>, _quota: usize) -> Vec<MatchResult<'c>> {
    if context.is_blank() {
      return Vec::new();
    }

    let catalog = context.catalog;
    let index = catalog.index();
    let names = index.names();

    self
      .rank_names(&context.query, names)
      .into_iter()
      .flat_map(move |(pos, score)| {
        index
          .exact(&names[pos])
          .iter()
          .filter_map(move |&id| {
            let dish = catalog.dish(id)?;
            Some(MatchResult::new(id, dish, score, MatchTier::Fuzzy))
          })
      })
      .collect()
  }
}
