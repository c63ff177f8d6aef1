use dishfinder::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const GUIDE: &str = "\
## 1. Pak Choi
**Cuisine:** Chinese
- Mapo Tofu - 10€
- Dan Dan Noodles - 9€
- Wonton Soup - 7€

## 2. Kabuki
**Cuisine:** Japanese
- Miso Soup - 4€
- Chirashi Bowl - 28€
";

fn catalog() -> Catalog {
  Catalog::from_document(GUIDE, &ParserConfig::default()).unwrap()
}

/// Counts shared leading characters and reports a 0-100 percentage.
struct PercentMatcher;

impl FuzzyMatcher for PercentMatcher {
  fn similarity(&self, a: &str, b: &str) -> f64 {
    let shared = a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count();
    100.0 * shared as f64 / a.chars().count().max(b.chars().count()).max(1) as f64
  }

  fn max_score(&self) -> f64 {
    100.0
  }
}

/// Places every dish at a fixed distance from any query and counts encodes.
struct StaticIndex {
  distances: Vec<(DishId, f32)>,
  encodes: Arc<AtomicUsize>,
}

impl EmbeddingIndex for StaticIndex {
  fn encode(&self, _text: &str) -> Result<Vec<f32>, EmbedError> {
    self.encodes.fetch_add(1, Ordering::SeqCst);
    Ok(vec![1.0, 0.0])
  }

  fn nearest_neighbors(&self, _vector: &[f32], k: usize) -> Vec<(DishId, f32)> {
    self.distances.iter().copied().take(k).collect()
  }

  fn len(&self) -> usize {
    self.distances.len()
  }
}

struct OfflineIndex;

impl EmbeddingIndex for OfflineIndex {
  fn encode(&self, _text: &str) -> Result<Vec<f32>, EmbedError> {
    Err(EmbedError::Backend("connection refused".to_string()))
  }

  fn nearest_neighbors(&self, _vector: &[f32], _k: usize) -> Vec<(DishId, f32)> {
    Vec::new()
  }

  fn len(&self) -> usize {
    5
  }
}

#[test]
fn test_custom_fuzzy_scale_is_normalized() {
  let finder = DishFinder::builder(catalog())
    .options(SearchOptions::default().substring(false).fuzzy_threshold(0.5))
    .fuzzy(PercentMatcher)
    .build();

  let results = finder.search("mapo tof", 5);
  assert_eq!(results[0].dish.name, "Mapo Tofu");
  assert_eq!(results[0].tier, MatchTier::Fuzzy);
  assert!((results[0].score - 8.0 / 9.0).abs() < 1e-6);
}

#[test]
fn test_semantic_scores_follow_distance() {
  let encodes = Arc::new(AtomicUsize::new(0));
  let index = StaticIndex {
    distances: vec![(DishId(4), 0.0), (DishId(1), 1.0), (DishId(0), 3.0)],
    encodes: Arc::clone(&encodes),
  };
  let finder = DishFinder::builder(catalog())
    .without_fuzzy()
    .embeddings(index)
    .build();

  let results = finder.search("something warm", 3);
  let semantic: Vec<_> = results
    .iter()
    .map(|m| (m.dish.name.as_str(), m.score, m.tier))
    .collect();
  assert_eq!(
    semantic,
    vec![
      ("Chirashi Bowl", 1.0, MatchTier::Semantic),
      ("Dan Dan Noodles", 0.5, MatchTier::Semantic),
      ("Mapo Tofu", 0.25, MatchTier::Semantic),
    ]
  );
  assert_eq!(encodes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_semantic_tier_skipped_once_full() {
  let encodes = Arc::new(AtomicUsize::new(0));
  let index = StaticIndex {
    distances: vec![(DishId(0), 0.5)],
    encodes: Arc::clone(&encodes),
  };
  let finder = DishFinder::builder(catalog()).embeddings(index).build();

  let results = finder.search("wonton soup", 1);
  assert_eq!(results.len(), 1);
  assert_eq!(results[0].tier, MatchTier::Exact);
  assert_eq!(encodes.load(Ordering::SeqCst), 0);
}

#[test]
fn test_semantic_does_not_reclaim_earlier_hits() {
  let index = StaticIndex {
    distances: vec![(DishId(2), 0.0), (DishId(3), 0.2)],
    encodes: Arc::new(AtomicUsize::new(0)),
  };
  let finder = DishFinder::builder(catalog()).embeddings(index).build();

  let results = finder.search("wonton soup", 5);
  assert_eq!(results[0].dish.name, "Wonton Soup");
  assert_eq!(results[0].tier, MatchTier::Exact);
  assert_eq!(results.iter().filter(|m| m.id == DishId(2)).count(), 1);

  let miso = results.iter().find(|m| m.id == DishId(3)).unwrap();
  assert_ne!(miso.tier, MatchTier::Keyword);
}

#[test]
fn test_failing_backend_falls_through_to_keyword() {
  let finder = DishFinder::builder(catalog())
    .options(SearchOptions::default().substring(false))
    .without_fuzzy()
    .embeddings(OfflineIndex)
    .build();

  let results = finder.search("hot soup", 5);
  let names: Vec<_> = results.iter().map(|m| m.dish.name.as_str()).collect();
  assert_eq!(names, vec!["Wonton Soup", "Miso Soup"]);
  assert!(results.iter().all(|m| m.tier == MatchTier::Keyword));
}

#[cfg(feature = "semantic")]
#[test]
fn test_ngram_backend_end_to_end() {
  let catalog = catalog();
  let index = FlatVectorIndex::build(NgramEmbedder::default(), &catalog).unwrap();
  assert_eq!(index.len(), catalog.len());

  let finder = DishFinder::builder(catalog)
    .options(SearchOptions::default().substring(false))
    .without_fuzzy()
    .embeddings(index)
    .build();

  let results = finder.search("noodle", 2);
  assert_eq!(results[0].dish.name, "Dan Dan Noodles");
  assert_eq!(results[0].tier, MatchTier::Semantic);
}

#[test]
fn test_custom_matchers_replace_builtin_ones() {
  let matchers = vec![DishMatcher::new("pipe", r"^\|\s*([^|]+?)\s*\|\s*(\d+€)\s*\|").unwrap()];
  let parser = DocumentParser::with_matchers(ParserConfig::default(), matchers).unwrap();
  let catalog = Catalog::parse_with(&parser, "## 1. Ramen Bar\n| Tonkotsu Ramen | 14€ |\n- Gyoza - 6€\n");

  let names: Vec<_> = catalog.dishes().map(|(_, d)| d.name.as_str()).collect();
  assert_eq!(names, vec!["Tonkotsu Ramen"]);
  assert_eq!(catalog.restaurants()[0].cuisine, "Asian");
}

#[test]
fn test_invalid_matcher_pattern() {
  let err = DishMatcher::new("broken", r"(unclosed").unwrap_err();
  assert!(matches!(err, CatalogError::InvalidPattern(_)));
}
