use dishfinder::prelude::*;
use std::collections::HashSet;

const GUIDE: &str = include_str!("fixtures/restaurants.md");

fn catalog() -> Catalog {
  Catalog::from_document(GUIDE, &ParserConfig::default()).unwrap()
}

fn finder() -> DishFinder {
  DishFinder::builder(catalog()).build()
}

#[test]
fn test_guide_is_fully_parsed() {
  let catalog = catalog();
  let names: Vec<_> = catalog.restaurants().iter().map(|r| r.name.as_str()).collect();
  assert_eq!(
    names,
    vec![
      "Góc Phố - Vietnamese Street Food",
      "Thong Thai",
      "Zenzakan",
      "Pak Choi",
      "China Restaurant Yung",
      "Kabuki Frankfurt",
    ]
  );

  let counts: Vec<_> = catalog.restaurants().iter().map(|r| r.dishes.len()).collect();
  assert_eq!(counts, vec![15, 15, 10, 9, 8, 6]);
  assert_eq!(catalog.len(), 63);

  let yung = &catalog.restaurants()[4];
  assert_eq!(yung.cuisine, "Chinese (Cantonese)");
  assert_eq!(yung.price_tier, PriceTier::Moderate);
  assert!(yung.address.is_empty());

  let kabuki = &catalog.restaurants()[5];
  assert_eq!(kabuki.price_tier, PriceTier::Luxury);
}

#[test]
fn test_dish_fields_and_categories() {
  let catalog = catalog();
  let thong = &catalog.restaurants()[1];

  let curry = &thong.dishes[3];
  assert_eq!(curry.name, "Kiow-Wan-Gai (Green Curry)");
  assert_eq!(curry.price.as_deref(), Some("7€"));
  assert_eq!(curry.category.as_deref(), Some("Hauptgerichte (Main Dishes)"));
  assert_eq!(curry.address.as_deref(), Some("Meisengasse 12, 60313 Frankfurt"));

  let soup = &thong.dishes[7];
  assert_eq!(soup.name, "Tom Yam Gai");
  assert_eq!(soup.category.as_deref(), Some("Suppen (Soups)"));

  let noodles = thong.dishes.last().unwrap();
  assert_eq!(noodles.name, "Bami-Phad-Gai");
  assert_eq!(noodles.category.as_deref(), Some("Nudelgerichte"));

  for (_, dish) in catalog.dishes() {
    assert!(dish.name.chars().count() >= 3);
    assert!(!dish.name.eq_ignore_ascii_case("menu"));
  }
}

#[test]
fn test_exact_name_ranks_first() {
  let finder = finder();
  let results = finder.search("phad thai", 5);

  assert_eq!(results[0].dish.name, "Phad Thai");
  assert_eq!(results[0].dish.restaurant_name, "Thong Thai");
  assert_eq!(results[0].tier, MatchTier::Exact);
  assert_eq!(results[0].score, 1.0);
}

#[test]
fn test_exact_then_substring_without_duplicates() {
  let finder = finder();
  let results = finder.search("Spring Rolls", 5);

  assert_eq!(results[0].dish.restaurant_name, "China Restaurant Yung");
  assert_eq!(results[0].tier, MatchTier::Exact);

  let substring: Vec<_> = results
    .iter()
    .filter(|m| m.tier == MatchTier::Substring)
    .map(|m| m.dish.name.as_str())
    .collect();
  assert_eq!(substring, vec!["Cha Gio Re (Spring rolls)", "Cha Gio Ga (Chicken spring rolls)"]);
}

#[cfg(feature = "fuzzy")]
#[test]
fn test_typo_is_caught_by_fuzzy_tier() {
  let finder = finder();
  let results = finder.search("pad thai", 5);

  assert_eq!(results[0].dish.name, "Phad Thai");
  assert_eq!(results[0].tier, MatchTier::Fuzzy);
  assert!(results[0].score > 0.8 && results[0].score < 1.0);
}

#[test]
fn test_keyword_only_needs_a_shared_token() {
  let finder = DishFinder::builder(catalog())
    .options(SearchOptions::default().substring(false))
    .without_fuzzy()
    .build();

  assert!(finder.search("padthai", 5).is_empty());

  let results = finder.search("green curry please", 5);
  assert!(!results.is_empty());
  assert!(results.iter().all(|m| m.tier == MatchTier::Keyword));
  assert_eq!(results[0].dish.name, "Thai Green Curry");
}

#[test]
fn test_results_respect_top_k_and_are_unique() {
  let finder = finder();

  for query in ["chicken", "curry", "soup", "noodles", "duck", "sushi set", "beef"] {
    for top_k in [1, 3, 5, 10] {
      let results = finder.search(query, top_k);
      assert!(results.len() <= top_k, "{query} returned {} > {top_k}", results.len());

      let ids: HashSet<_> = results.iter().map(|m| m.id).collect();
      assert_eq!(ids.len(), results.len(), "duplicate dish for {query}");
    }
  }
}

#[test]
fn test_tiers_never_interleave() {
  let finder = finder();

  for query in ["chicken", "Spring Rolls", "curry", "duck wings", "tofu"] {
    let results = finder.search(query, 10);
    assert!(
      results.windows(2).all(|w| w[0].tier <= w[1].tier),
      "tiers out of cascade order for {query}"
    );
    assert!(results.iter().all(|m| (0.0..=1.0).contains(&m.score)));
  }
}

#[test]
fn test_no_match_is_empty_not_error() {
  let finder = finder();
  assert!(finder.search("xq", 5).is_empty());
  assert!(finder.search("", 5).is_empty());
}

#[test]
fn test_empty_document() {
  let catalog = Catalog::from_document("", &ParserConfig::default()).unwrap();
  assert!(catalog.is_empty());
  assert!(catalog.index().is_empty());

  let finder = DishFinder::builder(catalog).build();
  assert!(finder.search("pad thai", 5).is_empty());
}

#[test]
fn test_load_from_disk() {
  let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/restaurants.md");
  let catalog = Catalog::load(path, &ParserConfig::default()).unwrap();
  assert_eq!(catalog.len(), 63);

  let err = Catalog::load("/nonexistent/guide.md", &ParserConfig::default()).unwrap_err();
  assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn test_concurrent_queries_share_one_finder() {
  let finder = finder();
  let expected = finder.search("curry", 5).len();

  std::thread::scope(|scope| {
    let handles: Vec<_> = (0..4)
      .map(|_| scope.spawn(|| finder.search("curry", 5).len()))
      .collect();
    for handle in handles {
      assert_eq!(handle.join().unwrap(), expected);
    }
  });
}

#[test]
fn test_single_section_corpus() {
  let document = "## 1. Thong Thai\n**Cuisine:** Thai\n- Pad Thai - 7€\n";
  let catalog = Catalog::from_document(document, &ParserConfig::default()).unwrap();

  let restaurant = &catalog.restaurants()[0];
  assert_eq!(restaurant.name, "Thong Thai");
  assert_eq!(restaurant.cuisine, "Thai");
  assert_eq!(restaurant.dishes[0].name, "Pad Thai");
  assert_eq!(restaurant.dishes[0].price.as_deref(), Some("7€"));

  let finder = DishFinder::builder(catalog.clone()).build();
  let results = finder.search("pad thai", 5);
  assert_eq!(results.len(), 1);
  assert_eq!(results[0].tier, MatchTier::Exact);
  assert_eq!(results[0].score, 1.0);

  let keyword_only = DishFinder::builder(catalog)
    .options(SearchOptions::default().substring(false))
    .without_fuzzy()
    .build();
  assert!(keyword_only.search("padthai", 5).is_empty());
}
