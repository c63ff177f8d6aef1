//! Shows which tier of the cascade claims each result.
//!
//! Runs a few queries against the bundled sample guide twice: once with the
//! default tiers and once with only the exact and keyword tiers.

use dishfinder::prelude::*;
use tracing_subscriber::EnvFilter;

const SAMPLE_GUIDE: &str = include_str!("../tests/fixtures/restaurants.md");

const QUERIES: &[&str] = &["Phad Thai", "pad thai", "padthai", "spring rolls", "dumpling", "green curry please"];

fn print_results(finder: &DishFinder, query: &str) {
  let results = finder.search(query, 5);
  println!("Query: {query:?} -> {} result(s)", results.len());
  for (i, m) in results.iter().enumerate() {
    println!(
      "  {}. [{:<9}] {:.3}  {} ({})",
      i + 1,
      m.tier.as_str(),
      m.score,
      m.dish.name,
      m.dish.restaurant_name
    );
  }
  println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  println!("=== Tier Cascade Example ===\n");

  let catalog = Catalog::from_document(SAMPLE_GUIDE, &ParserConfig::default())?;
  println!("Indexed {} dishes\n", catalog.len());

  #[cfg(feature = "semantic")]
  let index = FlatVectorIndex::build(NgramEmbedder::default(), &catalog)?;

  let full = DishFinder::builder(catalog.clone());
  #[cfg(feature = "semantic")]
  let full = full.embeddings(index);
  let full = full.build();

  let tiers: Vec<String> = full.tiers().map(|t| t.tier().to_string()).collect();
  println!("--- All tiers: {} ---\n", tiers.join(" -> "));
  for query in QUERIES {
    print_results(&full, query);
  }

  let minimal = DishFinder::builder(catalog)
    .options(SearchOptions::default().substring(false))
    .without_fuzzy()
    .build();

  println!("--- Exact and keyword only ---\n");
  for query in QUERIES {
    print_results(&minimal, query);
  }

  Ok(())
}
