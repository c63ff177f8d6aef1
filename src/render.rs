//! Plain-text and JSON renderings of search results and catalogs.
//!
//! These are presentation helpers for front ends; the engine never calls them.

use crate::catalog::Catalog;
use crate::types::{MatchResult, MatchTier};
use serde::Serialize;
use std::fmt;

/// One flattened result, as rendered to JSON.
#[derive(Debug, Serialize)]
pub struct ResultCard<'a> {
  pub rank: usize,
  pub name: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub price: Option<&'a str>,
  pub restaurant: &'a str,
  pub cuisine: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub category: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub address: Option<&'a str>,
  pub tier: MatchTier,
  pub score: f32,
}

impl<'a> ResultCard<'a> {
  pub fn new(rank: usize, result: &MatchResult<'a>) -> Self {
    let dish = result.dish;
    Self {
      rank,
      name: &dish.name,
      price: dish.price.as_deref(),
      restaurant: &dish.restaurant_name,
      cuisine: &dish.cuisine,
      category: dish.category.as_deref(),
      address: dish.address.as_deref().filter(|a| !a.is_empty()),
      tier: result.tier,
      score: result.score,
    }
  }
}

/// Numbered text cards for one query's results.
///
/// Displays a single "no dishes found" line when there are no results.
pub struct ResultsText<'q, 'r, 'a> {
  pub query: &'q str,
  pub results: &'r [MatchResult<'a>],
}

impl fmt::Display for ResultsText<'_, '_, '_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let query = self.query.trim();
    if self.results.is_empty() {
      return write!(f, "No dishes found matching '{query}'");
    }

    writeln!(f, "Found {} result(s) for '{query}':", self.results.len())?;
    for (i, result) in self.results.iter().enumerate() {
      let card = ResultCard::new(i + 1, result);
      writeln!(f)?;
      writeln!(f, "#{} {}", card.rank, card.name)?;
      if let Some(price) = card.price {
        writeln!(f, "   Price: {price}")?;
      }
      writeln!(f, "   Restaurant: {}", card.restaurant)?;
      writeln!(f, "   Cuisine: {}", card.cuisine)?;
      if let Some(category) = card.category {
        writeln!(f, "   Category: {category}")?;
      }
      if let Some(address) = card.address {
        writeln!(f, "   Address: {address}")?;
      }
      writeln!(f, "   Match: {} ({:.0}%)", card.tier, card.score * 100.0)?;
    }

    Ok(())
  }
}

/// Every restaurant with its dishes, in document order.
pub struct CatalogText<'c>(pub &'c Catalog);

impl fmt::Display for CatalogText<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let rule = "=".repeat(50);

    for restaurant in self.0.restaurants() {
      writeln!(f, "{rule}")?;
      writeln!(f, "{} ({}) {}", restaurant.name, restaurant.cuisine, restaurant.price_tier)?;
      writeln!(f, "{rule}")?;
      for dish in &restaurant.dishes {
        match &dish.price {
          Some(price) => writeln!(f, "  - {} - {}", dish.name, price)?,
          None => writeln!(f, "  - {}", dish.name)?,
        }
      }
    }

    Ok(())
  }
}

/// Renders results as numbered text cards.
pub fn results_text(query: &str, results: &[MatchResult<'_>]) -> String {
  ResultsText { query, results }.to_string()
}

/// Renders every restaurant with its dishes, in document order.
pub fn catalog_text(catalog: &Catalog) -> String {
  CatalogText(catalog).to_string()
}

/// Renders results as a pretty-printed JSON array of [`ResultCard`]s.
pub fn results_json(results: &[MatchResult<'_>]) -> serde_json::Result<String> {
  let cards: Vec<ResultCard<'_>> = results
    .iter()
    .enumerate()
    .map(|(i, r)| ResultCard::new(i + 1, r))
    .collect();
  serde_json::to_string_pretty(&cards)
}
