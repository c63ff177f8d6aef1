//! Core data types for dishfinder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a dish in catalog order.
///
/// Ids are dense: the first dish of the first restaurant is `DishId(0)` and
/// ids follow document order. Every index structure refers to dishes by id,
/// so record data is owned once by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DishId(pub usize);

impl DishId {
  /// The raw position.
  pub fn index(self) -> usize {
    self.0
  }
}

impl fmt::Display for DishId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.0)
  }
}

/// A symbolic budget indicator attached to a restaurant.
///
/// Guides write this as a run of currency symbols (`€`, `€€`, ...), often
/// followed by a free-text note such as `(Budget-friendly)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
  /// One symbol.
  #[default]
  Budget,
  /// Two symbols.
  Moderate,
  /// Three symbols.
  Upscale,
  /// Four or more symbols.
  Luxury,
}

impl PriceTier {
  /// Parses a `Price Range` label by counting its leading currency symbols.
  ///
  /// Returns `None` when the label does not start with a currency symbol.
  pub fn from_label(label: &str) -> Option<Self> {
    let symbols = label
      .trim()
      .chars()
      .take_while(|c| matches!(c, '€' | '$' | '£'))
      .count();

    match symbols {
      0 => None,
      1 => Some(PriceTier::Budget),
      2 => Some(PriceTier::Moderate),
      3 => Some(PriceTier::Upscale),
      _ => Some(PriceTier::Luxury),
    }
  }

  /// The number of currency symbols this tier is written with.
  pub fn level(self) -> usize {
    match self {
      PriceTier::Budget => 1,
      PriceTier::Moderate => 2,
      PriceTier::Upscale => 3,
      PriceTier::Luxury => 4,
    }
  }
}

impl fmt::Display for PriceTier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&"€".repeat(self.level()))
  }
}

/// A single menu entry together with denormalized restaurant attributes.
///
/// Records are built by the parser and owned by their [`RestaurantRecord`];
/// everything downstream only ever sees shared references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishRecord {
  /// Whitespace-normalized display name.
  pub name: String,
  /// Raw price text, currency symbol included (`"7€"`, `"€14.50"`).
  #[serde(skip_serializing_if = "Option::is_none")]
  pub price: Option<String>,
  /// Nearest preceding category header within the restaurant section.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  pub restaurant_name: String,
  pub cuisine: String,
  pub price_tier: PriceTier,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub address: Option<String>,
}

impl DishRecord {
  /// The numeric amount of the price, if it has one.
  ///
  /// Accepts both `.` and `,` as the decimal separator and ignores the
  /// currency symbol on either side.
  pub fn price_value(&self) -> Option<f64> {
    let price = self.price.as_deref()?;
    let amount: String = price
      .chars()
      .skip_while(|c| !c.is_ascii_digit())
      .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
      .map(|c| if c == ',' { '.' } else { c })
      .collect();

    amount.trim_end_matches('.').parse().ok()
  }

  /// The text the semantic tier embeds for this dish.
  pub fn embedding_text(&self) -> String {
    format!(
      "{} {} {}",
      self.name,
      self.category.as_deref().unwrap_or_default(),
      self.cuisine
    )
  }
}

/// A restaurant section of the source document and the dishes it lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
  pub name: String,
  pub cuisine: String,
  pub price_tier: PriceTier,
  /// The `Price Range` label as written, empty when absent.
  #[serde(default)]
  pub price_range: String,
  /// Empty when the section has no address line.
  #[serde(default)]
  pub address: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub phone: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub website: Option<String>,
  /// Dishes in document order.
  pub dishes: Vec<DishRecord>,
}

/// The cascade tier that produced a match.
///
/// Declaration order is cascade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
  Exact,
  Substring,
  Fuzzy,
  Semantic,
  Keyword,
}

impl MatchTier {
  pub fn as_str(self) -> &'static str {
    match self {
      MatchTier::Exact => "exact",
      MatchTier::Substring => "substring",
      MatchTier::Fuzzy => "fuzzy",
      MatchTier::Semantic => "semantic",
      MatchTier::Keyword => "keyword",
    }
  }
}

impl fmt::Display for MatchTier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A single ranked hit returned by [`DishFinder::search`](crate::engine::DishFinder::search).
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult<'a> {
  /// Catalog position of the matched dish.
  pub id: DishId,
  /// The matched dish, borrowed from the catalog.
  pub dish: &'a DishRecord,
  /// Relevance in `[0, 1]`, higher is better.
  pub score: f32,
  /// The tier that claimed this dish.
  pub tier: MatchTier,
}

impl<'a> MatchResult<'a> {
  pub fn new(id: DishId, dish: &'a DishRecord, score: f32, tier: MatchTier) -> Self {
    Self {
      id,
      dish,
      score: score.clamp(0.0, 1.0),
      tier,
    }
  }
}

/// Defines options for controlling a search operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOptions {
  /// The number of results returned by [`find`](crate::engine::DishFinder::find).
  #[serde(default = "default_top_k")]
  pub top_k: usize,
  /// Run the substring tier between the exact and fuzzy tiers.
  #[serde(default = "default_true")]
  pub substring: bool,
  /// Score assigned to every substring hit.
  #[serde(default = "default_substring_score")]
  pub substring_score: f32,
  /// Normalized fuzzy similarity a name must exceed.
  #[serde(default = "default_fuzzy_threshold")]
  pub fuzzy_threshold: f32,
  /// Keyword overlap a dish must exceed. `0.0` keeps any dish sharing a token.
  #[serde(default)]
  pub keyword_threshold: f32,
}

/// Returns the default number of results.
fn default_top_k() -> usize {
  5
}

fn default_true() -> bool {
  true
}

fn default_substring_score() -> f32 {
  0.9
}

fn default_fuzzy_threshold() -> f32 {
  0.6
}

impl Default for SearchOptions {
  fn default() -> Self {
    Self {
      top_k: default_top_k(),
      substring: true,
      substring_score: default_substring_score(),
      fuzzy_threshold: default_fuzzy_threshold(),
      keyword_threshold: 0.0,
    }
  }
}

impl SearchOptions {
  /// Sets the default result count.
  pub fn top_k(mut self, top_k: usize) -> Self {
    self.top_k = top_k;
    self
  }

  /// Enables or disables the substring tier.
  pub fn substring(mut self, enabled: bool) -> Self {
    self.substring = enabled;
    self
  }

  /// Sets the fuzzy similarity threshold.
  pub fn fuzzy_threshold(mut self, threshold: f32) -> Self {
    self.fuzzy_threshold = threshold;
    self
  }

  /// Sets the keyword overlap threshold.
  pub fn keyword_threshold(mut self, threshold: f32) -> Self {
    self.keyword_threshold = threshold;
    self
  }
}
