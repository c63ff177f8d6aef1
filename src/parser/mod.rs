//! Document parser: turns a restaurant guide into restaurant and dish records.
//!
//! A guide is a loosely formatted text document. Each restaurant starts with a
//! numbered level-two heading (`## 3. Zenzakan ⭐⭐⭐⭐`); anything before the
//! first heading is front matter and ignored. Inside a section the parser looks
//! for three kinds of lines:
//!
//! - labeled fields, `**Cuisine:** Thai`, `**Price Range:** €€`, ...
//! - bolded category headers, `**Soups:**`, which apply to the dishes below
//! - dish lines, recognized by the ordered [`DishMatcher`] list
//!
//! Parsing never fails on content. A line that cannot be understood is
//! skipped and a section without a usable name is dropped.

pub mod matchers;

use crate::error::{CatalogError, Result};
use crate::types::{DishRecord, PriceTier, RestaurantRecord};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use matchers::{clean_name, default_matchers, DishCapture, DishMatcher};

/// Options controlling extraction policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
  /// Keep restaurants whose section yielded no dishes.
  #[serde(default)]
  pub keep_empty_restaurants: bool,
  /// Cuisine used when a section has no `Cuisine` field.
  #[serde(default = "default_cuisine")]
  pub default_cuisine: String,
  /// Price tier used when a section has no parseable `Price Range` field.
  #[serde(default)]
  pub default_price_tier: PriceTier,
  /// Dish names shorter than this many characters are dropped.
  #[serde(default = "default_min_name_len")]
  pub min_name_len: usize,
  /// Names that are never dishes, compared case-insensitively.
  #[serde(default = "default_stop_words")]
  pub stop_words: Vec<String>,
}

fn default_cuisine() -> String {
  "Asian".to_string()
}

fn default_min_name_len() -> usize {
  3
}

fn default_stop_words() -> Vec<String> {
  ["menu", "about", "hours", "note"]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

impl Default for ParserConfig {
  fn default() -> Self {
    Self {
      keep_empty_restaurants: false,
      default_cuisine: default_cuisine(),
      default_price_tier: PriceTier::default(),
      min_name_len: default_min_name_len(),
      stop_words: default_stop_words(),
    }
  }
}

impl ParserConfig {
  /// Keep or drop dish-less restaurants.
  pub fn keep_empty_restaurants(mut self, keep: bool) -> Self {
    self.keep_empty_restaurants = keep;
    self
  }

  /// Sets the fallback cuisine.
  pub fn default_cuisine(mut self, cuisine: impl Into<String>) -> Self {
    self.default_cuisine = cuisine.into();
    self
  }

  /// Sets the fallback price tier.
  pub fn default_price_tier(mut self, tier: PriceTier) -> Self {
    self.default_price_tier = tier;
    self
  }
}

/// Why a captured dish name was thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
  TooShort,
  Url,
  StopWord,
}

/// The labeled fields a section may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
  Cuisine,
  PriceRange,
  Address,
  Phone,
  Website,
}

impl Field {
  fn from_label(label: &str) -> Option<Self> {
    match label.to_lowercase().as_str() {
      "cuisine" => Some(Field::Cuisine),
      "price range" => Some(Field::PriceRange),
      "address" => Some(Field::Address),
      "phone" => Some(Field::Phone),
      "website" => Some(Field::Website),
      _ => None,
    }
  }
}

#[derive(Debug, Default)]
struct SectionFields {
  cuisine: Option<String>,
  price_range: Option<String>,
  address: Option<String>,
  phone: Option<String>,
  website: Option<String>,
}

impl SectionFields {
  /// First occurrence of a field wins.
  fn set(&mut self, field: Field, value: &str) {
    let value = value.trim();
    if value.is_empty() {
      return;
    }
    let slot = match field {
      Field::Cuisine => &mut self.cuisine,
      Field::PriceRange => &mut self.price_range,
      Field::Address => &mut self.address,
      Field::Phone => &mut self.phone,
      Field::Website => &mut self.website,
    };
    if slot.is_none() {
      *slot = Some(value.to_string());
    }
  }
}

/// Parser for restaurant guide documents.
///
/// Construct once and reuse; all patterns are compiled up front.
#[derive(Debug, Clone)]
pub struct DocumentParser {
  config: ParserConfig,
  section_marker: Regex,
  field_line: Regex,
  category_header: Regex,
  matchers: Vec<DishMatcher>,
}

impl DocumentParser {
  /// Creates a parser with the built-in dish matchers.
  pub fn new(config: ParserConfig) -> Result<Self> {
    Self::with_matchers(config, default_matchers()?)
  }

  /// Creates a parser with a caller-supplied matcher list, tried in order.
  pub fn with_matchers(config: ParserConfig, matchers: Vec<DishMatcher>) -> Result<Self> {
    Ok(Self {
      config,
      section_marker: compile(r"(?m)^##[ \t]+\d+\.")?,
      field_line: compile(r"(?i)^\s*\*\*(Cuisine|Price Range|Address|Phone|Website):\*\*\s*(.*)$")?,
      category_header: compile(r"^\s*\*\*([^*:]+).*:\*\*")?,
      matchers,
    })
  }

  pub fn config(&self) -> &ParserConfig {
    &self.config
  }

  pub fn matchers(&self) -> &[DishMatcher] {
    &self.matchers
  }

  /// Parses a whole document into restaurants in document order.
  pub fn parse(&self, document: &str) -> Vec<RestaurantRecord> {
    let starts: Vec<(usize, usize)> = self
      .section_marker
      .find_iter(document)
      .map(|m| (m.start(), m.end()))
      .collect();

    let mut restaurants = Vec::with_capacity(starts.len());
    for (i, &(_, body_start)) in starts.iter().enumerate() {
      let body_end = starts.get(i + 1).map_or(document.len(), |&(next, _)| next);
      let Some(restaurant) = self.parse_section(&document[body_start..body_end]) else {
        continue;
      };

      if restaurant.dishes.is_empty() && !self.config.keep_empty_restaurants {
        debug!(restaurant = %restaurant.name, "dropping restaurant without dishes");
        continue;
      }
      restaurants.push(restaurant);
    }

    restaurants
  }

  /// Parses one section body (the text after the numbered heading marker).
  fn parse_section(&self, section: &str) -> Option<RestaurantRecord> {
    let mut lines = section.lines().skip_while(|line| line.trim().is_empty());
    let heading = lines.next()?;
    let name = restaurant_name(heading);
    if name.is_empty() {
      debug!(heading, "skipping section without a name");
      return None;
    }

    let body: Vec<&str> = lines.collect();

    let mut fields = SectionFields::default();
    for line in &body {
      if let Some((field, value)) = self.field(line) {
        fields.set(field, value);
      }
    }

    let price_range = fields.price_range.unwrap_or_default();
    let mut restaurant = RestaurantRecord {
      cuisine: fields
        .cuisine
        .unwrap_or_else(|| self.config.default_cuisine.clone()),
      price_tier: PriceTier::from_label(&price_range).unwrap_or(self.config.default_price_tier),
      price_range,
      address: fields.address.unwrap_or_default(),
      phone: fields.phone,
      website: fields.website,
      name,
      dishes: Vec::new(),
    };

    restaurant.dishes = self.extract_dishes(&body, &restaurant);
    debug!(
      restaurant = %restaurant.name,
      dishes = restaurant.dishes.len(),
      "parsed section"
    );

    Some(restaurant)
  }

  fn extract_dishes(&self, lines: &[&str], restaurant: &RestaurantRecord) -> Vec<DishRecord> {
    let mut dishes = Vec::new();
    let mut category: Option<String> = None;

    for line in lines {
      if line.trim().is_empty() || self.field(line).is_some() {
        continue;
      }

      let Some(capture) = self.first_match(line) else {
        if let Some(header) = self.category(line) {
          category = Some(header);
        }
        continue;
      };

      let name = clean_name(&capture.name);
      if let Some(reason) = self.rejection(&name) {
        debug!(line, matcher = capture.matcher, ?reason, "rejected dish line");
        continue;
      }

      dishes.push(DishRecord {
        name,
        price: capture.price,
        category: category.clone(),
        restaurant_name: restaurant.name.clone(),
        cuisine: restaurant.cuisine.clone(),
        price_tier: restaurant.price_tier,
        address: Some(restaurant.address.clone()).filter(|a| !a.is_empty()),
      });
    }

    dishes
  }

  /// Runs the matchers in order; the first capture wins.
  pub fn first_match(&self, line: &str) -> Option<DishCapture> {
    self.matchers.iter().find_map(|m| m.capture(line))
  }

  /// Applies the rejection rules to a cleaned name.
  pub fn rejection(&self, name: &str) -> Option<Rejection> {
    if name.chars().count() < self.config.min_name_len {
      return Some(Rejection::TooShort);
    }

    let lower = name.to_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("www.") {
      return Some(Rejection::Url);
    }
    if self.config.stop_words.iter().any(|w| w.eq_ignore_ascii_case(&lower)) {
      return Some(Rejection::StopWord);
    }

    None
  }

  fn field<'l>(&self, line: &'l str) -> Option<(Field, &'l str)> {
    let caps = self.field_line.captures(line)?;
    let field = Field::from_label(caps.get(1)?.as_str())?;
    Some((field, caps.get(2).map_or("", |m| m.as_str())))
  }

  fn category(&self, line: &str) -> Option<String> {
    let caps = self.category_header.captures(line)?;
    let header = caps.get(1)?.as_str().trim();
    if header.is_empty() {
      None
    } else {
      Some(header.to_string())
    }
  }
}

fn compile(pattern: &str) -> Result<Regex> {
  Regex::new(pattern).map_err(|e| CatalogError::InvalidPattern(e.to_string()))
}

/// Extracts a display name from a section heading line.
///
/// Cuts at the first rating symbol, then strips trailing parenthetical and
/// numeric noise (`(4.5)`, `4.5/5`) and surrounding markup.
pub fn restaurant_name(heading: &str) -> String {
  let cut = heading
    .find(['⭐', '★', '☆'])
    .map_or(heading, |pos| &heading[..pos]);

  let mut name = cut.trim_matches(|c: char| c.is_whitespace() || matches!(c, '*' | '#'));
  loop {
    let before = name.len();

    if name.ends_with(')') {
      if let Some(open) = name.rfind('(') {
        name = &name[..open];
      }
    }
    name = name.trim_end_matches(|c: char| c.is_ascii_digit() || matches!(c, '.' | '/' | ','));
    name = name.trim_matches(|c: char| c.is_whitespace() || matches!(c, '*' | '#' | '-' | '–'));

    if name.len() == before {
      break;
    }
  }

  name.to_string()
}
