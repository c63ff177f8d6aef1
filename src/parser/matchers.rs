//! Line-level dish matchers.
//!
//! Menus in the wild mix several "name - price" conventions: trailing or
//! leading euro signs, ASCII dashes and en dashes, bullets, bolded names,
//! parenthetical descriptions. Each convention is a named [`DishMatcher`].
//! The parser tries matchers in list order and the first one that captures a
//! line decides it. A capture that is later rejected does not fall through to
//! the next matcher.

use crate::error::{CatalogError, Result};
use regex::Regex;

/// Raw name and price captured from a single line, before cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishCapture {
  /// Name of the matcher that produced this capture.
  pub matcher: &'static str,
  pub name: String,
  pub price: Option<String>,
}

/// A named line pattern with a name group and an optional price group.
#[derive(Debug, Clone)]
pub struct DishMatcher {
  name: &'static str,
  pattern: Regex,
}

impl DishMatcher {
  /// Compiles a matcher. The pattern's first group is the dish name and its
  /// second group, if present, the price.
  pub fn new(name: &'static str, pattern: &str) -> Result<Self> {
    let pattern = Regex::new(pattern)
      .map_err(|e| CatalogError::InvalidPattern(format!("{name}: {e}")))?;
    Ok(Self { name, pattern })
  }

  pub fn name(&self) -> &'static str {
    self.name
  }

  /// Attempts to capture a dish from `line`.
  pub fn capture(&self, line: &str) -> Option<DishCapture> {
    let caps = self.pattern.captures(line)?;
    let name = caps.get(1)?.as_str().to_string();
    let price = caps
      .get(2)
      .map(|m| m.as_str().trim().to_string())
      .filter(|p| !p.is_empty());

    Some(DishCapture {
      matcher: self.name,
      name,
      price,
    })
  }
}

/// The built-in matchers, most specific first.
pub fn default_matchers() -> Result<Vec<DishMatcher>> {
  Ok(vec![
    // - Pad Thai - 7€
    DishMatcher::new(
      "dash_price",
      r"-\s+([^-€\n]+?)\s*[-–]\s*(€?\d+(?:[.,]\d+)?€?)",
    )?,
    // - Pad Thai €7.50
    DishMatcher::new("euro_prefix", r"-\s+([^€\n]+?)\s+(€\d+(?:[.,]\d+)?)")?,
    // - Bento Box (€ set) - 12€
    DishMatcher::new("spaced_dash", r"-\s+([A-Za-z][^-\n]{2,}?)\s+-\s+(\d+€)")?,
    // - Gai-Phad-Gra-Prau (Basil) - 7€
    DishMatcher::new(
      "parenthetical",
      r"-\s+([^(\n]+(?:\([^)\n]+\))?)\s*[-–]\s*(€?\d+(?:[.,]\d+)?€?)",
    )?,
    // **Omakase** chef's choice 65€
    DishMatcher::new("bold_item", r"\*\*([^*]+)\*\*.*?(\d+(?:[.,]\d+)?€)")?,
    // • Spring Rolls - 4€
    DishMatcher::new(
      "bullet",
      r"•\s+([^-€\n]+?)\s*[-–]\s*(€?\d+(?:[.,]\d+)?€?)",
    )?,
    // Spring Rolls - 4€
    DishMatcher::new(
      "bare",
      r"([A-Za-z][A-Za-z\s]+)\s*[-–]\s*(€?\d+(?:[.,]\d+)?€?)",
    )?,
  ])
}

/// Normalizes a captured dish name.
///
/// Runs of whitespace collapse to a single space; leading and trailing dashes,
/// asterisks, bullets and colons are trimmed, as are parentheses left dangling at
/// either end by the capture.
pub fn clean_name(raw: &str) -> String {
  let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
  let mut name = collapsed.as_str();

  loop {
    let trimmed = name
      .trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | '–' | '*' | '•' | ':'));
    let trimmed = strip_dangling_paren(trimmed);
    if trimmed.len() == name.len() {
      break;
    }
    name = trimmed;
  }

  name.to_string()
}

fn strip_dangling_paren(s: &str) -> &str {
  let opens = s.matches('(').count();
  let closes = s.matches(')').count();

  if closes > opens {
    if let Some(rest) = s.strip_suffix(')').or_else(|| s.strip_prefix(')')) {
      return rest;
    }
  }
  if opens > closes {
    if let Some(rest) = s.strip_suffix('(').or_else(|| s.strip_prefix('(')) {
      return rest;
    }
  }
  s
}
