//! Text tokenization utilities.

use std::collections::HashSet;

/// Minimum token length, in characters, for keyword indexing.
pub const MIN_TOKEN_LEN: usize = 3;

/// Lower-cases and trims a query the way every tier expects it.
pub fn normalize_query(text: &str) -> String {
  text.trim().to_lowercase()
}

/// Tokenize text into lower-cased alphanumeric words of at least
/// [`MIN_TOKEN_LEN`] characters.
///
/// Any non-alphanumeric character is a boundary, so `"Gai-Phad-Gra"` yields
/// `gai`, `phad`, `gra`. Tokens keep document order and may repeat.
pub fn tokenize(text: &str) -> Vec<String> {
  text
    .to_lowercase()
    .split(|c: char| !c.is_alphanumeric())
    .filter(|word| word.chars().count() >= MIN_TOKEN_LEN)
    .map(str::to_string)
    .collect()
}

/// The distinct tokens of a text.
pub fn token_set(text: &str) -> HashSet<String> {
  tokenize(text).into_iter().collect()
}

/// Overlap ratio between two token sets:
/// `|a ∩ b| / max(|a|, |b|)`, or `0.0` when either set is empty.
pub fn overlap_ratio(a: &HashSet<String>, b: &HashSet<String>) -> f32 {
  let denominator = a.len().max(b.len());
  if a.is_empty() || b.is_empty() {
    return 0.0;
  }

  let shared = a.intersection(b).count();
  shared as f32 / denominator as f32
}

#[cfg(test)]
mod tests {
  use super::*;

  fn set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
  }

  #[test]
  fn test_tokenize() {
    let tokens = tokenize("Pho Bo (Beef noodle soup) - 14€");
    assert_eq!(tokens, vec!["pho", "beef", "noodle", "soup"]);
  }

  #[test]
  fn test_tokenize_splits_on_dashes_and_keeps_unicode() {
    assert_eq!(tokenize("Gai-Phad-Gra-Prau"), vec!["gai", "phad", "gra", "prau"]);
    assert_eq!(tokenize("Góc Phố"), vec!["góc", "phố"]);
  }

  #[test]
  fn test_normalize_query() {
    assert_eq!(normalize_query("  Pad THAI \n"), "pad thai");
  }

  #[test]
  fn test_overlap_ratio() {
    let query = set(&["green", "curry"]);
    let dish = set(&["thai", "green", "curry"]);
    let ratio = overlap_ratio(&query, &dish);
    assert!((ratio - 2.0 / 3.0).abs() < 1e-6);
    assert_eq!(overlap_ratio(&dish, &query), ratio);
    assert_eq!(overlap_ratio(&set(&[]), &dish), 0.0);
    assert_eq!(overlap_ratio(&set(&["padthai"]), &set(&["pad", "thai"])), 0.0);
  }
}
