//! The parsed corpus: restaurants, their dishes, and the lookup index.

use crate::error::{CatalogError, Result};
use crate::index::CatalogIndex;
use crate::parser::{DocumentParser, ParserConfig};
use crate::types::{DishId, DishRecord, RestaurantRecord};
use std::path::Path;
use tracing::info;

/// Owns every record parsed from one document plus the index built over them.
///
/// Dishes are addressed by [`DishId`], their position in document order.
/// A catalog is immutable once built, so it can be shared freely between
/// concurrent searches.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
  restaurants: Vec<RestaurantRecord>,
  /// `DishId -> (restaurant position, dish position)`.
  locations: Vec<(usize, usize)>,
  index: CatalogIndex,
}

impl Catalog {
  /// Builds a catalog from already-parsed restaurants.
  pub fn from_restaurants(restaurants: Vec<RestaurantRecord>) -> Self {
    let locations: Vec<(usize, usize)> = restaurants
      .iter()
      .enumerate()
      .flat_map(|(r, restaurant)| (0..restaurant.dishes.len()).map(move |d| (r, d)))
      .collect();

    let mut catalog = Self {
      restaurants,
      locations,
      index: CatalogIndex::default(),
    };
    catalog.index = CatalogIndex::build(catalog.dishes());

    info!(
      restaurants = catalog.restaurants.len(),
      dishes = catalog.len(),
      names = catalog.index.len(),
      "catalog built"
    );

    catalog
  }

  /// Parses `document` with `parser` and indexes the result.
  pub fn parse_with(parser: &DocumentParser, document: &str) -> Self {
    Self::from_restaurants(parser.parse(document))
  }

  /// Parses and indexes a document with the given parser settings.
  pub fn from_document(document: &str, config: &ParserConfig) -> Result<Self> {
    let parser = DocumentParser::new(config.clone())?;
    Ok(Self::parse_with(&parser, document))
  }

  /// Reads, parses and indexes a document from disk.
  ///
  /// An unreadable file is a [`CatalogError::Io`]; a readable file with no
  /// restaurant sections is an empty catalog.
  pub fn load(path: impl AsRef<Path>, config: &ParserConfig) -> Result<Self> {
    let path = path.as_ref();
    let document = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_document(&document, config)
  }

  pub fn restaurants(&self) -> &[RestaurantRecord] {
    &self.restaurants
  }

  /// All dishes in document order.
  pub fn dishes(&self) -> impl Iterator<Item = (DishId, &DishRecord)> + '_ {
    self
      .locations
      .iter()
      .enumerate()
      .map(|(id, &(r, d))| (DishId(id), &self.restaurants[r].dishes[d]))
  }

  pub fn dish(&self, id: DishId) -> Option<&DishRecord> {
    let &(r, d) = self.locations.get(id.index())?;
    self.restaurants.get(r)?.dishes.get(d)
  }

  /// The restaurant that lists the dish.
  pub fn restaurant_of(&self, id: DishId) -> Option<&RestaurantRecord> {
    let &(r, _) = self.locations.get(id.index())?;
    self.restaurants.get(r)
  }

  pub fn index(&self) -> &CatalogIndex {
    &self.index
  }

  /// Number of dishes.
  pub fn len(&self) -> usize {
    self.locations.len()
  }

  pub fn is_empty(&self) -> bool {
    self.locations.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const DOC: &str = "\
# Guide

## 1. Thong Thai
**Cuisine:** Thai
- Pad Thai - 7€
- Tom Yam Gai - 3€

## 2. Pak Choi
**Cuisine:** Chinese
- Mapo Tofu - 10€
";

  #[test]
  fn test_dish_ids_follow_document_order() {
    let catalog = Catalog::from_document(DOC, &ParserConfig::default()).unwrap();
    let names: Vec<_> = catalog.dishes().map(|(_, d)| d.name.as_str()).collect();
    assert_eq!(names, vec!["Pad Thai", "Tom Yam Gai", "Mapo Tofu"]);
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.dish(DishId(2)).unwrap().name, "Mapo Tofu");
    assert_eq!(catalog.restaurant_of(DishId(2)).unwrap().name, "Pak Choi");
    assert!(catalog.dish(DishId(3)).is_none());
  }

  #[test]
  fn test_every_dish_is_in_the_exact_map_once() {
    let catalog = Catalog::from_document(DOC, &ParserConfig::default()).unwrap();
    for (id, dish) in catalog.dishes() {
      let hits = catalog.index().exact(&dish.name.to_lowercase());
      assert_eq!(hits.iter().filter(|&&h| h == id).count(), 1);
    }
  }

  #[test]
  fn test_empty_document_gives_empty_catalog() {
    let catalog = Catalog::from_document("", &ParserConfig::default()).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.restaurants().is_empty());
    assert!(catalog.index().is_empty());
  }

  #[test]
  fn test_missing_file_is_an_io_error() {
    let err = Catalog::load("/definitely/not/here.md", &ParserConfig::default()).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
  }
}
