//! Embedding index backends.

use crate::catalog::Catalog;
use crate::embeddings::TextEmbedder;
use crate::error::EmbedError;
use crate::index::adapter::EmbeddingIndex;
use crate::types::DishId;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The absent backend: encodes nothing and finds nothing.
///
/// With this index the semantic tier is inert and the cascade behaves exactly
/// as if the tier did not exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEmbeddings;

impl EmbeddingIndex for NoEmbeddings {
  fn encode(&self, _text: &str) -> Result<Vec<f32>, EmbedError> {
    Ok(Vec::new())
  }

  fn nearest_neighbors(&self, _vector: &[f32], _k: usize) -> Vec<(DishId, f32)> {
    Vec::new()
  }

  fn len(&self) -> usize {
    0
  }
}

/// In-memory vector index with brute-force Euclidean search.
///
/// Holds one vector per dish, indexed by [`DishId`], computed once from
/// [`DishRecord::embedding_text`](crate::types::DishRecord::embedding_text).
pub struct FlatVectorIndex<E: TextEmbedder> {
  embedder: E,
  vectors: Vec<Vec<f32>>,
}

impl<E: TextEmbedder> FlatVectorIndex<E> {
  /// Embeds every dish of `catalog`.
  pub fn build(embedder: E, catalog: &Catalog) -> Result<Self, EmbedError> {
    let texts: Vec<String> = catalog.dishes().map(|(_, d)| d.embedding_text()).collect();
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
    let vectors = embedder.embed_batch(&refs)?;
    Self::from_vectors(embedder, vectors)
  }

  /// Wraps pre-computed vectors; position `i` belongs to `DishId(i)`.
  pub fn from_vectors(embedder: E, vectors: Vec<Vec<f32>>) -> Result<Self, EmbedError> {
    let expected = embedder.dimension();
    if let Some(bad) = vectors.iter().find(|v| v.len() != expected) {
      return Err(EmbedError::Dimension {
        expected,
        actual: bad.len(),
      });
    }

    debug!(vectors = vectors.len(), dimension = expected, "vector index built");
    Ok(Self { embedder, vectors })
  }

  pub fn embedder(&self) -> &E {
    &self.embedder
  }
}

impl<E: TextEmbedder> EmbeddingIndex for FlatVectorIndex<E> {
  fn encode(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
    self.embedder.embed(text)
  }

  fn nearest_neighbors(&self, vector: &[f32], k: usize) -> Vec<(DishId, f32)> {
    if k == 0 || vector.is_empty() {
      return Vec::new();
    }

    #[cfg(feature = "parallel")]
    let iter = self.vectors.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = self.vectors.iter();

    let mut distances: Vec<(DishId, f32)> = iter
      .enumerate()
      .map(|(id, v)| (DishId(id), euclidean_distance(vector, v)))
      .collect();

    // Stable, so equal distances keep catalog order.
    distances.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    distances.truncate(k);
    distances
  }

  fn len(&self) -> usize {
    self.vectors.len()
  }
}

/// Calculate Euclidean distance between two vectors.
fn euclidean_distance(a: &[f32], b: &[f32]) -> f32 {
  if a.len() != b.len() {
    return f32::INFINITY;
  }

  a.iter()
    .zip(b.iter())
    .map(|(x, y)| (x - y).powi(2))
    .sum::<f32>()
    .sqrt()
}
