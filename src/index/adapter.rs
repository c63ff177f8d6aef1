//! Defines the `EmbeddingIndex` trait for pluggable vector backends.

use crate::error::EmbedError;
use crate::types::DishId;

/// A trait that defines the common interface for a dish vector index.
///
/// `EmbeddingIndex` abstracts over how query text is turned into a vector and
/// how the nearest dish vectors are found. The semantic tier is written only
/// against this trait, so swapping [`NoEmbeddings`](crate::index::NoEmbeddings)
/// for a real backend changes nothing else in the cascade.
///
/// The `Send` and `Sync` bounds are required to allow the index to be safely
/// shared across threads.
pub trait EmbeddingIndex: Send + Sync {
  /// Encodes query text into the vector space of the index.
  ///
  /// An empty vector means "no representation"; the semantic tier then
  /// contributes nothing.
  fn encode(&self, text: &str) -> Result<Vec<f32>, EmbedError>;

  /// Performs a k-nearest neighbors (k-NN) search.
  ///
  /// # Returns
  ///
  /// Up to `k` `(dish, distance)` pairs ordered by ascending distance.
  fn nearest_neighbors(&self, vector: &[f32], k: usize) -> Vec<(DishId, f32)>;

  /// Number of vectors held.
  fn len(&self) -> usize;

  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl<T: EmbeddingIndex + ?Sized> EmbeddingIndex for Box<T> {
  fn encode(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
    (**self).encode(text)
  }

  fn nearest_neighbors(&self, vector: &[f32], k: usize) -> Vec<(DishId, f32)> {
    (**self).nearest_neighbors(vector, k)
  }

  fn len(&self) -> usize {
    (**self).len()
  }
}
