//! Provides abstractions for generating embeddings from text.
//!
//! [`TextEmbedder`] is the common interface for embedding models. Embeddings
//! are vector representations of text; dishes whose vectors lie close to a
//! query vector are considered semantically related by the semantic tier.

use crate::error::EmbedError;

/// A trait for providers that can generate embeddings from text.
///
/// The `Send` and `Sync` bounds are required to allow the embedder to be used
/// in a concurrent environment.
pub trait TextEmbedder: Send + Sync {
  /// Generates an embedding vector for a given string slice.
  fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError>;

  /// Dimension of the produced vectors.
  fn dimension(&self) -> usize;

  /// Generates embeddings for a batch of string slices.
  ///
  /// The default implementation calls `embed` for each text. Implementors can
  /// override this when their model supports batching.
  fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbedError> {
    texts.iter().map(|t| self.embed(t)).collect()
  }
}

#[cfg(feature = "semantic")]
pub use ngram::NgramEmbedder;

#[cfg(feature = "semantic")]
mod ngram {
  use super::TextEmbedder;
  use crate::error::EmbedError;
  use unicode_segmentation::UnicodeSegmentation;

  /// A model-free embedder built from hashed character n-grams.
  ///
  /// Every word is padded with spaces and cut into overlapping grapheme
  /// n-grams. Each n-gram is hashed into one of `dimension` buckets with a
  /// hash-derived sign, and the resulting vector is L2-normalized. Texts that
  /// share spelling fragments (`"dumpling"`, `"dumplings"`) land close
  /// together, which is enough to rank menu entries without loading a model.
  #[derive(Debug, Clone)]
  pub struct NgramEmbedder {
    dimension: usize,
    n: usize,
  }

  impl NgramEmbedder {
    /// Creates an embedder with the given dimension and trigram features.
    pub fn new(dimension: usize) -> Self {
      Self {
        dimension: dimension.max(1),
        n: 3,
      }
    }

    /// Sets the n-gram length, at least 1.
    pub fn with_ngram(mut self, n: usize) -> Self {
      self.n = n.max(1);
      self
    }

    fn hash(gram: &str) -> u64 {
      // FNV-1a
      gram.bytes().fold(0xcbf2_9ce4_8422_2325u64, |acc, b| {
        (acc ^ b as u64).wrapping_mul(0x0100_0000_01b3)
      })
    }
  }

  impl Default for NgramEmbedder {
    /// Creates an `NgramEmbedder` with a dimension of 256.
    fn default() -> Self {
      Self::new(256)
    }
  }

  impl TextEmbedder for NgramEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
      let mut vec = vec![0.0f32; self.dimension];
      let mut features = 0usize;

      for word in text.unicode_words() {
        let padded = format!(" {} ", word.to_lowercase());
        let graphemes: Vec<&str> = padded.graphemes(true).collect();
        if graphemes.len() < self.n {
          continue;
        }

        for window in graphemes.windows(self.n) {
          let hash = Self::hash(&window.concat());
          let bucket = (hash % self.dimension as u64) as usize;
          let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
          vec[bucket] += sign;
          features += 1;
        }
      }

      if features == 0 {
        return Err(EmbedError::Empty(text.to_string()));
      }

      let norm = vec.iter().map(|v| v * v).sum::<f32>().sqrt();
      if norm > 0.0 {
        for v in &mut vec {
          *v /= norm;
        }
      }

      Ok(vec)
    }

    fn dimension(&self) -> usize {
      self.dimension
    }
  }

}
