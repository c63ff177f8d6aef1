//! Lookup structures: the catalog index and embedding backends.

pub mod adapter;
pub mod catalog;
pub mod vector;

pub use adapter::EmbeddingIndex;
pub use catalog::CatalogIndex;
pub use vector::{FlatVectorIndex, NoEmbeddings};
