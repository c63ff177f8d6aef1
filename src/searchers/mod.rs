//! The built-in cascade tiers.
//!
//! Each tier is a [`TierSearcher`](crate::searcher::TierSearcher) that can be
//! exercised on its own; the [`DishFinder`](crate::engine::DishFinder) chains
//! them in a fixed order.
//!
//! # Available Tiers
//!
//! - [`ExactSearch`]: lower-cased query equals the dish name. Score `1.0`.
//! - [`SubstringSearch`]: query inside the name or name inside the query.
//! - [`FuzzySearch`]: edit-distance style similarity through a [`FuzzyMatcher`].
//! - [`SemanticSearch`]: nearest dish vectors through an
//!   [`EmbeddingIndex`](crate::index::EmbeddingIndex).
//! - [`KeywordSearch`]: token overlap ratio, the last resort.

/// Implements the exact-name tier.
pub mod exact;
/// Implements the fuzzy (approximate) name tier.
pub mod fuzzy;
/// Implements the token overlap tier.
pub mod keyword;
/// Implements the vector similarity tier.
pub mod semantic;
/// Implements the substring tier.
pub mod substring;
/// Provides text tokenization utilities for tiers and the index.
pub mod tokenizer;

pub use exact::ExactSearch;
#[cfg(feature = "fuzzy")]
pub use fuzzy::{FuzzyAlgorithm, StrsimMatcher};
pub use fuzzy::{FuzzyMatcher, FuzzySearch};
pub use keyword::KeywordSearch;
pub use semantic::SemanticSearch;
pub use substring::SubstringSearch;
