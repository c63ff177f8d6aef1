//! Dishfinder - a restaurant guide parser and tiered dish search engine.
//!
//! Dishfinder turns a loosely formatted restaurant guide into a catalog of
//! dish records and answers free-text queries with a ranked list of dishes.
//! Queries run through a fixed cascade of matching tiers: exact name,
//! substring, fuzzy, semantic and keyword overlap.

pub mod types;
pub mod error;
pub mod parser;
pub mod catalog;
pub mod index;
pub mod embeddings;
pub mod context;
pub mod searcher;
pub mod searchers;
pub mod engine;
pub mod config;
pub mod render;

pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::types::*;
    pub use crate::error::*;
    pub use crate::parser::{DishMatcher, DocumentParser, ParserConfig};
    pub use crate::catalog::Catalog;
    pub use crate::index::*;
    pub use crate::embeddings::*;
    pub use crate::searcher::*;
    pub use crate::searchers::*;
    pub use crate::engine::*;
    pub use crate::config::FinderConfig;
}
