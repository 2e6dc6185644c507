//! Tagmatch Core Library
//!
//! Content-based similarity engine: turns catalog tag strings into TF-IDF
//! vectors and ranks items by cosine similarity to a query item.

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod records;
pub mod similarity;
pub mod text;

pub use catalog::{Catalog, Item, ItemSummary};
pub use similarity::{recommend, SimilarityEngine};
