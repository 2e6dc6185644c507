//! Similarity engine for content-based recommendations
//!
//! The engine is a pure function of (catalog, query, count): every call
//! builds the weight matrix from the catalog it is handed, unless a
//! [`MatrixCache`] is supplied, in which case the matrix is reused for as
//! long as the catalog fingerprint is unchanged.

mod cache;
mod tfidf;

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

pub use cache::MatrixCache;
pub use tfidf::{SparseRow, Vectorizer, Vocabulary, WeightMatrix};

use crate::catalog::{Catalog, ItemSummary};
use crate::text::TokenizerOptions;
use crate::trace_time;

/// Cosine similarity between two sparse rows.
///
/// Rows must be sorted by column. Returns 0.0 when either row has zero
/// magnitude.
pub fn cosine_similarity(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let norm_a = a.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let (mut i, mut j) = (0, 0);
    let mut dot = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Similarity of one query row against every row, in catalog order
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityRow {
    /// Row index of the query item
    pub query: usize,
    /// One score per catalog item, including the query itself
    pub scores: Vec<f64>,
}

impl SimilarityRow {
    /// Other rows ordered by descending score.
    ///
    /// The sort is stable, so equal scores keep catalog order. The query row
    /// is removed by index, not by position, so it never appears even when
    /// another item ties with it at 1.0 and sorts ahead of it.
    pub fn ranked(&self) -> Vec<(usize, f64)> {
        let mut ranked: Vec<(usize, f64)> = self
            .scores
            .iter()
            .copied()
            .enumerate()
            .filter(|&(idx, _)| idx != self.query)
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

/// A recommended item with its similarity to the query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItem {
    #[serde(flatten)]
    pub item: ItemSummary,
    pub score: f64,
}

/// Similarity Engine over a borrowed catalog
pub struct SimilarityEngine<'a> {
    catalog: &'a Catalog,
    matrix: Arc<WeightMatrix>,
}

impl<'a> SimilarityEngine<'a> {
    /// Build the weight matrix for this catalog from scratch
    pub fn new(catalog: &'a Catalog, options: TokenizerOptions) -> Self {
        let matrix = Vectorizer::new(options).fit_transform(catalog.tags());
        SimilarityEngine {
            catalog,
            matrix: Arc::new(matrix),
        }
    }

    /// Reuse a cached weight matrix when the catalog is unchanged
    pub fn with_cache(catalog: &'a Catalog, options: TokenizerOptions, cache: &MatrixCache) -> Self {
        let matrix = cache.get_or_build(catalog, &Vectorizer::new(options));
        SimilarityEngine { catalog, matrix }
    }

    pub fn matrix(&self) -> &WeightMatrix {
        &self.matrix
    }

    /// Cosine similarity of the named item against every catalog row
    pub fn similarity_row(&self, item_name: &str) -> Option<SimilarityRow> {
        let query = self.catalog.position(item_name)?;
        let query_row = self.matrix.row(query)?;
        let scores = self
            .matrix
            .iter_rows()
            .map(|row| cosine_similarity(query_row, row))
            .collect();
        Some(SimilarityRow { query, scores })
    }

    /// Similarity between two named items (first match for each name)
    pub fn score(&self, name_a: &str, name_b: &str) -> Option<f64> {
        let a = self.matrix.row(self.catalog.position(name_a)?)?;
        let b = self.matrix.row(self.catalog.position(name_b)?)?;
        Some(cosine_similarity(a, b))
    }

    /// Top `top_n` most similar items with their scores.
    ///
    /// Empty when the item is unknown, the catalog has fewer than two items,
    /// or `top_n` is zero.
    pub fn recommend_scored(&self, item_name: &str, top_n: usize) -> Vec<ScoredItem> {
        let start = Instant::now();

        let (results, outcome) = self.rank(item_name, top_n);

        debug!(
            item_name,
            top_n,
            result_count = results.len(),
            outcome,
            "recommend"
        );
        trace_time!(start, "recommend", outcome = outcome);
        results
    }

    fn rank(&self, item_name: &str, top_n: usize) -> (Vec<ScoredItem>, &'static str) {
        if top_n == 0 {
            return (Vec::new(), "zero_count");
        }
        if self.catalog.len() < 2 {
            return (Vec::new(), "catalog_too_small");
        }
        let Some(row) = self.similarity_row(item_name) else {
            return (Vec::new(), "not_found");
        };

        let results = row
            .ranked()
            .into_iter()
            .take(top_n)
            .filter_map(|(idx, score)| {
                self.catalog.get(idx).map(|item| ScoredItem {
                    item: item.summary(),
                    score,
                })
            })
            .collect();
        (results, "ranked")
    }

    /// Top `top_n` most similar items, projected to display fields
    pub fn recommend(&self, item_name: &str, top_n: usize) -> Vec<ItemSummary> {
        self.recommend_scored(item_name, top_n)
            .into_iter()
            .map(|scored| scored.item)
            .collect()
    }
}

/// Recommend up to `top_n` items similar to `item_name` with default options
pub fn recommend(catalog: &Catalog, item_name: &str, top_n: usize) -> Vec<ItemSummary> {
    if catalog.len() < 2 || top_n == 0 || catalog.position(item_name).is_none() {
        return Vec::new();
    }
    SimilarityEngine::new(catalog, TokenizerOptions::default()).recommend(item_name, top_n)
}

/// Clamp a signed result count; non-positive counts mean no results
pub fn clamp_count(count: i64) -> usize {
    usize::try_from(count).unwrap_or(0)
}
