//! Weight-matrix cache keyed by catalog fingerprint
//!
//! Holds at most one matrix. A lookup with a different catalog or different
//! tokenizer options rebuilds and replaces it, so a reloaded catalog never
//! sees a stale matrix.

use std::sync::{Arc, RwLock};

use tracing::debug;

use super::tfidf::{Vectorizer, WeightMatrix};
use crate::catalog::Catalog;
use crate::log_resource_metrics;
use crate::logging::ResourceMetrics;

#[derive(Debug)]
struct CachedMatrix {
    key: String,
    matrix: Arc<WeightMatrix>,
}

/// Single-slot cache shared across requests
#[derive(Debug, Default)]
pub struct MatrixCache {
    slot: RwLock<Option<CachedMatrix>>,
    metrics: ResourceMetrics,
}

impl MatrixCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metrics(&self) -> &ResourceMetrics {
        &self.metrics
    }

    /// Return the cached matrix for this catalog, building it on a miss
    pub fn get_or_build(&self, catalog: &Catalog, vectorizer: &Vectorizer) -> Arc<WeightMatrix> {
        let options = vectorizer.options();
        let key = format!(
            "{}:{}:{}",
            catalog.fingerprint(),
            options.stop_words,
            options.stemming
        );

        {
            let slot = self.slot.read().unwrap_or_else(|e| e.into_inner());
            if let Some(cached) = slot.as_ref().filter(|c| c.key == key) {
                self.metrics.record_cache_hit();
                log_resource_metrics!(self.metrics, "matrix_cache");
                return Arc::clone(&cached.matrix);
            }
        }

        self.metrics.record_cache_miss();
        let matrix = Arc::new(vectorizer.fit_transform(catalog.tags()));
        self.metrics.record_allocation(matrix.approx_bytes());
        debug!(key = %key, rows = matrix.rows(), "matrix_cache_store");
        log_resource_metrics!(self.metrics, "matrix_cache");

        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(CachedMatrix {
            key,
            matrix: Arc::clone(&matrix),
        });
        matrix
    }

    /// Drop the cached matrix
    pub fn clear(&self) {
        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *slot = None;
    }
}
