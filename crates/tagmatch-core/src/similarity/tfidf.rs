//! TF-IDF vectorizer
//!
//! Builds a vocabulary over every tag string in the catalog and turns each
//! string into a sparse, L2-normalised weight vector:
//!
//! - tf: raw term count within the string
//! - idf: `ln((1 + n) / (1 + df)) + 1`
//! - columns: terms in lexicographic order

use std::collections::{BTreeMap, HashMap, HashSet};
use std::time::Instant;

use tracing::debug;

use crate::text::{tokenize_with, TokenizerOptions};
use crate::trace_time;

/// Sparse row: `(column, weight)` pairs sorted by column
pub type SparseRow = Vec<(usize, f64)>;

/// Distinct terms observed across the catalog with their IDF weights
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl Vocabulary {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Column index of a term
    pub fn column(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn term(&self, column: usize) -> Option<&str> {
        self.terms.get(column).map(String::as_str)
    }

    pub fn idf(&self, column: usize) -> Option<f64> {
        self.idf.get(column).copied()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// One row per catalog item, one column per vocabulary term
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightMatrix {
    rows: Vec<SparseRow>,
    vocabulary: Vocabulary,
}

impl WeightMatrix {
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn row(&self, index: usize) -> Option<&SparseRow> {
        self.rows.get(index)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &SparseRow> + '_ {
        self.rows.iter()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Weight of a single cell; zero for terms absent from the row
    pub fn weight(&self, row: usize, column: usize) -> f64 {
        self.rows
            .get(row)
            .and_then(|r| r.binary_search_by_key(&column, |&(c, _)| c).ok().map(|i| r[i].1))
            .unwrap_or(0.0)
    }

    /// Number of stored non-zero cells
    pub fn nnz(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Approximate heap footprint of the stored cells, in bytes
    pub fn approx_bytes(&self) -> u64 {
        (self.nnz() * std::mem::size_of::<(usize, f64)>()) as u64
    }
}

/// Converts tag strings into a [`WeightMatrix`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Vectorizer {
    options: TokenizerOptions,
}

impl Vectorizer {
    pub fn new(options: TokenizerOptions) -> Self {
        Vectorizer { options }
    }

    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Build the vocabulary and weight matrix from documents in catalog order.
    ///
    /// An empty input yields an empty matrix. Documents with no surviving
    /// terms produce all-zero rows.
    pub fn fit_transform<'a, I>(&self, documents: I) -> WeightMatrix
    where
        I: IntoIterator<Item = &'a str>,
    {
        let start = Instant::now();

        let tokenized: Vec<Vec<String>> = documents
            .into_iter()
            .map(|doc| tokenize_with(doc, &self.options))
            .collect();

        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let n = tokenized.len() as f64;
        let mut terms = Vec::with_capacity(doc_freq.len());
        let mut index = HashMap::with_capacity(doc_freq.len());
        let mut idf = Vec::with_capacity(doc_freq.len());
        for (column, (term, df)) in doc_freq.iter().enumerate() {
            terms.push(term.to_string());
            index.insert(term.to_string(), column);
            idf.push(((1.0 + n) / (1.0 + *df as f64)).ln() + 1.0);
        }
        let vocabulary = Vocabulary { terms, index, idf };

        let rows: Vec<SparseRow> = tokenized
            .iter()
            .map(|tokens| weigh(tokens, &vocabulary))
            .collect();

        debug!(
            documents = rows.len(),
            vocabulary = vocabulary.len(),
            "fit_transform"
        );
        trace_time!(start, "fit_transform");

        WeightMatrix { rows, vocabulary }
    }
}

fn weigh(tokens: &[String], vocabulary: &Vocabulary) -> SparseRow {
    let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
    for token in tokens {
        if let Some(column) = vocabulary.column(token) {
            *counts.entry(column).or_insert(0.0) += 1.0;
        }
    }

    let mut row: SparseRow = counts
        .into_iter()
        .map(|(column, tf)| (column, tf * vocabulary.idf[column]))
        .collect();

    let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, w) in &mut row {
            *w /= norm;
        }
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::StopWords;

    fn fit(docs: &[&str]) -> WeightMatrix {
        Vectorizer::default().fit_transform(docs.iter().copied())
    }

    #[test]
    fn test_vocabulary_is_sorted_and_stop_words_removed() {
        let matrix = fit(&["red shoes", "the blue shoes", "red hat"]);
        assert_eq!(
            matrix.vocabulary().terms(),
            &["blue", "hat", "red", "shoes"]
        );
        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.columns(), 4);
    }

    #[test]
    fn test_smoothed_idf() {
        let matrix = fit(&["red shoes", "blue shoes", "red hat"]);
        let vocab = matrix.vocabulary();

        // shoes: df = 2 of 3
        let shoes = vocab.column("shoes").unwrap();
        let expected = (4.0f64 / 3.0).ln() + 1.0;
        assert!((vocab.idf(shoes).unwrap() - expected).abs() < 1e-12);

        // blue: df = 1 of 3
        let blue = vocab.column("blue").unwrap();
        let expected = 2.0f64.ln() + 1.0;
        assert!((vocab.idf(blue).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_rows_are_unit_length() {
        let matrix = fit(&["red shoes shoes", "blue shoes", "red hat"]);
        for row in matrix.iter_rows() {
            let norm: f64 = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_term_frequency_raises_weight() {
        let matrix = fit(&["red shoes shoes", "blue hat"]);
        let red = matrix.vocabulary().column("red").unwrap();
        let shoes = matrix.vocabulary().column("shoes").unwrap();
        assert!(matrix.weight(0, shoes) > matrix.weight(0, red));
        assert_eq!(matrix.weight(1, shoes), 0.0);
    }

    #[test]
    fn test_empty_input_yields_empty_matrix() {
        let matrix = fit(&[]);
        assert_eq!(matrix.rows(), 0);
        assert_eq!(matrix.columns(), 0);
        assert_eq!(matrix.nnz(), 0);
    }

    #[test]
    fn test_document_of_only_stop_words_is_zero_row() {
        let matrix = fit(&["the and", "red hat"]);
        assert!(matrix.row(0).unwrap().is_empty());
        assert_eq!(matrix.row(1).unwrap().len(), 2);
    }

    #[test]
    fn test_stemming_merges_columns() {
        let vectorizer = Vectorizer::new(TokenizerOptions {
            stop_words: StopWords::English,
            stemming: true,
        });
        let matrix = vectorizer.fit_transform(["shoes", "shoe"]);
        assert_eq!(matrix.columns(), 1);
    }

    #[test]
    fn test_approx_bytes_tracks_nnz() {
        let matrix = fit(&["red shoes", "blue hat"]);
        assert_eq!(matrix.nnz(), 4);
        assert_eq!(
            matrix.approx_bytes(),
            4 * std::mem::size_of::<(usize, f64)>() as u64
        );
    }
}
