//! Catalog model
//!
//! The catalog is an ordered, read-only list of items. It is loaded once by
//! the caller and passed by reference into the similarity engine.

mod load;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A recommendable catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Lookup key for queries (first match wins on duplicates)
    pub name: String,
    /// Free-text descriptive keywords; the only input to similarity
    pub tags: String,
    pub review_count: Option<f64>,
    pub brand: String,
    pub image_url: String,
    pub rating: Option<f64>,
}

impl Item {
    /// Create an item with only a name and tag string
    pub fn new(name: impl Into<String>, tags: impl Into<String>) -> Self {
        Item {
            name: name.into(),
            tags: tags.into(),
            review_count: None,
            brand: String::new(),
            image_url: String::new(),
            rating: None,
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_review_count(mut self, review_count: f64) -> Self {
        self.review_count = Some(review_count);
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Project the display attributes returned with a recommendation
    pub fn summary(&self) -> ItemSummary {
        ItemSummary {
            name: self.name.clone(),
            review_count: self.review_count,
            brand: self.brand.clone(),
            image_url: self.image_url.clone(),
            rating: self.rating,
        }
    }
}

/// Projection of an item returned by the ranker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub name: String,
    pub review_count: Option<f64>,
    pub brand: String,
    pub image_url: String,
    pub rating: Option<f64>,
}

/// Ordered, immutable collection of items
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Catalog { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Row index of the first item whose name matches exactly
    pub fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    /// Tag strings in catalog order
    pub fn tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(|item| item.tags.as_str())
    }

    /// SHA-256 digest over every item's name and tags.
    ///
    /// Fields are length-prefixed so that ("ab", "c") and ("a", "bc") hash
    /// differently. Display attributes do not take part: they never affect
    /// the weight matrix.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update((self.items.len() as u64).to_le_bytes());
        for item in &self.items {
            for field in [&item.name, &item.tags] {
                hasher.update((field.len() as u64).to_le_bytes());
                hasher.update(field.as_bytes());
            }
        }
        hex::encode(hasher.finalize())
    }
}

impl From<Vec<Item>> for Catalog {
    fn from(items: Vec<Item>) -> Self {
        Catalog::new(items)
    }
}
