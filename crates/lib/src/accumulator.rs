//! # Classification Accumulator
//!
//! The only piece of state that survives across batches: a growing map from
//! category path to the bookmarks assigned to it. The set of keys at the start
//! of each batch becomes the reuse vocabulary offered to the classifier.

use crate::types::Bookmark;
use std::collections::HashMap;

/// Accumulates classified bookmarks across batches, keyed by category path.
///
/// Key order carries no meaning; the folder tree re-sorts alphabetically when
/// it is built.
#[derive(Debug, Default)]
pub struct Accumulator {
    categories: HashMap<String, Vec<Bookmark>>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the distinct category paths seen so far, in arbitrary order.
    pub fn snapshot_categories(&self) -> Vec<String> {
        self.categories.keys().cloned().collect()
    }

    /// Appends a bookmark to a category's list, creating the list if absent.
    pub fn attach(&mut self, category: impl Into<String>, bookmark: Bookmark) {
        self.categories
            .entry(category.into())
            .or_default()
            .push(bookmark);
    }

    /// Total number of bookmarks attached so far.
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Consumes the accumulator, yielding the category → bookmarks map.
    pub fn into_map(self) -> HashMap<String, Vec<Bookmark>> {
        self.categories
    }
}

impl From<HashMap<String, Vec<Bookmark>>> for Accumulator {
    fn from(categories: HashMap<String, Vec<Bookmark>>) -> Self {
        Self { categories }
    }
}
