//! The immutable arena of fonts for one run.

use std::collections::HashMap;

use crate::DistanceValue;

/// A single font with its feature vector and glyph density.
#[derive(Clone, Debug, PartialEq)]
pub struct Item<T> {
    /// The unique name of the font within its batch.
    name: String,
    /// The feature vector produced by the feature extractor.
    features: Vec<T>,
    /// The glyph density. Conceptually in `[0, 1]` but never clamped.
    density: T,
}

impl<T: DistanceValue> Item<T> {
    /// Creates a new `Item`.
    pub fn new<N: Into<String>>(name: N, features: Vec<T>, density: T) -> Self {
        Self {
            name: name.into(),
            features,
            density,
        }
    }

    /// Returns the name of the font.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the feature vector of the font.
    #[must_use]
    pub fn features(&self) -> &[T] {
        &self.features
    }

    /// Returns the glyph density of the font.
    pub const fn density(&self) -> T {
        self.density
    }
}

/// A batch of fonts. The position of an item in the batch is its index in every matrix and tour.
#[must_use]
#[derive(Clone, Debug)]
pub struct Batch<T> {
    /// The items, in index order.
    items: Vec<Item<T>>,
    /// Maps each name to its index.
    index: HashMap<String, usize>,
    /// The length shared by all feature vectors.
    dimensionality: usize,
}

impl<T: DistanceValue> Batch<T> {
    /// Creates a new `Batch` from the given items. Indices are assigned in the order of the items.
    ///
    /// # Errors
    ///
    /// - If `items` is empty.
    /// - If the feature vectors do not all have the same length.
    /// - If two items share a name.
    pub fn new(items: Vec<Item<T>>) -> Result<Self, String> {
        let Some(first) = items.first() else {
            return Err("Cannot create a Batch with no items.".to_string());
        };
        let dimensionality = first.features.len();

        let mut index = HashMap::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            if item.features.len() != dimensionality {
                return Err(format!(
                    "Feature vector of '{}' has {} dimensions but the batch has {dimensionality}.",
                    item.name,
                    item.features.len()
                ));
            }
            if let Some(j) = index.insert(item.name.clone(), i) {
                return Err(format!("Duplicate font name '{}' at indices {j} and {i}.", item.name));
            }
        }

        Ok(Self {
            items,
            index,
            dimensionality,
        })
    }

    /// Returns the items in index order.
    #[must_use]
    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    /// Returns the number of items in the batch.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.items.len()
    }

    /// Returns the length of every feature vector in the batch.
    #[must_use]
    pub const fn dimensionality(&self) -> usize {
        self.dimensionality
    }

    /// Returns the name of the item at the given index.
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(Item::name)
    }

    /// Returns the index of the item with the given name.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns the feature vectors in index order.
    #[must_use]
    pub fn features(&self) -> Vec<&[T]> {
        self.items.iter().map(Item::features).collect()
    }

    /// Returns the densities in index order.
    #[must_use]
    pub fn densities(&self) -> Vec<T> {
        self.items.iter().map(Item::density).collect()
    }

    /// Maps a sequence of names to their indices.
    ///
    /// # Errors
    ///
    /// If any name is not in the batch.
    pub fn indices_of<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<usize>, String> {
        names
            .iter()
            .map(|name| name.as_ref())
            .map(|name| self.index_of(name).ok_or_else(|| format!("Font name '{name}' not found in the batch.")))
            .collect()
    }
}
