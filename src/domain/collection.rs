//! In-memory collection of recipes keyed by identifier.
//!
//! The [`Collection`] knows nothing about the document it was loaded from.
//! It is built once and then only read.

use std::{collections::HashMap, path::Path};

use crate::{
    domain::{Config, Recipe},
    storage::LoadError,
};

/// A set of recipes, keyed by opaque identifier.
///
/// Recipes are stored in insertion order, with a separate index for
/// identifier lookup. Queries never depend on that order for correctness; it
/// only decides ties where a query documents a first-encountered rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    /// Recipes with their identifiers, in insertion order.
    entries: Vec<(String, Recipe)>,

    /// Position of each identifier in `entries`.
    index: HashMap<String, usize>,
}

/// A recipe with the same identifier is already in the collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate recipe identifier {0:?}")]
pub struct DuplicateId(pub String);

impl Collection {
    /// Creates an empty collection with room for `capacity` recipes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Adds a recipe under the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateId`] if the identifier is already taken. The
    /// collection is left unchanged.
    pub fn insert(&mut self, id: impl Into<String>, recipe: Recipe) -> Result<(), DuplicateId> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(DuplicateId(id));
        }

        self.index.insert(id.clone(), self.entries.len());
        self.entries.push((id, recipe));
        Ok(())
    }

    /// Looks up a recipe by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.index.get(id).map(|&position| &self.entries[position].1)
    }

    /// The number of recipes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection holds no recipes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(identifier, recipe)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Recipe)> {
        self.entries.iter().map(|(id, recipe)| (id.as_str(), recipe))
    }

    /// Iterates over the identifiers.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Iterates over the recipes.
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.entries.iter().map(|(_, recipe)| recipe)
    }

    /// Loads a collection from the recipe document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] if there is no document at `path`, or
    /// another [`LoadError`] if it cannot be read or is malformed.
    pub fn load(path: &Path, config: &Config) -> Result<Self, LoadError> {
        crate::storage::xml::load(path, config)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::NutritionInfo;

    fn recipe(title: &str) -> Recipe {
        Recipe::new(
            title,
            NaiveDate::from_ymd_opt(2002, 1, 18).unwrap(),
            NutritionInfo::new(100.0, 10.0, 60.0, 30.0),
        )
    }

    #[test]
    fn rejects_duplicate_identifier() {
        let mut collection = Collection::default();
        collection.insert("r1", recipe("First")).unwrap();

        let err = collection.insert("r1", recipe("Second")).unwrap_err();

        assert_eq!(err, DuplicateId("r1".to_string()));
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get("r1").unwrap().title(), "First");
    }

    #[test]
    fn iterates_in_insertion_order() {
        let mut collection = Collection::with_capacity(3);
        collection.insert("b", recipe("B")).unwrap();
        collection.insert("a", recipe("A")).unwrap();
        collection.insert("c", recipe("C")).unwrap();

        let ids: Vec<_> = collection.ids().collect();
        assert_eq!(ids, ["b", "a", "c"]);

        let titles: Vec<_> = collection.recipes().map(Recipe::title).collect();
        assert_eq!(titles, ["B", "A", "C"]);
    }

    #[test]
    fn get_missing_identifier_is_none() {
        let collection = Collection::default();
        assert!(collection.get("nope").is_none());
        assert!(collection.is_empty());
    }
}
