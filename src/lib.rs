//! Recipe collection analytics
//!
//! A recipe collection is loaded once from an XML document into immutable
//! domain types. Ingredients nest arbitrarily deep, and every query works on
//! the flattened ingredient sequence so that nesting depth never changes the
//! answer.

pub mod domain;
pub use domain::{
    Collection, Config, DuplicateId, Ingredient, IngredientError, NutritionInfo, Recipe, Related,
};

/// Pre-order flattening of nested ingredient trees.
pub mod flatten;
pub use flatten::{Flatten, Flattened};

/// Analytical queries over a loaded collection.
pub mod query;
pub use query::QueryError;

/// Loading recipe collections from their on-disk document format.
pub mod storage;
pub use storage::LoadError;
