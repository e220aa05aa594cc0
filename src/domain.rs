//! Domain models for recipe collections.
//!
//! This module contains the immutable value types produced by the loader:
//! ingredients (which nest), nutrition information, recipes, and the
//! collection that keys recipes by identifier.

/// Ingredients and their nested sub-ingredients.
pub mod ingredient;
pub use ingredient::{Ingredient, IngredientError};

mod nutrition;
pub use nutrition::NutritionInfo;

/// Recipes and their weak references to related recipes.
pub mod recipe;
pub use recipe::{Recipe, Related};

mod collection;
pub use collection::{Collection, DuplicateId};

mod config;
pub use config::Config;
