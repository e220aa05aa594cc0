//! Queries are pure functions over a loaded [`Collection`] or a single
//! [`Recipe`]. None of them modify their input.
//!
//! Ingredient-name arguments are always matched as case-sensitive substrings
//! (see [`Ingredient::matches`]). Recipe titles are the only thing matched
//! exactly.
//!
//! [`Collection`]: crate::Collection
//! [`Recipe`]: crate::Recipe
//! [`Ingredient::matches`]: crate::Ingredient::matches

mod amounts;
mod filter;
mod lookup;
mod rank;
mod stats;
mod steps;

pub use amounts::{amount_string, amounts_by_recipe, recipe_amount, recipe_total, total_amount};
pub use filter::{above_steps, containing, excluding, similar, under_calories};
pub use lookup::{recipe_by_title, titles};
pub use rank::{by_total_amount, easiest, max_calories, max_fat};
pub use stats::{
    ingredient_counts, ingredient_usages, most_common_ingredient, most_common_unit,
    step_histogram, unique_ingredients,
};
pub use steps::{preparation_slice, step_count};

use thiserror::Error;

/// A query needed an element that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No ingredient name contains the requested substring.
    #[error("no ingredient matching {needle:?}")]
    IngredientNotFound {
        /// The substring that was searched for.
        needle: String,
    },
    /// No ingredient in the collection has a unit.
    #[error("no ingredient has a unit")]
    NoUnits,
    /// The collection contains no ingredients at all.
    #[error("the collection contains no ingredients")]
    NoIngredients,
    /// The collection contains no recipes.
    #[error("the collection contains no recipes")]
    EmptyCollection,
}
