use crate::{Collection, Flatten, Ingredient, Recipe, query::step_count};

fn filter_recipes(collection: &Collection, predicate: impl Fn(&Recipe) -> bool) -> Vec<&Recipe> {
    collection
        .recipes()
        .filter(|recipe| predicate(*recipe))
        .collect()
}

pub(super) fn contains_ingredient(recipe: &Recipe, needle: &str) -> bool {
    recipe.flattened().any(|i| i.matches(needle))
}

/// Recipes with at least one ingredient, at any depth, whose name contains
/// `needle`.
#[must_use]
pub fn containing<'a>(collection: &'a Collection, needle: &str) -> Vec<&'a Recipe> {
    filter_recipes(collection, |recipe| contains_ingredient(recipe, needle))
}

/// Recipes with no ingredient, at any depth, whose name contains `needle`.
///
/// Together with [`containing`] this partitions the collection.
#[must_use]
pub fn excluding<'a>(collection: &'a Collection, needle: &str) -> Vec<&'a Recipe> {
    filter_recipes(collection, |recipe| !contains_ingredient(recipe, needle))
}

/// Recipes with strictly fewer than `calories` calories.
#[must_use]
pub fn under_calories(collection: &Collection, calories: f64) -> Vec<&Recipe> {
    filter_recipes(collection, |recipe| recipe.nutrition().calories() < calories)
}

/// Recipes with strictly more than `threshold` preparation steps in total,
/// as counted by [`step_count`].
#[must_use]
pub fn above_steps(collection: &Collection, threshold: usize) -> Vec<&Recipe> {
    filter_recipes(collection, |recipe| {
        // The top-level steps alone may already be enough.
        recipe.preparation().len() > threshold || step_count(recipe) > threshold
    })
}

/// Recipes sharing an ingredient with `reference`.
///
/// A candidate shares an ingredient when one of its ingredient names contains
/// the name of one of the reference's ingredients (at any depth on either
/// side). The reference itself is included if it is in the collection and
/// has ingredients.
#[must_use]
pub fn similar<'a>(collection: &'a Collection, reference: &Recipe) -> Vec<&'a Recipe> {
    let wanted: Vec<&str> = reference.flattened().map(Ingredient::name).collect();

    filter_recipes(collection, |recipe| {
        recipe
            .flattened()
            .any(|candidate| wanted.iter().any(|name| candidate.matches(name)))
    })
}
