use std::cmp::Ordering;

use crate::{
    Collection, Recipe,
    query::{QueryError, recipe_total, step_count},
};

/// Selects the recipe whose key compares as `wanted` against every earlier
/// best. Ties keep the first recipe encountered.
fn first_extreme<K>(
    collection: &Collection,
    key: impl Fn(&Recipe) -> K,
    compare: impl Fn(&K, &K) -> Ordering,
    wanted: Ordering,
) -> Result<&Recipe, QueryError> {
    let mut recipes = collection.recipes();
    let first = recipes.next().ok_or(QueryError::EmptyCollection)?;

    let (best, _) = recipes.fold((first, key(first)), |(best, best_key), recipe| {
        let candidate = key(recipe);
        if compare(&candidate, &best_key) == wanted {
            (recipe, candidate)
        } else {
            (best, best_key)
        }
    });

    Ok(best)
}

/// The recipe with the most calories.
///
/// # Errors
///
/// Returns [`QueryError::EmptyCollection`] if there are no recipes.
pub fn max_calories(collection: &Collection) -> Result<&Recipe, QueryError> {
    first_extreme(
        collection,
        |recipe| recipe.nutrition().calories(),
        f64::total_cmp,
        Ordering::Greater,
    )
}

/// The recipe with the highest fat percentage.
///
/// # Errors
///
/// Returns [`QueryError::EmptyCollection`] if there are no recipes.
pub fn max_fat(collection: &Collection) -> Result<&Recipe, QueryError> {
    first_extreme(
        collection,
        |recipe| recipe.nutrition().fat(),
        f64::total_cmp,
        Ordering::Greater,
    )
}

/// The recipe with the fewest preparation steps, as counted by
/// [`step_count`].
///
/// # Errors
///
/// Returns [`QueryError::EmptyCollection`] if there are no recipes.
pub fn easiest(collection: &Collection) -> Result<&Recipe, QueryError> {
    first_extreme(collection, step_count, usize::cmp, Ordering::Less)
}

/// All recipes, ordered by the summed amount of their ingredients, largest
/// first. Recipes with equal totals keep their collection order.
#[must_use]
pub fn by_total_amount(collection: &Collection) -> Vec<&Recipe> {
    let mut ranked: Vec<_> = collection
        .recipes()
        .map(|recipe| (recipe, recipe_total(recipe)))
        .collect();

    ranked.sort_by(|(_, a), (_, b)| b.total_cmp(a));

    ranked.into_iter().map(|(recipe, _)| recipe).collect()
}
