use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::{
    Collection, Flatten, Ingredient,
    query::{QueryError, filter::contains_ingredient, step_count},
};

/// The most frequent value. Ties go to the value encountered first.
fn mode<'a>(values: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, value) in values.enumerate() {
        seen.entry(value).or_insert((0, position)).0 += 1;
    }

    seen.into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(value, _)| value)
}

/// The unit used by the most ingredients across the collection.
///
/// Ingredients without a unit are ignored. Ties go to the unit encountered
/// first in flattened collection order.
///
/// # Errors
///
/// Returns [`QueryError::NoUnits`] if no ingredient has a unit.
pub fn most_common_unit(collection: &Collection) -> Result<&str, QueryError> {
    mode(collection.flattened().filter_map(Ingredient::unit)).ok_or(QueryError::NoUnits)
}

/// The ingredient name that occurs most often across the collection.
///
/// Names are compared exactly. Ties go to the name encountered first in
/// flattened collection order.
///
/// # Errors
///
/// Returns [`QueryError::NoIngredients`] if the collection has no
/// ingredients.
pub fn most_common_ingredient(collection: &Collection) -> Result<&str, QueryError> {
    mode(collection.flattened().map(Ingredient::name)).ok_or(QueryError::NoIngredients)
}

/// The number of flattened ingredients in each recipe, in collection order.
///
/// Amounts are ignored and repeated names are counted each time.
#[must_use]
pub fn ingredient_counts(collection: &Collection) -> Vec<usize> {
    collection
        .recipes()
        .map(|recipe| recipe.flattened().count())
        .collect()
}

/// How many recipes have each total step count, as counted by
/// [`step_count`].
#[must_use]
pub fn step_histogram(collection: &Collection) -> BTreeMap<usize, usize> {
    let mut histogram = BTreeMap::new();
    for recipe in collection.recipes() {
        *histogram.entry(step_count(recipe)).or_default() += 1;
    }
    histogram
}

/// Every distinct ingredient name in the collection.
#[must_use]
pub fn unique_ingredients(collection: &Collection) -> BTreeSet<&str> {
    collection.flattened().map(Ingredient::name).collect()
}

/// For each distinct ingredient name, the identifiers of the recipes that
/// use it.
///
/// Names are matched as substrings like every other ingredient query, so the
/// entry for `"egg"` also lists recipes that only use `"egg yolks"`.
#[must_use]
pub fn ingredient_usages(collection: &Collection) -> BTreeMap<&str, Vec<&str>> {
    unique_ingredients(collection)
        .into_iter()
        .map(|name| {
            let ids: Vec<&str> = collection
                .iter()
                .filter(|(_, recipe)| contains_ingredient(recipe, name))
                .map(|(id, _)| id)
                .collect();
            (name, ids)
        })
        .collect()
}
