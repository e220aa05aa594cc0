use std::collections::BTreeMap;

use crate::{Collection, Flatten, Ingredient, Recipe, query::QueryError};

fn sum<'a>(ingredients: impl Iterator<Item = &'a Ingredient>) -> f64 {
    ingredients.fold(0.0, |total, ingredient| total + ingredient.amount())
}

/// The summed amount of every ingredient, in every recipe, whose name
/// contains `needle`.
///
/// Units are not converted; amounts are added as they are. Returns `0.0`
/// when nothing matches.
#[must_use]
pub fn total_amount(collection: &Collection, needle: &str) -> f64 {
    sum(collection.flattened().filter(|i| i.matches(needle)))
}

/// The summed amount of every ingredient in `recipe`, at any depth, whose
/// name contains `needle`. Returns `0.0` when nothing matches.
#[must_use]
pub fn recipe_amount(recipe: &Recipe, needle: &str) -> f64 {
    sum(recipe.flattened().filter(|i| i.matches(needle)))
}

/// The summed amount of all of a recipe's ingredients, at any depth.
#[must_use]
pub fn recipe_total(recipe: &Recipe) -> f64 {
    sum(recipe.flattened())
}

/// [`recipe_amount`] for every recipe, keyed by recipe identifier.
///
/// Recipes without a match are included with `0.0`.
#[must_use]
pub fn amounts_by_recipe<'a>(collection: &'a Collection, needle: &str) -> BTreeMap<&'a str, f64> {
    collection
        .iter()
        .map(|(id, recipe)| (id, recipe_amount(recipe, needle)))
        .collect()
}

/// Describes how much of an ingredient a recipe uses, e.g. `"sugar - 1 cup"`.
///
/// The amount is [`recipe_amount`]. The unit is taken from the first
/// matching ingredient in flattened order and is omitted when that
/// ingredient has none.
///
/// # Errors
///
/// Returns [`QueryError::IngredientNotFound`] if no ingredient matches.
pub fn amount_string(recipe: &Recipe, needle: &str) -> Result<String, QueryError> {
    let first = recipe
        .flattened()
        .find(|i| i.matches(needle))
        .ok_or_else(|| QueryError::IngredientNotFound {
            needle: needle.to_string(),
        })?;

    let total = recipe_amount(recipe, needle);

    Ok(match first.unit() {
        Some(unit) => format!("{needle} - {total} {unit}"),
        None => format!("{needle} - {total}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::fixtures::{collection, r1};

    #[test]
    fn total_counts_nested_ingredients() {
        let collection = collection();
        assert!((total_amount(&collection, "egg") - 7.0).abs() < f64::EPSILON);
        assert!((total_amount(&collection, "sugar") - 1.0).abs() < f64::EPSILON);
        assert!((total_amount(&collection, "salt") - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn total_is_case_sensitive() {
        assert!((total_amount(&collection(), "Egg") - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn total_without_match_is_zero() {
        assert_eq!(total_amount(&collection(), "chocolate"), 0.0);
        assert_eq!(total_amount(&Collection::default(), "Egg"), 0.0);
        assert!(total_amount(&Collection::default(), "Egg").is_sign_positive());
    }

    #[test]
    fn total_equals_sum_of_recipe_amounts() {
        let collection = collection();
        for needle in ["egg", "sugar", "salt", "a", "", "nothing"] {
            let per_recipe: f64 = collection
                .recipes()
                .map(|recipe| recipe_amount(recipe, needle))
                .sum();
            assert!(
                (total_amount(&collection, needle) - per_recipe).abs() < 1e-9,
                "mismatch for {needle:?}"
            );
        }
    }

    #[test]
    fn amounts_by_recipe_includes_every_recipe() {
        let collection = collection();
        let amounts = amounts_by_recipe(&collection, "sugar");

        assert_eq!(amounts.len(), 4);
        assert_eq!(amounts["r1"], 0.0);
        assert!((amounts["r2"] - 1.0).abs() < f64::EPSILON);
        assert_eq!(amounts["r3"], 0.0);
    }

    #[test]
    fn recipe_total_sums_every_amount() {
        assert!((recipe_total(&r1()) - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn amount_string_with_unit() {
        assert_eq!(amount_string(&r1(), "Egg").unwrap(), "Egg - 2 unit");
    }

    #[test]
    fn amount_string_takes_unit_from_first_match() {
        let collection = collection();
        let zuppa = collection.get("r2").unwrap();

        assert_eq!(amount_string(zuppa, "sugar").unwrap(), "sugar - 1 cup");
        // "egg yolks" comes first in pre-order and has no unit.
        assert_eq!(amount_string(zuppa, "egg").unwrap(), "egg - 7");
    }

    #[test]
    fn amount_string_reports_fractions() {
        assert_eq!(amount_string(&r1(), "Salt").unwrap(), "Salt - 0.5 tsp");
    }

    #[test]
    fn amount_string_without_match_fails() {
        assert_eq!(
            amount_string(&r1(), "chocolate"),
            Err(QueryError::IngredientNotFound {
                needle: "chocolate".to_string()
            })
        );
    }
}
