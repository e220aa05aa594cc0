use crate::{Flatten, Ingredient, Recipe};

/// The total number of preparation steps in a recipe.
///
/// This is the recipe's own steps plus the steps of every ingredient at any
/// depth. Ingredients without a preparation contribute nothing.
#[must_use]
pub fn step_count(recipe: &Recipe) -> usize {
    recipe.preparation().len()
        + recipe
            .flattened()
            .map(Ingredient::preparation_len)
            .sum::<usize>()
}

/// The top-level preparation steps in the half-open range `from..to`.
///
/// `to` defaults to the end. Out-of-range bounds are clamped rather than
/// rejected, and a range with `from` past `to` is empty.
#[must_use]
pub fn preparation_slice(recipe: &Recipe, from: usize, to: Option<usize>) -> &[String] {
    let steps = recipe.preparation();
    let end = to.unwrap_or(steps.len()).min(steps.len());
    let start = from.min(end);
    &steps[start..end]
}
