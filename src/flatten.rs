//! Flattening turns a nested ingredient tree into a single ordered sequence.
//!
//! The order is pre-order and depth-first: each ingredient is yielded before
//! its own nested ingredients, and those come before the ingredient's next
//! sibling. Containers holding several trees (a recipe, a list of recipes, a
//! whole collection) yield their trees one after another in their natural
//! order. Nothing is deduplicated and the input is never modified.
//!
//! Traversal keeps an explicit stack of sibling iterators rather than
//! recursing, so memory use grows with tree depth but the call stack does
//! not. Very deep trees are still not a target use case.

use std::{iter::FusedIterator, slice};

use crate::domain::{Collection, Ingredient, Recipe};

/// Anything that holds one or more ingredient trees.
pub trait Flatten {
    /// Iterates over every ingredient reachable from `self`, in pre-order.
    fn flattened(&self) -> Flattened<'_>;
}

/// Pre-order iterator over the ingredients of one or more ingredient trees.
///
/// Created by [`Flatten::flattened`].
#[derive(Debug, Clone)]
pub struct Flattened<'a> {
    /// Root sibling lists still to be visited.
    roots: std::vec::IntoIter<&'a [Ingredient]>,

    /// Remaining siblings at each level of the current path, innermost last.
    stack: Vec<slice::Iter<'a, Ingredient>>,
}

impl<'a> Flattened<'a> {
    fn new(roots: Vec<&'a [Ingredient]>) -> Self {
        Self {
            roots: roots.into_iter(),
            stack: Vec::new(),
        }
    }
}

impl<'a> Iterator for Flattened<'a> {
    type Item = &'a Ingredient;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(siblings) = self.stack.last_mut() else {
                let root = self.roots.next()?;
                self.stack.push(root.iter());
                continue;
            };

            if let Some(ingredient) = siblings.next() {
                if !ingredient.ingredients.is_empty() {
                    self.stack.push(ingredient.ingredients.iter());
                }
                return Some(ingredient);
            }

            self.stack.pop();
        }
    }
}

impl FusedIterator for Flattened<'_> {}

impl Flatten for Ingredient {
    /// Yields this ingredient first, followed by everything nested in it.
    fn flattened(&self) -> Flattened<'_> {
        Flattened::new(vec![slice::from_ref(self)])
    }
}

impl Flatten for [Ingredient] {
    fn flattened(&self) -> Flattened<'_> {
        Flattened::new(vec![self])
    }
}

impl Flatten for Recipe {
    /// Yields the recipe's top-level ingredients as roots.
    fn flattened(&self) -> Flattened<'_> {
        self.ingredients.flattened()
    }
}

impl Flatten for [&Recipe] {
    fn flattened(&self) -> Flattened<'_> {
        Flattened::new(
            self.iter()
                .map(|recipe| recipe.ingredients.as_slice())
                .collect(),
        )
    }
}

impl Flatten for Collection {
    /// Yields the ingredients of every recipe, in collection order.
    fn flattened(&self) -> Flattened<'_> {
        Flattened::new(
            self.recipes()
                .map(|recipe| recipe.ingredients.as_slice())
                .collect(),
        )
    }
}
