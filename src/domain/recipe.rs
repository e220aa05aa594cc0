use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Ingredient, NutritionInfo};

/// A recipe.
///
/// Recipes are immutable once constructed. The builder-style `with_*`
/// methods are only used while assembling one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub(crate) title: String,
    pub(crate) date: NaiveDate,
    pub(crate) ingredients: Vec<Ingredient>,
    pub(crate) preparation: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) comment: Option<String>,
    pub(crate) nutrition: NutritionInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) related: Option<Vec<Related>>,
}

/// A reference from one recipe to another, by collection identifier.
///
/// The reference is weak: it is never resolved when the collection is
/// loaded, and may point at an identifier that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Related {
    /// Identifier of the related recipe within its collection.
    pub id: String,
    /// Free text describing the relation.
    pub annotation: String,
}

impl Recipe {
    /// Constructs a recipe with no ingredients, steps, comment, or relations.
    #[must_use]
    pub fn new(title: impl Into<String>, date: NaiveDate, nutrition: NutritionInfo) -> Self {
        Self {
            title: title.into(),
            date,
            ingredients: Vec::new(),
            preparation: Vec::new(),
            comment: None,
            nutrition,
            related: None,
        }
    }

    /// Sets the top-level ingredients.
    #[must_use]
    pub fn with_ingredients(mut self, ingredients: Vec<Ingredient>) -> Self {
        self.ingredients = ingredients;
        self
    }

    /// Sets the top-level preparation steps.
    #[must_use]
    pub fn with_preparation(mut self, steps: Vec<String>) -> Self {
        self.preparation = steps;
        self
    }

    /// Sets the comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Sets the related recipes.
    #[must_use]
    pub fn with_related(mut self, related: Vec<Related>) -> Self {
        self.related = Some(related);
        self
    }

    /// The recipe title. Titles are unique by convention only.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// When the recipe was published.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// The top-level ingredients, in document order.
    #[must_use]
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// The top-level preparation steps, in order.
    ///
    /// Steps specific to a nested ingredient live on that ingredient.
    #[must_use]
    pub fn preparation(&self) -> &[String] {
        &self.preparation
    }

    /// Free-text comment on the recipe.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Nutrition information.
    #[must_use]
    pub const fn nutrition(&self) -> &NutritionInfo {
        &self.nutrition
    }

    /// Related recipes, if the source lists any.
    #[must_use]
    pub fn related(&self) -> Option<&[Related]> {
        self.related.as_deref()
    }
}
