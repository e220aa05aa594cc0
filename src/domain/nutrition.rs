use serde::Serialize;

/// Nutrition information for a recipe.
///
/// Calories are absolute. Fat, carbohydrates, protein and alcohol are
/// percentages of the total, not masses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutritionInfo {
    pub(crate) calories: f64,
    pub(crate) fat: f64,
    pub(crate) carbohydrates: f64,
    pub(crate) protein: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) alcohol: Option<f64>,
}

impl NutritionInfo {
    /// Constructs nutrition information without an alcohol percentage.
    #[must_use]
    pub const fn new(calories: f64, fat: f64, carbohydrates: f64, protein: f64) -> Self {
        Self {
            calories,
            fat,
            carbohydrates,
            protein,
            alcohol: None,
        }
    }

    /// Sets the alcohol percentage.
    #[must_use]
    pub const fn with_alcohol(mut self, alcohol: f64) -> Self {
        self.alcohol = Some(alcohol);
        self
    }

    /// Calories per serving.
    #[must_use]
    pub const fn calories(&self) -> f64 {
        self.calories
    }

    /// Fat, as a percentage of the total.
    #[must_use]
    pub const fn fat(&self) -> f64 {
        self.fat
    }

    /// Carbohydrates, as a percentage of the total.
    #[must_use]
    pub const fn carbohydrates(&self) -> f64 {
        self.carbohydrates
    }

    /// Protein, as a percentage of the total.
    #[must_use]
    pub const fn protein(&self) -> f64 {
        self.protein
    }

    /// Alcohol, as a percentage of the total, when the source lists it.
    #[must_use]
    pub const fn alcohol(&self) -> Option<f64> {
        self.alcohol
    }
}
