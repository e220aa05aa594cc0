use non_empty_string::NonEmptyString;
use serde::Serialize;

/// Name given to ingredients whose source entry carries no name.
pub const UNNAMED: &str = "unnamed";

/// Source value for an amount that is "to taste" or otherwise unspecified.
///
/// Amounts carrying this value are normalized to zero, so aggregate queries
/// treat them as contributing nothing.
pub const TO_TASTE: &str = "*";

/// An ingredient of a recipe.
///
/// Ingredients may themselves be composed of further ingredients, each with
/// its own preparation steps. The nested ingredients are exclusively owned by
/// their parent, so the structure is always a finite tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    #[serde(serialize_with = "name_as_str")]
    pub(crate) name: NonEmptyString,
    pub(crate) amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) unit: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) ingredients: Vec<Ingredient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) preparation: Option<Vec<String>>,
}

/// Errors that can occur when constructing an [`Ingredient`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngredientError {
    /// The ingredient name was empty.
    #[error("ingredient name must not be empty")]
    EmptyName,
    /// The amount was negative, not a number, or could not be parsed.
    #[error("invalid ingredient amount: {0:?}")]
    InvalidAmount(String),
}

impl Ingredient {
    /// Constructs a leaf ingredient with no unit, children, or preparation.
    ///
    /// # Errors
    ///
    /// Returns [`IngredientError::EmptyName`] if `name` is empty, or
    /// [`IngredientError::InvalidAmount`] if `amount` is negative or NaN.
    pub fn new(name: impl Into<String>, amount: f64) -> Result<Self, IngredientError> {
        let name = NonEmptyString::new(name.into()).map_err(|_| IngredientError::EmptyName)?;

        if amount.is_nan() || amount < 0.0 {
            return Err(IngredientError::InvalidAmount(amount.to_string()));
        }

        Ok(Self {
            name,
            amount,
            unit: None,
            ingredients: Vec::new(),
            preparation: None,
        })
    }

    /// Sets the unit of measure.
    ///
    /// An empty unit is treated as no unit at all.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        let unit = unit.into();
        self.unit = (!unit.is_empty()).then_some(unit);
        self
    }

    /// Sets the nested ingredients this ingredient is made from.
    #[must_use]
    pub fn with_ingredients(mut self, ingredients: Vec<Self>) -> Self {
        self.ingredients = ingredients;
        self
    }

    /// Sets the steps required to prepare this ingredient.
    #[must_use]
    pub fn with_preparation(mut self, steps: Vec<String>) -> Self {
        self.preparation = Some(steps);
        self
    }

    /// Parses an amount as it appears in a recipe document.
    ///
    /// A missing amount or the [`TO_TASTE`] sentinel yields `0.0`.
    ///
    /// # Errors
    ///
    /// Returns [`IngredientError::InvalidAmount`] if the value is not a
    /// non-negative number.
    pub fn parse_amount(raw: Option<&str>) -> Result<f64, IngredientError> {
        let Some(raw) = raw.map(str::trim) else {
            return Ok(0.0);
        };

        if raw == TO_TASTE {
            return Ok(0.0);
        }

        match raw.parse::<f64>() {
            Ok(amount) if amount >= 0.0 => Ok(amount),
            _ => Err(IngredientError::InvalidAmount(raw.to_string())),
        }
    }

    /// The ingredient's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The quantity used, in [`Self::unit`]s. Zero when unspecified.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// The unit of measure, if any.
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    /// The ingredients this one is directly made from.
    #[must_use]
    pub fn ingredients(&self) -> &[Self] {
        &self.ingredients
    }

    /// Steps specific to preparing this ingredient, if it needs any.
    #[must_use]
    pub fn preparation(&self) -> Option<&[String]> {
        self.preparation.as_deref()
    }

    /// The number of preparation steps specific to this ingredient.
    #[must_use]
    pub fn preparation_len(&self) -> usize {
        self.preparation.as_ref().map_or(0, Vec::len)
    }

    /// Whether this ingredient's name contains `needle`.
    ///
    /// Every ingredient-name query matches this way: a case-sensitive
    /// substring test, so `"egg"` matches both `"egg"` and `"egg yolks"`.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.name().contains(needle)
    }
}

fn name_as_str<S>(name: &NonEmptyString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(name.as_str())
}
