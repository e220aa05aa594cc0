use std::{io, path::PathBuf};

use crate::domain::{DuplicateId, IngredientError};

/// XML serialization for recipe collections.
pub mod xml;

/// Errors that can occur when loading a recipe collection.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The recipe document was not found.
    #[error("recipe document {} not found", .0.display())]
    NotFound(PathBuf),
    /// An I/O error occurred.
    #[error("failed to read recipe document")]
    Io(#[from] io::Error),
    /// The document is not well-formed, or does not have the expected shape.
    #[error("malformed recipe document")]
    Xml(#[from] quick_xml::DeError),
    /// An ingredient could not be constructed.
    #[error("recipe {recipe}: invalid ingredient")]
    Ingredient {
        /// Identifier of the recipe containing the ingredient.
        recipe: String,
        /// Why the ingredient was rejected.
        #[source]
        source: IngredientError,
    },
    /// A recipe date did not match the configured format.
    #[error("recipe {recipe}: invalid date {value:?}")]
    Date {
        /// Identifier of the recipe.
        recipe: String,
        /// The date as written in the document.
        value: String,
        /// Why parsing failed.
        #[source]
        source: chrono::ParseError,
    },
    /// A nutrition value was not a number.
    #[error("recipe {recipe}: invalid {field} value {value:?}")]
    Nutrition {
        /// Identifier of the recipe.
        recipe: String,
        /// The nutrition attribute that failed to parse.
        field: &'static str,
        /// The value as written in the document.
        value: String,
    },
    /// Two recipes share an identifier.
    #[error(transparent)]
    DuplicateId(#[from] DuplicateId),
}
