//! Reading recipe collections from XML documents.
//!
//! The document is a `collection` element holding `recipe` elements.
//! Elements are matched by local name, so any namespace prefix (the usual
//! one is `rcp:`) is accepted.
//!
//! ```xml
//! <rcp:collection xmlns:rcp="http://www.brics.dk/ixwt/recipes">
//!   <rcp:recipe id="r101">
//!     <rcp:title>Egg Bread</rcp:title>
//!     <rcp:date>Fri, 18 Jan 02</rcp:date>
//!     <rcp:ingredient name="egg" amount="2" unit="unit"/>
//!     <rcp:ingredient name="dough">
//!       <rcp:ingredient name="flour" amount="1" unit="cup"/>
//!       <rcp:ingredient name="salt" amount="*"/>
//!       <rcp:preparation><rcp:step>Knead.</rcp:step></rcp:preparation>
//!     </rcp:ingredient>
//!     <rcp:preparation><rcp:step>Bake.</rcp:step></rcp:preparation>
//!     <rcp:nutrition calories="300" fat="10%" carbohydrates="60%" protein="30%"/>
//!   </rcp:recipe>
//! </rcp:collection>
//! ```

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::instrument;

use crate::{
    domain::{
        Collection, Config, Ingredient, IngredientError, NutritionInfo, Recipe, Related,
        ingredient::UNNAMED,
    },
    storage::LoadError,
};

/// Loads a collection from the XML document at `path`.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] if `path` does not exist, or another
/// [`LoadError`] if the document cannot be read or is malformed.
#[instrument(level = "debug", skip(config))]
pub fn load(path: &Path, config: &Config) -> Result<Collection, LoadError> {
    let file = File::open(path).map_err(|io_error| match io_error.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io(io_error),
    })?;

    read(BufReader::new(file), config)
}

/// Reads a collection from an XML document.
///
/// # Errors
///
/// Returns an error if the document is malformed, if any value cannot be
/// interpreted, or if two recipes share an identifier.
pub fn read<R: BufRead>(reader: R, config: &Config) -> Result<Collection, LoadError> {
    let document: Document = quick_xml::de::from_reader(reader)?;
    document.into_collection(config)
}

/// Parses a collection from an XML string.
///
/// # Errors
///
/// Returns an error if the document is malformed, if any value cannot be
/// interpreted, or if two recipes share an identifier.
pub fn parse(xml: &str, config: &Config) -> Result<Collection, LoadError> {
    let document: Document = quick_xml::de::from_str(xml)?;
    document.into_collection(config)
}

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(rename = "recipe", default)]
    recipes: Vec<RecipeElement>,
}

#[derive(Debug, Deserialize)]
struct RecipeElement {
    #[serde(rename = "@id")]
    id: String,
    title: String,
    date: String,
    #[serde(rename = "ingredient", default)]
    ingredients: Vec<IngredientElement>,
    #[serde(default)]
    preparation: Preparation,
    comment: Option<String>,
    nutrition: NutritionElement,
    #[serde(default)]
    related: Vec<RelatedElement>,
}

#[derive(Debug, Deserialize)]
struct IngredientElement {
    #[serde(rename = "@name")]
    name: Option<String>,
    #[serde(rename = "@amount")]
    amount: Option<String>,
    #[serde(rename = "@unit")]
    unit: Option<String>,
    #[serde(rename = "ingredient", default)]
    ingredients: Vec<IngredientElement>,
    preparation: Option<Preparation>,
}

#[derive(Debug, Default, Deserialize)]
struct Preparation {
    #[serde(rename = "step", default)]
    steps: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct NutritionElement {
    #[serde(rename = "@calories")]
    calories: String,
    #[serde(rename = "@fat")]
    fat: String,
    #[serde(rename = "@carbohydrates")]
    carbohydrates: String,
    #[serde(rename = "@protein")]
    protein: String,
    #[serde(rename = "@alcohol")]
    alcohol: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RelatedElement {
    #[serde(rename = "@ref")]
    id: String,
    #[serde(rename = "$text", default)]
    annotation: String,
}

impl Document {
    fn into_collection(self, config: &Config) -> Result<Collection, LoadError> {
        let mut collection = Collection::with_capacity(self.recipes.len());

        for element in self.recipes {
            let (id, recipe) = element.into_recipe(config)?;
            collection.insert(id, recipe)?;
        }

        tracing::debug!(recipes = collection.len(), "loaded recipe collection");
        Ok(collection)
    }
}

impl RecipeElement {
    fn into_recipe(self, config: &Config) -> Result<(String, Recipe), LoadError> {
        let Self {
            id,
            title,
            date,
            ingredients,
            preparation,
            comment,
            nutrition,
            related,
        } = self;

        let date = parse_date(&date, config.date_format()).map_err(|source| LoadError::Date {
            recipe: id.clone(),
            value: date.clone(),
            source,
        })?;

        let nutrition = nutrition.into_nutrition(&id)?;

        let ingredients = ingredients
            .into_iter()
            .map(IngredientElement::into_ingredient)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| LoadError::Ingredient {
                recipe: id.clone(),
                source,
            })?;

        let mut recipe = Recipe::new(title, date, nutrition)
            .with_ingredients(ingredients)
            .with_preparation(preparation.steps);

        if let Some(comment) = comment {
            recipe = recipe.with_comment(comment);
        }

        if !related.is_empty() {
            recipe = recipe.with_related(
                related
                    .into_iter()
                    .map(|r| Related {
                        id: r.id,
                        annotation: r.annotation,
                    })
                    .collect(),
            );
        }

        tracing::trace!(%id, title = recipe.title(), "parsed recipe");
        Ok((id, recipe))
    }
}

impl IngredientElement {
    fn into_ingredient(self) -> Result<Ingredient, IngredientError> {
        let amount = Ingredient::parse_amount(self.amount.as_deref())?;
        let name = self
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNNAMED.to_string());

        let ingredients = self
            .ingredients
            .into_iter()
            .map(Self::into_ingredient)
            .collect::<Result<Vec<_>, _>>()?;

        let mut ingredient = Ingredient::new(name, amount)?.with_ingredients(ingredients);

        if let Some(unit) = self.unit {
            ingredient = ingredient.with_unit(unit);
        }

        if let Some(preparation) = self.preparation {
            ingredient = ingredient.with_preparation(preparation.steps);
        }

        Ok(ingredient)
    }
}

impl NutritionElement {
    fn into_nutrition(self, recipe: &str) -> Result<NutritionInfo, LoadError> {
        let number = |field: &'static str, value: &str| {
            parse_number(value).ok_or_else(|| LoadError::Nutrition {
                recipe: recipe.to_string(),
                field,
                value: value.to_string(),
            })
        };

        let nutrition = NutritionInfo::new(
            number("calories", &self.calories)?,
            number("fat", &self.fat)?,
            number("carbohydrates", &self.carbohydrates)?,
            number("protein", &self.protein)?,
        );

        match self.alcohol {
            Some(alcohol) => Ok(nutrition.with_alcohol(number("alcohol", &alcohol)?)),
            None => Ok(nutrition),
        }
    }
}

/// Parses a number, ignoring a trailing `%`.
fn parse_number(value: &str) -> Option<f64> {
    let value = value.trim();
    value
        .strip_suffix('%')
        .unwrap_or(value)
        .trim_end()
        .parse()
        .ok()
}

/// Parses a date, ignoring a leading weekday name such as `Fri, `.
///
/// Weekday names are informational in recipe documents and are not checked
/// against the date.
fn parse_date(value: &str, format: &str) -> Result<NaiveDate, chrono::ParseError> {
    let value = value.trim();
    let date = match value.split_once(',') {
        Some((weekday, rest))
            if !weekday.is_empty() && weekday.chars().all(|c| c.is_ascii_alphabetic()) =>
        {
            rest.trim_start()
        }
        _ => value,
    };

    NaiveDate::parse_from_str(date, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Flatten, query};

    const DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rcp:collection xmlns:rcp="http://www.brics.dk/ixwt/recipes">
  <rcp:description>Test recipes</rcp:description>
  <rcp:recipe id="r1">
    <rcp:title>Egg Bread</rcp:title>
    <rcp:date>Fri, 18 Jan 02</rcp:date>
    <rcp:ingredient name="Egg" amount="2" unit="unit"/>
    <rcp:ingredient name="Flour" amount="1" unit="cup">
      <rcp:ingredient name="Salt" amount="0.5" unit="tsp"/>
    </rcp:ingredient>
    <rcp:preparation>
      <rcp:step>mix</rcp:step>
    </rcp:preparation>
    <rcp:nutrition calories="300" fat="10%" carbohydrates="60%" protein="30%"/>
  </rcp:recipe>
  <rcp:recipe id="r2">
    <rcp:title>Zuppa Inglese</rcp:title>
    <rcp:date>Wed, 4 Feb 98</rcp:date>
    <rcp:ingredient name="milk" amount="4" unit="cup"/>
    <rcp:ingredient name="pastry cream">
      <rcp:ingredient name="egg yolks" amount="5"/>
      <rcp:ingredient name="sugar" amount="*"/>
      <rcp:preparation>
        <rcp:step>Whisk the yolks.</rcp:step>
        <rcp:step>Heat gently.</rcp:step>
      </rcp:preparation>
    </rcp:ingredient>
    <rcp:ingredient amount="1"/>
    <rcp:preparation>
      <rcp:step>Layer.</rcp:step>
      <rcp:step>Chill.</rcp:step>
    </rcp:preparation>
    <rcp:comment>Best the next day.</rcp:comment>
    <rcp:nutrition calories="612" fat="49%" carbohydrates="45%" protein="6%" alcohol="2%"/>
    <rcp:related ref="r1">Bread on the side</rcp:related>
  </rcp:recipe>
</rcp:collection>
"#;

    fn parsed() -> Collection {
        parse(DOCUMENT, &Config::default()).unwrap()
    }

    #[test]
    fn reads_every_recipe_by_identifier() {
        let collection = parsed();
        assert_eq!(collection.ids().collect::<Vec<_>>(), ["r1", "r2"]);
        assert_eq!(collection.get("r1").unwrap().title(), "Egg Bread");
    }

    #[test]
    fn reads_nested_ingredients_in_order() {
        let collection = parsed();
        let names: Vec<_> = collection
            .get("r2")
            .unwrap()
            .flattened()
            .map(Ingredient::name)
            .collect();

        assert_eq!(names, ["milk", "pastry cream", "egg yolks", "sugar", UNNAMED]);
    }

    #[test]
    fn normalizes_amounts_and_units() {
        let collection = parsed();
        let zuppa = collection.get("r2").unwrap();
        let cream = &zuppa.ingredients()[1];

        assert_eq!(cream.amount(), 0.0);
        assert_eq!(cream.unit(), None);
        assert_eq!(cream.ingredients()[1].amount(), 0.0);
        assert_eq!(zuppa.ingredients()[0].unit(), Some("cup"));
    }

    #[test]
    fn reads_ingredient_preparation() {
        let collection = parsed();
        let zuppa = collection.get("r2").unwrap();

        assert_eq!(
            zuppa.ingredients()[1].preparation().unwrap(),
            ["Whisk the yolks.", "Heat gently."]
        );
        assert_eq!(zuppa.ingredients()[0].preparation(), None);
        assert_eq!(query::step_count(zuppa), 4);
    }

    #[test]
    fn reads_recipe_fields() {
        let collection = parsed();
        let zuppa = collection.get("r2").unwrap();

        assert_eq!(zuppa.date(), NaiveDate::from_ymd_opt(1998, 2, 4).unwrap());
        assert_eq!(zuppa.preparation(), ["Layer.", "Chill."]);
        assert_eq!(zuppa.comment(), Some("Best the next day."));
        assert_eq!(
            zuppa.related().unwrap(),
            [Related {
                id: "r1".to_string(),
                annotation: "Bread on the side".to_string(),
            }]
        );

        let bread = collection.get("r1").unwrap();
        assert_eq!(bread.date(), NaiveDate::from_ymd_opt(2002, 1, 18).unwrap());
        assert_eq!(bread.comment(), None);
        assert_eq!(bread.related(), None);
    }

    #[test]
    fn strips_percent_signs_from_nutrition() {
        let collection = parsed();
        let nutrition = collection.get("r2").unwrap().nutrition();

        assert_eq!(nutrition.calories(), 612.0);
        assert_eq!(nutrition.fat(), 49.0);
        assert_eq!(nutrition.carbohydrates(), 45.0);
        assert_eq!(nutrition.protein(), 6.0);
        assert_eq!(nutrition.alcohol(), Some(2.0));
        assert_eq!(collection.get("r1").unwrap().nutrition().alcohol(), None);
    }

    #[test]
    fn empty_collection_is_valid() {
        let collection = parse("<collection/>", &Config::default()).unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn rejects_duplicate_identifiers() {
        let recipe = r#"<recipe id="r1"><title>A</title><date>18 Jan 02</date>
            <nutrition calories="1" fat="1%" carbohydrates="1%" protein="1%"/></recipe>"#;
        let document = format!("<collection>{recipe}{recipe}</collection>");

        let err = parse(&document, &Config::default()).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateId(_)));
    }

    #[test]
    fn rejects_invalid_amount() {
        let document = r#"<collection><recipe id="r9"><title>A</title><date>18 Jan 02</date>
            <ingredient name="flour" amount="lots"/>
            <nutrition calories="1" fat="1%" carbohydrates="1%" protein="1%"/>
            </recipe></collection>"#;

        let err = parse(document, &Config::default()).unwrap_err();
        match err {
            LoadError::Ingredient { recipe, source } => {
                assert_eq!(recipe, "r9");
                assert_eq!(source, IngredientError::InvalidAmount("lots".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_date() {
        let document = r#"<collection><recipe id="r9"><title>A</title><date>yesterday</date>
            <nutrition calories="1" fat="1%" carbohydrates="1%" protein="1%"/>
            </recipe></collection>"#;

        let err = parse(document, &Config::default()).unwrap_err();
        assert!(matches!(err, LoadError::Date { ref value, .. } if value == "yesterday"));
    }

    #[test]
    fn rejects_invalid_nutrition() {
        let document = r#"<collection><recipe id="r9"><title>A</title><date>18 Jan 02</date>
            <nutrition calories="many" fat="1%" carbohydrates="1%" protein="1%"/>
            </recipe></collection>"#;

        let err = parse(document, &Config::default()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Nutrition {
                field: "calories",
                ..
            }
        ));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("recipes.xml");

        let err = load(&missing, &Config::default()).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(path) if path == missing));
    }

    #[test]
    fn load_reads_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("recipes.xml");
        std::fs::write(&path, DOCUMENT).unwrap();

        let collection = load(&path, &Config::default()).unwrap();
        assert_eq!(collection, parsed());
    }

    #[test]
    fn date_weekday_is_optional() {
        let format = Config::default();
        let expected = NaiveDate::from_ymd_opt(2002, 1, 18).unwrap();

        assert_eq!(parse_date("18 Jan 02", format.date_format()), Ok(expected));
        assert_eq!(parse_date(" Fri, 18 Jan 02 ", format.date_format()), Ok(expected));
        // The weekday is not checked against the date.
        assert_eq!(parse_date("Mon, 18 Jan 02", format.date_format()), Ok(expected));
    }

    #[test]
    fn number_parsing() {
        assert_eq!(parse_number("23%"), Some(23.0));
        assert_eq!(parse_number(" 23 % "), Some(23.0));
        assert_eq!(parse_number("1167"), Some(1167.0));
        assert_eq!(parse_number("%"), None);
    }
}
