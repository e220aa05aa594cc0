//! Printing query results.

use std::collections::BTreeMap;

use cookbook::{Ingredient, Recipe};
use serde::Serialize;

use super::terminal::Colorize;

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

/// The result of a single query.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Report<'a> {
    Titles(Vec<&'a str>),
    Number(f64),
    Text(String),
    Steps(&'a [String]),
    Recipes(Vec<&'a Recipe>),
    Recipe(&'a Recipe),
    Amounts(BTreeMap<&'a str, f64>),
    Counts(Vec<usize>),
    Usages(BTreeMap<&'a str, Vec<&'a str>>),
    Histogram(BTreeMap<usize, usize>),
    Detail(&'a Recipe),
}

impl Report<'_> {
    pub fn print(&self, format: OutputFormat) -> anyhow::Result<()> {
        match format {
            OutputFormat::Text => self.print_text(),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(self)?),
        }
        Ok(())
    }

    fn print_text(&self) {
        match self {
            Self::Titles(titles) => {
                for title in titles {
                    println!("{title}");
                }
            }
            Self::Number(value) => println!("{value}"),
            Self::Text(text) => println!("{text}"),
            Self::Steps(steps) => {
                for step in *steps {
                    println!("{step}");
                }
            }
            Self::Recipes(recipes) => {
                for recipe in recipes {
                    println!("{}", recipe.title());
                }
            }
            Self::Recipe(recipe) => println!("{}", recipe.title()),
            Self::Amounts(amounts) => {
                for (id, amount) in amounts {
                    println!("{} {amount}", format!("{id}:").dim());
                }
            }
            Self::Counts(counts) => {
                for count in counts {
                    println!("{count}");
                }
            }
            Self::Usages(usages) => {
                for (name, ids) in usages {
                    println!("{} {}", format!("{name}:").info(), ids.join(", "));
                }
            }
            Self::Histogram(histogram) => {
                for (steps, recipes) in histogram {
                    println!("{} {recipes}", format!("{steps} steps:").dim());
                }
            }
            Self::Detail(recipe) => print_recipe(recipe),
        }
    }
}

fn print_recipe(recipe: &Recipe) {
    println!("# {}", recipe.title());
    println!("{}\n", recipe.date().format("%e %B %Y").to_string().trim_start());

    if !recipe.ingredients().is_empty() {
        println!("{}", "Ingredients".dim());
        print_ingredients(recipe.ingredients());
    }

    if !recipe.preparation().is_empty() {
        println!("\n{}", "Preparation".dim());
        for (number, step) in recipe.preparation().iter().enumerate() {
            println!("  {}. {step}", number + 1);
        }
    }

    if let Some(comment) = recipe.comment() {
        println!("\n{}", "Comment".dim());
        println!("  {comment}");
    }

    let nutrition = recipe.nutrition();
    println!("\n{}", "Nutrition".dim());
    println!("  Calories:      {}", nutrition.calories());
    println!("  Fat:           {}%", nutrition.fat());
    println!("  Carbohydrates: {}%", nutrition.carbohydrates());
    println!("  Protein:       {}%", nutrition.protein());
    if let Some(alcohol) = nutrition.alcohol() {
        println!("  Alcohol:       {alcohol}%");
    }

    if let Some(related) = recipe.related() {
        println!("\n{}", "Related".dim());
        for related in related {
            println!("  • {} ({})", related.annotation, related.id);
        }
    }
}

/// Prints an ingredient tree, indenting nested ingredients and their steps.
fn print_ingredients(ingredients: &[Ingredient]) {
    let mut stack: Vec<(usize, &Ingredient)> = ingredients.iter().rev().map(|i| (1, i)).collect();

    while let Some((depth, ingredient)) = stack.pop() {
        let indent = "  ".repeat(depth);
        println!("{indent}• {}", describe(ingredient));

        if let Some(steps) = ingredient.preparation() {
            for step in steps {
                println!("{indent}  {}", format!("- {step}").dim());
            }
        }

        stack.extend(ingredient.ingredients().iter().rev().map(|i| (depth + 1, i)));
    }
}

fn describe(ingredient: &Ingredient) -> String {
    let name = ingredient.name();
    match (ingredient.amount(), ingredient.unit()) {
        (amount, _) if amount == 0.0 => name.to_string(),
        (amount, Some(unit)) => format!("{amount} {unit} {name}"),
        (amount, None) => format!("{amount} {name}"),
    }
}
