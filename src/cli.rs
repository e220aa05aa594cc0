use std::path::{Path, PathBuf};

mod render;
mod terminal;

use anyhow::Context;
use clap::ArgAction;
use cookbook::{Collection, Config, Recipe, query};
use render::{OutputFormat, Report};
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The recipe document to query (overrides the configured document)
    #[arg(short, long, global = true)]
    document: Option<PathBuf>,

    /// The configuration file
    #[arg(short, long, default_value = "recipes.toml", global = true)]
    config: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let mut config = load_config(&self.config)?;
        if let Some(document) = self.document {
            config.set_document(document);
        }

        if let Command::Config(command) = &self.command {
            return command.run(&self.config, &config);
        }

        let collection = load_collection(&config)?;
        self.command.run(&collection)?.print(self.output)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// Reads the configuration file, falling back to defaults if there isn't one.
fn load_config(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    Config::load(path).map_err(|e| anyhow::anyhow!(e))
}

#[instrument(level = "debug", skip(config))]
fn load_collection(config: &Config) -> anyhow::Result<Collection> {
    let document = config.document();
    let collection = Collection::load(document, config)
        .with_context(|| format!("Failed to load recipes from {}", document.display()))?;

    tracing::info!(recipes = collection.len(), "collection loaded");
    Ok(collection)
}

/// Looks up a recipe by its exact title.
fn find<'a>(collection: &'a Collection, title: &str) -> anyhow::Result<&'a Recipe> {
    query::recipe_by_title(collection, title)
        .with_context(|| format!("No recipe titled {title:?}"))
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// List the title of every recipe
    Titles,

    /// Total amount of an ingredient across all recipes
    Total {
        /// Substring of the ingredient name
        ingredient: String,
    },

    /// Amount of an ingredient in one recipe
    Amount {
        /// Exact recipe title
        recipe: String,
        /// Substring of the ingredient name
        ingredient: String,
    },

    /// Recipes that use an ingredient
    Containing {
        /// Substring of the ingredient name
        ingredient: String,
    },

    /// Amount of an ingredient in each recipe, by recipe identifier
    Counts {
        /// Substring of the ingredient name
        ingredient: String,
    },

    /// Recipes with fewer calories than a limit
    UnderCalories {
        /// Calorie limit (exclusive)
        calories: f64,
    },

    /// Describe the total amount of an ingredient in one recipe
    AmountString {
        /// Exact recipe title
        recipe: String,
        /// Substring of the ingredient name
        ingredient: String,
    },

    /// Show a range of a recipe's top-level preparation steps
    Steps {
        /// Exact recipe title
        recipe: String,
        /// Index of the first step (zero-based)
        #[arg(long, default_value_t = 0)]
        from: usize,
        /// Index one past the last step
        #[arg(long)]
        to: Option<usize>,
    },

    /// Recipes with more preparation steps than a threshold
    AboveSteps {
        /// Step threshold (exclusive)
        threshold: usize,
    },

    /// Recipes that do not use an ingredient
    Excluding {
        /// Substring of the ingredient name
        ingredient: String,
    },

    /// Recipes sharing an ingredient with another recipe
    Similar {
        /// Exact recipe title
        recipe: String,
    },

    /// The recipe with the most calories
    MaxCalories,

    /// The recipe with the highest fat percentage
    MaxFat,

    /// The most frequently used unit
    CommonUnit,

    /// The most frequently used ingredient
    CommonIngredient,

    /// Number of ingredients, including nested ones, in each recipe
    IngredientCounts,

    /// Recipes ordered by total ingredient amount, largest first
    ByAmount,

    /// The recipes using each distinct ingredient
    Usages,

    /// Number of recipes for each total step count
    Histogram,

    /// The recipe with the fewest preparation steps
    Easiest,

    /// Show detailed information about a recipe
    Show {
        /// Exact recipe title
        recipe: String,
    },

    /// Show or save the effective configuration
    Config(ConfigCommand),
}

impl Command {
    #[instrument(level = "debug", skip(collection))]
    fn run(self, collection: &Collection) -> anyhow::Result<Report<'_>> {
        let report = match self {
            Self::Titles => Report::Titles(query::titles(collection)),
            Self::Total { ingredient } => {
                Report::Number(query::total_amount(collection, &ingredient))
            }
            Self::Amount { recipe, ingredient } => {
                Report::Number(query::recipe_amount(find(collection, &recipe)?, &ingredient))
            }
            Self::Containing { ingredient } => {
                Report::Recipes(query::containing(collection, &ingredient))
            }
            Self::Counts { ingredient } => {
                Report::Amounts(query::amounts_by_recipe(collection, &ingredient))
            }
            Self::UnderCalories { calories } => {
                Report::Recipes(query::under_calories(collection, calories))
            }
            Self::AmountString { recipe, ingredient } => Report::Text(query::amount_string(
                find(collection, &recipe)?,
                &ingredient,
            )?),
            Self::Steps { recipe, from, to } => {
                Report::Steps(query::preparation_slice(find(collection, &recipe)?, from, to))
            }
            Self::AboveSteps { threshold } => {
                Report::Recipes(query::above_steps(collection, threshold))
            }
            Self::Excluding { ingredient } => {
                Report::Recipes(query::excluding(collection, &ingredient))
            }
            Self::Similar { recipe } => {
                Report::Recipes(query::similar(collection, find(collection, &recipe)?))
            }
            Self::MaxCalories => Report::Recipe(query::max_calories(collection)?),
            Self::MaxFat => Report::Recipe(query::max_fat(collection)?),
            Self::CommonUnit => Report::Text(query::most_common_unit(collection)?.to_string()),
            Self::CommonIngredient => {
                Report::Text(query::most_common_ingredient(collection)?.to_string())
            }
            Self::IngredientCounts => Report::Counts(query::ingredient_counts(collection)),
            Self::ByAmount => Report::Recipes(query::by_total_amount(collection)),
            Self::Usages => Report::Usages(query::ingredient_usages(collection)),
            Self::Histogram => Report::Histogram(query::step_histogram(collection)),
            Self::Easiest => Report::Recipe(query::easiest(collection)?),
            Self::Show { recipe } => Report::Detail(find(collection, &recipe)?),
            Self::Config(_) => anyhow::bail!("configuration is not a query"),
        };

        Ok(report)
    }
}

#[derive(Debug, clap::Args)]
pub struct ConfigCommand {
    /// Write the effective configuration to the config file
    #[arg(long)]
    save: bool,
}

impl ConfigCommand {
    fn run(&self, path: &Path, config: &Config) -> anyhow::Result<()> {
        if self.save {
            config.save(path).map_err(|e| anyhow::anyhow!(e))?;
            println!("Saved configuration to {}", path.display());
            return Ok(());
        }

        let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
        print!("{content}");
        Ok(())
    }
}
