// ABOUTME: Pantry CLI - command-line front end for the recipe recommendation pipeline
// ABOUTME: Recommends, normalizes, scores, searches the catalog, and checks the LLM backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors
//!
//! Usage:
//! ```bash
//! # Recommend dinner recipes from a CSV catalog
//! pantry-cli recommend --catalog recipes.csv --ingredients "pasta, tomato, garlic" \
//!     --meal-type Dinner --cuisine Italian --time 30
//!
//! # Same request, JSON output, no LLM fallback
//! pantry-cli recommend --catalog recipes.csv --ingredients "rice, egg" \
//!     --meal-type Lunch --cuisine Chinese --time 20 --no-generate --json
//!
//! # Show how ingredient text is normalized
//! pantry-cli normalize "Chilli, garbanzo beans\nTomatoes"
//!
//! # Score one recipe against a pantry
//! pantry-cli score --recipe-ingredients "rice, egg, onion" --cooking-time 20 \
//!     --ingredients "rice, egg" --time 30
//!
//! # Keyword search and catalog summary
//! pantry-cli search --catalog recipes.csv "spicy chickpea curry"
//! pantry-cli catalog --catalog recipes.csv
//!
//! # Verify the configured LLM backend
//! pantry-cli health
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pantry_chef::config::LogLevel;
use pantry_chef::logging::LoggingConfig;
use pantry_core::models::RecipeRecord;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "pantry-cli",
    about = "Pantry Chef recipe recommendation CLI",
    long_about = "Recommends recipes from what is in your pantry, falling back to LLM-generated recipes when the catalog has nothing suitable."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Recommend recipes for a set of ingredients
    Recommend {
        /// Available ingredients, comma or newline separated
        #[arg(long, short = 'i')]
        ingredients: String,

        /// Meal type (Breakfast, Lunch, Dinner, ...)
        #[arg(long, short = 'm')]
        meal_type: String,

        /// Cuisine (Italian, Indian, ...)
        #[arg(long, short = 'c')]
        cuisine: String,

        /// Time budget in minutes
        #[arg(long, short = 't')]
        time: u32,

        /// Catalog file (.csv or .json), overrides `PANTRY_CATALOG_PATH`
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Maximum number of catalog recipes
        #[arg(long)]
        top: Option<usize>,

        /// Minimum ingredient overlap (0-1)
        #[arg(long)]
        min_overlap: Option<f64>,

        /// Never call the LLM fallback
        #[arg(long)]
        no_generate: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the normalized form of ingredient text
    Normalize {
        /// Ingredient text, comma or newline separated
        text: String,
    },

    /// Score one recipe against available ingredients
    Score {
        /// Recipe name, for display only
        #[arg(long, default_value = "Ad hoc recipe")]
        name: String,

        /// Recipe ingredients, comma separated
        #[arg(long)]
        recipe_ingredients: String,

        /// Recipe cooking time in minutes
        #[arg(long)]
        cooking_time: u32,

        /// Available ingredients, comma or newline separated
        #[arg(long, short = 'i')]
        ingredients: String,

        /// Time budget in minutes
        #[arg(long, short = 't')]
        time: u32,
    },

    /// Keyword search over recipe names and ingredients
    Search {
        /// Free-text query
        query: String,

        /// Catalog file (.csv or .json), overrides `PANTRY_CATALOG_PATH`
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Maximum number of results
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Summarize the catalog: size, meal types, cuisines
    Catalog {
        /// Catalog file (.csv or .json), overrides `PANTRY_CATALOG_PATH`
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Report the configured LLM backend, its key, model, and reachability
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level(LogLevel::Debug)
    } else {
        logging
    };
    logging.init()?;
    debug!("Pantry CLI started");

    match cli.command {
        Command::Recommend {
            ingredients,
            meal_type,
            cuisine,
            time,
            catalog,
            top,
            min_overlap,
            no_generate,
            json,
        } => {
            let options = commands::recommend::RecommendOptions {
                ingredients,
                meal_type,
                cuisine,
                time,
                catalog,
                top,
                min_overlap,
                no_generate,
                json,
            };
            commands::recommend::run(options).await?;
        }
        Command::Normalize { text } => commands::inspect::normalize(&text),
        Command::Score {
            name,
            recipe_ingredients,
            cooking_time,
            ingredients,
            time,
        } => {
            let recipe = RecipeRecord::new(name, recipe_ingredients, cooking_time, "", "", "-");
            commands::inspect::score(&recipe, &ingredients, time)?;
        }
        Command::Search {
            query,
            catalog,
            limit,
        } => commands::catalog::search(catalog, &query, limit)?,
        Command::Catalog { catalog } => commands::catalog::info(catalog)?,
        Command::Health => commands::health::run().await?,
    }

    Ok(())
}
