// ABOUTME: Normalize and score commands for pantry-cli
// ABOUTME: Exposes individual matching-engine steps for quick experiments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

use pantry_chef::config::RecommenderConfig;
use pantry_chef::errors::AppResult;
use pantry_core::models::RecipeRecord;
use pantry_intelligence::{IngredientNormalizer, RecipeScorer};

/// Print each normalized ingredient on its own line
pub fn normalize(text: &str) {
    let normalized = IngredientNormalizer::default().normalize(text);
    if normalized.is_empty() {
        println!("(no usable ingredients)");
        return;
    }
    for ingredient in normalized {
        println!("{ingredient}");
    }
}

/// Print the score breakdown of an ad-hoc recipe, weighted as `recommend` weighs it
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the time budget is zero
pub fn score(recipe: &RecipeRecord, ingredients: &str, time_budget: u32) -> AppResult<()> {
    let user = IngredientNormalizer::default().normalize(ingredients);
    let config = RecommenderConfig::from_env()?;
    let scorer = RecipeScorer::new(config.matching.scoring);
    let breakdown = scorer.breakdown(recipe, &user, time_budget)?;

    println!("{} ({} min)", recipe.name, recipe.cooking_time);
    println!("Ingredients: {}", user.join(", "));
    println!("  ingredient component: {:>6.2}", breakdown.ingredient);
    println!("  time component:       {:>6.2}", breakdown.time);
    println!("  base:                 {:>6.2}", breakdown.base);
    println!("  total:                {:>6.2}", breakdown.total);
    Ok(())
}
