// ABOUTME: Output formatting helpers for pantry-cli
// ABOUTME: Renders recommendation reports as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

use pantry_chef::errors::AppResult;
use pantry_chef::services::{
    NoMatchReason, Recommendation, RecommendationReport, ScoredCandidate,
};
use serde::Serialize;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a recommendation report for humans
pub fn display_report(report: &RecommendationReport) {
    println!("Request {}", report.request_id);
    println!("Using: {}", report.normalized_ingredients.join(", "));
    println!("{}", "=".repeat(80));

    match &report.outcome {
        Recommendation::Catalog(recipes) => {
            println!("{} recipe(s) from the catalog\n", recipes.len());
            recipes.iter().for_each(display_candidate);
        }
        Recommendation::Generated(recipes) => {
            println!(
                "No catalog recipe fit, {} generated suggestion(s)\n",
                recipes.len()
            );
            recipes.iter().for_each(display_candidate);
        }
        Recommendation::NoMatch(reason) => match reason {
            NoMatchReason::InsufficientIngredients => {
                println!("No usable ingredients in the input");
            }
            NoMatchReason::NoCandidates => {
                println!("No catalog recipe matches; try more ingredients or a longer time budget");
            }
            NoMatchReason::GenerationUnavailable(detail) => {
                println!("No catalog recipe matches and generation failed: {detail}");
            }
        },
    }
}

fn display_candidate(scored: &ScoredCandidate) {
    let recipe = &scored.candidate;
    println!("{}", recipe.name);
    println!(
        "   {} | {} | {} min | overlap {:.0}% | score {:.1}",
        recipe.cuisine, recipe.meal_type, recipe.cooking_time, recipe.overlap, scored.score
    );
    println!("   Ingredients: {}", recipe.ingredients);
    if let Some(reason) = &scored.reason {
        println!("   Why: {reason}");
    }
    println!("   Instructions: {}", recipe.instructions);
    println!("   Video: {}", scored.video_url);
    println!();
}
