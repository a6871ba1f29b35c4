// ABOUTME: Catalog inspection commands for pantry-cli
// ABOUTME: Prints catalog summaries and keyword search results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

use std::path::PathBuf;

use pantry_chef::errors::AppResult;
use pantry_chef::video::cuisine_search_url;

use super::load_catalog;

/// Print catalog size, meal types, and cuisines
pub fn info(path: Option<PathBuf>) -> AppResult<()> {
    let catalog = load_catalog(path)?;
    println!("Recipes:    {}", catalog.len());
    println!("Meal types: {}", catalog.meal_types().join(", "));
    println!("Cuisines:");
    for cuisine in catalog.cuisines() {
        println!("  {cuisine:<16} {}", cuisine_search_url(&cuisine));
    }
    Ok(())
}

/// Print recipes sharing keywords with `query`
pub fn search(path: Option<PathBuf>, query: &str, limit: usize) -> AppResult<()> {
    let catalog = load_catalog(path)?;
    let hits = catalog.search(query);
    if hits.is_empty() {
        println!("No recipes match '{query}'");
        return Ok(());
    }
    for recipe in hits.into_iter().take(limit) {
        println!(
            "{} ({}, {}, {} min)",
            recipe.name, recipe.cuisine, recipe.meal_type, recipe.cooking_time
        );
    }
    Ok(())
}
