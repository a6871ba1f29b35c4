// ABOUTME: Top-N candidate selection over an already ranked recipe list
// ABOUTME: Pure truncation and projection to a plain, serializable candidate record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

use serde::{Deserialize, Serialize};

use pantry_core::models::RecipeRecord;

use super::filter::RankedRecipe;

/// A recipe offered to the caller, with its ingredient overlap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Recipe name
    #[serde(rename = "recipe_name")]
    pub name: String,
    /// Comma-delimited ingredient names
    pub ingredients: String,
    /// Cooking time in minutes
    pub cooking_time: u32,
    /// Meal type
    pub meal_type: String,
    /// Cuisine
    pub cuisine: String,
    /// Cooking instructions
    pub instructions: String,
    /// Ingredient overlap on the 0-100 scale
    #[serde(rename = "ingredient_overlap")]
    pub overlap: f64,
}

impl Candidate {
    /// Project a record, defaulting the overlap to 0 when it was never computed
    #[must_use]
    pub fn from_record(recipe: &RecipeRecord, overlap: Option<f64>) -> Self {
        Self {
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.clone(),
            cooking_time: recipe.cooking_time,
            meal_type: recipe.meal_type.clone(),
            cuisine: recipe.cuisine.clone(),
            instructions: recipe.instructions.clone(),
            overlap: overlap.unwrap_or(0.0),
        }
    }

    /// Rebuild a plain record (without reason) from this candidate
    #[must_use]
    pub fn to_record(&self) -> RecipeRecord {
        RecipeRecord::new(
            self.name.clone(),
            self.ingredients.clone(),
            self.cooking_time,
            self.meal_type.clone(),
            self.cuisine.clone(),
            self.instructions.clone(),
        )
    }
}

impl From<&RankedRecipe<'_>> for Candidate {
    fn from(ranked: &RankedRecipe<'_>) -> Self {
        Self::from_record(ranked.recipe, Some(ranked.overlap))
    }
}

/// First `top_n` entries of an already sorted list, in input order.
///
/// Never re-sorts; returns fewer entries when the input is shorter.
#[must_use]
pub fn select_top(ranked: &[RankedRecipe<'_>], top_n: usize) -> Vec<Candidate> {
    ranked.iter().take(top_n).map(Candidate::from).collect()
}
