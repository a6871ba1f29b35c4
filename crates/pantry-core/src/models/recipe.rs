// ABOUTME: Recipe record model shared by catalog-sourced and LLM-generated recipes
// ABOUTME: Flat record with delimited ingredients, cooking time, and categorical fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

use serde::{Deserialize, Serialize};

use crate::constants::generation::DEFAULT_REASON;
use crate::errors::{AppError, AppResult};

/// One recipe, either loaded from the catalog or produced by the generation service.
///
/// Ingredients stay a single comma-delimited string at this boundary; the
/// matching engine splits it when computing overlap. Meal type and cuisine are
/// categorical values compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRecord {
    /// Recipe name
    #[serde(rename = "recipe_name", alias = "name")]
    pub name: String,
    /// Comma-delimited ingredient names
    pub ingredients: String,
    /// Cooking time in minutes (always > 0 for a valid record)
    pub cooking_time: u32,
    /// Meal type (Breakfast, Lunch, Dinner, ...)
    #[serde(default)]
    pub meal_type: String,
    /// Cuisine (Italian, Indian, ...)
    #[serde(default)]
    pub cuisine: String,
    /// Free-form cooking instructions
    pub instructions: String,
    /// Human-readable justification, mostly set on generated recipes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl RecipeRecord {
    /// Create a record with every categorical field set
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        ingredients: impl Into<String>,
        cooking_time: u32,
        meal_type: impl Into<String>,
        cuisine: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
            cooking_time,
            meal_type: meal_type.into(),
            cuisine: cuisine.into(),
            instructions: instructions.into(),
            reason: None,
        }
    }

    /// Attach a justification
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Justification, or the stock one when none was provided
    #[must_use]
    pub fn reason_or_default(&self) -> &str {
        self.reason.as_deref().unwrap_or(DEFAULT_REASON)
    }

    /// Case-insensitive meal type comparison
    #[must_use]
    pub fn matches_meal_type(&self, meal_type: &str) -> bool {
        self.meal_type.to_lowercase() == meal_type.to_lowercase()
    }

    /// Case-insensitive cuisine comparison
    #[must_use]
    pub fn matches_cuisine(&self, cuisine: &str) -> bool {
        self.cuisine.to_lowercase() == cuisine.to_lowercase()
    }

    /// Whether the recipe can be cooked within `budget_mins`
    #[must_use]
    pub const fn fits_time_budget(&self, budget_mins: u32) -> bool {
        self.cooking_time <= budget_mins
    }

    /// Check the structural invariants of a record
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when the name, ingredients, or instructions
    /// are blank and `ValueOutOfRange` when the cooking time is zero.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::missing_field("recipe_name"));
        }
        if self.ingredients.trim().is_empty() {
            return Err(AppError::missing_field("ingredients"));
        }
        if self.instructions.trim().is_empty() {
            return Err(AppError::missing_field("instructions"));
        }
        if self.cooking_time == 0 {
            return Err(AppError::out_of_range(format!(
                "Recipe '{}' has a cooking time of 0 minutes",
                self.name
            )));
        }
        Ok(())
    }
}
