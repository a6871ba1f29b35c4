// ABOUTME: Recipe generation collaborator used when the catalog yields too few candidates
// ABOUTME: Defines the generation request, the RecipeGenerator trait, and the LLM implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

//! # Recipe Generation
//!
//! The recommendation service treats generation as a black box: it sends the
//! normalized ingredients and request constraints, and gets back either
//! recipe records or a [`GenerationError`]. Every failure is recoverable; the
//! service turns it into a "no generated recipes" outcome.

mod llm_generator;
pub mod parser;

pub use llm_generator::LlmRecipeGenerator;
pub use pantry_core::errors::GenerationError;
pub use parser::{extract_json, parse_recipes};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use pantry_core::constants::generation::DEFAULT_RECIPE_COUNT;
use pantry_core::models::RecipeRecord;

/// Inputs of one generation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Normalized user ingredients
    pub ingredients: Vec<String>,
    /// Requested meal type
    pub meal_type: String,
    /// Requested cuisine
    pub cuisine: String,
    /// Time budget in minutes
    pub time_budget: u32,
    /// Number of recipes wanted
    pub count: usize,
}

impl GenerationRequest {
    /// Request the default number of recipes
    #[must_use]
    pub fn new(
        ingredients: Vec<String>,
        meal_type: impl Into<String>,
        cuisine: impl Into<String>,
        time_budget: u32,
    ) -> Self {
        Self {
            ingredients,
            meal_type: meal_type.into(),
            cuisine: cuisine.into(),
            time_budget,
            count: DEFAULT_RECIPE_COUNT,
        }
    }

    /// Override the number of recipes
    #[must_use]
    pub const fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }
}

/// A service that synthesizes recipes for a request
#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    /// Identifier used in logs
    fn name(&self) -> &str;

    /// Generate up to `request.count` recipes.
    ///
    /// Returned records carry at least a name, ingredients, a positive
    /// cooking time and instructions. They are expected, not guaranteed, to
    /// respect the request's meal type, cuisine and time budget.
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<RecipeRecord>, GenerationError>;
}
