// ABOUTME: Multi-factor recipe scoring from ingredient overlap, time efficiency, and a base credit
// ABOUTME: Fixed, explainable heuristic usable on catalog and generated recipes alike
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pantry_core::constants::matching::PERCENT_SCALE;
use pantry_core::constants::scoring::{BASE_SCORE, INGREDIENT_WEIGHT, MAX_SCORE, TIME_WEIGHT};
use pantry_core::errors::{AppError, ErrorCode};
use pantry_core::models::RecipeRecord;

use super::overlap::ingredient_overlap;
use crate::config::ConfigError;

/// Invalid scorer input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// The time limit must be a positive number of minutes
    #[error("time limit must be greater than 0 minutes")]
    InvalidTimeLimit,
}

impl From<ScoringError> for AppError {
    fn from(error: ScoringError) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, error.to_string())
    }
}

/// Weights of the three score terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Multiplier for the overlap term
    pub ingredient_weight: f64,
    /// Multiplier for the time efficiency term
    pub time_weight: f64,
    /// Flat credit added to every score
    pub base_score: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            ingredient_weight: INGREDIENT_WEIGHT,
            time_weight: TIME_WEIGHT,
            base_score: BASE_SCORE,
        }
    }
}

impl ScoringWeights {
    /// Validate the weights
    ///
    /// # Errors
    ///
    /// Returns an error when any weight is negative or not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [self.ingredient_weight, self.time_weight, self.base_score];
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(ConfigError::InvalidWeights("scoring weights must be finite"));
        }
        if weights.iter().any(|w| *w < 0.0) {
            return Err(ConfigError::InvalidWeights(
                "scoring weights must be non-negative",
            ));
        }
        Ok(())
    }
}

/// Per-term contributions to a recipe score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Weighted overlap term
    pub ingredient: f64,
    /// Weighted time efficiency term
    pub time: f64,
    /// Flat credit
    pub base: f64,
    /// Sum of the terms, capped at 100
    pub total: f64,
}

/// Scores single recipes against a user's pantry and time budget
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecipeScorer {
    weights: ScoringWeights,
}

impl RecipeScorer {
    /// Scorer with custom weights
    #[must_use]
    pub const fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Weights in use
    #[must_use]
    pub const fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score `recipe` on a 0-100 scale.
    ///
    /// Faster recipes score higher: the fraction of `time_limit` a recipe
    /// consumes is penalized, so the score never increases with cooking time.
    ///
    /// # Errors
    ///
    /// Returns `ScoringError::InvalidTimeLimit` when `time_limit` is 0
    pub fn score<S: AsRef<str>>(
        &self,
        recipe: &RecipeRecord,
        user_ingredients: &[S],
        time_limit: u32,
    ) -> Result<f64, ScoringError> {
        self.breakdown(recipe, user_ingredients, time_limit)
            .map(|breakdown| breakdown.total)
    }

    /// Score `recipe` and report each term separately
    ///
    /// # Errors
    ///
    /// Returns `ScoringError::InvalidTimeLimit` when `time_limit` is 0
    pub fn breakdown<S: AsRef<str>>(
        &self,
        recipe: &RecipeRecord,
        user_ingredients: &[S],
        time_limit: u32,
    ) -> Result<ScoreBreakdown, ScoringError> {
        if time_limit == 0 {
            return Err(ScoringError::InvalidTimeLimit);
        }

        let overlap = ingredient_overlap(&recipe.ingredients, user_ingredients);
        let ingredient = overlap.min(PERCENT_SCALE) * self.weights.ingredient_weight;

        let time_used = (f64::from(recipe.cooking_time) / f64::from(time_limit)) * PERCENT_SCALE;
        let time = (PERCENT_SCALE - time_used).max(0.0) * self.weights.time_weight;

        let base = self.weights.base_score;
        let total = (ingredient + time + base).min(MAX_SCORE);

        Ok(ScoreBreakdown {
            ingredient,
            time,
            base,
            total,
        })
    }
}

/// Score `recipe` with the default weights
///
/// # Errors
///
/// Returns `ScoringError::InvalidTimeLimit` when `time_limit` is 0
pub fn score_recipe<S: AsRef<str>>(
    recipe: &RecipeRecord,
    user_ingredients: &[S],
    time_limit: u32,
) -> Result<f64, ScoringError> {
    RecipeScorer::default().score(recipe, user_ingredients, time_limit)
}
