// ABOUTME: Matching configuration for the recipe pipeline with environment overrides
// ABOUTME: Holds the overlap threshold, top-N bound, and scoring weights with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

//! Matching Configuration Module
//!
//! Defaults mirror the constants in `pantry_core::constants`. Every value can be
//! overridden via environment variables with the `PANTRY_MATCHING_` and
//! `PANTRY_SCORING_` prefixes.

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

use pantry_core::constants::matching::{DEFAULT_MIN_OVERLAP_FRACTION, DEFAULT_TOP_N};

use crate::recipes::ScoringWeights;

/// Matching configuration container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Minimum fraction (0-1) of a recipe's ingredients the user must have
    pub min_overlap_fraction: f64,
    /// Maximum number of catalog candidates returned per request
    pub top_n: usize,
    /// Weights of the recipe scorer
    pub scoring: ScoringWeights,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            min_overlap_fraction: DEFAULT_MIN_OVERLAP_FRACTION,
            top_n: DEFAULT_TOP_N,
            scoring: ScoringWeights::default(),
        }
    }
}

impl MatchingConfig {
    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.min_overlap_fraction) {
            return Err(ConfigError::InvalidRange(
                "min_overlap_fraction must be between 0 and 1",
            ));
        }

        if self.top_n == 0 {
            return Err(ConfigError::ValueOutOfRange("top_n must be > 0"));
        }

        self.scoring.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "PANTRY_MATCHING_MIN_OVERLAP",
            &mut self.min_overlap_fraction,
        )?;
        Self::apply_env_var("PANTRY_MATCHING_TOP_N", &mut self.top_n)?;

        // Scoring weights
        Self::apply_env_var(
            "PANTRY_SCORING_INGREDIENT_WEIGHT",
            &mut self.scoring.ingredient_weight,
        )?;
        Self::apply_env_var("PANTRY_SCORING_TIME_WEIGHT", &mut self.scoring.time_weight)?;
        Self::apply_env_var("PANTRY_SCORING_BASE_SCORE", &mut self.scoring.base_score)?;

        Ok(self)
    }
}
