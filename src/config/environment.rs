// ABOUTME: Environment configuration for the recommendation service and generation fallback
// ABOUTME: Parses catalog location, fallback toggles, limits, and timeouts from PANTRY_* variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

//! Environment-based configuration for the application layer

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use pantry_core::constants::generation::{
    DEFAULT_MIN_CATALOG_CANDIDATES, DEFAULT_RECIPE_COUNT, DEFAULT_TIMEOUT_SECS,
};
use pantry_core::errors::{AppError, AppResult, ErrorCode};
use pantry_intelligence::MatchingConfig;

use super::types::LlmProviderType;

/// Environment variable names read by [`RecommenderConfig::from_env`]
pub mod env_vars {
    /// Path of the recipe catalog (CSV or JSON)
    pub const CATALOG_PATH: &str = "PANTRY_CATALOG_PATH";
    /// Whether the generation fallback may run
    pub const GENERATION_ENABLED: &str = "PANTRY_GENERATION_ENABLED";
    /// Number of recipes requested from the generation service
    pub const GENERATION_COUNT: &str = "PANTRY_GENERATION_COUNT";
    /// Upper bound on a generation call, in seconds
    pub const GENERATION_TIMEOUT_SECS: &str = "PANTRY_GENERATION_TIMEOUT_SECS";
    /// Catalog candidates below which the fallback runs
    pub const MIN_CATALOG_CANDIDATES: &str = "PANTRY_MIN_CATALOG_CANDIDATES";
    /// Whether generated recipes must match meal type and cuisine exactly
    pub const STRICT_GENERATED_VALIDATION: &str = "PANTRY_STRICT_GENERATED_VALIDATION";
}

/// Generation fallback settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Whether the fallback may run at all
    pub enabled: bool,
    /// Number of recipes to request
    pub count: usize,
    /// Upper bound on one generation call, in seconds
    pub timeout_secs: u64,
    /// Drop generated recipes whose meal type or cuisine differs from the request
    pub strict_validation: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            count: DEFAULT_RECIPE_COUNT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            strict_validation: true,
        }
    }
}

impl GenerationSettings {
    /// Timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Application configuration for the recommendation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Recipe catalog location
    pub catalog_path: Option<PathBuf>,
    /// LLM backend for generation
    pub provider: LlmProviderType,
    /// Generation fallback settings
    pub generation: GenerationSettings,
    /// Catalog candidates below which the fallback runs
    pub min_catalog_candidates: usize,
    /// Matching thresholds and scoring weights
    pub matching: MatchingConfig,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            provider: LlmProviderType::default(),
            generation: GenerationSettings::default(),
            min_catalog_candidates: DEFAULT_MIN_CATALOG_CANDIDATES,
            matching: MatchingConfig::default(),
        }
    }
}

impl RecommenderConfig {
    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unparseable value or the
    /// resulting configuration fails validation
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();

        let config = Self {
            catalog_path: env::var(env_vars::CATALOG_PATH)
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            provider: LlmProviderType::from_env(),
            generation: GenerationSettings {
                enabled: parse_bool_env(env_vars::GENERATION_ENABLED, defaults.generation.enabled)?,
                count: parse_env(env_vars::GENERATION_COUNT, defaults.generation.count)?,
                timeout_secs: parse_env(
                    env_vars::GENERATION_TIMEOUT_SECS,
                    defaults.generation.timeout_secs,
                )?,
                strict_validation: parse_bool_env(
                    env_vars::STRICT_GENERATED_VALIDATION,
                    defaults.generation.strict_validation,
                )?,
            },
            min_catalog_candidates: parse_env(
                env_vars::MIN_CATALOG_CANDIDATES,
                defaults.min_catalog_candidates,
            )?,
            matching: MatchingConfig::load()?,
        };

        config.validate()?;
        config.log_summary();
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a count or timeout is zero, or the
    /// matching configuration is invalid
    pub fn validate(&self) -> AppResult<()> {
        if self.generation.count == 0 {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("{} must be > 0", env_vars::GENERATION_COUNT),
            ));
        }
        if self.generation.timeout_secs == 0 {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("{} must be > 0", env_vars::GENERATION_TIMEOUT_SECS),
            ));
        }
        self.matching.validate()?;
        Ok(())
    }

    fn log_summary(&self) {
        info!(
            catalog = ?self.catalog_path,
            provider = %self.provider,
            generation.enabled = self.generation.enabled,
            generation.count = self.generation.count,
            generation.timeout_secs = self.generation.timeout_secs,
            min_catalog_candidates = self.min_catalog_candidates,
            min_overlap = self.matching.min_overlap_fraction,
            top_n = self.matching.top_n,
            "Recommender configuration loaded"
        );
    }
}

/// Parse `name` into `T`, or `default` when unset
fn parse_env<T: FromStr>(name: &str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| {
            AppError::new(
                ErrorCode::ConfigInvalid,
                format!("Invalid {name}: '{value}'"),
            )
        }),
        Err(_) => Ok(default),
    }
}

/// Parse a boolean flag accepting true/false, 1/0, yes/no, on/off
fn parse_bool_env(name: &str, default: bool) -> AppResult<bool> {
    let Ok(value) = env::var(name) else {
        return Ok(default);
    };
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(AppError::new(
            ErrorCode::ConfigInvalid,
            format!("Invalid {name}: '{value}' (expected true or false)"),
        )),
    }
}
