// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default thresholds, scoring weights, and generation settings for Pantry Chef
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace. Runtime-tunable values have their defaults here and are
//! overridden through the configuration layer.

/// Candidate filtering defaults
pub mod matching {
    /// Minimum fraction of a recipe's ingredients the user must have (0.0 - 1.0)
    pub const DEFAULT_MIN_OVERLAP_FRACTION: f64 = 0.6;
    /// Number of candidates kept after ranking
    pub const DEFAULT_TOP_N: usize = 5;
    /// Overlap percentages are expressed on a 0-100 scale
    pub const PERCENT_SCALE: f64 = 100.0;
    /// Catalog size above which overlap computation runs on the rayon pool
    pub const PARALLEL_OVERLAP_THRESHOLD: usize = 256;
}

/// Recipe scoring weights
pub mod scoring {
    /// Weight applied to the ingredient overlap term
    pub const INGREDIENT_WEIGHT: f64 = 0.4;
    /// Weight applied to the time efficiency term
    pub const TIME_WEIGHT: f64 = 0.3;
    /// Flat credit for any recipe reaching the scorer
    pub const BASE_SCORE: f64 = 30.0;
    /// Upper bound of the final score
    pub const MAX_SCORE: f64 = 100.0;
}

/// Generation fallback defaults
pub mod generation {
    /// Reason attached to generated recipes that do not provide one
    pub const DEFAULT_REASON: &str = "Perfect match for your ingredients and time!";
    /// Number of recipes requested from the generation service
    pub const DEFAULT_RECIPE_COUNT: usize = 3;
    /// Upper bound on a single generation call
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Minimum catalog candidates before the fallback is skipped
    pub const DEFAULT_MIN_CATALOG_CANDIDATES: usize = 1;
    /// Fields every generated record must carry
    pub const REQUIRED_FIELDS: &[&str] = &["recipe_name", "ingredients", "cooking_time", "instructions"];
}

/// Video platform search URLs
pub mod video {
    /// Search results endpoint
    pub const YOUTUBE_SEARCH_BASE: &str = "https://www.youtube.com/results?search_query=";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Main application name
    pub const PANTRY_CHEF: &str = "pantry_chef";
}
