// ABOUTME: Candidate selection and ranking engine for Pantry Chef recipe recommendations
// ABOUTME: Normalization, overlap scoring, rule-based filtering, top-N selection, and scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

#![deny(unsafe_code)]

//! # Pantry Intelligence
//!
//! The matching pipeline behind Pantry Chef. Every operation here is pure and
//! synchronous: no I/O, no shared mutable state. Callers may share a catalog
//! and an alias table across threads and invoke the pipeline concurrently.
//!
//! ```text
//! raw text ─► IngredientNormalizer ─► filter_recipes ─► select_top ─► candidates
//!                                           ▲
//!                               catalog + FilterCriteria
//! ```
//!
//! `RecipeScorer` is independent of the pipeline and scores any single record,
//! catalog-sourced or generated.

/// Matching configuration (thresholds, weights) with environment overrides
pub mod config;

/// Recipe matching pipeline
pub mod recipes;

pub use config::{ConfigError, MatchingConfig};
pub use recipes::{
    extract_keywords, filter_recipes, ingredient_overlap, score_recipe, select_top, AliasTable,
    Candidate, FilterCriteria, IngredientNormalizer, IngredientSet, RankedRecipe, RecipeScorer,
    ScoreBreakdown, ScoringError, ScoringWeights,
};
