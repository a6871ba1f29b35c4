// ABOUTME: Recipe matching pipeline: normalization, overlap, filtering, selection, scoring
// ABOUTME: Pure functions over an immutable catalog, safe to call from concurrent requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

//! # Recipe Matching
//!
//! Leaf-first:
//!
//! - [`aliases`]: canonical ingredient names and their alternate spellings
//! - [`normalizer`]: raw text to canonical, deduplicated tokens
//! - [`overlap`]: share of a recipe's ingredients the user has
//! - [`filter`]: hard constraints plus the overlap threshold, ranked
//! - [`selector`]: top-N truncation into plain candidate records
//! - [`scorer`]: independent multi-factor score for any single recipe
//! - [`keywords`]: keyword extraction for catalog search

/// Ingredient alias table
pub mod aliases;
/// Catalog filtering and ranking
pub mod filter;
/// Keyword extraction
pub mod keywords;
/// Ingredient text normalization
pub mod normalizer;
/// Ingredient overlap scoring
pub mod overlap;
/// Recipe scoring
pub mod scorer;
/// Top-N candidate selection
pub mod selector;

pub use aliases::{AliasConflict, AliasEntry, AliasTable};
pub use filter::{filter_recipes, FilterCriteria, RankedRecipe};
pub use keywords::extract_keywords;
pub use normalizer::{clean_fragment, IngredientNormalizer};
pub use overlap::{ingredient_overlap, IngredientSet};
pub use scorer::{score_recipe, RecipeScorer, ScoreBreakdown, ScoringError, ScoringWeights};
pub use selector::{select_top, Candidate};
