// ABOUTME: Main library entry point for Pantry Chef recipe recommendations
// ABOUTME: Wires catalog loading, the matching engine, and LLM generation fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

#![deny(unsafe_code)]

//! # Pantry Chef
//!
//! Recommends recipes from the ingredients a user has on hand.
//!
//! ## Pipeline
//!
//! 1. Normalize free-form ingredient text (aliases, casing, punctuation)
//! 2. Filter the catalog by time budget, meal type, cuisine, and overlap
//! 3. Keep the top candidates and score them
//! 4. When too few catalog recipes qualify, ask an LLM for new recipes,
//!    re-validate them against the request, and score those instead
//!
//! The matching engine lives in `pantry-intelligence`; this crate adds the
//! catalog loaders, the LLM providers, and the orchestrating service.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pantry_chef::catalog::Catalog;
//! use pantry_chef::config::RecommenderConfig;
//! use pantry_chef::errors::AppResult;
//! use pantry_chef::services::{RecommendationRequest, RecommendationService};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = RecommenderConfig::from_env()?;
//!     let catalog = Catalog::load(std::path::Path::new("recipes.csv"))?;
//!     let service = RecommendationService::new(catalog, &config);
//!
//!     let request = RecommendationRequest::new("pasta, tomato, garlic", "Dinner", "Italian", 30);
//!     let report = service.recommend(&request).await?;
//!     println!("{} recipes", report.outcome.recipes().len());
//!     Ok(())
//! }
//! ```

/// Recipe catalog loading (CSV, JSON) and keyword search
pub mod catalog;

/// Environment-driven configuration
pub mod config;

/// Unified error types
pub mod errors;

/// LLM-backed recipe generation and response parsing
pub mod generation;

/// LLM provider abstraction with Gemini and Groq implementations
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Recommendation orchestration
pub mod services;

/// Video search links for recipes and cuisines
pub mod video;

pub use catalog::Catalog;
pub use config::RecommenderConfig;
pub use errors::{AppError, AppResult, ErrorCode};
pub use services::{
    NoMatchReason, Recommendation, RecommendationReport, RecommendationRequest,
    RecommendationService, ScoredCandidate,
};
