// ABOUTME: Domain service layer orchestrating the matching pipeline and generation fallback
// ABOUTME: Protocol-agnostic services reusable by the CLI or any future front end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

//! Domain service layer

/// Catalog ranking with fallback to LLM generation
pub mod recommendation;

pub use recommendation::{
    NoMatchReason, Recommendation, RecommendationReport, RecommendationRequest,
    RecommendationService, ScoredCandidate,
};
