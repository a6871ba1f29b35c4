// ABOUTME: Configuration management for the recommender application layer
// ABOUTME: Environment-only settings for catalog, LLM provider, generation, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

//! Configuration module for Pantry Chef
//!
//! All configuration comes from environment variables:
//!
//! - **Environment**: catalog path and generation fallback settings
//! - **Types**: log level, deployment environment, LLM provider selection
//!
//! Matching thresholds and scoring weights live in
//! `pantry_intelligence::MatchingConfig` and are embedded in
//! [`RecommenderConfig`].

/// Application configuration from environment variables
pub mod environment;
/// Shared configuration enums
pub mod types;

pub use environment::{env_vars, GenerationSettings, RecommenderConfig};
pub use pantry_intelligence::{ConfigError, MatchingConfig};
pub use types::{Environment, LlmProviderType, LogLevel};
