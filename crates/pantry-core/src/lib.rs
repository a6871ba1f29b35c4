// ABOUTME: Core types and constants for the Pantry Chef recipe recommender
// ABOUTME: Foundation crate with error handling, the recipe record model, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

#![deny(unsafe_code)]

//! # Pantry Core
//!
//! Foundation crate providing shared types and constants for Pantry Chef.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `GenerationError`
//! - **constants**: Matching, scoring, and generation defaults
//! - **models**: The `RecipeRecord` shared by the catalog and the generation fallback

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models shared across crates
pub mod models;
