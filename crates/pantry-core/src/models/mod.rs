// ABOUTME: Core data models shared by the matching engine and the application crate
// ABOUTME: Re-exports the recipe record used for catalog and generated recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

/// Recipe record model
pub mod recipe;

pub use recipe::RecipeRecord;
