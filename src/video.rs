// ABOUTME: Video platform search URLs for recipes and cuisines
// ABOUTME: Pure string formatting with percent-encoded queries, no API access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

use pantry_core::constants::video::YOUTUBE_SEARCH_BASE;

fn search_url(query: &str) -> String {
    format!("{YOUTUBE_SEARCH_BASE}{}", urlencoding::encode(query))
}

/// Search URL for cooking videos of one recipe
#[must_use]
pub fn recipe_search_url(recipe_name: &str, cuisine: &str) -> String {
    search_url(&format!("{} {} recipe", recipe_name.trim(), cuisine.trim()))
}

/// Search URL for recipe videos of a whole cuisine
#[must_use]
pub fn cuisine_search_url(cuisine: &str) -> String {
    search_url(&format!("{} recipes", cuisine.trim()))
}
