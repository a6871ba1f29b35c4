// ABOUTME: Ingredient overlap scoring between a recipe and the user's pantry
// ABOUTME: Percentage of recipe ingredient pieces present in the normalized user set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

use std::collections::HashSet;

use pantry_core::constants::matching::PERCENT_SCALE;

/// Lookup set over the user's normalized ingredients
#[derive(Debug, Clone, Default)]
pub struct IngredientSet<'a> {
    items: HashSet<&'a str>,
}

impl<'a> IngredientSet<'a> {
    /// Borrow a normalized ingredient list as a set
    #[must_use]
    pub fn new<S: AsRef<str>>(ingredients: &'a [S]) -> Self {
        Self {
            items: ingredients.iter().map(AsRef::as_ref).collect(),
        }
    }

    /// Whether `ingredient` is in the set (exact match)
    #[must_use]
    pub fn contains(&self, ingredient: &str) -> bool {
        self.items.contains(ingredient)
    }

    /// Number of distinct ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Overlap of a comma-delimited recipe ingredient string with this set
    #[must_use]
    pub fn overlap(&self, recipe_ingredients: &str) -> f64 {
        if recipe_ingredients.trim().is_empty() {
            return 0.0;
        }

        let mut total = 0_usize;
        let mut matches = 0_usize;
        for piece in recipe_ingredients.split(',') {
            total += 1;
            if self.contains(&piece.trim().to_lowercase()) {
                matches += 1;
            }
        }

        // `total` is at least 1 here: splitting a non-empty string yields one piece
        (matches as f64 / total as f64) * PERCENT_SCALE
    }
}

/// Percentage (0-100) of the recipe's ingredient pieces found in `user_ingredients`.
///
/// Recipe ingredients are split on commas, trimmed and lowercased; matching is
/// exact string equality with no alias resolution. A blank ingredient string
/// has zero pieces and scores 0.
#[must_use]
pub fn ingredient_overlap<S: AsRef<str>>(recipe_ingredients: &str, user_ingredients: &[S]) -> f64 {
    IngredientSet::new(user_ingredients).overlap(recipe_ingredients)
}
