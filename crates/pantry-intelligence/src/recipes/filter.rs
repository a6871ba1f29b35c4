// ABOUTME: Rule-based catalog filtering with hard constraints and an overlap threshold
// ABOUTME: Narrows by time, meal type, and cuisine, then ranks survivors by ingredient overlap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use pantry_core::constants::matching::{
    DEFAULT_MIN_OVERLAP_FRACTION, PARALLEL_OVERLAP_THRESHOLD, PERCENT_SCALE,
};
use pantry_core::models::RecipeRecord;

use super::overlap::IngredientSet;

/// Constraints a catalog recipe must satisfy to become a candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Maximum cooking time in minutes (inclusive)
    pub max_cooking_time: u32,
    /// Requested meal type, compared case-insensitively
    pub meal_type: String,
    /// Requested cuisine, compared case-insensitively
    pub cuisine: String,
    /// Minimum fraction (0-1) of recipe ingredients the user must have
    pub min_overlap_fraction: f64,
}

impl FilterCriteria {
    /// Criteria with the default overlap threshold
    #[must_use]
    pub fn new(
        max_cooking_time: u32,
        meal_type: impl Into<String>,
        cuisine: impl Into<String>,
    ) -> Self {
        Self {
            max_cooking_time,
            meal_type: meal_type.into(),
            cuisine: cuisine.into(),
            min_overlap_fraction: DEFAULT_MIN_OVERLAP_FRACTION,
        }
    }

    /// Override the overlap threshold
    #[must_use]
    pub const fn with_min_overlap(mut self, fraction: f64) -> Self {
        self.min_overlap_fraction = fraction;
        self
    }

    /// Threshold on the 0-100 overlap scale
    #[must_use]
    pub fn min_overlap_percent(&self) -> f64 {
        self.min_overlap_fraction * PERCENT_SCALE
    }

    /// Whether `recipe` passes the time, meal type, and cuisine constraints
    #[must_use]
    pub fn admits(&self, recipe: &RecipeRecord) -> bool {
        recipe.fits_time_budget(self.max_cooking_time)
            && recipe.matches_meal_type(&self.meal_type)
            && recipe.matches_cuisine(&self.cuisine)
    }
}

/// A catalog recipe that survived filtering, annotated with its overlap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedRecipe<'a> {
    /// The catalog record, borrowed unchanged
    pub recipe: &'a RecipeRecord,
    /// Ingredient overlap on the 0-100 scale
    pub overlap: f64,
    /// Position of the record in the catalog, the tie-break key
    pub catalog_index: usize,
}

/// Filter and rank `catalog` against the user's normalized ingredients.
///
/// Hard constraints run first so overlap is computed only for records that
/// could qualify. The result is sorted by overlap, highest first; records with
/// equal overlap keep their catalog order. The catalog is never modified.
#[must_use]
pub fn filter_recipes<'a, S>(
    catalog: &'a [RecipeRecord],
    user_ingredients: &[S],
    criteria: &FilterCriteria,
) -> Vec<RankedRecipe<'a>>
where
    S: AsRef<str>,
{
    let admitted: Vec<(usize, &RecipeRecord)> = catalog
        .iter()
        .enumerate()
        .filter(|(_, recipe)| criteria.admits(recipe))
        .collect();

    let user_set = IngredientSet::new(user_ingredients);
    let rank = |&(catalog_index, recipe): &(usize, &'a RecipeRecord)| RankedRecipe {
        recipe,
        overlap: user_set.overlap(&recipe.ingredients),
        catalog_index,
    };

    let mut ranked: Vec<RankedRecipe<'a>> = if admitted.len() >= PARALLEL_OVERLAP_THRESHOLD {
        admitted.par_iter().map(rank).collect()
    } else {
        admitted.iter().map(rank).collect()
    };

    let threshold = criteria.min_overlap_percent();
    ranked.retain(|candidate| candidate.overlap >= threshold);

    // Stable sort: equal overlaps stay in catalog order
    ranked.sort_by(|a, b| b.overlap.total_cmp(&a.overlap));

    debug!(
        catalog = catalog.len(),
        after_constraints = admitted.len(),
        after_overlap = ranked.len(),
        threshold,
        "Filtered recipe catalog"
    );
    ranked
}
