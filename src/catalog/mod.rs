// ABOUTME: Immutable in-memory recipe catalog shared across requests
// ABOUTME: Loads CSV or JSON catalogs once and offers listing and keyword search helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

//! # Recipe Catalog
//!
//! The catalog is loaded once at startup and never mutated. Cloning a
//! [`Catalog`] shares the underlying records.

mod csv;
mod json;

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use pantry_core::errors::{AppError, AppResult};
use pantry_core::models::RecipeRecord;
use pantry_intelligence::extract_keywords;

use crate::logging::AppLogger;

/// Outcome of parsing a catalog file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records kept
    pub loaded: usize,
    /// Rows dropped for missing or invalid fields
    pub skipped: usize,
}

/// Ordered, read-only collection of recipes
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Arc<[RecipeRecord]>,
}

impl Catalog {
    /// Wrap records as they are, keeping their order
    #[must_use]
    pub fn from_records(recipes: Vec<RecipeRecord>) -> Self {
        Self {
            recipes: recipes.into(),
        }
    }

    /// Load a catalog file, choosing the format from its extension (`.csv` or `.json`)
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the file cannot be read, `InvalidInput` for an
    /// unsupported extension, and `InvalidFormat` or `SerializationError` when the
    /// file structure is unusable
    pub fn load(path: &Path) -> AppResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);

        let parse: fn(&str) -> AppResult<(Vec<RecipeRecord>, LoadReport)> =
            match extension.as_deref() {
                Some("csv") => csv::parse_csv,
                Some("json") => json::parse_json,
                _ => {
                    return Err(AppError::invalid_input(format!(
                        "Unsupported catalog format for '{}': expected .csv or .json",
                        path.display()
                    )))
                }
            };

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!("Cannot read catalog '{}': {e}", path.display()))
                .with_source(e)
        })?;

        let (recipes, report) = parse(&content)?;
        AppLogger::log_catalog_load(&path.display().to_string(), report.loaded, report.skipped);
        Ok(Self::from_records(recipes))
    }

    /// Parse CSV catalog text
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when the header lacks a required column
    pub fn from_csv_str(content: &str) -> AppResult<(Self, LoadReport)> {
        let (recipes, report) = csv::parse_csv(content)?;
        Ok((Self::from_records(recipes), report))
    }

    /// Parse JSON catalog text
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` when the text is not JSON and
    /// `InvalidFormat` when it is not an array
    pub fn from_json_str(content: &str) -> AppResult<(Self, LoadReport)> {
        let (recipes, report) = json::parse_json(content)?;
        Ok((Self::from_records(recipes), report))
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipes in catalog order
    #[must_use]
    pub fn recipes(&self) -> &[RecipeRecord] {
        &self.recipes
    }

    /// Distinct meal types, first spelling wins, in catalog order
    #[must_use]
    pub fn meal_types(&self) -> Vec<String> {
        distinct_case_insensitive(self.recipes.iter().map(|r| r.meal_type.as_str()))
    }

    /// Distinct cuisines, first spelling wins, in catalog order
    #[must_use]
    pub fn cuisines(&self) -> Vec<String> {
        distinct_case_insensitive(self.recipes.iter().map(|r| r.cuisine.as_str()))
    }

    /// Recipes whose name or ingredients share a keyword with `query`.
    ///
    /// Ordered by the number of shared keywords, most first; ties keep
    /// catalog order. A query without keywords matches nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&RecipeRecord> {
        let keywords = extract_keywords(query);
        if keywords.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<(usize, &RecipeRecord)> = self
            .recipes
            .iter()
            .filter_map(|recipe| {
                let haystack = format!("{} {}", recipe.name, recipe.ingredients);
                let words: HashSet<String> = extract_keywords(&haystack).into_iter().collect();
                let shared = keywords.iter().filter(|k| words.contains(*k)).count();
                (shared > 0).then_some((shared, recipe))
            })
            .collect();

        hits.sort_by(|a, b| b.0.cmp(&a.0));
        hits.into_iter().map(|(_, recipe)| recipe).collect()
    }
}

fn distinct_case_insensitive<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .filter(|value| seen.insert(value.to_lowercase()))
        .map(str::to_owned)
        .collect()
}
