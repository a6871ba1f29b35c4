// ABOUTME: CSV catalog parser using the csv crate with header-based column lookup
// ABOUTME: Skips rows with missing fields or invalid cooking times instead of failing the load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

use serde::Deserialize;
use tracing::warn;

use pantry_core::constants::generation::REQUIRED_FIELDS;
use pantry_core::errors::{AppError, AppResult, ErrorCode};
use pantry_core::models::RecipeRecord;

use super::LoadReport;

/// One CSV row; every column optional so a bad row is skipped, not fatal
#[derive(Debug, Deserialize)]
struct CatalogRow {
    recipe_name: Option<String>,
    ingredients: Option<String>,
    cooking_time: Option<String>,
    meal_type: Option<String>,
    cuisine: Option<String>,
    instructions: Option<String>,
}

impl CatalogRow {
    fn into_record(self) -> Result<RecipeRecord, String> {
        let cooking_time = self
            .cooking_time
            .as_deref()
            .map(str::trim)
            .ok_or("missing cooking_time")?
            .parse::<u32>()
            .map_err(|e| format!("invalid cooking_time: {e}"))?;

        let record = RecipeRecord::new(
            self.recipe_name.unwrap_or_default(),
            self.ingredients.unwrap_or_default(),
            cooking_time,
            self.meal_type.unwrap_or_default(),
            self.cuisine.unwrap_or_default(),
            self.instructions.unwrap_or_default(),
        );
        record.validate().map_err(|e| e.message)?;
        Ok(record)
    }
}

/// Parse CSV text with a `recipe_name,ingredients,cooking_time,meal_type,cuisine,instructions` header
pub(super) fn parse_csv(content: &str) -> AppResult<(Vec<RecipeRecord>, LoadReport)> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(::csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(ErrorCode::InvalidFormat, format!("Invalid CSV header: {e}")))?
        .clone();
    if let Some(missing) = REQUIRED_FIELDS
        .iter()
        .find(|field| !headers.iter().any(|h| h == **field))
    {
        return Err(AppError::new(
            ErrorCode::InvalidFormat,
            format!("CSV catalog is missing the '{missing}' column"),
        ));
    }

    let mut recipes = Vec::new();
    let mut report = LoadReport::default();

    for (index, row) in reader.deserialize::<CatalogRow>().enumerate() {
        // Header is line 1
        let line = index + 2;
        match row.map_err(|e| e.to_string()).and_then(CatalogRow::into_record) {
            Ok(record) => {
                recipes.push(record);
                report.loaded += 1;
            }
            Err(reason) => {
                warn!(line, reason = %reason, "Skipping catalog row");
                report.skipped += 1;
            }
        }
    }

    Ok((recipes, report))
}
