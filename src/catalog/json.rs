// ABOUTME: JSON catalog parser accepting an array of recipe objects
// ABOUTME: Skips entries that fail to deserialize or validate instead of failing the load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

use serde_json::Value;
use tracing::warn;

use pantry_core::errors::{AppError, AppResult, ErrorCode};
use pantry_core::models::RecipeRecord;

use super::LoadReport;

pub(super) fn parse_json(content: &str) -> AppResult<(Vec<RecipeRecord>, LoadReport)> {
    let Value::Array(items) = serde_json::from_str::<Value>(content)? else {
        return Err(AppError::new(
            ErrorCode::InvalidFormat,
            "JSON catalog must be an array of recipe objects",
        ));
    };

    let mut recipes = Vec::with_capacity(items.len());
    let mut report = LoadReport::default();

    for (index, item) in items.into_iter().enumerate() {
        let parsed = serde_json::from_value::<RecipeRecord>(item)
            .map_err(|e| e.to_string())
            .and_then(|record| record.validate().map(|()| record).map_err(|e| e.message));
        match parsed {
            Ok(record) => {
                recipes.push(record);
                report.loaded += 1;
            }
            Err(reason) => {
                warn!(index, reason = %reason, "Skipping catalog entry");
                report.skipped += 1;
            }
        }
    }

    Ok((recipes, report))
}
