// ABOUTME: Recommend command for pantry-cli
// ABOUTME: Builds the recommendation service from configuration and prints the outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

use std::path::PathBuf;

use pantry_chef::config::RecommenderConfig;
use pantry_chef::errors::AppResult;
use pantry_chef::services::{RecommendationRequest, RecommendationService};
use tracing::info;

use crate::helpers::display::{display_report, print_json};

/// Flags of the `recommend` command
pub struct RecommendOptions {
    pub ingredients: String,
    pub meal_type: String,
    pub cuisine: String,
    pub time: u32,
    pub catalog: Option<PathBuf>,
    pub top: Option<usize>,
    pub min_overlap: Option<f64>,
    pub no_generate: bool,
    pub json: bool,
}

/// Run one recommendation request
pub async fn run(options: RecommendOptions) -> AppResult<()> {
    let mut config = RecommenderConfig::from_env()?;
    if options.catalog.is_some() {
        config.catalog_path = options.catalog;
    }
    if options.no_generate {
        config.generation.enabled = false;
    }

    let service = RecommendationService::from_config(&config).await?;
    info!(
        catalog_size = service.catalog().len(),
        generation = service.has_generator(),
        "Recommendation service ready"
    );

    let mut request = RecommendationRequest::new(
        options.ingredients,
        options.meal_type,
        options.cuisine,
        options.time,
    );
    request.top_n = options.top;
    request.min_overlap = options.min_overlap;

    let report = service.recommend(&request).await?;
    if options.json {
        print_json(&report)?;
    } else {
        display_report(&report);
    }
    Ok(())
}
