// ABOUTME: Re-exports command modules for pantry-cli
// ABOUTME: Provides recommend, inspection, catalog, and health commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

pub mod catalog;
pub mod health;
pub mod inspect;
pub mod recommend;

use std::env;
use std::path::PathBuf;

use pantry_chef::catalog::Catalog;
use pantry_chef::config::env_vars;
use pantry_chef::errors::{AppError, AppResult};

/// Load the catalog from `--catalog`, falling back to `PANTRY_CATALOG_PATH`
pub fn load_catalog(path: Option<PathBuf>) -> AppResult<Catalog> {
    let path = path
        .or_else(|| env::var(env_vars::CATALOG_PATH).ok().map(PathBuf::from))
        .ok_or_else(|| {
            AppError::config(format!(
                "No catalog given: pass --catalog or set {}",
                env_vars::CATALOG_PATH
            ))
        })?;
    Catalog::load(&path)
}
