// ABOUTME: Application error types, re-exported from pantry-core
// ABOUTME: Gives the root crate and its binaries a single `errors` path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

pub use pantry_core::errors::*;
