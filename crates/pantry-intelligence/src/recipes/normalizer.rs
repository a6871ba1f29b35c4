// ABOUTME: Ingredient text normalization with alias resolution and deduplication
// ABOUTME: Turns raw comma/newline delimited input into canonical, order-preserving tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use super::aliases::AliasTable;

/// Cleans raw ingredient text into canonical tokens.
///
/// The alias table is shared, so cloning a normalizer is cheap and instances
/// can be handed to worker threads freely.
#[derive(Debug, Clone, Default)]
pub struct IngredientNormalizer {
    aliases: Arc<AliasTable>,
}

impl IngredientNormalizer {
    /// Create a normalizer resolving through `aliases`
    #[must_use]
    pub fn new(aliases: AliasTable) -> Self {
        Self {
            aliases: Arc::new(aliases),
        }
    }

    /// Create a normalizer sharing an existing table
    #[must_use]
    pub fn with_shared(aliases: Arc<AliasTable>) -> Self {
        Self { aliases }
    }

    /// Alias table used for resolution
    #[must_use]
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Normalize raw ingredient text.
    ///
    /// Splits on commas and newlines, cleans each fragment, resolves aliases
    /// and drops duplicates while keeping first-occurrence order. Fragments
    /// that clean down to nothing are discarded. Never fails: input with no
    /// usable fragments yields an empty list.
    #[must_use]
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut normalized = Vec::new();

        for fragment in text.split([',', '\n']) {
            if fragment.trim().is_empty() {
                continue;
            }
            let cleaned = clean_fragment(fragment);
            if cleaned.is_empty() {
                continue;
            }
            let token = self
                .aliases
                .resolve(&cleaned)
                .map_or(cleaned, str::to_owned);
            if seen.insert(token.clone()) {
                normalized.push(token);
            }
        }

        debug!(
            input_len = text.len(),
            tokens = normalized.len(),
            "Normalized ingredient text"
        );
        normalized
    }
}

/// Lowercase, keep only `[a-z0-9 ]`, and collapse whitespace runs.
///
/// Characters are filtered first and whitespace is collapsed last, so a
/// normalized ingredient never holds two consecutive spaces:
/// `"salt & pepper"` becomes `"salt pepper"`, not `"salt  pepper"`.
#[must_use]
pub fn clean_fragment(fragment: &str) -> String {
    let filtered: String = fragment
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .collect();
    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}
