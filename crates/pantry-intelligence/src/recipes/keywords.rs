// ABOUTME: Keyword extraction from free text for catalog search
// ABOUTME: Lowercased alphabetic words longer than two characters, minus stop words
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Words carrying no search signal
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "is", "are", "be", "been", "being",
];

/// Keywords shorter than this are ignored
const MIN_KEYWORD_LEN: usize = 3;

static WORD_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b[a-z]+\b").ok());

/// Distinct keywords of `text` in first-occurrence order
#[must_use]
pub fn extract_keywords(text: &str) -> Vec<String> {
    let Some(pattern) = WORD_PATTERN.as_ref() else {
        return Vec::new();
    };

    let lowered = text.to_lowercase();
    let mut seen = HashSet::new();
    pattern
        .find_iter(&lowered)
        .map(|word| word.as_str())
        .filter(|word| word.len() >= MIN_KEYWORD_LEN && !STOP_WORDS.contains(word))
        .filter(|word| seen.insert(*word))
        .map(str::to_owned)
        .collect()
}
