// ABOUTME: Tests for ingredient text normalization and the alias table
// ABOUTME: Covers cleaning, alias resolution, de-duplication, and conflict detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;

use pantry_intelligence::{AliasTable, IngredientNormalizer};
use pantry_intelligence::recipes::{clean_fragment, AliasConflict};

// ============================================================================
// Fragment Cleaning
// ============================================================================

#[test]
fn test_clean_fragment_lowercases_and_strips_punctuation() {
    assert_eq!(clean_fragment("  Green   Peas!! "), "green peas");
    assert_eq!(clean_fragment("Black-Pepper"), "blackpepper");
    assert_eq!(clean_fragment("2 Eggs (large)"), "2 eggs large");
}

#[test]
fn test_clean_fragment_never_leaves_double_spaces() {
    assert_eq!(clean_fragment("salt & pepper"), "salt pepper");
    assert_eq!(clean_fragment("green\tbeans"), "green beans");
    assert_eq!(clean_fragment("salt - pepper"), "salt pepper");

    let normalized = IngredientNormalizer::default().normalize("Salt & Pepper, salt pepper");
    assert_eq!(normalized, vec!["salt pepper"]);
}

#[test]
fn test_clean_fragment_drops_non_ascii_letters() {
    assert_eq!(clean_fragment("Jalapeño"), "jalapeo");
    assert_eq!(clean_fragment("!!!"), "");
}

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn test_normalize_merges_plural_and_singular_spellings() {
    let normalizer = IngredientNormalizer::default();
    assert_eq!(
        normalizer.normalize("Tomatoes, onion, tomato"),
        vec!["tomato", "onion"]
    );
}

#[test]
fn test_normalize_resolves_regional_names_only_on_exact_match() {
    let normalizer = IngredientNormalizer::default();
    assert_eq!(normalizer.normalize("Pyaz"), vec!["onion"]);
    assert_eq!(normalizer.normalize("red onion"), vec!["red onion"]);
}

#[test]
fn test_normalize_splits_on_commas_and_newlines() {
    let normalizer = IngredientNormalizer::default();
    assert_eq!(
        normalizer.normalize("Tomatoes, ONIONS\n garlic"),
        vec!["tomato", "onion", "garlic"]
    );
}

#[test]
fn test_normalize_resolves_aliases_to_canonical_names() {
    let normalizer = IngredientNormalizer::default();
    assert_eq!(
        normalizer.normalize("aloo, matar, dahi, capsicum, beans"),
        vec!["potato", "peas", "yogurt", "bell pepper", "green beans"]
    );
}

#[test]
fn test_normalize_resolves_canonical_names_to_themselves() {
    let normalizer = IngredientNormalizer::default();
    assert_eq!(normalizer.normalize("Green Beans"), vec!["green beans"]);
}

#[test]
fn test_normalize_keeps_unknown_ingredients_verbatim() {
    let normalizer = IngredientNormalizer::default();
    assert_eq!(
        normalizer.normalize("Chilli, garbanzo beans"),
        vec!["chilli", "garbanzo beans"]
    );
}

#[test]
fn test_normalize_deduplicates_preserving_first_occurrence() {
    let normalizer = IngredientNormalizer::default();
    assert_eq!(
        normalizer.normalize("tamatar, rice, Tomatoes, tomato, basmati"),
        vec!["tomato", "rice"]
    );
}

#[test]
fn test_normalize_blank_input_yields_nothing() {
    let normalizer = IngredientNormalizer::default();
    assert!(normalizer.normalize("").is_empty());
    assert!(normalizer.normalize(" , ,\n\n ").is_empty());
    assert!(normalizer.normalize("!!!, ???").is_empty());
}

#[test]
fn test_normalize_is_idempotent() {
    let normalizer = IngredientNormalizer::default();
    let first = normalizer.normalize("Onions, kali mirch, Paneer!, lime");
    let second = normalizer.normalize(&first.join(", "));
    assert_eq!(first, second);
}

#[test]
fn test_normalize_with_empty_table_only_cleans() {
    let normalizer = IngredientNormalizer::new(AliasTable::empty());
    assert_eq!(normalizer.normalize("Tomatoes, aloo"), vec!["tomatoes", "aloo"]);
}

#[test]
fn test_normalizers_share_one_table() {
    let table = Arc::new(AliasTable::new([("scallion", vec!["spring onion", "green onion"])]));
    let a = IngredientNormalizer::with_shared(Arc::clone(&table));
    let b = IngredientNormalizer::with_shared(table);

    assert_eq!(a.normalize("Spring Onion"), vec!["scallion"]);
    assert_eq!(b.normalize("green onion"), vec!["scallion"]);
    assert_eq!(a.aliases().len(), 1);
}

// ============================================================================
// Alias Table
// ============================================================================

#[test]
fn test_builtin_table_has_no_conflicts() {
    let table = AliasTable::builtin();
    assert!(!table.is_empty());
    assert!(table.conflicts().is_empty());
}

#[test]
fn test_builtin_table_resolves_multi_word_aliases() {
    let table = AliasTable::builtin();
    assert_eq!(table.resolve("kali mirch"), Some("pepper"));
    assert_eq!(table.resolve("cottage cheese"), Some("paneer"));
    assert_eq!(table.resolve("pepper"), Some("pepper"));
    assert_eq!(table.resolve("unobtainium"), None);
}

#[test]
fn test_custom_table_lowercases_aliases() {
    let table = AliasTable::new([("scallion", ["Spring Onion"])]);
    assert_eq!(table.resolve("spring onion"), Some("scallion"));
    assert_eq!(table.resolve("Spring Onion"), None);
}

#[test]
fn test_first_entry_wins_on_conflicting_alias() {
    let table = AliasTable::new([("lemon", vec!["citrus"]), ("orange", vec!["citrus"])]);

    assert_eq!(table.resolve("citrus"), Some("lemon"));
    assert_eq!(
        table.conflicts(),
        vec![AliasConflict {
            spelling: "citrus".to_owned(),
            resolved_to: "lemon".to_owned(),
            shadowed: "orange".to_owned(),
        }]
    );
}

#[test]
fn test_entries_keep_construction_order() {
    let table = AliasTable::new([("b", vec!["bb"]), ("a", vec!["aa"])]);
    let canonicals: Vec<&str> = table.entries().iter().map(|e| e.canonical.as_str()).collect();
    assert_eq!(canonicals, vec!["b", "a"]);
}
