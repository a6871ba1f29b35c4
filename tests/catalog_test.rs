// ABOUTME: Tests for catalog loading, listing helpers, and keyword search
// ABOUTME: Exercises CSV and JSON parsing, skipped rows, file errors, and shared storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::io::Write;

use common::{sample_catalog, SAMPLE_CSV};
use pantry_chef::catalog::{Catalog, LoadReport};
use pantry_chef::errors::ErrorCode;
use pantry_intelligence::extract_keywords;
use tempfile::{Builder, NamedTempFile};

fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// ============================================================================
// CSV
// ============================================================================

#[test]
fn test_csv_catalog_parses_quoted_ingredient_lists() {
    let (catalog, report) = Catalog::from_csv_str(SAMPLE_CSV).unwrap();

    assert_eq!(report, LoadReport { loaded: 3, skipped: 0 });
    let first = &catalog.recipes()[0];
    assert_eq!(first.name, "Spaghetti Pomodoro");
    assert_eq!(first.ingredients, "pasta, tomato, garlic, oil");
    assert_eq!(first.cooking_time, 25);
    assert_eq!(first.cuisine, "Italian");
}

#[test]
fn test_csv_catalog_skips_invalid_rows() {
    let csv = "\
recipe_name,ingredients,cooking_time,meal_type,cuisine,instructions
Good,\"rice, egg\",20,Lunch,Chinese,Fry.
Bad Time,\"rice\",soon,Lunch,Chinese,Fry.
Zero Time,\"rice\",0,Lunch,Chinese,Fry.
No Steps,\"rice\",10,Lunch,Chinese,
Short Row,rice
";
    let (catalog, report) = Catalog::from_csv_str(csv).unwrap();

    assert_eq!(report, LoadReport { loaded: 1, skipped: 4 });
    assert_eq!(catalog.recipes()[0].name, "Good");
}

#[test]
fn test_csv_catalog_requires_core_columns() {
    let csv = "recipe_name,ingredients,meal_type\nToast,bread,Breakfast\n";
    let error = Catalog::from_csv_str(csv).unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidFormat);
    assert!(error.message.contains("cooking_time"));
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn test_json_catalog_accepts_name_alias_and_skips_bad_entries() {
    let json = r#"[
        {"name": "Toast", "ingredients": "bread, butter", "cooking_time": 5,
         "meal_type": "Breakfast", "cuisine": "British", "instructions": "Toast it."},
        {"recipe_name": "Porridge", "ingredients": "oats, milk", "cooking_time": 10,
         "instructions": "Stir."},
        {"recipe_name": "Broken", "ingredients": "air", "cooking_time": -1, "instructions": "?"},
        {"recipe_name": "Timeless", "ingredients": "air", "cooking_time": 0, "instructions": "?"}
    ]"#;
    let (catalog, report) = Catalog::from_json_str(json).unwrap();

    assert_eq!(report, LoadReport { loaded: 2, skipped: 2 });
    assert_eq!(catalog.recipes()[0].name, "Toast");
    assert_eq!(catalog.recipes()[1].meal_type, "", "categoricals default to empty");
}

#[test]
fn test_json_catalog_must_be_an_array() {
    let error = Catalog::from_json_str(r#"{"recipes": []}"#).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);

    let error = Catalog::from_json_str("not json").unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

// ============================================================================
// File Loading
// ============================================================================

#[test]
fn test_load_dispatches_on_extension() {
    let csv = temp_file(".csv", SAMPLE_CSV);
    assert_eq!(Catalog::load(csv.path()).unwrap().len(), 3);

    let json = temp_file(
        ".JSON",
        r#"[{"recipe_name": "Toast", "ingredients": "bread", "cooking_time": 5, "instructions": "Toast."}]"#,
    );
    assert_eq!(Catalog::load(json.path()).unwrap().len(), 1);
}

#[test]
fn test_load_rejects_unknown_extension() {
    let file = temp_file(".txt", SAMPLE_CSV);
    let error = Catalog::load(file.path()).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_load_missing_file_is_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = Catalog::load(&dir.path().join("missing.csv")).unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}

// ============================================================================
// Listing and Search
// ============================================================================

#[test]
fn test_catalog_clones_share_records() {
    let catalog = sample_catalog();
    let clone = catalog.clone();

    assert!(std::ptr::eq(catalog.recipes().as_ptr(), clone.recipes().as_ptr()));
    assert!(Catalog::default().is_empty());
}

#[test]
fn test_meal_types_and_cuisines_are_distinct_in_catalog_order() {
    let catalog = sample_catalog();

    assert_eq!(catalog.meal_types(), vec!["Dinner", "Lunch"]);
    assert_eq!(catalog.cuisines(), vec!["Italian", "Indian", "Chinese"]);
}

#[test]
fn test_search_ranks_by_shared_keywords() {
    let catalog = sample_catalog();
    let names: Vec<&str> = catalog
        .search("Garlic pasta, please")
        .into_iter()
        .map(|r| r.name.as_str())
        .collect();

    assert_eq!(
        names,
        vec!["Spaghetti Pomodoro", "Garlic Bread", "Slow Ragu", "Chana Masala"]
    );
}

#[test]
fn test_search_with_only_stop_words_matches_nothing() {
    assert!(sample_catalog().search("the and of a").is_empty());
}

#[test]
fn test_extract_keywords_filters_short_and_stop_words() {
    assert_eq!(
        extract_keywords("The spicy chickpea curry with rice and a SPICY sauce"),
        vec!["spicy", "chickpea", "curry", "rice", "sauce"]
    );
    assert_eq!(extract_keywords("Eggs & ham, 2 eggs"), vec!["eggs", "ham"]);
    assert!(extract_keywords("").is_empty());
}
