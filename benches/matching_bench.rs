// ABOUTME: Criterion benchmarks for ingredient normalization and recipe matching
// ABOUTME: Measures filter, overlap, and normalization cost over generated catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

//! Criterion benchmarks for the matching engine.
//!
//! The parallel path in `filter_recipes` kicks in for larger catalogs, so the
//! filter group covers sizes on both sides of that threshold.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pantry_core::models::RecipeRecord;
use pantry_intelligence::{
    filter_recipes, ingredient_overlap, select_top, AliasTable, FilterCriteria,
    IngredientNormalizer,
};

const PANTRY: &[&str] = &[
    "tomato", "onion", "garlic", "rice", "egg", "oil", "pasta", "chickpeas", "cumin", "basil",
    "cheese", "potato",
];

const CUISINES: &[&str] = &["Italian", "Indian", "Chinese", "Mexican"];
const MEAL_TYPES: &[&str] = &["Breakfast", "Lunch", "Dinner"];

#[allow(clippy::cast_possible_truncation)]
fn generate_catalog(count: usize) -> Vec<RecipeRecord> {
    (0..count)
        .map(|index| {
            let ingredients = (0..4 + index % 4)
                .map(|offset| PANTRY[(index * 7 + offset * 3) % PANTRY.len()])
                .collect::<Vec<_>>()
                .join(", ");
            RecipeRecord::new(
                format!("Bench Recipe {index}"),
                ingredients,
                10 + ((index * 13) % 90) as u32,
                MEAL_TYPES[index % MEAL_TYPES.len()],
                CUISINES[index % CUISINES.len()],
                "Combine and cook.",
            )
        })
        .collect()
}

fn bench_filter_recipes(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_recipes");
    let user_ingredients = ["tomato", "onion", "garlic", "pasta", "oil", "basil"];
    let criteria = FilterCriteria::new(60, "Dinner", "Italian").with_min_overlap(0.5);

    for count in [100_usize, 1_000, 10_000] {
        let catalog = generate_catalog(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("rank", count), &catalog, |b, catalog| {
            b.iter(|| {
                let ranked = filter_recipes(
                    black_box(catalog),
                    black_box(&user_ingredients),
                    black_box(&criteria),
                );
                select_top(&ranked, 5)
            });
        });
    }

    group.finish();
}

fn bench_ingredient_overlap(c: &mut Criterion) {
    let user_ingredients = ["tomato", "onion", "garlic"];

    c.bench_function("ingredient_overlap_single", |b| {
        b.iter(|| {
            ingredient_overlap(
                black_box("pasta, tomato, garlic, olive oil, basil"),
                black_box(&user_ingredients),
            )
        });
    });
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let normalizer = IngredientNormalizer::new(AliasTable::builtin());

    group.bench_function("short_list", |b| {
        b.iter(|| normalizer.normalize(black_box("Pyaz, tamatar, lehsun")));
    });

    let long_input = PANTRY.repeat(20).join(", ");
    group.bench_function("long_list", |b| {
        b.iter(|| normalizer.normalize(black_box(&long_input)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_filter_recipes,
    bench_ingredient_overlap,
    bench_normalize,
);
criterion_main!(benches);
