// ABOUTME: Integration tests for the recommendation service
// ABOUTME: Covers catalog hits, the generation fallback, re-validation, and no-match outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;
use std::time::{Duration, Instant};

use common::{init_test_logging, recipe, sample_catalog, ScriptedProvider, StubGenerator};
use pantry_chef::config::RecommenderConfig;
use pantry_chef::errors::{ErrorCode, GenerationError};
use pantry_chef::generation::LlmRecipeGenerator;
use pantry_chef::llm::LlmProvider;
use pantry_chef::services::{
    NoMatchReason, Recommendation, RecommendationRequest, RecommendationService,
};
use pantry_core::constants::generation::DEFAULT_REASON;
use pantry_core::models::RecipeRecord;
use pantry_intelligence::{AliasTable, IngredientNormalizer};

fn service() -> RecommendationService {
    init_test_logging();
    RecommendationService::new(sample_catalog(), &RecommenderConfig::default())
}

fn klingon_request() -> RecommendationRequest {
    RecommendationRequest::new("pasta, tomato", "Dinner", "Klingon", 30)
}

fn klingon_recipes() -> Vec<RecipeRecord> {
    vec![
        recipe("Gagh Stew", "pasta, tomato, gagh", 25, "Dinner", "Klingon"),
        recipe("Rokeg Pie", "pasta, tomato", 45, "Dinner", "Klingon"),
        recipe("Bloodwine Pasta", "pasta, tomato, bloodwine", 10, "Dinner", "Klingon")
            .with_reason("Fast and fierce"),
        recipe("Not Klingon", "pasta, tomato", 10, "Dinner", "Italian"),
    ]
}

// ============================================================================
// Catalog Path
// ============================================================================

#[tokio::test]
async fn test_catalog_hit_is_scored_and_linked() {
    let generator = StubGenerator::returning(klingon_recipes());
    let service = service().with_generator(generator.clone());
    let request = RecommendationRequest::new("Pasta, Tomatoes, garlic", "Dinner", "Italian", 30);

    let report = service.recommend(&request).await.unwrap();

    assert_eq!(report.normalized_ingredients, vec!["pasta", "tomato", "garlic"]);
    let Recommendation::Catalog(recipes) = &report.outcome else {
        panic!("expected catalog outcome, got {:?}", report.outcome);
    };
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].candidate.name, "Spaghetti Pomodoro");
    assert!((recipes[0].candidate.overlap - 75.0).abs() < 1e-9);
    assert!((recipes[0].score - 65.0).abs() < 1e-9);
    assert!(recipes[0].reason.is_none());
    assert!(recipes[0]
        .video_url
        .starts_with("https://www.youtube.com/results?search_query="));
    assert_eq!(generator.calls(), 0, "catalog hit must not call the generator");
}

#[tokio::test]
async fn test_request_overrides_top_n_and_threshold() {
    let service = service();
    let request = RecommendationRequest::new("pasta, tomato, garlic, oil, bread", "Dinner", "Italian", 30)
        .with_top_n(1)
        .with_min_overlap(0.5);

    let report = service.recommend(&request).await.unwrap();
    let recipes = report.outcome.recipes();

    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].candidate.name, "Spaghetti Pomodoro");
}

#[tokio::test]
async fn test_each_report_gets_a_fresh_request_id() {
    let service = service();
    let request = RecommendationRequest::new("rice, egg", "Lunch", "Chinese", 30);

    let first = service.recommend(&request).await.unwrap();
    let second = service.recommend(&request).await.unwrap();

    assert_ne!(first.request_id, second.request_id);
    assert_eq!(first.outcome, second.outcome);
}

#[tokio::test]
async fn test_custom_alias_table_changes_catalog_hits() {
    let request = RecommendationRequest::new("Spaghetti, pomodoro, aglio", "Dinner", "Italian", 30);

    let builtin = service().recommend(&request).await.unwrap();
    assert_eq!(builtin.normalized_ingredients, vec!["spaghetti", "pomodoro", "aglio"]);
    assert!(matches!(builtin.outcome, Recommendation::NoMatch(_)));

    let italian = AliasTable::new([
        ("pasta", vec!["spaghetti"]),
        ("tomato", vec!["pomodoro"]),
        ("garlic", vec!["aglio"]),
    ]);
    let service = service().with_normalizer(IngredientNormalizer::new(italian));
    let report = service.recommend(&request).await.unwrap();

    assert_eq!(report.normalized_ingredients, vec!["pasta", "tomato", "garlic"]);
    let Recommendation::Catalog(recipes) = &report.outcome else {
        panic!("expected catalog outcome, got {:?}", report.outcome);
    };
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].candidate.name, "Spaghetti Pomodoro");
    assert!((recipes[0].candidate.overlap - 75.0).abs() < 1e-9);
}

// ============================================================================
// Rejected Requests and Insufficient Input
// ============================================================================

#[tokio::test]
async fn test_zero_time_budget_is_rejected() {
    let request = RecommendationRequest::new("rice", "Lunch", "Chinese", 0);
    let error = service().recommend(&request).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[tokio::test]
async fn test_out_of_range_overlap_override_is_rejected() {
    let request = RecommendationRequest::new("rice", "Lunch", "Chinese", 30).with_min_overlap(1.5);
    let error = service().recommend(&request).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[tokio::test]
async fn test_unusable_ingredient_text_is_insufficient() {
    let generator = StubGenerator::returning(klingon_recipes());
    let service = service().with_generator(generator.clone());
    let request = RecommendationRequest::new("!!!, ,\n", "Dinner", "Italian", 30);

    let report = service.recommend(&request).await.unwrap();

    assert_eq!(
        report.outcome,
        Recommendation::NoMatch(NoMatchReason::InsufficientIngredients)
    );
    assert!(report.normalized_ingredients.is_empty());
    assert_eq!(generator.calls(), 0);
}

// ============================================================================
// Generation Fallback
// ============================================================================

#[tokio::test]
async fn test_unknown_cuisine_without_generator_reports_unavailable() {
    let report = service().recommend(&klingon_request()).await.unwrap();

    match report.outcome {
        Recommendation::NoMatch(NoMatchReason::GenerationUnavailable(detail)) => {
            assert!(detail.contains("no generation service configured"));
        }
        other => panic!("expected generation unavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_generation_disabled_reports_no_candidates() {
    let mut config = RecommenderConfig::default();
    config.generation.enabled = false;
    let generator = StubGenerator::returning(klingon_recipes());
    let service =
        RecommendationService::new(sample_catalog(), &config).with_generator(generator.clone());

    let report = service.recommend(&klingon_request()).await.unwrap();

    assert_eq!(report.outcome, Recommendation::NoMatch(NoMatchReason::NoCandidates));
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn test_request_can_opt_out_of_generation() {
    let generator = StubGenerator::returning(klingon_recipes());
    let service = service().with_generator(generator.clone());

    let report = service
        .recommend(&klingon_request().without_generation())
        .await
        .unwrap();

    assert_eq!(report.outcome, Recommendation::NoMatch(NoMatchReason::NoCandidates));
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn test_generated_recipes_are_revalidated_and_sorted_by_score() {
    let generator = StubGenerator::returning(klingon_recipes());
    let service = service().with_generator(generator.clone());

    let report = service.recommend(&klingon_request()).await.unwrap();

    let Recommendation::Generated(recipes) = &report.outcome else {
        panic!("expected generated outcome, got {:?}", report.outcome);
    };
    let names: Vec<&str> = recipes.iter().map(|r| r.candidate.name.as_str()).collect();
    // Rokeg Pie exceeds the budget and Not Klingon has the wrong cuisine
    assert_eq!(names, vec!["Bloodwine Pasta", "Gagh Stew"]);
    assert!(recipes[0].score >= recipes[1].score);
    assert_eq!(recipes[0].reason.as_deref(), Some("Fast and fierce"));
    assert_eq!(recipes[1].reason.as_deref(), Some(DEFAULT_REASON));
    assert!((recipes[1].candidate.overlap - 200.0 / 3.0).abs() < 1e-9);
    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn test_lenient_validation_keeps_mismatched_categories() {
    let mut config = RecommenderConfig::default();
    config.generation.strict_validation = false;
    let service = RecommendationService::new(sample_catalog(), &config)
        .with_generator(StubGenerator::returning(klingon_recipes()));

    let report = service.recommend(&klingon_request()).await.unwrap();

    let names: Vec<&str> = report
        .outcome
        .recipes()
        .iter()
        .map(|r| r.candidate.name.as_str())
        .collect();
    assert!(names.contains(&"Not Klingon"));
    assert!(!names.contains(&"Rokeg Pie"), "time budget is always enforced");
}

#[tokio::test]
async fn test_generation_failure_becomes_no_match() {
    let service =
        service().with_generator(StubGenerator::failing(GenerationError::Timeout(30)));

    let report = service.recommend(&klingon_request()).await.unwrap();

    match report.outcome {
        Recommendation::NoMatch(NoMatchReason::GenerationUnavailable(detail)) => {
            assert!(detail.contains("timed out"));
        }
        other => panic!("expected generation unavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_all_generated_recipes_rejected_becomes_no_match() {
    let out_of_budget = vec![recipe("Slow Stew", "pasta, tomato", 90, "Dinner", "Klingon")];
    let service = service().with_generator(StubGenerator::returning(out_of_budget));

    let report = service.recommend(&klingon_request()).await.unwrap();

    assert!(matches!(
        report.outcome,
        Recommendation::NoMatch(NoMatchReason::GenerationUnavailable(_))
    ));
}

#[tokio::test]
async fn test_hanging_generator_is_bounded_by_service_timeout() {
    let mut config = RecommenderConfig::default();
    config.generation.timeout_secs = 1;
    let service = RecommendationService::new(sample_catalog(), &config)
        .with_generator(StubGenerator::hanging(Duration::from_secs(30)));

    let started = Instant::now();
    let report = service.recommend(&klingon_request()).await.unwrap();

    assert!(started.elapsed() < Duration::from_secs(5));
    assert!(matches!(
        report.outcome,
        Recommendation::NoMatch(NoMatchReason::GenerationUnavailable(_))
    ));
}

#[tokio::test]
async fn test_too_few_catalog_hits_fall_back_but_keep_catalog_on_failure() {
    let mut config = RecommenderConfig::default();
    config.min_catalog_candidates = 2;
    let request = RecommendationRequest::new("pasta, tomato, garlic", "Dinner", "Italian", 30);

    let failing = RecommendationService::new(sample_catalog(), &config)
        .with_generator(StubGenerator::failing(GenerationError::Empty));
    let report = failing.recommend(&request).await.unwrap();
    let Recommendation::Catalog(recipes) = &report.outcome else {
        panic!("expected catalog outcome, got {:?}", report.outcome);
    };
    assert_eq!(recipes.len(), 1);

    let italian = vec![recipe("Penne Arrabbiata", "pasta, tomato, garlic, chili", 20, "Dinner", "Italian")];
    let generating = RecommendationService::new(sample_catalog(), &config)
        .with_generator(StubGenerator::returning(italian));
    let report = generating.recommend(&request).await.unwrap();
    assert!(matches!(report.outcome, Recommendation::Generated(ref r) if r.len() == 1));
}

#[tokio::test]
async fn test_llm_generator_end_to_end_through_service() {
    let response = r#"```json
[{"recipe_name": "Targ Noodles", "ingredients": "pasta, tomato", "cooking_time": 20,
  "meal_type": "Dinner", "cuisine": "Klingon", "instructions": "Boil and serve."}]
```"#;
    let provider: Arc<dyn LlmProvider> = Arc::new(ScriptedProvider::replying(response));
    let service = service().with_generator(Arc::new(LlmRecipeGenerator::new(provider)));

    let report = service.recommend(&klingon_request()).await.unwrap();

    let recipes = report.outcome.recipes();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].candidate.name, "Targ Noodles");
    assert!((recipes[0].candidate.overlap - 100.0).abs() < 1e-9);
}

// ============================================================================
// Serialization
// ============================================================================

#[tokio::test]
async fn test_report_serializes_with_tagged_outcome() {
    let request = RecommendationRequest::new("rice, egg, onion, oil", "Lunch", "Chinese", 30);
    let report = service().recommend(&request).await.unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["outcome"]["source"], "catalog");
    assert_eq!(json["outcome"]["result"][0]["recipe_name"], "Egg Fried Rice");
    assert!(json["outcome"]["result"][0]["score"].is_number());
    assert!(json["request_id"].is_string());

    let no_match = serde_json::to_value(Recommendation::NoMatch(NoMatchReason::NoCandidates)).unwrap();
    assert_eq!(no_match["source"], "no_match");
    assert_eq!(no_match["result"]["kind"], "no_candidates");
}
