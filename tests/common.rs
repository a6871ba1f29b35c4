// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides catalog builders, a scripted LLM provider, and stub recipe generators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `pantry_chef`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use pantry_chef::catalog::Catalog;
use pantry_chef::errors::{AppError, GenerationError};
use pantry_chef::generation::{GenerationRequest, RecipeGenerator};
use pantry_chef::llm::{ChatRequest, ChatResponse, LlmCapabilities, LlmProvider};
use pantry_core::models::RecipeRecord;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

// ============================================================================
// Catalog Fixtures
// ============================================================================

pub fn recipe(
    name: &str,
    ingredients: &str,
    cooking_time: u32,
    meal_type: &str,
    cuisine: &str,
) -> RecipeRecord {
    RecipeRecord::new(
        name,
        ingredients,
        cooking_time,
        meal_type,
        cuisine,
        format!("Cook the {name}."),
    )
}

/// Small mixed catalog used across matching and service tests
pub fn sample_recipes() -> Vec<RecipeRecord> {
    vec![
        recipe("Spaghetti Pomodoro", "pasta, tomato, garlic, oil", 25, "Dinner", "Italian"),
        recipe("Garlic Bread", "bread, garlic, oil", 15, "Dinner", "Italian"),
        recipe("Slow Ragu", "pasta, tomato, beef, onion", 180, "Dinner", "Italian"),
        recipe("Caprese Salad", "tomato, mozzarella, basil", 10, "Lunch", "Italian"),
        recipe("Aloo Matar", "potato, peas, onion, cumin", 30, "Dinner", "Indian"),
        recipe("Chana Masala", "chickpeas, tomato, onion, garlic, cumin", 40, "Dinner", "Indian"),
        recipe("Egg Fried Rice", "rice, egg, onion, oil", 20, "Lunch", "Chinese"),
    ]
}

pub fn sample_catalog() -> Catalog {
    Catalog::from_records(sample_recipes())
}

pub const SAMPLE_CSV: &str = "\
recipe_name,ingredients,cooking_time,meal_type,cuisine,instructions
Spaghetti Pomodoro,\"pasta, tomato, garlic, oil\",25,Dinner,Italian,Boil pasta and toss with sauce.
Aloo Matar,\"potato, peas, onion, cumin\",30,Dinner,Indian,Simmer everything together.
Egg Fried Rice,\"rice, egg, onion, oil\",20,Lunch,Chinese,Fry the rice with egg.
";

// ============================================================================
// Scripted LLM Provider
// ============================================================================

/// LLM provider returning canned responses, optionally after a delay
pub struct ScriptedProvider {
    response: Result<String, String>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_request: Mutex<Option<ChatRequest>>,
}

impl ScriptedProvider {
    pub fn replying(content: impl Into<String>) -> Self {
        Self {
            response: Ok(content.into()),
            delay: None,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            delay: None,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn display_name(&self) -> &'static str {
        "Scripted Test Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::text_only()
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    fn available_models(&self) -> &'static [&'static str] {
        &["scripted-model"]
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.response {
            Ok(content) => Ok(ChatResponse {
                content: content.clone(),
                model: request
                    .model
                    .clone()
                    .unwrap_or_else(|| "scripted-model".to_owned()),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            Err(message) => Err(AppError::external_service("scripted", message.clone())),
        }
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(self.response.is_ok())
    }
}

// ============================================================================
// Stub Recipe Generator
// ============================================================================

/// Generator returning a fixed outcome and counting calls
pub struct StubGenerator {
    outcome: Result<Vec<RecipeRecord>, GenerationError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl StubGenerator {
    pub fn returning(recipes: Vec<RecipeRecord>) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(recipes),
            delay: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(error: GenerationError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(error),
            delay: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn hanging(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(Vec::new()),
            delay: Some(delay),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeGenerator for StubGenerator {
    fn name(&self) -> &str {
        "stub"
    }

    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> Result<Vec<RecipeRecord>, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.clone()
    }
}
