// ABOUTME: LLM-backed recipe generator with a bounded call time and tolerant response parsing
// ABOUTME: Sends the recipe prompt to any LlmProvider and converts failures into GenerationError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::time::timeout;
use tracing::{instrument, warn};

use pantry_core::constants::generation::DEFAULT_TIMEOUT_SECS;
use pantry_core::errors::GenerationError;
use pantry_core::models::RecipeRecord;

use super::parser::parse_recipes;
use super::{GenerationRequest, RecipeGenerator};
use crate::llm::prompts::{get_recipe_system_prompt, recipe_prompt};
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};
use crate::logging::AppLogger;

/// Sampling temperature: varied recipes, still close to the JSON format
const GENERATION_TEMPERATURE: f32 = 0.7;

/// Generates recipes by prompting an LLM provider
#[derive(Clone)]
pub struct LlmRecipeGenerator {
    provider: Arc<dyn LlmProvider>,
    model: Option<String>,
    timeout: Duration,
}

impl LlmRecipeGenerator {
    /// Generator using the provider's default model and the default timeout
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            model: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Use a specific model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Bound each generation call
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Model the next call will use
    #[must_use]
    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }

    fn chat_request(&self, request: &GenerationRequest) -> ChatRequest {
        let messages = vec![
            ChatMessage::system(get_recipe_system_prompt()),
            ChatMessage::user(recipe_prompt(request)),
        ];
        ChatRequest::new(messages)
            .with_model(self.model())
            .with_temperature(GENERATION_TEMPERATURE)
    }
}

impl fmt::Debug for LlmRecipeGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmRecipeGenerator")
            .field("provider", &self.provider.name())
            .field("model", &self.model())
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[async_trait]
impl RecipeGenerator for LlmRecipeGenerator {
    fn name(&self) -> &str {
        self.provider.name()
    }

    #[instrument(skip(self, request), fields(provider = %self.provider.name(), count = request.count))]
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<RecipeRecord>, GenerationError> {
        let chat_request = self.chat_request(request);
        let started = Instant::now();

        let outcome = timeout(self.timeout, self.provider.complete(&chat_request)).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let response = match outcome {
            Err(_) => {
                warn!(timeout_secs = self.timeout.as_secs(), "Generation call timed out");
                AppLogger::log_generation_call(self.provider.name(), self.model(), false, elapsed_ms);
                return Err(GenerationError::Timeout(self.timeout.as_secs()));
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Generation call failed");
                AppLogger::log_generation_call(self.provider.name(), self.model(), false, elapsed_ms);
                return Err(GenerationError::Service(e.to_string()));
            }
            Ok(Ok(response)) => response,
        };

        AppLogger::log_generation_call(self.provider.name(), &response.model, true, elapsed_ms);

        if response.content.trim().is_empty() {
            return Err(GenerationError::Empty);
        }

        let mut recipes = parse_recipes(&response.content, request)?;
        recipes.truncate(request.count.max(1));
        Ok(recipes)
    }
}
