// ABOUTME: Unified LLM provider selector for runtime provider switching
// ABOUTME: Abstracts over Gemini and Groq providers based on environment configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

//! # LLM Provider Selector
//!
//! Set `PANTRY_LLM_PROVIDER` to pick the backend:
//! - `gemini` (default): Google Gemini, requires `GEMINI_API_KEY`
//! - `groq`: Groq-hosted Llama, requires `GROQ_API_KEY`
//!
//! `PANTRY_LLM_MODEL` overrides the provider's default model.

use std::env;
use std::fmt;

use async_trait::async_trait;
use tracing::{debug, info};

use super::{ChatRequest, ChatResponse, GeminiProvider, GroqProvider, LlmCapabilities, LlmProvider};
use crate::config::LlmProviderType;
use crate::errors::AppError;

/// Unified chat provider that wraps Gemini or Groq
pub enum ChatProvider {
    /// Google Gemini provider
    Gemini(GeminiProvider),
    /// Groq provider
    Groq(GroqProvider),
}

impl ChatProvider {
    /// Create a provider from environment configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the selected provider's API key is not set
    pub fn from_env() -> Result<Self, AppError> {
        let provider_type = LlmProviderType::from_env();

        info!(
            "Initializing LLM provider: {} (set {} to change)",
            provider_type,
            LlmProviderType::ENV_VAR
        );

        let provider = Self::create_provider(provider_type, LlmProviderType::model_from_env())?;
        debug!(
            "Provider {} initialized with model: {}",
            provider.display_name(),
            provider.default_model()
        );
        Ok(provider)
    }

    /// Create a provider for a specific type, optionally overriding its model
    ///
    /// # Errors
    ///
    /// Returns an error if the provider's API key is not set
    pub fn create_provider(
        provider_type: LlmProviderType,
        model: Option<String>,
    ) -> Result<Self, AppError> {
        Ok(match (provider_type, model) {
            (LlmProviderType::Gemini, None) => Self::Gemini(GeminiProvider::from_env()?),
            (LlmProviderType::Gemini, Some(model)) => {
                Self::Gemini(GeminiProvider::from_env()?.with_default_model(model))
            }
            (LlmProviderType::Groq, None) => Self::Groq(GroqProvider::from_env()?),
            (LlmProviderType::Groq, Some(model)) => {
                Self::Groq(GroqProvider::from_env()?.with_default_model(model))
            }
        })
    }

    /// Whether the API key for `provider_type` is present in the environment
    #[must_use]
    pub fn api_key_configured(provider_type: LlmProviderType) -> bool {
        env::var(provider_type.api_key_env_var()).is_ok_and(|key| !key.trim().is_empty())
    }

    /// Get the provider type
    #[must_use]
    pub const fn provider_type(&self) -> LlmProviderType {
        match self {
            Self::Gemini(_) => LlmProviderType::Gemini,
            Self::Groq(_) => LlmProviderType::Groq,
        }
    }

    /// Model to use for generation.
    ///
    /// Gemini asks the API which models the key can use unless a model was
    /// pinned through `PANTRY_LLM_MODEL`; Groq uses its configured default.
    pub async fn resolve_model(&self) -> String {
        match self {
            Self::Gemini(p) if LlmProviderType::model_from_env().is_none() => {
                p.discover_model().await
            }
            Self::Gemini(p) => p.default_model().to_owned(),
            Self::Groq(p) => p.default_model().to_owned(),
        }
    }
}

impl fmt::Debug for ChatProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gemini(p) => f.debug_tuple("ChatProvider::Gemini").field(p).finish(),
            Self::Groq(p) => f.debug_tuple("ChatProvider::Groq").field(p).finish(),
        }
    }
}

#[async_trait]
impl LlmProvider for ChatProvider {
    fn name(&self) -> &'static str {
        match self {
            Self::Gemini(p) => p.name(),
            Self::Groq(p) => p.name(),
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Self::Gemini(p) => p.display_name(),
            Self::Groq(p) => p.display_name(),
        }
    }

    fn capabilities(&self) -> LlmCapabilities {
        match self {
            Self::Gemini(p) => p.capabilities(),
            Self::Groq(p) => p.capabilities(),
        }
    }

    fn default_model(&self) -> &str {
        match self {
            Self::Gemini(p) => p.default_model(),
            Self::Groq(p) => p.default_model(),
        }
    }

    fn available_models(&self) -> &'static [&'static str] {
        match self {
            Self::Gemini(p) => p.available_models(),
            Self::Groq(p) => p.available_models(),
        }
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        match self {
            Self::Gemini(p) => p.complete(request).await,
            Self::Groq(p) => p.complete(request).await,
        }
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        match self {
            Self::Gemini(p) => p.health_check().await,
            Self::Groq(p) => p.health_check().await,
        }
    }
}
