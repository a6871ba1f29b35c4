// ABOUTME: Error type for the recipe generation collaborator (LLM-backed fallback)
// ABOUTME: Distinguishes timeouts, malformed payloads, empty results, and service failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

use thiserror::Error;

use super::{AppError, ErrorCode};

/// Failure modes of the generation service.
///
/// Every variant is recoverable from the recommendation pipeline's point of
/// view: the caller turns it into a "no generated recipes" outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The service did not answer within the configured bound
    #[error("generation service timed out after {0}s")]
    Timeout(u64),
    /// The service answered with data that could not be parsed into recipes
    #[error("generation service returned malformed data: {0}")]
    Malformed(String),
    /// The service answered but no record carried the required fields
    #[error("generation service returned no usable recipes")]
    Empty,
    /// Transport, authentication, or upstream API failure
    #[error("generation service error: {0}")]
    Service(String),
    /// No generation service is configured for this process
    #[error("no generation service configured")]
    NotConfigured,
}

impl GenerationError {
    /// Short machine-friendly label for structured logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Timeout(_) => "timeout",
            Self::Malformed(_) => "malformed",
            Self::Empty => "empty",
            Self::Service(_) => "service",
            Self::NotConfigured => "not_configured",
        }
    }
}

impl From<GenerationError> for AppError {
    fn from(error: GenerationError) -> Self {
        let code = match &error {
            GenerationError::Timeout(_) => ErrorCode::ExternalServiceUnavailable,
            GenerationError::Malformed(_) => ErrorCode::InvalidFormat,
            GenerationError::Empty => ErrorCode::ResourceNotFound,
            GenerationError::Service(_) => ErrorCode::ExternalServiceError,
            GenerationError::NotConfigured => ErrorCode::ConfigMissing,
        };
        Self::new(code, error.to_string())
    }
}
