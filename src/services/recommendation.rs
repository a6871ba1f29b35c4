// ABOUTME: Recommendation service: normalize, filter, select, score, and fall back to generation
// ABOUTME: Produces an explicit catalog, generated, or no-match outcome for every request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

//! # Recommendation Service
//!
//! ```text
//! request ─► normalize ─► filter ─► select_top ─► score ──► Catalog
//!                │                                  │
//!                └ empty ─► NoMatch                 └ too few ─► generate ─► re-validate ─► Generated
//! ```
//!
//! Generation failures never escape as errors: they become
//! `NoMatch(GenerationUnavailable)` or leave the catalog result in place.
//! Only a zero time budget or an out-of-range overlap override is rejected.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, field, info, instrument, warn, Span};
use uuid::Uuid;

use pantry_core::errors::{AppError, AppResult, GenerationError};
use pantry_core::models::RecipeRecord;
use pantry_intelligence::{
    filter_recipes, ingredient_overlap, select_top, Candidate, FilterCriteria,
    IngredientNormalizer, MatchingConfig, RecipeScorer,
};

use crate::catalog::Catalog;
use crate::config::{GenerationSettings, RecommenderConfig};
use crate::generation::{GenerationRequest, LlmRecipeGenerator, RecipeGenerator};
use crate::llm::{ChatProvider, LlmProvider};
use crate::logging::AppLogger;
use crate::video::recipe_search_url;

// ============================================================================
// Request / Outcome Types
// ============================================================================

/// One recommendation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Raw ingredient text, comma or newline delimited
    pub ingredients: String,
    /// Requested meal type
    pub meal_type: String,
    /// Requested cuisine
    pub cuisine: String,
    /// Time budget in minutes, must be positive
    pub time_budget: u32,
    /// Override of the configured top-N bound
    #[serde(default)]
    pub top_n: Option<usize>,
    /// Override of the configured overlap threshold (0-1)
    #[serde(default)]
    pub min_overlap: Option<f64>,
    /// Whether the generation fallback may run for this request
    #[serde(default = "default_allow_generation")]
    pub allow_generation: bool,
}

const fn default_allow_generation() -> bool {
    true
}

impl RecommendationRequest {
    /// Request with configured defaults for every optional setting
    #[must_use]
    pub fn new(
        ingredients: impl Into<String>,
        meal_type: impl Into<String>,
        cuisine: impl Into<String>,
        time_budget: u32,
    ) -> Self {
        Self {
            ingredients: ingredients.into(),
            meal_type: meal_type.into(),
            cuisine: cuisine.into(),
            time_budget,
            top_n: None,
            min_overlap: None,
            allow_generation: true,
        }
    }

    /// Override the number of catalog candidates
    #[must_use]
    pub const fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = Some(top_n);
        self
    }

    /// Override the overlap threshold
    #[must_use]
    pub const fn with_min_overlap(mut self, fraction: f64) -> Self {
        self.min_overlap = Some(fraction);
        self
    }

    /// Disable the generation fallback
    #[must_use]
    pub const fn without_generation(mut self) -> Self {
        self.allow_generation = false;
        self
    }
}

/// A recipe offered to the user with its score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// Recipe fields and ingredient overlap
    #[serde(flatten)]
    pub candidate: Candidate,
    /// Multi-factor score (0-100)
    pub score: f64,
    /// Justification, set on generated recipes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Video search link for the recipe
    pub video_url: String,
}

impl ScoredCandidate {
    fn new(candidate: Candidate, score: f64, reason: Option<String>) -> Self {
        let video_url = recipe_search_url(&candidate.name, &candidate.cuisine);
        Self {
            candidate,
            score,
            reason,
            video_url,
        }
    }
}

/// Why a request produced no recipes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum NoMatchReason {
    /// The ingredient text contained no usable ingredient
    InsufficientIngredients,
    /// No catalog recipe qualified and generation was not attempted
    NoCandidates,
    /// No catalog recipe qualified and generation produced nothing usable
    GenerationUnavailable(String),
}

/// Outcome of a recommendation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "result", rename_all = "snake_case")]
pub enum Recommendation {
    /// Catalog recipes, ordered by overlap (highest first)
    Catalog(Vec<ScoredCandidate>),
    /// Generated recipes, ordered by score (highest first)
    Generated(Vec<ScoredCandidate>),
    /// Nothing to recommend
    NoMatch(NoMatchReason),
}

impl Recommendation {
    /// Recipes of the outcome, empty for `NoMatch`
    #[must_use]
    pub fn recipes(&self) -> &[ScoredCandidate] {
        match self {
            Self::Catalog(recipes) | Self::Generated(recipes) => recipes,
            Self::NoMatch(_) => &[],
        }
    }

    /// Short label for logs
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Catalog(_) => "catalog",
            Self::Generated(_) => "generated",
            Self::NoMatch(_) => "no_match",
        }
    }
}

/// Outcome plus request metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    /// Correlation id, also attached to the request's log span
    pub request_id: Uuid,
    /// Ingredients after normalization
    pub normalized_ingredients: Vec<String>,
    /// Result of the request
    pub outcome: Recommendation,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
}

// ============================================================================
// Service
// ============================================================================

/// Recommends recipes from a catalog, falling back to a generator
#[derive(Clone)]
pub struct RecommendationService {
    catalog: Catalog,
    normalizer: IngredientNormalizer,
    scorer: RecipeScorer,
    matching: MatchingConfig,
    generation: GenerationSettings,
    min_catalog_candidates: usize,
    generator: Option<Arc<dyn RecipeGenerator>>,
}

impl RecommendationService {
    /// Service over `catalog` with the given configuration and no generator
    #[must_use]
    pub fn new(catalog: Catalog, config: &RecommenderConfig) -> Self {
        Self {
            catalog,
            normalizer: IngredientNormalizer::default(),
            scorer: RecipeScorer::new(config.matching.scoring),
            matching: config.matching.clone(),
            generation: config.generation.clone(),
            min_catalog_candidates: config.min_catalog_candidates,
            generator: None,
        }
    }

    /// Attach a generation collaborator
    #[must_use]
    pub fn with_generator(mut self, generator: Arc<dyn RecipeGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Replace the normalizer, e.g. to use a custom alias table
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: IngredientNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Build the service from configuration: load the catalog and, when
    /// generation is enabled and an API key is present, wire the LLM generator.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured catalog cannot be loaded
    pub async fn from_config(config: &RecommenderConfig) -> AppResult<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => {
                warn!("No catalog configured, only generated recipes are available");
                Catalog::default()
            }
        };

        let service = Self::new(catalog, config);
        if !config.generation.enabled {
            info!("Recipe generation disabled");
            return Ok(service);
        }
        if !ChatProvider::api_key_configured(config.provider) {
            warn!(
                provider = %config.provider,
                key = config.provider.api_key_env_var(),
                "LLM API key not set, recipe generation unavailable"
            );
            return Ok(service);
        }

        let provider = ChatProvider::create_provider(config.provider, None)?;
        let model = provider.resolve_model().await;
        let generator = LlmRecipeGenerator::new(Arc::new(provider) as Arc<dyn LlmProvider>)
            .with_model(model)
            .with_timeout(config.generation.timeout());

        Ok(service.with_generator(Arc::new(generator)))
    }

    /// Catalog in use
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Normalizer in use
    #[must_use]
    pub const fn normalizer(&self) -> &IngredientNormalizer {
        &self.normalizer
    }

    /// Whether a generator is attached
    #[must_use]
    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Recommend recipes for `request`
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the time budget is 0 or the overlap
    /// override lies outside 0-1. Every other situation, including
    /// generation failures, is reported through the returned outcome.
    #[instrument(skip(self, request), fields(request_id = field::Empty))]
    pub async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> AppResult<RecommendationReport> {
        let request_id = Uuid::new_v4();
        Span::current().record("request_id", field::display(request_id));
        let started = Instant::now();

        if request.time_budget == 0 {
            return Err(AppError::out_of_range(
                "Time budget must be greater than 0 minutes",
            ));
        }
        if let Some(fraction) = request.min_overlap {
            if !(0.0..=1.0).contains(&fraction) {
                return Err(AppError::out_of_range(format!(
                    "Minimum overlap must be between 0 and 1, got {fraction}"
                )));
            }
        }

        let normalized = self.normalizer.normalize(&request.ingredients);
        let outcome = if normalized.is_empty() {
            info!("Ingredient text normalized to nothing");
            Recommendation::NoMatch(NoMatchReason::InsufficientIngredients)
        } else {
            let catalog_hits = self.rank_catalog(&normalized, request)?;
            self.resolve(catalog_hits, &normalized, request).await?
        };

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        AppLogger::log_recommendation(
            &request_id.to_string(),
            outcome.label(),
            outcome.recipes().len(),
            elapsed_ms,
        );

        Ok(RecommendationReport {
            request_id,
            normalized_ingredients: normalized,
            outcome,
            generated_at: Utc::now(),
        })
    }

    /// Filter, select and score catalog recipes for normalized ingredients
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the time budget is 0
    pub fn rank_catalog(
        &self,
        normalized: &[String],
        request: &RecommendationRequest,
    ) -> AppResult<Vec<ScoredCandidate>> {
        let criteria = FilterCriteria::new(
            request.time_budget,
            request.meal_type.clone(),
            request.cuisine.clone(),
        )
        .with_min_overlap(
            request
                .min_overlap
                .unwrap_or(self.matching.min_overlap_fraction),
        );
        let top_n = request.top_n.unwrap_or(self.matching.top_n);

        let ranked = filter_recipes(self.catalog.recipes(), normalized, &criteria);
        let candidates = select_top(&ranked, top_n);

        candidates
            .into_iter()
            .map(|candidate| {
                let score =
                    self.scorer
                        .score(&candidate.to_record(), normalized, request.time_budget)?;
                Ok(ScoredCandidate::new(candidate, score, None))
            })
            .collect()
    }

    /// Decide between catalog results and the generation fallback
    async fn resolve(
        &self,
        catalog_hits: Vec<ScoredCandidate>,
        normalized: &[String],
        request: &RecommendationRequest,
    ) -> AppResult<Recommendation> {
        if !catalog_hits.is_empty() && catalog_hits.len() >= self.min_catalog_candidates {
            debug!(count = catalog_hits.len(), "Catalog candidates sufficient");
            return Ok(Recommendation::Catalog(catalog_hits));
        }

        if !(request.allow_generation && self.generation.enabled) {
            return Ok(Self::catalog_or(catalog_hits, NoMatchReason::NoCandidates));
        }

        match self.generate(normalized, request).await? {
            Ok(generated) if !generated.is_empty() => Ok(Recommendation::Generated(generated)),
            Ok(_) => Ok(Self::catalog_or(
                catalog_hits,
                NoMatchReason::GenerationUnavailable(
                    "no generated recipe satisfied the request constraints".to_owned(),
                ),
            )),
            Err(e) => {
                warn!(kind = e.kind(), error = %e, "Generation fallback failed");
                Ok(Self::catalog_or(
                    catalog_hits,
                    NoMatchReason::GenerationUnavailable(e.to_string()),
                ))
            }
        }
    }

    fn catalog_or(catalog_hits: Vec<ScoredCandidate>, reason: NoMatchReason) -> Recommendation {
        if catalog_hits.is_empty() {
            Recommendation::NoMatch(reason)
        } else {
            Recommendation::Catalog(catalog_hits)
        }
    }

    /// Run the generator and keep only recipes honoring the request.
    ///
    /// The outer `AppResult` carries scorer failures; the inner result carries
    /// collaborator failures, which the caller turns into an outcome.
    async fn generate(
        &self,
        normalized: &[String],
        request: &RecommendationRequest,
    ) -> AppResult<Result<Vec<ScoredCandidate>, GenerationError>> {
        let Some(generator) = &self.generator else {
            return Ok(Err(GenerationError::NotConfigured));
        };

        let generation_request = GenerationRequest::new(
            normalized.to_vec(),
            request.meal_type.clone(),
            request.cuisine.clone(),
            request.time_budget,
        )
        .with_count(self.generation.count);

        info!(generator = generator.name(), "Falling back to recipe generation");

        let generated = match timeout(
            self.generation.timeout(),
            generator.generate(&generation_request),
        )
        .await
        {
            Ok(Ok(recipes)) => recipes,
            Ok(Err(e)) => return Ok(Err(e)),
            Err(_) => {
                return Ok(Err(GenerationError::Timeout(
                    self.generation.timeout_secs,
                )))
            }
        };

        let received = generated.len();
        let mut scored = generated
            .into_iter()
            .filter(|recipe| self.honors_request(recipe, request))
            .map(|recipe| self.score_generated(recipe, normalized, request.time_budget))
            .collect::<AppResult<Vec<_>>>()?;

        // Stable: equal scores keep generation order
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));

        debug!(
            received,
            kept = scored.len(),
            "Re-validated generated recipes"
        );
        Ok(Ok(scored))
    }

    /// Whether a generated recipe satisfies the request's hard constraints
    fn honors_request(&self, recipe: &RecipeRecord, request: &RecommendationRequest) -> bool {
        if let Err(e) = recipe.validate() {
            debug!(recipe = %recipe.name, error = %e, "Dropping invalid generated recipe");
            return false;
        }
        if !recipe.fits_time_budget(request.time_budget) {
            debug!(
                recipe = %recipe.name,
                cooking_time = recipe.cooking_time,
                "Dropping generated recipe over time budget"
            );
            return false;
        }
        if self.generation.strict_validation
            && !(recipe.matches_meal_type(&request.meal_type)
                && recipe.matches_cuisine(&request.cuisine))
        {
            debug!(
                recipe = %recipe.name,
                meal_type = %recipe.meal_type,
                cuisine = %recipe.cuisine,
                "Dropping generated recipe with mismatched meal type or cuisine"
            );
            return false;
        }
        true
    }

    fn score_generated(
        &self,
        recipe: RecipeRecord,
        normalized: &[String],
        time_budget: u32,
    ) -> AppResult<ScoredCandidate> {
        let score = self.scorer.score(&recipe, normalized, time_budget)?;
        let overlap = ingredient_overlap(&recipe.ingredients, normalized);
        let reason = recipe.reason_or_default().to_owned();
        Ok(ScoredCandidate::new(
            Candidate::from_record(&recipe, Some(overlap)),
            score,
            Some(reason),
        ))
    }
}

impl fmt::Debug for RecommendationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecommendationService")
            .field("catalog_size", &self.catalog.len())
            .field("matching", &self.matching)
            .field("generation", &self.generation)
            .field("min_catalog_candidates", &self.min_catalog_candidates)
            .field("generator", &self.generator.as_ref().map(|g| g.name().to_owned()))
            .finish_non_exhaustive()
    }
}
