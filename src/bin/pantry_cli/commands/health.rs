// ABOUTME: Health command for pantry-cli
// ABOUTME: Checks the alias table, the LLM key, the resolved model, and backend reachability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

use pantry_chef::config::LlmProviderType;
use pantry_chef::errors::AppResult;
use pantry_chef::llm::{ChatProvider, LlmProvider};
use pantry_intelligence::AliasTable;
use tracing::warn;

/// Report alias table consistency, provider, key presence, model, and reachability
pub async fn run() -> AppResult<()> {
    let aliases = AliasTable::builtin();
    println!("Aliases:  {} canonical ingredients", aliases.len());
    for conflict in aliases.conflicts() {
        println!(
            "  '{}' resolves to '{}', shadowing '{}'",
            conflict.spelling, conflict.resolved_to, conflict.shadowed
        );
    }

    let provider_type = LlmProviderType::from_env();
    println!("Provider: {provider_type}");
    if !ChatProvider::api_key_configured(provider_type) {
        println!("API key:  missing (set {})", provider_type.api_key_env_var());
        println!("Status:   generation unavailable");
        return Ok(());
    }
    println!("API key:  present");

    let provider = ChatProvider::create_provider(provider_type, LlmProviderType::model_from_env())?;
    let model = provider.resolve_model().await;
    println!("Model:    {model}");

    match provider.health_check().await {
        Ok(true) => println!("Status:   reachable"),
        Ok(false) => println!("Status:   unhealthy"),
        Err(e) => {
            warn!(error = %e, provider = provider.display_name(), "Health check failed");
            println!("Status:   error ({e})");
        }
    }
    Ok(())
}
