//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the
//! logic for building it at startup. The `AppState` holds all shared
//! resources — the configuration, the storage provider, and the pipeline
//! client — making them accessible to all request handlers.

use crate::config::AppConfig;
use prism::{
    providers::{
        ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider},
        db::sqlite::SqliteProvider,
    },
    ChatClient, ChatClientBuilder,
};
use std::{path::Path, sync::Arc, time::Duration};
use tracing::info;

/// The shared application state, accessible from all request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The application's configuration, loaded from `config.yml`.
    pub config: Arc<AppConfig>,
    /// The database provider backing both the pipeline and the image routes.
    pub sqlite_provider: Arc<SqliteProvider>,
    /// The question-answering pipeline client.
    pub chat_client: Arc<ChatClient>,
}

/// Builds the shared application state from the configuration.
///
/// This instantiates the configured AI provider (failing fast when the
/// Gemini provider is selected without an API key), opens the SQLite
/// database, ensures the schema and reference dataset exist, and constructs
/// the pipeline client.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let chat_provider_name = &config.chat.provider;
    let provider_config = config.providers.get(chat_provider_name).ok_or_else(|| {
        anyhow::anyhow!("Chat task references unknown provider '{chat_provider_name}'")
    })?;

    let ai_provider: Box<dyn AiProvider> = match provider_config.provider.as_str() {
        "gemini" => {
            let api_key = provider_config
                .api_key
                .clone()
                .filter(|key| !key.is_empty())
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "api_key is required for gemini provider '{chat_provider_name}'. Please set AI_API_KEY in your environment."
                    )
                })?;
            // If api_url is not provided in config, construct it from the model name.
            let api_url = provider_config.api_url.clone().unwrap_or_else(|| {
                format!(
                    "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
                    provider_config.model_name
                )
            });
            Box::new(GeminiProvider::new(api_url, api_key)?)
        }
        "local" => {
            // For local providers, the URL is always required.
            let api_url = provider_config.api_url.clone().ok_or_else(|| {
                anyhow::anyhow!(
                    "api_url is required for local provider '{chat_provider_name}'. Please set LOCAL_AI_API_URL in your .env file."
                )
            })?;
            Box::new(LocalAiProvider::new(
                api_url,
                provider_config.api_key.clone(),
                Some(provider_config.model_name.clone()),
            )?)
        }
        other => {
            return Err(anyhow::anyhow!(
                "Unsupported AI provider type '{other}' for provider '{chat_provider_name}'"
            ));
        }
    };
    info!(
        provider = %chat_provider_name,
        model = %provider_config.model_name,
        "AI provider configured"
    );

    if let Some(parent) = Path::new(&config.db_url).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let sqlite_provider = SqliteProvider::new(&config.db_url).await?;
    info!(db_path = %config.db_url, "Initialized local storage provider (SQLite)");
    // Ensure the schema and the reference dataset are in place on startup.
    sqlite_provider.initialize_schema().await?;
    sqlite_provider.seed_reference_data().await?;

    let chat_client = ChatClientBuilder::new()
        .ai_provider(ai_provider)
        .storage(sqlite_provider.clone())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()?;

    Ok(AppState {
        config: Arc::new(config),
        sqlite_provider: Arc::new(sqlite_provider),
        chat_client: Arc::new(chat_client),
    })
}
