use anyhow::Result;
use async_trait::async_trait;
use prism::errors::PipelineError;
use prism::providers::ai::AiProvider;
use prism::providers::db::sqlite::SqliteProvider;
use std::sync::{Arc, Mutex};
use std::time::Duration;

// --- Test Setup ---

/// A helper struct to manage database creation for each test.
pub struct TestSetup {
    pub provider: SqliteProvider,
}

impl TestSetup {
    /// Creates a new, isolated in-memory database with the schema and the
    /// seeded reference dataset.
    pub async fn new() -> Result<Self> {
        let provider = SqliteProvider::new(":memory:").await?;
        provider.initialize_schema().await?;
        provider.seed_reference_data().await?;
        Ok(Self { provider })
    }
}

// --- Mock AI Providers ---

/// Replays a programmed reply and records every prompt it receives.
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    reply: Arc<Mutex<String>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockAiProvider {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: Arc::new(Mutex::new(reply.to_string())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Replaces the programmed reply.
    pub fn set_reply(&self, reply: &str) {
        *self.reply.lock().unwrap() = reply.to_string();
    }

    /// Retrieves the recorded prompts for assertion.
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, PipelineError> {
        self.calls.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.lock().unwrap().clone())
    }
}

/// Fails every call, for exercising the gateway's fallback path.
#[derive(Clone, Debug)]
pub struct FailingAiProvider;

#[async_trait]
impl AiProvider for FailingAiProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, PipelineError> {
        Err(PipelineError::AiApi(
            "simulated provider outage".to_string(),
        ))
    }
}

/// Answers after a fixed delay, for exercising the gateway timeout.
#[derive(Clone, Debug)]
pub struct SlowAiProvider {
    pub delay: Duration,
}

#[async_trait]
impl AiProvider for SlowAiProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, PipelineError> {
        tokio::time::sleep(self.delay).await;
        Ok("late reply".to_string())
    }
}
