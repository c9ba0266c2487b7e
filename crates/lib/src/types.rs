use crate::{
    errors::PipelineError,
    gateway::{ModelGateway, DEFAULT_GATEWAY_TIMEOUT},
    providers::{ai::AiProvider, db::sqlite::SqliteProvider},
};
use std::time::Duration;

/// The stateless pipeline client for the conversational endpoint.
///
/// Holds the storage provider and the model gateway; every call to
/// [`ChatClient::answer`](crate::ChatClient::answer) refetches data and
/// reassembles the prompt from scratch. There is no session state and no
/// caching of prompts or responses.
#[derive(Clone, Debug)]
pub struct ChatClient {
    pub(crate) gateway: ModelGateway,
    pub(crate) storage: SqliteProvider,
}

/// Builder for [`ChatClient`].
#[derive(Debug, Default)]
pub struct ChatClientBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
    storage: Option<SqliteProvider>,
    timeout: Option<Duration>,
}

impl ChatClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AI provider behind the model gateway.
    pub fn ai_provider(mut self, provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(provider);
        self
    }

    /// Sets the storage provider used for context retrieval.
    pub fn storage(mut self, storage: SqliteProvider) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Bounds each model call; expiry counts as a gateway failure.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<ChatClient, PipelineError> {
        let provider = self.ai_provider.ok_or(PipelineError::MissingAiProvider)?;
        let storage = self.storage.ok_or(PipelineError::MissingStorageProvider)?;
        let timeout = self.timeout.unwrap_or(DEFAULT_GATEWAY_TIMEOUT);

        Ok(ChatClient {
            gateway: ModelGateway::new(provider, timeout),
            storage,
        })
    }
}
