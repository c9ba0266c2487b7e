//! # Model Gateway
//!
//! The single seam between the pipeline and the external generative
//! capability. A flaky model service must never break the conversational
//! endpoint, so every failure of the call — transport, quota, malformed
//! response, timeout — is folded into one fixed, user-facing fallback
//! message and surfaced as a normal completion.

use crate::providers::ai::AiProvider;
use std::time::Duration;
use tokio::time::timeout;
use tracing::warn;

/// The substitute text returned when the external model call fails.
pub const GATEWAY_FALLBACK_MESSAGE: &str = "Sorry, the AI server could not process your request.";

/// Applied when the builder is not given an explicit timeout.
pub const DEFAULT_GATEWAY_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends assembled prompts to the configured [`AiProvider`], bounding each
/// call with a timeout and masking failures.
#[derive(Clone, Debug)]
pub struct ModelGateway {
    provider: Box<dyn AiProvider>,
    timeout: Duration,
}

impl ModelGateway {
    pub fn new(provider: Box<dyn AiProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Returns the model's completion, or the fixed fallback text on any
    /// failure. Timeout expiry counts as a failure. No retries.
    pub async fn complete(&self, prompt: &str) -> String {
        match timeout(self.timeout, self.provider.generate(prompt)).await {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!("AI provider call failed: {e}");
                GATEWAY_FALLBACK_MESSAGE.to_string()
            }
            Err(_) => {
                warn!(
                    "AI provider call exceeded the {:?} timeout",
                    self.timeout
                );
                GATEWAY_FALLBACK_MESSAGE.to_string()
            }
        }
    }
}
