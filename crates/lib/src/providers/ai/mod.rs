pub mod gemini;
pub mod local;

use crate::errors::PipelineError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with an AI provider.
///
/// This trait defines a common interface for generating text completions
/// using different generative language services (e.g., Gemini, local models).
/// The provider receives one fully assembled prompt string and returns the
/// model's textual completion unmodified.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a text completion for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String, PipelineError>;
}

dyn_clone::clone_trait_object!(AiProvider);
