//! # PRISM Core Pipeline
//!
//! This crate answers natural-language questions about a water-sample
//! microplastics dataset by combining a relational store with a call to an
//! external generative-language service.
//!
//! The flow per question: route it with the keyword heuristic in
//! [`context`], optionally read and serialize the full table contents
//! ([`serializer`]), assemble one instruction+data+question prompt, and send
//! it through the failure-masking [`gateway`].

pub mod context;
pub mod errors;
pub mod gateway;
pub mod prompts;
pub mod providers;
pub mod serializer;
pub mod types;

pub use errors::PipelineError;
pub use gateway::{ModelGateway, GATEWAY_FALLBACK_MESSAGE};
pub use types::{ChatClient, ChatClientBuilder};

use serializer::{render_table, CONTEXT_TABLES};
use tracing::{debug, info};

impl ChatClient {
    /// Answers one user question.
    ///
    /// Storage and serialization faults propagate to the caller; a failing
    /// model call does not — the gateway substitutes its fixed fallback
    /// text and the result is still `Ok`.
    pub async fn answer(&self, message: &str) -> Result<String, PipelineError> {
        let prompt = self.assemble_prompt(message).await?;
        Ok(self.gateway.complete(&prompt).await)
    }

    /// Builds the full prompt for a question: the static instruction block,
    /// the serialized table context when the question is data-dependent, and
    /// the verbatim user text as the final segment.
    ///
    /// Identical input against unchanged data yields a byte-identical
    /// prompt; there is no per-call randomness in assembly.
    pub async fn assemble_prompt(&self, message: &str) -> Result<String, PipelineError> {
        if context::needs_database_context(message) {
            info!("Routing as data-dependent; injecting table context");
            let data_block = self.render_database_context().await?;
            Ok(format!(
                "{instructions}\n\n{data_block}\n\nUser question: {message}",
                instructions = prompts::core::ASSISTANT_INSTRUCTIONS
            ))
        } else {
            debug!("Routing as data-independent; instructions only");
            Ok(format!(
                "{instructions}\n\nUser question: {message}",
                instructions = prompts::core::ASSISTANT_INSTRUCTIONS
            ))
        }
    }

    /// Serializes the current contents of all three context tables, one
    /// line per table, rows in primary-key order. Always the full tables:
    /// even when a question names a single sample, the model receives the
    /// complete dataset and selects the relevant subset per its
    /// instructions.
    pub async fn render_database_context(&self) -> Result<String, PipelineError> {
        let mut lines = Vec::with_capacity(CONTEXT_TABLES.len());
        for spec in &CONTEXT_TABLES {
            let rows = self.storage.read_table(spec).await?;
            lines.push(render_table(spec, &rows)?);
        }
        Ok(lines.join("\n"))
    }
}
