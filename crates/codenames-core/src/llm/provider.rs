//! LlmProvider trait definition.
//!
//! The single capability the agents need from a language model: send the
//! whole conversation, get text back.

use codenames_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for LLM provider backends (OpenAI, Gemini, offline, ...).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). Wrap an
/// implementation in [`super::box_provider::BoxLlmProvider`] to select it
/// at runtime.
///
/// Live implementations live in codenames-infra.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai", "mock").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
