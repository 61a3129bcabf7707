//! One agent's conversation with its language model.
//!
//! The history starts with the system prompt and grows by one user message
//! and (on success) one assistant message per exchange. It is never pruned,
//! so a session lives exactly as long as one game for one agent.

use std::time::Duration;

use codenames_types::config::AgentsConfig;
use codenames_types::llm::{CompletionRequest, LlmError, Message, MessageRole, ProviderConfig};
use rand::Rng;
use tracing::{Instrument, debug, info_span, warn};

use super::backoff::BackoffPolicy;
use crate::llm::box_provider::BoxLlmProvider;

/// Request parameters shared by every exchange in a session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: Option<f64>,
    pub backoff: BackoffPolicy,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from_provider(&ProviderConfig::default(), BackoffPolicy::default())
    }
}

impl SessionSettings {
    pub fn from_provider(provider: &ProviderConfig, backoff: BackoffPolicy) -> Self {
        Self {
            model: provider.resolved_model(),
            max_tokens: provider.max_tokens,
            temperature: provider.temperature,
            backoff,
        }
    }

    pub fn from_config(config: &AgentsConfig) -> Self {
        Self::from_provider(
            &config.provider,
            BackoffPolicy::from_config(&config.transport),
        )
    }
}

/// Ordered message history bound to a provider.
///
/// Exclusively owned by one agent; every exchange takes `&mut self`.
pub struct ConversationSession {
    provider: BoxLlmProvider,
    settings: SessionSettings,
    history: Vec<Message>,
}

impl ConversationSession {
    pub fn new(
        provider: BoxLlmProvider,
        system_prompt: impl Into<String>,
        settings: SessionSettings,
    ) -> Self {
        Self {
            provider,
            settings,
            history: vec![Message::system(system_prompt)],
        }
    }

    /// Send `prompt` and return the model's reply.
    ///
    /// The prompt is appended to the history once, however many transport
    /// attempts it takes. Rate-limit class failures are retried with
    /// backoff; anything else, or running out of attempts, is returned as
    /// is and leaves the prompt in the history without a reply.
    pub async fn send(&mut self, prompt: &str) -> Result<String, LlmError> {
        self.history.push(Message::user(prompt));
        let request = self.build_request();

        let mut attempt: u32 = 0;
        loop {
            let span = info_span!(
                "gen_ai.chat",
                gen_ai.system = self.provider.name(),
                gen_ai.request.model = %request.model,
                gen_ai.request.max_tokens = request.max_tokens,
                gen_ai.request.temperature = ?request.temperature,
                attempt = attempt + 1,
            );

            match self.provider.complete(&request).instrument(span).await {
                Ok(response) => {
                    debug!(
                        model = %response.model,
                        input_tokens = response.usage.input_tokens,
                        output_tokens = response.usage.output_tokens,
                        reply = %response.content,
                        "exchange complete"
                    );
                    self.history.push(Message::assistant(response.content.clone()));
                    return Ok(response.content);
                }
                Err(e) if e.is_rate_limit_class() && self.settings.backoff.should_retry(attempt) => {
                    let retry_after = match &e {
                        LlmError::RateLimited {
                            retry_after_ms: Some(ms),
                        } => Some(Duration::from_millis(*ms)),
                        _ => None,
                    };
                    let jitter: f64 = rand::thread_rng().gen_range(0.0..=1.0);
                    let delay = self.settings.backoff.delay_for(attempt, jitter, retry_after);
                    warn!(
                        error = %e,
                        attempt = attempt + 1,
                        max_attempts = self.settings.backoff.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        "provider rate limited, backing off"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn build_request(&self) -> CompletionRequest {
        CompletionRequest {
            model: self.settings.model.clone(),
            messages: self.history.clone(),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        }
    }

    /// Full history, system prompt first.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Number of replies received so far.
    pub fn exchanges(&self) -> usize {
        self.history
            .iter()
            .filter(|m| m.role == MessageRole::Assistant)
            .count()
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }
}

impl std::fmt::Debug for ConversationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationSession")
            .field("provider", &self.provider.name())
            .field("model", &self.settings.model)
            .field("messages", &self.history.len())
            .finish()
    }
}
