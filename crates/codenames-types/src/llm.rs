//! LLM request/response types for the Codenames agents.
//!
//! These types model the data shapes exchanged with a language-model
//! provider: the role-tagged conversation, completion requests/responses,
//! provider selection, and transport errors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a message in an LLM conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::System => write!(f, "system"),
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single message in an LLM conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Request to an LLM provider for a completion.
///
/// The whole conversation (system message first) travels in `messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl CompletionRequest {
    /// Content of the most recent user message, if any.
    pub fn last_user_message(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .map(|m| m.content.as_str())
    }
}

/// Response from an LLM provider for a completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub content: String,
    pub model: String,
    #[serde(default)]
    pub usage: Usage,
}

/// Token usage for a completion request/response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Errors from LLM provider operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("provider overloaded: {0}")]
    Overloaded(String),

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("context length exceeded: max {max}, requested {requested}")]
    ContextLengthExceeded { max: u32, requested: u32 },

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl LlmError {
    /// Whether this failure is rate-limit class and worth retrying with backoff.
    pub fn is_rate_limit_class(&self) -> bool {
        matches!(self, LlmError::RateLimited { .. } | LlmError::Overloaded(_))
    }
}

/// Which backend answers the agents' prompts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderType {
    /// Deterministic offline replies; no network.
    Mock,
    #[default]
    #[serde(rename = "openai")]
    OpenAi,
    Gemini,
    #[serde(rename = "openai_compatible")]
    OpenAiCompatible,
}

impl ProviderType {
    /// Model used when the config does not name one.
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderType::Mock => "offline",
            ProviderType::OpenAi | ProviderType::OpenAiCompatible => "gpt-4o-2024-05-13",
            ProviderType::Gemini => "gemini-2.5-flash-lite",
        }
    }

    /// Environment variable holding the API key when the config does not name one.
    pub fn default_api_key_env(&self) -> Option<&'static str> {
        match self {
            ProviderType::Mock => None,
            ProviderType::OpenAi => Some("OPENAI_API_KEY"),
            ProviderType::Gemini => Some("GEMINI_API_KEY"),
            // Local servers usually take no key; name one in the config if needed.
            ProviderType::OpenAiCompatible => None,
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderType::Mock => write!(f, "mock"),
            ProviderType::OpenAi => write!(f, "openai"),
            ProviderType::Gemini => write!(f, "gemini"),
            ProviderType::OpenAiCompatible => write!(f, "openai_compatible"),
        }
    }
}

/// Configuration for the provider an agent talks to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Backend type.
    #[serde(default)]
    pub provider_type: ProviderType,
    /// Model identifier; falls back to [`ProviderType::default_model`].
    #[serde(default)]
    pub model: Option<String>,
    /// Override the default base URL for the provider.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Name of the environment variable holding the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// Output token cap per exchange.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Sampling temperature; provider default when unset.
    #[serde(default)]
    pub temperature: Option<f64>,
}

fn default_max_tokens() -> u32 {
    512
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider_type: ProviderType::default(),
            model: None,
            base_url: None,
            api_key_env: None,
            max_tokens: default_max_tokens(),
            temperature: None,
        }
    }
}

impl ProviderConfig {
    /// Offline provider configuration.
    pub fn mock() -> Self {
        Self {
            provider_type: ProviderType::Mock,
            ..Self::default()
        }
    }

    /// The model to request, after defaults.
    pub fn resolved_model(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| self.provider_type.default_model().to_string())
    }

    /// The API key environment variable to read, after defaults.
    pub fn resolved_api_key_env(&self) -> Option<String> {
        self.api_key_env
            .clone()
            .or_else(|| self.provider_type.default_api_key_env().map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_display_matches_serde() {
        for role in [MessageRole::System, MessageRole::User, MessageRole::Assistant] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{role}\""));
        }
    }

    #[test]
    fn test_message_role_serde() {
        let role = MessageRole::Assistant;
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, "\"assistant\"");
    }

    #[test]
    fn test_last_user_message() {
        let request = CompletionRequest {
            model: "m".to_string(),
            messages: vec![
                Message::system("rules"),
                Message::user("first"),
                Message::assistant("reply"),
                Message::user("second"),
            ],
            max_tokens: 10,
            temperature: None,
        };
        assert_eq!(request.last_user_message(), Some("second"));
    }

    #[test]
    fn test_rate_limit_class() {
        assert!(LlmError::RateLimited { retry_after_ms: None }.is_rate_limit_class());
        assert!(LlmError::Overloaded("busy".to_string()).is_rate_limit_class());
        assert!(!LlmError::AuthenticationFailed.is_rate_limit_class());
        assert!(
            !LlmError::Provider {
                message: "500".to_string()
            }
            .is_rate_limit_class()
        );
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::ContextLengthExceeded {
            max: 100_000,
            requested: 120_000,
        };
        assert!(err.to_string().contains("100000"));
        assert!(err.to_string().contains("120000"));
    }

    #[test]
    fn test_provider_type_display_matches_serde() {
        for pt in [
            ProviderType::Mock,
            ProviderType::OpenAi,
            ProviderType::Gemini,
            ProviderType::OpenAiCompatible,
        ] {
            let json = serde_json::to_string(&pt).unwrap();
            assert_eq!(json, format!("\"{pt}\""));
        }
    }

    #[test]
    fn test_compatible_has_no_default_key_env() {
        let config = ProviderConfig {
            provider_type: ProviderType::OpenAiCompatible,
            ..ProviderConfig::default()
        };
        assert_eq!(config.resolved_api_key_env(), None);

        let config = ProviderConfig {
            api_key_env: Some("LOCAL_LLM_KEY".to_string()),
            ..config
        };
        assert_eq!(config.resolved_api_key_env().as_deref(), Some("LOCAL_LLM_KEY"));
    }

    #[test]
    fn test_provider_type_serde() {
        let json = serde_json::to_string(&ProviderType::OpenAi).unwrap();
        assert_eq!(json, "\"openai\"");
        let parsed: ProviderType = serde_json::from_str("\"gemini\"").unwrap();
        assert_eq!(parsed, ProviderType::Gemini);
    }

    #[test]
    fn test_provider_config_defaults() {
        let config: ProviderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.provider_type, ProviderType::OpenAi);
        assert_eq!(config.max_tokens, 512);
        assert_eq!(config.resolved_model(), "gpt-4o-2024-05-13");
        assert_eq!(config.resolved_api_key_env().as_deref(), Some("OPENAI_API_KEY"));
    }

    #[test]
    fn test_gemini_defaults() {
        let config = ProviderConfig {
            provider_type: ProviderType::Gemini,
            ..ProviderConfig::default()
        };
        assert_eq!(config.resolved_model(), "gemini-2.5-flash-lite");
        assert_eq!(config.resolved_api_key_env().as_deref(), Some("GEMINI_API_KEY"));
    }

    #[test]
    fn test_mock_has_no_key() {
        assert!(ProviderConfig::mock().resolved_api_key_env().is_none());
    }
}
