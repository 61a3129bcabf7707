//! LLM provider implementations.
//!
//! Contains the live implementation of the [`LlmProvider`] trait defined in
//! `codenames-core` and a factory ([`create_provider`]) that turns a
//! [`ProviderConfig`] into a ready-to-use [`BoxLlmProvider`].
//!
//! [`LlmProvider`]: codenames_core::llm::provider::LlmProvider

pub mod openai_compat;

use secrecy::SecretString;

use codenames_core::llm::box_provider::BoxLlmProvider;
use codenames_core::llm::mock::OfflineProvider;
use codenames_types::llm::{LlmError, ProviderConfig, ProviderType};

use crate::secret::EnvSecretProvider;

use self::openai_compat::OpenAiCompatibleProvider;

/// Create a [`BoxLlmProvider`] from a [`ProviderConfig`], reading the API
/// key from the environment variable the config names.
///
/// # Errors
///
/// [`LlmError::AuthenticationFailed`] when a live provider's key variable
/// is unset, [`LlmError::InvalidRequest`] for an `openai_compatible`
/// provider without a base URL.
pub fn create_provider(config: &ProviderConfig) -> Result<BoxLlmProvider, LlmError> {
    let api_key = config
        .resolved_api_key_env()
        .and_then(|var| {
            let key = EnvSecretProvider::new().get(&var);
            if key.is_none() {
                tracing::warn!(env = %var, provider = %config.provider_type, "API key variable is not set");
            }
            key
        });
    create_provider_with_key(config, api_key)
}

/// Like [`create_provider`], with the API key already resolved.
pub fn create_provider_with_key(
    config: &ProviderConfig,
    api_key: Option<SecretString>,
) -> Result<BoxLlmProvider, LlmError> {
    let model = config.resolved_model();
    match config.provider_type {
        ProviderType::Mock => Ok(BoxLlmProvider::new(OfflineProvider::new())),
        ProviderType::OpenAi => {
            let key = api_key.ok_or(LlmError::AuthenticationFailed)?;
            let provider = match config.base_url.as_deref() {
                Some(base_url) => OpenAiCompatibleProvider::new(openai_compat::config::OpenAiCompatConfig {
                    provider_name: "openai".to_string(),
                    base_url: base_url.to_string(),
                    api_key: key,
                    model,
                }),
                None => OpenAiCompatibleProvider::openai(key, &model),
            };
            Ok(BoxLlmProvider::new(provider))
        }
        ProviderType::Gemini => {
            let key = api_key.ok_or(LlmError::AuthenticationFailed)?;
            Ok(BoxLlmProvider::new(OpenAiCompatibleProvider::gemini(key, &model)))
        }
        ProviderType::OpenAiCompatible => {
            let base_url = config.base_url.as_deref().ok_or_else(|| {
                LlmError::InvalidRequest("openai_compatible provider needs a base_url".to_string())
            })?;
            // Local servers commonly accept any key, so only a configured
            // but unset variable is an error.
            let key = match (api_key, config.resolved_api_key_env()) {
                (Some(key), _) => key,
                (None, None) => SecretString::from(String::new()),
                (None, Some(_)) => return Err(LlmError::AuthenticationFailed),
            };
            Ok(BoxLlmProvider::new(OpenAiCompatibleProvider::compatible(
                key, &model, base_url,
            )))
        }
    }
}
