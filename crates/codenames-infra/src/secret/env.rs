//! Environment variable secret provider.

use secrecy::SecretString;

/// Reads API keys from environment variables.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    pub fn new() -> Self {
        Self
    }

    /// Value of the variable `key`, if set to a non-empty string.
    pub fn get(&self, key: &str) -> Option<SecretString> {
        match std::env::var(key) {
            Ok(val) if !val.trim().is_empty() => Some(SecretString::from(val)),
            Ok(_) => None,
            Err(std::env::VarError::NotPresent) => None,
            // Secrets must be valid strings; treat as not set.
            Err(std::env::VarError::NotUnicode(_)) => None,
        }
    }
}
