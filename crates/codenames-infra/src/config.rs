//! Agent configuration loader.
//!
//! Reads `config.toml` into [`AgentsConfig`]. A missing file means
//! defaults; a file that exists but does not parse is an error, so a typo
//! in a strategy name never silently turns into the default strategy.

use std::path::{Path, PathBuf};

use codenames_types::config::AgentsConfig;

/// Directory name under the home directory.
const DATA_DIR_NAME: &str = ".codenames-agents";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "CODENAMES_AGENTS_HOME";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("could not determine the home directory")]
    NoHomeDir,
}

/// Load agent configuration from `path`.
///
/// - Missing file: [`AgentsConfig::default()`].
/// - Unreadable or malformed file: [`ConfigError`].
pub async fn load_agents_config(path: &Path) -> Result<AgentsConfig, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return Ok(AgentsConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let config = toml::from_str::<AgentsConfig>(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        provider = %config.provider.provider_type,
        team = %config.team,
        "loaded agent config"
    );
    Ok(config)
}

/// Data directory: `$CODENAMES_AGENTS_HOME`, else `~/.codenames-agents`.
pub fn resolve_data_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(DATA_DIR_NAME))
        .ok_or(ConfigError::NoHomeDir)
}

/// Default config file location inside the data directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(resolve_data_dir()?.join("config.toml"))
}
