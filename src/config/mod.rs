mod schema;

pub use schema::{AnalyzerConfig, Config, ServerConfig};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/sentiment-api/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("sentiment-api"))
}

/// Get the default config file path (~/.config/sentiment-api/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   and falls back to built-in defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p
        }
        None => match get_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        },
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!("Failed to parse config: invalid YAML in {}", config_path.display())
    })?;

    Ok(config)
}

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let host = &config.server.host;
    if host.trim().is_empty() {
        errors.push("server.host: must not be empty".to_string());
    } else if host.chars().any(char::is_whitespace) {
        errors.push(format!("server.host: invalid '{}' - contains whitespace", host));
    }

    if config.server.index_path.as_os_str().is_empty() {
        errors.push("server.index_path: must not be empty".to_string());
    }

    if config.server.max_body_bytes == Some(0) {
        errors.push("server.max_body_bytes: must be greater than 0 when set".to_string());
    }

    if let Some(ref lexicon) = config.analyzer.lexicon {
        if lexicon.as_os_str().is_empty() {
            errors.push("analyzer.lexicon: must not be empty when set".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
