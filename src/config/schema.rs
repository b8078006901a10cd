use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration file.
///
/// Example YAML:
/// ```yaml
/// server:
///   host: 127.0.0.1
///   port: 9000
///   index_path: ./static/index.html
///   max_body_bytes: 10485760
/// analyzer:
///   lexicon: ./lexicon.yaml
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// HTML page served at `/`; read on every request, absence tolerated
    #[serde(default = "default_index_path")]
    pub index_path: PathBuf,

    /// Largest accepted request body; unlimited when unset
    #[serde(default)]
    pub max_body_bytes: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            index_path: default_index_path(),
            max_body_bytes: None,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Replace the built-in lexicon with this YAML file
    #[serde(default)]
    pub lexicon: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_index_path() -> PathBuf {
    PathBuf::from("index.html")
}
