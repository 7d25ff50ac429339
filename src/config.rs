//! Configuration for the AskMyDoc backend

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Text extraction configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,
    /// Chat responder configuration
    #[serde(default)]
    pub chat: ChatConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Invalid config file '{}': {}", path.display(), e)))
    }

    /// Default configuration with host/port overrides from the environment
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(host) = std::env::var("ASKMYDOC_HOST") {
            config.server.host = host;
        }
        if let Some(port) = std::env::var("ASKMYDOC_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.server.port = port;
        }
        config
    }

    /// Load from the file named by `ASKMYDOC_CONFIG`, falling back to
    /// defaults plus environment overrides.
    pub fn load() -> Result<Self> {
        match std::env::var("ASKMYDOC_CONFIG") {
            Ok(path) => Self::from_toml_file(path),
            Err(_) => Ok(Self::from_env()),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS (the browser clients are served from another origin)
    pub enable_cors: bool,
    /// Maximum upload size in bytes (default: 50MB)
    pub max_upload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            enable_cors: true,
            max_upload_size: 50 * 1024 * 1024, // 50MB
        }
    }
}

/// Text extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Timeout for extracting a single upload in seconds
    pub parse_timeout_secs: u64,
    /// Maximum number of per-page records returned in a parse response
    /// (0 = no limit). The concatenated text is always returned in full.
    pub max_response_pages: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            parse_timeout_secs: 30,
            max_response_pages: 0,
        }
    }
}

/// Chat responder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Display name used in templated replies
    pub assistant_name: String,
    /// Maximum characters of page text quoted in a reply
    pub snippet_chars: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            assistant_name: "AskMyDoc".to_string(),
            snippet_chars: 280,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.max_upload_size, 50 * 1024 * 1024);
        assert_eq!(config.extraction.parse_timeout_secs, 30);
        assert_eq!(config.chat.assistant_name, "AskMyDoc");
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
host = "127.0.0.1"
port = 9000
enable_cors = false
max_upload_size = 1048576

[chat]
assistant_name = "TestBot"
snippet_chars = 64
"#
        )
        .unwrap();

        let config = AppConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert!(!config.server.enable_cors);
        assert_eq!(config.chat.assistant_name, "TestBot");
        // Section not present in the file falls back to defaults
        assert_eq!(config.extraction.parse_timeout_secs, 30);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = not-a-number").unwrap();

        let err = AppConfig::from_toml_file(file.path()).unwrap_err();
        assert!(matches!(err, crate::error::Error::Config(_)));
    }
}
