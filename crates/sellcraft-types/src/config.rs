//! Application configuration loaded from `config.toml`.

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
///
/// All sections are optional in the file; missing sections fall back to
/// their defaults so a partial `config.toml` is always valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub models: ModelConfig,
}

/// HTTP server bind address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

/// Model identifier overrides, one per workload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelConfig {
    #[serde(default = "default_text_model")]
    pub text: String,
    #[serde(default = "default_image_standard_model")]
    pub image_standard: String,
    #[serde(default = "default_image_high_quality_model")]
    pub image_high_quality: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            text: default_text_model(),
            image_standard: default_image_standard_model(),
            image_high_quality: default_image_high_quality_model(),
        }
    }
}

fn default_text_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_image_standard_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_image_high_quality_model() -> String {
    "gemini-3-pro-image-preview".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8787);
        assert_eq!(config.models.text, "gemini-3-flash-preview");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
[server]
port = 9000
"#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.models.image_standard, "gemini-2.5-flash-image");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
