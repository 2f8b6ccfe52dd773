//! Application configuration loader for Sellcraft.
//!
//! Reads `config.toml` from the data directory (`~/.sellcraft/` in
//! production) and deserializes it into [`AppConfig`]. Falls back to
//! defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use sellcraft_core::provider::ModelIds;
use sellcraft_types::config::AppConfig;

/// Resolve the data directory from `SELLCRAFT_DATA_DIR`, falling back
/// to `~/.sellcraft`.
pub fn data_dir() -> PathBuf {
    match std::env::var("SELLCRAFT_DATA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".sellcraft")
        }
    }
}

/// Load application configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`AppConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
pub async fn load_app_config(data_dir: &Path) -> AppConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AppConfig::default()
        }
    }
}

/// Model identifiers from the loaded configuration.
pub fn model_ids(config: &AppConfig) -> ModelIds {
    ModelIds {
        text: config.models.text.clone(),
        image_standard: config.models.image_standard.clone(),
        image_high_quality: config.models.image_high_quality.clone(),
    }
}
