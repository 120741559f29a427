//! Configuration for the assistant
//!
//! Supports YAML configuration files with full defaults: a missing or empty
//! file yields the shipped persona and model ids, so the binary runs with
//! nothing but an API key in the environment.

use crate::errors::AssistantError;
use crate::persona::Persona;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AssistantConfig {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub persona: Persona,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_text_model")]
    pub text_model: String,
    #[serde(default = "default_image_model")]
    pub image_model: String,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable to read the API key from instead of `api_key`.
    #[serde(default)]
    pub api_key_env: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            text_model: default_text_model(),
            image_model: default_image_model(),
            api_key: None,
            api_key_env: None,
            base_url: None,
        }
    }
}

fn default_text_model() -> String {
    "gemini-2.5-flash-preview-04-17".to_string()
}

fn default_image_model() -> String {
    "imagen-3.0-generate-002".to_string()
}

impl AssistantConfig {
    /// Load configuration from a YAML file.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssistantError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await.map_err(|e| {
            AssistantError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_str(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_str(content: &str) -> Result<Self, AssistantError> {
        serde_yaml::from_str(content)
            .map_err(|e| AssistantError::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Load from a file if it exists, otherwise fall back to defaults.
    pub async fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self, AssistantError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path).await
        } else {
            log::info!(
                "Config file {} not found, using default configuration",
                path.display()
            );
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = AssistantConfig::from_str("{}").unwrap();
        assert_eq!(config.model.text_model, "gemini-2.5-flash-preview-04-17");
        assert_eq!(config.model.image_model, "imagen-3.0-generate-002");
        assert!(config.model.api_key.is_none());
    }

    #[test]
    fn model_section_overrides() {
        let yaml = r#"
model:
  text_model: gemini-2.0-flash
  api_key_env: MY_GEMINI_KEY
"#;
        let config = AssistantConfig::from_str(yaml).unwrap();
        assert_eq!(config.model.text_model, "gemini-2.0-flash");
        assert_eq!(config.model.api_key_env.as_deref(), Some("MY_GEMINI_KEY"));
        // untouched fields keep their defaults
        assert_eq!(config.model.image_model, "imagen-3.0-generate-002");
    }

    #[test]
    fn persona_section_overrides() {
        let yaml = r#"
persona:
  bio_subject_keywords: ["bachtiar"]
"#;
        let config = AssistantConfig::from_str(yaml).unwrap();
        assert_eq!(config.persona.bio_subject_keywords, vec!["bachtiar"]);
        assert!(!config.persona.identity_keywords.is_empty());
    }

    #[test]
    fn invalid_yaml_is_a_config_error() {
        let err = AssistantConfig::from_str("model: [").unwrap_err();
        assert!(matches!(err, AssistantError::ConfigError(_)));
    }
}
