//! Error types for failure handling across the assistant core
//!
//! This module provides the unified error hierarchy for turn processing.
//! Errors are categorized by their source (text model, image model,
//! configuration, parsing) so callers can log meaningfully, even though the
//! orchestrator ultimately degrades every failure into a single canned
//! user-facing message.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AssistantError {
    #[error("Text model interaction failed: {0}")]
    LlmError(String),
    #[error("Image generation failed: {0}")]
    ImageError(String),
    #[error("Parsing error: {0}")]
    ParsingError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for AssistantError {
    fn from(err: std::io::Error) -> Self {
        AssistantError::IoError(err.to_string())
    }
}

impl From<reqwest::Error> for AssistantError {
    fn from(err: reqwest::Error) -> Self {
        AssistantError::LlmError(err.to_string())
    }
}
