//! Model provider abstractions.
//!
//! Defines the narrow text- and image-model traits the orchestrator depends
//! on, plus the Gemini/Imagen implementation. Keeping the traits this small
//! lets tests substitute scripted in-memory models for the real client.

use crate::errors::AssistantError;
use async_trait::async_trait;

pub mod gemini;

pub use gemini::GeminiClient;

/// One text-generation request. The four call sites (chat, visual-prompt
/// authoring, revision, intent classification) differ only in these fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRequest {
    pub prompt: String,
    pub system_instruction: Option<String>,
    pub temperature: Option<f32>,
    /// Thinking-token budget; 0 disables extended reasoning. A latency and
    /// cost knob, not a correctness one.
    pub thinking_budget: Option<u32>,
}

impl TextRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_instruction: None,
            temperature: None,
            thinking_budget: None,
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_thinking_budget(mut self, budget: u32) -> Self {
        self.thinking_budget = Some(budget);
        self
    }
}

#[async_trait]
pub trait TextModel: Send + Sync {
    async fn generate(&self, request: TextRequest) -> Result<String, AssistantError>;
}

#[async_trait]
pub trait ImageModel: Send + Sync {
    /// Generate an image for the prompt and return it as a data URL.
    async fn generate_image(&self, prompt: &str) -> Result<String, AssistantError>;
}
