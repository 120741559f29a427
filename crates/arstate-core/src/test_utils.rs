//! Scripted stand-ins for the model traits, used across unit tests.

use crate::errors::AssistantError;
use crate::llm::{ImageModel, TextModel, TextRequest};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Text model that replays a fixed queue of results and records every
/// request it receives.
pub struct ScriptedTextModel {
    responses: Mutex<VecDeque<Result<String, AssistantError>>>,
    pub recorded_requests: Mutex<Vec<TextRequest>>,
}

impl ScriptedTextModel {
    pub fn new(responses: Vec<Result<String, AssistantError>>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from(responses)),
            recorded_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(responses: &[&str]) -> Self {
        Self::new(responses.iter().map(|r| Ok(r.to_string())).collect())
    }

    pub fn failing(message: &str) -> Self {
        Self::new(vec![Err(AssistantError::LlmError(message.to_string()))])
    }

    pub fn requests(&self) -> Vec<TextRequest> {
        self.recorded_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextModel for ScriptedTextModel {
    async fn generate(&self, request: TextRequest) -> Result<String, AssistantError> {
        self.recorded_requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(AssistantError::LlmError(
                    "scripted text model ran out of responses".to_string(),
                ))
            })
    }
}

/// Image model that returns a fixed data URL, or fails when constructed
/// with `failing`.
pub struct ScriptedImageModel {
    result: Result<String, AssistantError>,
    pub recorded_prompts: Mutex<Vec<String>>,
}

impl ScriptedImageModel {
    pub fn returning(image_url: &str) -> Self {
        Self {
            result: Ok(image_url.to_string()),
            recorded_prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(AssistantError::ImageError(message.to_string())),
            recorded_prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.recorded_prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageModel for ScriptedImageModel {
    async fn generate_image(&self, prompt: &str) -> Result<String, AssistantError> {
        self.recorded_prompts.lock().unwrap().push(prompt.to_string());
        self.result.clone()
    }
}
