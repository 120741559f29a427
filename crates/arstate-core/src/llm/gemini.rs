//! Google Gemini and Imagen API client implementation
//!
//! This module provides a native client for Google's Generative AI API
//! endpoints: `generateContent` for text and `predict` for Imagen image
//! generation. It implements both model traits so a single configured client
//! serves every call the orchestrator makes.

use crate::config::ModelConfig;
use crate::errors::AssistantError;
use crate::llm::{ImageModel, TextModel, TextRequest};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::Arc;

/// Google Gemini/Imagen API client
pub struct GeminiClient {
    api_key: String,
    text_model: String,
    image_model: String,
    client: Client,
    base_url: String,
}

impl GeminiClient {
    /// Create a new client for the given model ids
    pub fn new(api_key: String, text_model: String, image_model: String) -> Self {
        Self {
            api_key,
            text_model,
            image_model,
            client: Client::new(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    /// Create a new client with a custom base URL
    pub fn with_base_url(
        api_key: String,
        text_model: String,
        image_model: String,
        base_url: String,
    ) -> Self {
        Self {
            api_key,
            text_model,
            image_model,
            client: Client::new(),
            base_url,
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GeminiGenerationConfig>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(rename = "thinkingConfig", skip_serializing_if = "Option::is_none")]
    thinking_config: Option<GeminiThinkingConfig>,
}

#[derive(Debug, Serialize)]
struct GeminiThinkingConfig {
    #[serde(rename = "thinkingBudget")]
    thinking_budget: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<PredictInstance>,
    parameters: PredictParameters,
}

#[derive(Debug, Serialize)]
struct PredictInstance {
    prompt: String,
}

#[derive(Debug, Serialize)]
struct PredictParameters {
    #[serde(rename = "sampleCount")]
    sample_count: u32,
    #[serde(rename = "outputMimeType")]
    output_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    #[serde(rename = "bytesBase64Encoded")]
    bytes_base64_encoded: String,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorDetails,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetails {
    code: u16,
    message: String,
}

impl GeminiClient {
    fn build_request(&self, request: TextRequest) -> GenerateContentRequest {
        let generation_config = if request.temperature.is_some() || request.thinking_budget.is_some()
        {
            Some(GeminiGenerationConfig {
                temperature: request.temperature,
                thinking_config: request
                    .thinking_budget
                    .map(|thinking_budget| GeminiThinkingConfig { thinking_budget }),
            })
        } else {
            None
        };

        GenerateContentRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: request.prompt,
                }],
            }],
            generation_config,
            system_instruction: request.system_instruction.map(|text| GeminiContent {
                role: None,
                parts: vec![GeminiPart { text }],
            }),
        }
    }

    async fn read_error(response: reqwest::Response) -> AssistantError {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        if let Ok(gemini_error) = serde_json::from_str::<GeminiError>(&error_text) {
            return AssistantError::LlmError(format!(
                "Gemini API error {}: {}",
                gemini_error.error.code, gemini_error.error.message
            ));
        }

        AssistantError::LlmError(format!(
            "Gemini API request failed with status {}: {}",
            status, error_text
        ))
    }
}

#[async_trait]
impl TextModel for GeminiClient {
    async fn generate(&self, request: TextRequest) -> Result<String, AssistantError> {
        let payload = self.build_request(request);

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.text_model, self.api_key
        );
        log::debug!("GeminiClient generateContent via model {}", self.text_model);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| AssistantError::LlmError(format!("Gemini API request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            AssistantError::ParsingError(format!("Failed to parse Gemini response: {}", e))
        })?;

        let candidate = body.candidates.into_iter().next().ok_or_else(|| {
            AssistantError::LlmError("No candidates in Gemini response".to_string())
        })?;

        let text = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect::<Vec<String>>()
            .join(" ");

        if text.is_empty() {
            return Err(AssistantError::LlmError(
                "Empty text in Gemini response".to_string(),
            ));
        }
        Ok(text)
    }
}

#[async_trait]
impl ImageModel for GeminiClient {
    async fn generate_image(&self, prompt: &str) -> Result<String, AssistantError> {
        let payload = PredictRequest {
            instances: vec![PredictInstance {
                prompt: prompt.to_string(),
            }],
            parameters: PredictParameters {
                sample_count: 1,
                output_mime_type: "image/jpeg".to_string(),
            },
        };

        let url = format!(
            "{}/models/{}:predict?key={}",
            self.base_url, self.image_model, self.api_key
        );
        log::debug!("GeminiClient predict via model {}", self.image_model);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| AssistantError::ImageError(format!("Imagen API request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }

        let body: PredictResponse = response.json().await.map_err(|e| {
            AssistantError::ParsingError(format!("Failed to parse Imagen response: {}", e))
        })?;

        let prediction = body.predictions.into_iter().next().ok_or_else(|| {
            AssistantError::ImageError("Image generation failed to produce an image".to_string())
        })?;

        Ok(format!(
            "data:image/jpeg;base64,{}",
            prediction.bytes_base64_encoded
        ))
    }
}

/// Create a Gemini client from configuration, resolving the API key from the
/// config or the `GEMINI_API_KEY` environment variable.
pub fn create_client(config: &ModelConfig) -> Result<Arc<GeminiClient>, AssistantError> {
    let api_key = match &config.api_key {
        Some(key) => key.clone(),
        None => match &config.api_key_env {
            Some(env_var) => env::var(env_var).map_err(|_| {
                AssistantError::ConfigError(format!(
                    "Environment variable {} not found for Gemini API key",
                    env_var
                ))
            })?,
            None => env::var("GEMINI_API_KEY").map_err(|_| {
                AssistantError::ConfigError("No API key found for Gemini. Set GEMINI_API_KEY environment variable or provide api_key in config".to_string())
            })?,
        },
    };

    let client = match &config.base_url {
        Some(base_url) => GeminiClient::with_base_url(
            api_key,
            config.text_model.clone(),
            config.image_model.clone(),
            base_url.clone(),
        ),
        None => GeminiClient::new(api_key, config.text_model.clone(), config.image_model.clone()),
    };

    Ok(Arc::new(client))
}
