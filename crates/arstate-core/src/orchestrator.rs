//! Per-turn conversation orchestration.
//!
//! `Orchestrator::process` is the single operation the front-end calls. It
//! holds no conversation state of its own: history and the last image prompt
//! come in as parameters and the updated prompt goes out in the result, so
//! the caller can serialize turns however it likes. The orchestrator never
//! returns an error; every failure in the model call chain degrades into the
//! persona's canned apology with the prompt slot left untouched.

use crate::core_types::{ChatMessage, TurnOutcome};
use crate::errors::AssistantError;
use crate::intent::{IntentClassifier, UserIntent};
use crate::llm::{ImageModel, TextModel, TextRequest};
use crate::persona::Persona;
use crate::prompts;
use crate::responder;
use std::sync::Arc;

pub struct Orchestrator {
    text_model: Arc<dyn TextModel>,
    image_model: Arc<dyn ImageModel>,
    classifier: IntentClassifier,
    persona: Persona,
}

impl Orchestrator {
    pub fn new(
        text_model: Arc<dyn TextModel>,
        image_model: Arc<dyn ImageModel>,
        persona: Persona,
    ) -> Self {
        let classifier = IntentClassifier::new(text_model.clone());
        Self {
            text_model,
            image_model,
            classifier,
            persona,
        }
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    /// Process one user turn. Rule checks run first and short-circuit; then
    /// the turn is classified and dispatched. `new_prompt` only moves when an
    /// image branch fully succeeds.
    pub async fn process(
        &self,
        user_message: &str,
        last_image_prompt: Option<&str>,
        history: &[ChatMessage],
    ) -> TurnOutcome {
        if let Some(message) = responder::respond(&self.persona, user_message, history) {
            return TurnOutcome {
                message,
                new_prompt: last_image_prompt.map(str::to_string),
            };
        }

        match self.run_turn(user_message, last_image_prompt).await {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("Turn failed, degrading to canned error message: {}", e);
                TurnOutcome {
                    message: ChatMessage::ai_text(self.persona.error_response.clone()),
                    new_prompt: last_image_prompt.map(str::to_string),
                }
            }
        }
    }

    async fn run_turn(
        &self,
        user_message: &str,
        last_image_prompt: Option<&str>,
    ) -> Result<TurnOutcome, AssistantError> {
        let intent = self
            .classifier
            .classify(&self.persona, user_message, last_image_prompt.is_some())
            .await?;
        log::info!("Dispatching turn as {:?}", intent);

        match intent {
            UserIntent::ReviseImage => {
                // Only reachable when a previous prompt exists.
                let last_prompt = last_image_prompt.ok_or_else(|| {
                    AssistantError::ParsingError(
                        "Revision intent without a previous image prompt".to_string(),
                    )
                })?;
                let revised = self
                    .author_prompt(prompts::revision_prompt(last_prompt, user_message))
                    .await?;
                let image_url = self.image_model.generate_image(&revised).await?;
                Ok(TurnOutcome {
                    message: ChatMessage::ai_image(image_url, revised.clone()),
                    new_prompt: Some(revised),
                })
            }
            UserIntent::GenerateImage => {
                let authored = self
                    .author_prompt(prompts::visual_prompt(user_message))
                    .await?;
                let image_url = self.image_model.generate_image(&authored).await?;
                Ok(TurnOutcome {
                    message: ChatMessage::ai_image(image_url, authored.clone()),
                    new_prompt: Some(authored),
                })
            }
            UserIntent::Chat => {
                let request = TextRequest::new(user_message)
                    .with_system_instruction(self.persona.chat_system_instruction.clone());
                let reply = self.text_model.generate(request).await?;
                Ok(TurnOutcome {
                    message: ChatMessage::ai_text(reply),
                    new_prompt: last_image_prompt.map(str::to_string),
                })
            }
        }
    }

    /// Prompt-engineering calls share their sampling setup: no system
    /// instruction, thinking disabled for latency.
    async fn author_prompt(&self, instruction: String) -> Result<String, AssistantError> {
        let request = TextRequest::new(instruction).with_thinking_budget(0);
        let authored = self.text_model.generate(request).await?;
        Ok(authored.trim().to_string())
    }
}
