//! Intent classification for a user turn.
//!
//! Revision detection needs real language understanding ("hapus orang yang di
//! belakang" carries no keyword), so when a previous image prompt exists the
//! classifier asks the text model first, with deterministic sampling and the
//! thinking budget disabled. New-image detection stays keyword-driven for
//! speed and predictability, and everything else is plain chat.

use crate::errors::AssistantError;
use crate::llm::{TextModel, TextRequest};
use crate::persona::{contains_any, Persona};
use crate::prompts;
use std::sync::Arc;

/// The classified purpose of a user turn. Ephemeral, computed fresh each turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserIntent {
    Chat,
    GenerateImage,
    ReviseImage,
}

pub struct IntentClassifier {
    text_model: Arc<dyn TextModel>,
}

impl IntentClassifier {
    pub fn new(text_model: Arc<dyn TextModel>) -> Self {
        Self { text_model }
    }

    /// Classify the message. Model errors propagate to the caller; the
    /// orchestrator owns the degrade-to-canned-message policy.
    pub async fn classify(
        &self,
        persona: &Persona,
        message: &str,
        has_last_prompt: bool,
    ) -> Result<UserIntent, AssistantError> {
        if has_last_prompt {
            let request = TextRequest::new(prompts::revision_classification_prompt(message))
                .with_temperature(0.0)
                .with_thinking_budget(0);
            let label = self.text_model.generate(request).await?;
            if label.trim().to_uppercase() == "REVISE" {
                log::debug!("Intent classifier: revision of previous image");
                return Ok(UserIntent::ReviseImage);
            }
        }

        if contains_any(message, &persona.image_generation_keywords) {
            log::debug!("Intent classifier: new image request (keyword match)");
            return Ok(UserIntent::GenerateImage);
        }

        Ok(UserIntent::Chat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ScriptedTextModel;

    fn classifier(model: ScriptedTextModel) -> IntentClassifier {
        IntentClassifier::new(Arc::new(model))
    }

    #[tokio::test]
    async fn revise_label_wins_when_last_prompt_exists() {
        let model = classifier(ScriptedTextModel::replying(&["REVISE"]));
        let intent = model
            .classify(&Persona::default(), "tambahkan pohon", true)
            .await
            .unwrap();
        assert_eq!(intent, UserIntent::ReviseImage);
    }

    #[tokio::test]
    async fn revise_label_is_normalized() {
        let model = classifier(ScriptedTextModel::replying(&["  revise \n"]));
        let intent = model
            .classify(&Persona::default(), "buat lebih berwarna", true)
            .await
            .unwrap();
        assert_eq!(intent, UserIntent::ReviseImage);
    }

    #[tokio::test]
    async fn non_revise_label_falls_back_to_keywords() {
        let model = classifier(ScriptedTextModel::replying(&["CHAT"]));
        let intent = model
            .classify(&Persona::default(), "buatkan gambar gunung", true)
            .await
            .unwrap();
        assert_eq!(intent, UserIntent::GenerateImage);
    }

    #[tokio::test]
    async fn no_last_prompt_skips_the_model_entirely() {
        let scripted = ScriptedTextModel::replying(&[]);
        let model = IntentClassifier::new(Arc::new(scripted));
        let intent = model
            .classify(&Persona::default(), "buatkan saya gambar kucing", false)
            .await
            .unwrap();
        assert_eq!(intent, UserIntent::GenerateImage);
    }

    #[tokio::test]
    async fn plain_message_is_chat() {
        let model = classifier(ScriptedTextModel::replying(&[]));
        let intent = model
            .classify(&Persona::default(), "apa kabar?", false)
            .await
            .unwrap();
        assert_eq!(intent, UserIntent::Chat);
    }

    #[tokio::test]
    async fn classification_uses_deterministic_sampling() {
        let handle = Arc::new(ScriptedTextModel::replying(&["CHAT"]));
        let model = IntentClassifier::new(handle.clone());
        let _ = model
            .classify(&Persona::default(), "keren banget", true)
            .await
            .unwrap();
        let requests = handle.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].temperature, Some(0.0));
        assert_eq!(requests[0].thinking_budget, Some(0));
    }

    #[tokio::test]
    async fn model_failure_propagates() {
        let model = classifier(ScriptedTextModel::failing("timeout"));
        let err = model
            .classify(&Persona::default(), "ubah jadi malam", true)
            .await
            .unwrap_err();
        assert!(matches!(err, AssistantError::LlmError(_)));
    }
}
