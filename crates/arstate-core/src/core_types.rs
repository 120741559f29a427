//! Core type definitions for the conversation data model
//!
//! This module defines the message types exchanged between the orchestrator
//! and its caller. The shapes mirror what the front-end renders: a chat is an
//! append-only sequence of text and image messages, and only the assistant
//! side ever produces image messages.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

/// A single entry in the conversation history.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChatMessage {
    Text {
        id: String,
        sender: Sender,
        content: String,
    },
    Image {
        id: String,
        sender: Sender,
        #[serde(rename = "imageUrl")]
        image_url: String,
        prompt: String,
    },
}

impl ChatMessage {
    pub fn user_text(content: impl Into<String>) -> Self {
        ChatMessage::Text {
            id: new_message_id(),
            sender: Sender::User,
            content: content.into(),
        }
    }

    pub fn ai_text(content: impl Into<String>) -> Self {
        ChatMessage::Text {
            id: new_message_id(),
            sender: Sender::Ai,
            content: content.into(),
        }
    }

    pub fn ai_image(image_url: impl Into<String>, prompt: impl Into<String>) -> Self {
        ChatMessage::Image {
            id: new_message_id(),
            sender: Sender::Ai,
            image_url: image_url.into(),
            prompt: prompt.into(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ChatMessage::Text { id, .. } => id,
            ChatMessage::Image { id, .. } => id,
        }
    }

    pub fn sender(&self) -> Sender {
        match self {
            ChatMessage::Text { sender, .. } => *sender,
            ChatMessage::Image { sender, .. } => *sender,
        }
    }
}

/// Result of processing one user turn: the assistant's reply plus the value
/// the caller should store as the new "last image prompt".
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    pub message: ChatMessage,
    pub new_prompt: Option<String>,
}

/// Creation-time derived id. The timestamp alone can collide when two
/// messages land in the same millisecond, so a short random suffix is added.
pub fn new_message_id() -> String {
    format!(
        "{}-{}",
        chrono::Utc::now().timestamp_millis(),
        uuid::Uuid::new_v4().simple().to_string().chars().take(8).collect::<String>()
    )
}
