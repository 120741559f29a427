//! Core library for the ARSTATE.AI conversational assistant.
//!
//! This crate implements the turn-processing logic behind the chat front-end:
//! deciding whether an incoming message is plain conversation, a request for a
//! new generated image, or a revision of the previously generated image, and
//! threading the last successful image prompt through the conversation.
//!
//! # Architecture Overview
//!
//! The crate is organized around a handful of small subsystems:
//!
//! - **Conversation orchestration**: per-turn dispatch and error degradation
//! - **Intent classification**: model-assisted revision detection with a
//!   keyword fallback for new image requests
//! - **Persona rules**: canned identity/bio responses driven by static
//!   keyword tables
//! - **Model integration**: narrow text- and image-model traits with a
//!   Gemini/Imagen client implementation
//! - **Configuration**: YAML configuration with environment-aware defaults

pub mod config;
pub mod core_types;
pub mod errors;
pub mod intent;
pub mod llm;
pub mod orchestrator;
pub mod persona;
pub mod prompts;
pub mod responder;

pub use config::AssistantConfig;
pub use core_types::{ChatMessage, Sender, TurnOutcome};
pub use errors::AssistantError;
pub use intent::{IntentClassifier, UserIntent};
pub use llm::{ImageModel, TextModel, TextRequest};
pub use orchestrator::Orchestrator;
pub use persona::Persona;

#[cfg(test)]
pub mod test_utils;
