//! Static rule responder for identity and creator-bio questions.
//!
//! These rules run before any model call and short-circuit the turn when they
//! match. Precedence is fixed and observable: a direct question about the
//! creator beats the general identity question, which beats the follow-up
//! confirmation. Swapping the order changes behavior for overlapping inputs,
//! so the order here mirrors the shipped front-end exactly.

use crate::core_types::{ChatMessage, Sender};
use crate::persona::{contains_any, Persona};

/// Run the rule checks against the current message and history. Returns the
/// canned reply when a rule matches, `None` to fall through to intent
/// classification.
pub fn respond(persona: &Persona, message: &str, history: &[ChatMessage]) -> Option<ChatMessage> {
    let lowered = message.to_lowercase();
    let lowered = lowered.trim();

    // 1. Direct question about the creator ("siapa bachtiar?"). Requires both
    // a question-like trigger and a subject name.
    if contains_any(lowered, &persona.bio_trigger_keywords)
        && contains_any(lowered, &persona.bio_subject_keywords)
    {
        log::debug!("Rule responder matched: direct bio request");
        return Some(ChatMessage::ai_text(persona.bio_response.clone()));
    }

    // 2. General identity question ("siapa kamu?").
    if contains_any(lowered, &persona.identity_keywords) {
        log::debug!("Rule responder matched: identity question");
        return Some(ChatMessage::ai_text(persona.identity_response.clone()));
    }

    // 3. Confirmation right after the identity response ("iya, tampilkan").
    // Only fires when the second-to-last message is the identity text verbatim.
    if identity_response_just_sent(persona, history)
        && contains_any(lowered, &persona.bio_request_keywords)
    {
        log::debug!("Rule responder matched: bio follow-up confirmation");
        return Some(ChatMessage::ai_text(persona.bio_response.clone()));
    }

    None
}

/// Bounded lookback: true when the second-to-last history entry is an AI text
/// message equal to the identity response. Histories shorter than 2 never match.
fn identity_response_just_sent(persona: &Persona, history: &[ChatMessage]) -> bool {
    let Some(previous) = history.len().checked_sub(2).map(|i| &history[i]) else {
        return false;
    };
    matches!(
        previous,
        ChatMessage::Text { sender, content, .. }
            if *sender == Sender::Ai && *content == persona.identity_response
    )
}
