//! Prompt templates for the model calls the orchestrator issues.
//!
//! Each template is a plain function from the dynamic pieces of a turn to a
//! complete prompt string. Keeping them here, away from the wire client,
//! means the templates are testable without any network machinery.

/// Instruction for turning a raw user request into a detailed English
/// text-to-image prompt.
pub fn visual_prompt(user_request: &str) -> String {
    format!(
        "You are an expert prompt engineer for a text-to-image AI model. Your task is to convert a simple user request into a rich, detailed, and photorealistic prompt. The prompt MUST be in English. Do not add any conversational text, just output the final prompt. User request: \"{}\"",
        user_request
    )
}

/// Instruction for revising an existing image prompt with a new request.
pub fn revision_prompt(last_prompt: &str, revision_request: &str) -> String {
    format!(
        "You are an expert prompt engineer for a text-to-image AI model. Your task is to revise an existing image prompt based on a new user request. The revised prompt MUST be in English and should incorporate the new details seamlessly. Do not add any conversational text, just output the final revised prompt.\n\nExisting Prompt: \"{}\"\n\nUser's Revision Request: \"{}\"",
        last_prompt, revision_request
    )
}

/// Few-shot classification instructions for the revise-vs-chat decision.
/// The model is expected to answer with the single word REVISE or CHAT.
pub fn revision_classification_prompt(user_message: &str) -> String {
    format!(
        "You are an intent classification AI. Your task is to determine if the user's message, in Indonesian, is a request to revise a previously generated image, or if it's a normal continuation of a conversation.\nThe user has already seen an image. Now they have sent this message: \"{user_message}\"\n\nIf the message is a request to change, modify, add to, remove from, or otherwise alter the previous image, respond with only the word \"REVISE\".\nIf the message is a comment, a question about the image (\"is it good?\", \"what is this?\"), a compliment, or a new unrelated topic, respond with only the word \"CHAT\".\n\nExamples:\n- User message: \"Ubah gambarnya jadi malam hari.\" -> REVISE\n- User message: \"Keren banget! Terima kasih.\" -> CHAT\n- User message: \"Bisa tambahkan pohon di sebelah kiri?\" -> REVISE\n- User message: \"Menurut kamu bagus gak?\" -> CHAT\n- User message: \"Buat lebih berwarna.\" -> REVISE\n- User message: \"hapus orang yang di belakang\" -> REVISE\n\nUser message: \"{user_message}\"\nIntent:"
    )
}
