//! Persona data: keyword tables and canned responses.
//!
//! The assistant carries a fixed persona (ARSTATE.AI, created by Bachtiar
//! Aryansyah Putra) expressed as closed sets of trigger phrases and literal
//! response texts. Everything here is immutable configuration: the defaults
//! below are the shipped persona, and a YAML config may override individual
//! fields. Matching is case-insensitive substring containment over
//! natural-language phrases, never regex.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    /// Phrases that mark a message as a request for a new image.
    #[serde(default = "default_image_generation_keywords")]
    pub image_generation_keywords: Vec<String>,
    /// Phrases asking who the assistant is.
    #[serde(default = "default_identity_keywords")]
    pub identity_keywords: Vec<String>,
    /// Confirmation phrases accepted right after the identity response.
    #[serde(default = "default_bio_request_keywords")]
    pub bio_request_keywords: Vec<String>,
    /// Question-like phrases that open a direct question about the creator.
    #[serde(default = "default_bio_trigger_keywords")]
    pub bio_trigger_keywords: Vec<String>,
    /// Names and nicknames of the creator.
    #[serde(default = "default_bio_subject_keywords")]
    pub bio_subject_keywords: Vec<String>,
    #[serde(default = "default_identity_response")]
    pub identity_response: String,
    #[serde(default = "default_bio_response")]
    pub bio_response: String,
    /// Shown for any turn that fails inside the model call chain.
    #[serde(default = "default_error_response")]
    pub error_response: String,
    /// System instruction for plain conversational turns.
    #[serde(default = "default_chat_system_instruction")]
    pub chat_system_instruction: String,
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            image_generation_keywords: default_image_generation_keywords(),
            identity_keywords: default_identity_keywords(),
            bio_request_keywords: default_bio_request_keywords(),
            bio_trigger_keywords: default_bio_trigger_keywords(),
            bio_subject_keywords: default_bio_subject_keywords(),
            identity_response: default_identity_response(),
            bio_response: default_bio_response(),
            error_response: default_error_response(),
            chat_system_instruction: default_chat_system_instruction(),
        }
    }
}

/// Case-insensitive substring containment against a closed phrase set.
pub fn contains_any(message: &str, phrases: &[String]) -> bool {
    let lowered = message.to_lowercase();
    phrases.iter().any(|phrase| lowered.contains(&phrase.to_lowercase()))
}

fn default_image_generation_keywords() -> Vec<String> {
    [
        "buatkan saya gambar",
        "generate gambar",
        "tolong buatkan ilustrasi",
        "gambar tentang",
        "buatkan gambar",
        "bikin gambar",
        "ciptakan gambar",
        "ilustrasikan",
    ]
    .map(String::from)
    .to_vec()
}

fn default_identity_keywords() -> Vec<String> {
    [
        "siapa kamu",
        "kamu siapa",
        "kamu buatan siapa",
        "ai ini buatan siapa",
        "siapa penciptamu",
        "siapa yang bikin ai ini",
    ]
    .map(String::from)
    .to_vec()
}

fn default_bio_request_keywords() -> Vec<String> {
    [
        "iya",
        "siapa itu bachtiar",
        "tampilkan biodatanya",
        "ya, kirimkan",
        "saya penasaran",
        "saya ingin tahu tentang bachtiar",
        "boleh",
        "kirimkan",
        "tampilkan bio",
    ]
    .map(String::from)
    .to_vec()
}

fn default_bio_trigger_keywords() -> Vec<String> {
    ["siapa", "siapakah", "ceritakan tentang"].map(String::from).to_vec()
}

fn default_bio_subject_keywords() -> Vec<String> {
    ["bachtiar", "aryansyah", "arya"].map(String::from).to_vec()
}

fn default_identity_response() -> String {
    "Saya ARSTATE.AI, model AI yang dikembangkan oleh Bachtiar Aryansyah Putra, CEO of ARSTATE CINEMA.\n\nJika Anda ingin tahu siapa Bachtiar Aryansyah Putra, saya bisa berikan biodatanya. Ingin saya tampilkan?".to_string()
}

fn default_bio_response() -> String {
    "BACHTIAR ARYANSYAH PUTRA\n– Seorang mahasiswa berusia 20 tahun di Universitas Surabaya, jurusan D4-Desain Grafis\n– Ia juga seorang CEO dari brand ARSTATE CINEMA, yang bergerak di bidang jasa dokumentasi event, wedding, corporate, dan lain sebagainya\n– Ia juga memiliki pacar cantik yang setia menemaninya bernama NUR KHOFIFA\n– Berikut media sosialnya:\n\nInstagram: @aryansyah.ow\nWebsite: www.arstatecinema.com".to_string()
}

fn default_error_response() -> String {
    "Maaf, terjadi kesalahan saat memproses permintaan Anda. Mungkin ada masalah dengan API. Silakan coba lagi nanti.".to_string()
}

fn default_chat_system_instruction() -> String {
    "You are ARSTATE.AI, a helpful and creative AI assistant that speaks Indonesian.".to_string()
}
