use anyhow::Result;
use arstate_core::llm::gemini;
use arstate_core::{AssistantConfig, ChatMessage, Orchestrator};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

mod images;

#[derive(Parser, Debug)]
#[clap(
    name = "Arstate",
    author,
    version = "0.1.0",
    about = "ARSTATE.AI assistant terminal front-end"
)]
struct Cli {
    #[clap(
        long,
        short,
        default_value = "arstate.yaml",
        help = "Path to the YAML configuration file (defaults apply if missing)"
    )]
    config: String,

    #[clap(long, short, default_value = "info")]
    log_level: String,

    #[clap(
        long,
        default_value = "images",
        help = "Directory where generated images are written"
    )]
    images_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level_filter = cli
        .log_level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    let config = AssistantConfig::from_file_or_default(&cli.config).await?;
    let client = gemini::create_client(&config.model)?;
    let orchestrator = Orchestrator::new(client.clone(), client, config.persona);

    println!("ARSTATE.AI — ketik pesan Anda, atau /quit untuk keluar.");

    // The chat state lives here, outside the core: an append-only history
    // and the single last-image-prompt slot. Turns are strictly sequential;
    // the next prompt is not read until the current turn resolves.
    let mut history: Vec<ChatMessage> = Vec::new();
    let mut last_image_prompt: Option<String> = None;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        use std::io::Write;
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let user_message = line.trim();
        if user_message.is_empty() {
            continue;
        }
        if user_message == "/quit" || user_message == "/exit" {
            break;
        }

        history.push(ChatMessage::user_text(user_message));
        let outcome = orchestrator
            .process(user_message, last_image_prompt.as_deref(), &history)
            .await;

        match &outcome.message {
            ChatMessage::Text { content, .. } => println!("{}", content),
            ChatMessage::Image {
                id,
                image_url,
                prompt,
                ..
            } => match images::write_data_url(&cli.images_dir, id, image_url).await {
                Ok(path) => {
                    println!("[gambar disimpan ke {}]", path.display());
                    println!("Prompt: {}", prompt);
                }
                Err(e) => {
                    log::error!("Failed to write generated image: {}", e);
                    println!("[gambar diterima tetapi gagal disimpan]");
                }
            },
        }

        last_image_prompt = outcome.new_prompt;
        history.push(outcome.message);
    }

    Ok(())
}
