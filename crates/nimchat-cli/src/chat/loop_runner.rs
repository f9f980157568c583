//! Chat session orchestration.
//!
//! Builds the provider from the resolved key, prints the banner, hands the
//! terminal to the conversation loop and reports how the session ended.

use crossterm::style::Color;
use secrecy::SecretString;
use tracing::{info, warn};

use nimchat_core::chat::session::{ChatLoop, SessionOutcome};
use nimchat_infra::llm::create_provider;
use nimchat_types::config::ChatConfig;

use super::banner::print_welcome_banner;
use super::frontend::TerminalFrontend;
use super::renderer::ChatRenderer;

/// Accent for headers and bold text in replies.
const ACCENT: Color = Color::Rgb {
    r: 135,
    g: 215,
    b: 255,
};

/// Run an interactive chat session until the user leaves or a call fails.
///
/// A failed remote call is not an error for the process: it has already been
/// printed, and the session simply ends.
pub async fn run_chat_loop(config: &ChatConfig, api_key: SecretString) -> anyhow::Result<()> {
    let provider = create_provider(config, api_key)?;

    print_welcome_banner(&config.model);

    let renderer = ChatRenderer::new(Some(ACCENT));
    let mut frontend = TerminalFrontend::new(renderer)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    let mut chat = ChatLoop::new(provider, config);
    info!(model = %config.model, "Chat session started");

    match chat.run(&mut frontend).await {
        SessionOutcome::Farewell(reason) => {
            info!(?reason, turns = chat.transcript().turn_count(), "Chat session finished");
        }
        SessionOutcome::Failed(err) => {
            warn!(
                error = %err,
                messages = chat.transcript().len(),
                "Chat session ended by remote failure"
            );
        }
    }

    Ok(())
}
