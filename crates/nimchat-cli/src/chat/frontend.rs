//! Terminal implementation of the loop's [`ChatFrontend`] port.
//!
//! Replies go through the readline `SharedWriter` so they never corrupt the
//! prompt line. The last line of a session (farewell or error) is printed
//! after the readline is flushed and dropped, once the terminal is back in
//! cooked mode.
//!
//! Raw mode is suspended while a remote call is outstanding, so Ctrl+C
//! arrives as SIGINT and abandons the call.

use std::io::Write;
use std::time::Duration;

use console::style;
use crossterm::terminal;
use indicatif::{ProgressBar, ProgressStyle};
use rustyline_async::{ReadlineError, SharedWriter};
use tracing::{debug, warn};

use nimchat_core::chat::frontend::{ChatFrontend, EndReason};
use nimchat_core::chat::input::InputSignal;
use nimchat_types::llm::LlmError;

use super::input::ChatInput;
use super::renderer::ChatRenderer;

/// Message shown next to the busy spinner.
pub const THINKING: &str = "Thinking...";

/// Farewell text for each way a session can end voluntarily.
pub fn farewell_text(reason: EndReason) -> &'static str {
    match reason {
        EndReason::Keyword => "Goodbye! Have a great day! \u{1f44b}",
        EndReason::Interrupted => "Session ended. Goodbye! \u{1f44b}",
    }
}

/// Readline input, spinner and markdown output on the controlling terminal.
pub struct TerminalFrontend {
    input: Option<ChatInput>,
    writer: SharedWriter,
    renderer: ChatRenderer,
    spinner: Option<ProgressBar>,
}

impl TerminalFrontend {
    /// Put the terminal under readline control with the `You:` prompt.
    pub fn new(renderer: ChatRenderer) -> Result<Self, ReadlineError> {
        let prompt = format!("{} ", style("You:").yellow().bold());
        let (input, writer) = ChatInput::new(prompt)?;
        Ok(Self {
            input: Some(input),
            writer,
            renderer,
            spinner: None,
        })
    }

    /// Flush queued output, then drop the readline so the terminal leaves
    /// raw mode.
    fn release_terminal(&mut self) {
        self.end_busy();
        if let Some(mut input) = self.input.take() {
            if let Err(e) = input.flush() {
                debug!(error = %e, "Failed to flush pending output");
            }
        }
    }
}

impl ChatFrontend for TerminalFrontend {
    async fn read_input(&mut self) -> InputSignal {
        match self.input.as_mut() {
            Some(input) => input.read_line().await,
            None => InputSignal::Terminate,
        }
    }

    fn begin_busy(&mut self) {
        if self.input.is_some() {
            if let Err(e) = terminal::disable_raw_mode() {
                debug!(error = %e, "Failed to leave raw mode for call");
            }
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(spinner_style) =
            ProgressStyle::default_spinner().template("{spinner:.blue.bold} {msg}")
        {
            spinner.set_style(spinner_style);
        }
        spinner.set_message(style(THINKING).blue().bold().to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    fn end_busy(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
            if self.input.is_some() {
                if let Err(e) = terminal::enable_raw_mode() {
                    debug!(error = %e, "Failed to restore raw mode");
                }
            }
        }
    }

    async fn interrupted(&mut self) {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Cannot listen for Ctrl+C during call");
            std::future::pending::<()>().await;
        }
        debug!("Interrupted during remote call");
    }

    fn show_reply(&mut self, reply: &str) {
        let block = self.renderer.reply_block(reply);
        let _ = self.writer.write_all(block.as_bytes());
        let _ = self.writer.flush();
    }

    fn show_error(&mut self, error: &LlmError) {
        self.release_terminal();
        println!("\n{} {error}", style("Error:").red().bold());
    }

    fn farewell(&mut self, reason: EndReason) {
        self.release_terminal();
        println!(
            "\n{} {}",
            style("Bot:").yellow().bold(),
            farewell_text(reason)
        );
    }
}
