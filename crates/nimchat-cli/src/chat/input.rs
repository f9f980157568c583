//! Async readline input handling for the chat loop.
//!
//! Wraps `rustyline_async::Readline` and maps its events onto the loop's
//! [`InputSignal`]: a submitted line continues, Ctrl+C and Ctrl+D terminate.

use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};
use tracing::debug;

use nimchat_core::chat::input::InputSignal;

/// Async input handler wrapping rustyline_async.
pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Create a new input handler with the given prompt marker.
    ///
    /// Returns the handler and a `SharedWriter` for printing without
    /// corrupting the prompt line.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, stdout) = Readline::new(prompt)?;
        Ok((Self { rl }, stdout))
    }

    /// Write everything queued on the `SharedWriter` to the terminal.
    pub fn flush(&mut self) -> Result<(), ReadlineError> {
        self.rl.flush()
    }

    /// Read one line.
    pub async fn read_line(&mut self) -> InputSignal {
        match self.rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => InputSignal::Continue(line),
            Ok(ReadlineEvent::Eof) => {
                debug!("End of input");
                InputSignal::Terminate
            }
            Ok(ReadlineEvent::Interrupted) => {
                debug!("Interrupted at prompt");
                InputSignal::Terminate
            }
            Err(e) => {
                debug!(error = %e, "Readline failed, ending session");
                InputSignal::Terminate
            }
        }
    }
}
