//! The I/O port driven by [`super::session::ChatLoop::run`].

use std::future::Future;

use nimchat_types::llm::LlmError;

use super::input::InputSignal;

/// Why a session ended voluntarily.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The user typed a termination keyword.
    Keyword,
    /// Interrupt or end of input at the prompt, or an interrupt while a
    /// remote call was outstanding.
    Interrupted,
}

/// Everything the loop needs from the terminal.
///
/// The loop never reads input between `begin_busy` and `end_busy`.
pub trait ChatFrontend {
    /// Show the prompt marker and block for one line.
    fn read_input(&mut self) -> impl Future<Output = InputSignal>;

    /// Start the busy indicator for an outstanding remote call.
    fn begin_busy(&mut self);

    /// Stop and clear the busy indicator.
    fn end_busy(&mut self);

    /// Resolve when the user asks to abandon the outstanding remote call.
    ///
    /// Polled only between `begin_busy` and `end_busy`. A frontend that
    /// cannot be interrupted returns a future that never resolves.
    fn interrupted(&mut self) -> impl Future<Output = ()>;

    /// Render an assistant reply followed by a separator.
    fn show_reply(&mut self, reply: &str);

    /// Print a single user-visible error line.
    fn show_error(&mut self, error: &LlmError);

    /// Print the farewell line.
    fn farewell(&mut self, reason: EndReason);
}
