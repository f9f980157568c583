//! Conversation loop context.
//!
//! [`ChatLoop`] owns the [`Transcript`] and the remote-call capability and
//! drives the AwaitingInput -> Calling -> AwaitingInput cycle until the user
//! leaves, interrupts an outstanding call, or a remote call fails. Nothing is shared outside the struct; the
//! terminal is reached only through the [`ChatFrontend`] passed to `run`.

use tracing::{Instrument, debug, info, info_span, warn};

use nimchat_types::chat::Transcript;
use nimchat_types::config::{ChatConfig, GenerationParams};
use nimchat_types::llm::{CompletionRequest, LlmError};

use crate::llm::provider::LlmProvider;

use super::frontend::{ChatFrontend, EndReason};
use super::input::{InputSignal, UserInput, classify_input};

/// States of the conversation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    AwaitingInput,
    Calling,
    Ended,
}

/// How a session finished.
#[derive(Debug)]
pub enum SessionOutcome {
    /// Keyword, interrupt, or end of input.
    Farewell(EndReason),
    /// A remote call failed; the error has already been shown.
    Failed(LlmError),
}

/// Loop context: transcript plus the provider it is sent to.
pub struct ChatLoop<P> {
    provider: P,
    model: String,
    params: GenerationParams,
    transcript: Transcript,
    state: ChatState,
}

impl<P: LlmProvider> ChatLoop<P> {
    /// Create a loop with a fresh transcript seeded from `config.system_prompt`.
    pub fn new(provider: P, config: &ChatConfig) -> Self {
        Self {
            provider,
            model: config.model.clone(),
            params: config.params,
            transcript: Transcript::new(config.system_prompt.clone()),
            state: ChatState::AwaitingInput,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    #[cfg(test)]
    fn provider(&self) -> &P {
        &self.provider
    }

    /// Build a completion request carrying the whole transcript.
    pub fn build_request(&self) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            messages: self.transcript.messages().to_vec(),
            temperature: self.params.temperature,
            top_p: self.params.top_p,
            max_tokens: self.params.max_tokens,
        }
    }

    /// Run one turn: append `text` as a user message, call the provider and
    /// append the reply.
    ///
    /// On failure the user message stays in the transcript, no assistant
    /// message is appended, and the loop moves to `Ended`.
    pub async fn submit(&mut self, text: String) -> Result<&str, LlmError> {
        self.transcript.push_user(text);
        self.state = ChatState::Calling;

        let request = self.build_request();
        let span = info_span!(
            "gen_ai.chat",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = request.max_tokens,
            gen_ai.request.temperature = request.temperature,
            gen_ai.request.top_p = request.top_p,
            transcript.len = request.messages.len(),
        );

        let result = self.provider.complete(&request).instrument(span).await;
        match result {
            Ok(response) => {
                debug!(
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    stop_reason = %response.stop_reason,
                    "Completion received"
                );
                self.transcript.push_assistant(response.content);
                self.state = ChatState::AwaitingInput;
                Ok(self
                    .transcript
                    .last()
                    .map(|m| m.content.as_str())
                    .unwrap_or_default())
            }
            Err(err) => {
                warn!(error = %err, "Completion failed");
                self.state = ChatState::Ended;
                Err(err)
            }
        }
    }

    /// Drive the loop until it reaches `Ended`.
    pub async fn run<F: ChatFrontend>(&mut self, frontend: &mut F) -> SessionOutcome {
        loop {
            let raw = match frontend.read_input().await {
                InputSignal::Continue(raw) => raw,
                InputSignal::Terminate => return self.finish(frontend, EndReason::Interrupted),
            };

            let text = match classify_input(&raw) {
                UserInput::Empty => continue,
                UserInput::Terminate => return self.finish(frontend, EndReason::Keyword),
                UserInput::Message(text) => text,
            };

            frontend.begin_busy();
            // A reply that is already complete wins over a simultaneous interrupt.
            let result = tokio::select! {
                biased;
                result = self.submit(text) => Some(result.map(str::to_owned)),
                () = frontend.interrupted() => None,
            };
            frontend.end_busy();

            match result {
                Some(Ok(reply)) => frontend.show_reply(&reply),
                Some(Err(err)) => {
                    frontend.show_error(&err);
                    return SessionOutcome::Failed(err);
                }
                None => {
                    info!("Remote call abandoned by interrupt");
                    return self.finish(frontend, EndReason::Interrupted);
                }
            }
        }
    }

    fn finish<F: ChatFrontend>(&mut self, frontend: &mut F, reason: EndReason) -> SessionOutcome {
        info!(?reason, turns = self.transcript.turn_count(), "Session ended");
        self.state = ChatState::Ended;
        frontend.farewell(reason);
        SessionOutcome::Farewell(reason)
    }
}
