//! OpenAI-compatible LLM provider implementation.
//!
//! [`OpenAiCompatibleProvider`] talks to any endpoint exposing
//! `POST /chat/completions` with bearer authentication. nimchat points it at
//! NVIDIA NIM via [`OpenAiCompatibleProvider::nvidia_nim`].
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

pub mod config;
pub mod types;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use nimchat_core::llm::provider::LlmProvider;
use nimchat_types::config::ChatConfig;
use nimchat_types::llm::{CompletionRequest, CompletionResponse, LlmError, StopReason, Usage};

use self::config::OpenAiCompatConfig;
use self::types::{ChatCompletionBody, ChatCompletionResponse, ErrorEnvelope, WireMessage};

const USER_AGENT: &str = concat!("nimchat/", env!("CARGO_PKG_VERSION"));

/// Provider for OpenAI-compatible chat-completion APIs.
///
/// No request timeout is configured: a call waits as long as the server does.
pub struct OpenAiCompatibleProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    provider_name: String,
    model: String,
}

impl OpenAiCompatibleProvider {
    /// Create a new provider from a configuration.
    pub fn new(config: OpenAiCompatConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| LlmError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key,
            base_url: config.base_url,
            provider_name: config.provider_name,
            model: config.model,
        })
    }

    /// Create a provider for the NVIDIA NIM endpoint in `chat`.
    pub fn nvidia_nim(api_key: SecretString, chat: &ChatConfig) -> Result<Self, LlmError> {
        Self::new(config::nvidia_nim_defaults(api_key, chat))
    }

    /// Replace the HTTP client (useful for testing or proxies).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Convert a generic [`CompletionRequest`] into the wire body.
    fn build_body(&self, request: &CompletionRequest) -> ChatCompletionBody {
        let model = if request.model.is_empty() {
            self.model.clone()
        } else {
            request.model.clone()
        };

        ChatCompletionBody {
            model,
            messages: request
                .messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.to_string(),
                    content: m.content.clone(),
                })
                .collect(),
            temperature: request.temperature,
            top_p: request.top_p,
            max_tokens: request.max_tokens,
        }
    }
}

// OpenAiCompatibleProvider intentionally does NOT derive Debug so the API
// key can never end up in logs.

impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        &self.provider_name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = self.build_body(request);
        let url = self.url();
        debug!(%url, messages = body.messages.len(), "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .header("accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::Transport(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(map_status_error(status, &text));
        }

        parse_completion(&text)
    }
}

/// Map a non-2xx status and its body to an [`LlmError`].
fn map_status_error(status: reqwest::StatusCode, body: &str) -> LlmError {
    match status.as_u16() {
        401 | 403 => LlmError::AuthenticationFailed,
        429 => LlmError::RateLimited,
        _ => {
            let detail = serde_json::from_str::<ErrorEnvelope>(body)
                .map(|env| env.error.message)
                .unwrap_or_else(|_| body.trim().to_string());
            LlmError::Provider {
                message: format!("HTTP {status}: {detail}"),
            }
        }
    }
}

/// Parse a successful response body into a [`CompletionResponse`].
///
/// Anything without `choices[0].message.content` is a protocol error.
fn parse_completion(body: &str) -> Result<CompletionResponse, LlmError> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| LlmError::MalformedResponse(format!("failed to parse response: {e}")))?;

    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::MalformedResponse("response contained no choices".to_string()))?;

    let content = choice.message.content.ok_or_else(|| {
        LlmError::MalformedResponse("first choice has no message content".to_string())
    })?;

    let usage = parsed
        .usage
        .map(|u| Usage {
            input_tokens: u.prompt_tokens,
            output_tokens: u.completion_tokens,
        })
        .unwrap_or_default();

    Ok(CompletionResponse {
        id: parsed.id.unwrap_or_default(),
        content,
        model: parsed.model.unwrap_or_default(),
        stop_reason: StopReason::from_finish_reason(choice.finish_reason.as_deref()),
        usage,
    })
}
