//! LLM provider implementations.
//!
//! Contains the concrete [`LlmProvider`](nimchat_core::llm::provider::LlmProvider)
//! implementation for OpenAI-compatible chat-completion APIs, and a factory
//! ([`create_provider`]) that builds it from the fixed [`ChatConfig`].

pub mod openai_compat;

use secrecy::SecretString;

use nimchat_types::config::ChatConfig;
use nimchat_types::llm::LlmError;

use self::openai_compat::OpenAiCompatibleProvider;

/// Create the provider for `config`'s endpoint using the resolved API key.
///
/// # Errors
///
/// Returns [`LlmError::Transport`] if the HTTP client cannot be initialized.
pub fn create_provider(
    config: &ChatConfig,
    api_key: SecretString,
) -> Result<OpenAiCompatibleProvider, LlmError> {
    OpenAiCompatibleProvider::nvidia_nim(api_key, config)
}
