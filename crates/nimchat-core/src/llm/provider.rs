//! LlmProvider trait definition.
//!
//! This is the remote-call capability the conversation loop is handed at
//! construction. Uses RPITIT so implementations can be plain `async fn`.

use nimchat_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for chat-completion backends.
///
/// Implementations live in nimchat-infra (e.g., `OpenAiCompatibleProvider`);
/// tests substitute scripted fakes.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "nvidia_nim").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
