//! Chat-completion wire types.
//!
//! These are the OpenAI-compatible request/response bodies exchanged over
//! HTTP. They are NOT the generic LLM types from nimchat-types -- those are
//! provider-agnostic.

use serde::{Deserialize, Serialize};

/// Request body for `POST {base_url}/chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionBody {
    pub model: String,
    pub messages: Vec<WireMessage>,
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
}

/// A single `{role, content}` message.
#[derive(Debug, Clone, Serialize)]
pub struct WireMessage {
    pub role: String,
    pub content: String,
}

/// Non-streaming chat-completion response.
///
/// Only `choices[].message.content` is required; everything else is
/// best-effort.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<WireUsage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
}

/// Error envelope returned by OpenAI-compatible APIs on failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization_shape() {
        let body = ChatCompletionBody {
            model: "meta/llama-3.1-8b-instruct".to_string(),
            messages: vec![WireMessage {
                role: "user".to_string(),
                content: "Hello".to_string(),
            }],
            temperature: 0.2,
            top_p: 0.7,
            max_tokens: 1024,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "meta/llama-3.1-8b-instruct");
        assert_eq!(json["temperature"], 0.2);
        assert_eq!(json["top_p"], 0.7);
        assert_eq!(json["max_tokens"], 1024);
        assert_eq!(json["messages"][0]["role"], "user");
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 5);
    }

    #[test]
    fn test_minimal_response_parses() {
        let resp: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"hi"}}]}"#).unwrap();
        assert_eq!(resp.choices[0].message.content.as_deref(), Some("hi"));
        assert!(resp.usage.is_none());
        assert!(resp.id.is_none());
    }

    #[test]
    fn test_error_envelope_parses() {
        let env: ErrorEnvelope =
            serde_json::from_str(r#"{"error":{"message":"bad key","type":"auth"}}"#).unwrap();
        assert_eq!(env.error.message, "bad key");
    }
}
