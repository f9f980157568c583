//! Fixed chat configuration.
//!
//! The endpoint, model, system prompt and generation parameters are
//! compile-time constants. They are gathered into [`ChatConfig`] so the rest
//! of the code receives them explicitly instead of reading globals.

use serde::Serialize;

/// OpenAI-compatible base URL of the NVIDIA NIM API.
pub const DEFAULT_BASE_URL: &str = "https://integrate.api.nvidia.com/v1";

/// Model served behind [`DEFAULT_BASE_URL`].
pub const DEFAULT_MODEL: &str = "meta/llama-3.1-8b-instruct";

/// System instruction seeded as the first transcript message.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful and friendly AI assistant. \
    Use markdown for better formatting when appropriate.";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "NVIDIA_API_KEY";

/// Sampling parameters sent with every completion request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationParams {
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            top_p: 0.7,
            max_tokens: 1024,
        }
    }
}

/// Everything the session needs to know about the remote endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatConfig {
    pub base_url: String,
    pub model: String,
    pub system_prompt: String,
    pub params: GenerationParams,
    /// Name of the environment variable that holds the API key.
    pub api_key_var: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            params: GenerationParams::default(),
            api_key_var: API_KEY_VAR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_constants() {
        let config = ChatConfig::default();
        assert_eq!(config.base_url, "https://integrate.api.nvidia.com/v1");
        assert_eq!(config.model, "meta/llama-3.1-8b-instruct");
        assert_eq!(config.api_key_var, "NVIDIA_API_KEY");
        assert!(config.system_prompt.starts_with("You are a helpful and friendly AI assistant."));
        assert_eq!(config.params.temperature, 0.2);
        assert_eq!(config.params.top_p, 0.7);
        assert_eq!(config.params.max_tokens, 1024);
    }
}
