//! Configuration for [`super::OpenAiCompatibleProvider`].

use secrecy::SecretString;

use nimchat_types::config::ChatConfig;

/// Provider name reported in logs and spans for the NVIDIA endpoint.
pub const NVIDIA_NIM: &str = "nvidia_nim";

/// Connection settings for one OpenAI-compatible endpoint.
///
/// Does NOT derive Debug: it carries the API key.
pub struct OpenAiCompatConfig {
    pub provider_name: String,
    pub base_url: String,
    pub api_key: SecretString,
    pub model: String,
}

/// NVIDIA NIM defaults, taken from the fixed chat configuration.
pub fn nvidia_nim_defaults(api_key: SecretString, chat: &ChatConfig) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: NVIDIA_NIM.to_string(),
        base_url: chat.base_url.clone(),
        api_key,
        model: chat.model.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_nvidia_nim_defaults() {
        let cfg = nvidia_nim_defaults(SecretString::from("nvapi-x".to_string()), &ChatConfig::default());
        assert_eq!(cfg.provider_name, "nvidia_nim");
        assert_eq!(cfg.base_url, "https://integrate.api.nvidia.com/v1");
        assert_eq!(cfg.model, "meta/llama-3.1-8b-instruct");
        assert_eq!(cfg.api_key.expose_secret(), "nvapi-x");
    }
}
