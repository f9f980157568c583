//! API key resolution.
//!
//! The key is read from the process environment. A `.env` file in the
//! working directory is loaded once at startup beforehand; variables already
//! set in the environment take precedence over the file.

use std::path::PathBuf;

use secrecy::SecretString;
use tracing::debug;

use nimchat_types::error::ConfigError;

/// Load `.env` from the current directory (or its parents), if present.
///
/// Returns the path that was loaded, or `None` when no file exists.
pub fn load_env_file() -> Result<Option<PathBuf>, ConfigError> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!(path = %path.display(), "Loaded environment file");
            Ok(Some(path))
        }
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(ConfigError::EnvFile(err.to_string())),
    }
}

/// Read the API key from environment variable `var`.
///
/// Unset, blank, and non-Unicode values all count as missing.
pub fn resolve_api_key(var: &str) -> Result<SecretString, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(SecretString::from(value.trim().to_string())),
        _ => Err(ConfigError::MissingCredential(var.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_resolve_from_env_file() {
        let file = env_file("NIMCHAT_TEST_KEY_FROM_FILE=nvapi-abc123\n");
        dotenvy::from_path(file.path()).unwrap();

        let key = resolve_api_key("NIMCHAT_TEST_KEY_FROM_FILE").unwrap();
        assert_eq!(key.expose_secret(), "nvapi-abc123");
    }

    #[test]
    fn test_missing_variable() {
        let err = resolve_api_key("NIMCHAT_TEST_KEY_NEVER_SET").unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential(ref v) if v == "NIMCHAT_TEST_KEY_NEVER_SET"));
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let file = env_file("NIMCHAT_TEST_KEY_BLANK=\n");
        dotenvy::from_path(file.path()).unwrap();

        assert!(matches!(
            resolve_api_key("NIMCHAT_TEST_KEY_BLANK"),
            Err(ConfigError::MissingCredential(_))
        ));
    }
}
