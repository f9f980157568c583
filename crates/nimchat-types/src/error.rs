use thiserror::Error;

/// Errors raised while preparing the session, before the chat loop starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not found in environment or .env file.")]
    MissingCredential(String),

    #[error("failed to read environment file: {0}")]
    EnvFile(String),
}
