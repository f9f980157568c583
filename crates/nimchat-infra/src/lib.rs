//! Infrastructure implementations for nimchat.
//!
//! Implements the provider port from `nimchat-core` over HTTP and resolves
//! the API key from the environment or a `.env` file.

pub mod credentials;
pub mod llm;
