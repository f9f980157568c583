//! Shared domain types for nimchat.
//!
//! Messages, the conversation transcript, completion request/response shapes,
//! fixed chat configuration, and the error types shared by every crate.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
