//! Conversation loop and provider port for nimchat.
//!
//! This crate defines the "ports" the outer layers implement: [`llm::provider::LlmProvider`]
//! for the remote completion service and [`chat::frontend::ChatFrontend`] for the
//! terminal. It depends only on `nimchat-types` -- never on HTTP or terminal crates.

pub mod chat;
pub mod llm;
