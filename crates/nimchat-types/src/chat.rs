//! Conversation transcript.
//!
//! A [`Transcript`] is the ordered, append-only list of messages sent to the
//! model on every turn. The first element is always the single system
//! message given at construction; the only mutations are appending a user
//! message or an assistant message.

use serde::Serialize;

use crate::llm::{Message, MessageRole};

/// Ordered, append-only conversation context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Start a transcript seeded with one system message.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system_prompt)],
        }
    }

    /// Append a user message.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    /// Append an assistant reply.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    /// All messages in insertion order, system message first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The seeded system message.
    pub fn system(&self) -> &Message {
        &self.messages[0]
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false: the system message is present from construction.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of completed turns (assistant replies recorded).
    pub fn turn_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.role == MessageRole::Assistant)
            .count()
    }
}
