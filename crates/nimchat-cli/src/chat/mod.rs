//! Interactive terminal chat.
//!
//! Banner, readline input, thinking spinner and markdown rendering, wired to
//! the conversation loop from `nimchat-core`. Entry point:
//! `loop_runner::run_chat_loop`.

pub mod banner;
pub mod frontend;
pub mod input;
pub mod loop_runner;
pub mod renderer;
