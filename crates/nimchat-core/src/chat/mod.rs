//! The conversation loop.
//!
//! - `input`: classification of a raw input line (message, skip, terminate)
//! - `frontend`: the I/O port the loop drives (read, busy indicator, output)
//! - `session`: `ChatLoop`, the loop context holding transcript and provider

pub mod frontend;
pub mod input;
pub mod session;
