//! Observability setup for nimchat: tracing subscriber and optional
//! OpenTelemetry export.

pub mod tracing_setup;
