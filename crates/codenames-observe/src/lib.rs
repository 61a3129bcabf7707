//! Observability setup for the Codenames agents: a `tracing` subscriber
//! with optional OpenTelemetry export.

pub mod tracing_setup;
