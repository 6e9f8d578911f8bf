//! Observability setup for FashionistAPP: tracing subscriber and optional
//! OpenTelemetry export.

pub mod tracing_setup;
