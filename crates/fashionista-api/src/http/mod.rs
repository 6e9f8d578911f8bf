//! HTTP/REST API layer for FashionistAPP.
//!
//! Axum-based JSON API under `/api/` with permissive CORS and request
//! tracing. No authentication.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
