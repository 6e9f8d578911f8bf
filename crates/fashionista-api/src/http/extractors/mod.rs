//! Request extractors.

pub mod json;
pub mod query;
