//! HTTP request handlers for the REST API.

pub mod checkout;
pub mod generate;
pub mod product;
