//! Shared domain types for FashionistAPP.
//!
//! Products, try-on generation requests and prompt pairs, cart/order types,
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod cart;
pub mod error;
pub mod generation;
pub mod product;
