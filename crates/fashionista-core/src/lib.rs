//! Business logic and collaborator traits for FashionistAPP.
//!
//! This crate owns the try-on prompt builder and defines the "ports"
//! (catalog, image generation, payment) that the infrastructure layer
//! implements. It depends only on `fashionista-types` -- never on
//! `fashionista-infra` or any network/IO crate.

pub mod catalog;
pub mod image;
pub mod payment;
pub mod prompt;
pub mod service;
