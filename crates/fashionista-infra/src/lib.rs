//! Infrastructure layer for FashionistAPP.
//!
//! Implementations of the collaborator traits defined in `fashionista-core`:
//! an in-memory product catalog, a placeholder image generator, and a
//! simulated payment gateway. None of them perform network I/O.

pub mod catalog;
pub mod image;
pub mod payment;
