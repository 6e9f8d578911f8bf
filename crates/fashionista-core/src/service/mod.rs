//! Services orchestrating the prompt builder and collaborators.

pub mod checkout;
pub mod tryon;
