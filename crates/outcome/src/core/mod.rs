//! Core outcome types and structures
//!
//! This module contains the fundamental components:
//! - [`unit`] - the zero-payload [`Unit`] marker
//! - [`error`] - the structured [`Error`] value with sanitization
//! - [`outcome`] - the [`Outcome`] success/failure container
//! - [`factory`] - stateless construction helpers
//! - [`traits`] - capability contracts and the violation taxonomy

pub mod error;
pub mod factory;
pub mod outcome;
pub mod traits;
pub mod unit;

// Re-export core types
pub use error::{Error, SANITIZED_MESSAGE, SANITIZED_REASON, SanitizeLevel};
pub use outcome::Outcome;
pub use traits::{Category, ContractViolation, OutcomeLike};
pub use unit::Unit;
