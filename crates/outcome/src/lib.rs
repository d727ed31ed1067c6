//! # Outcome
//!
//! Structured operation-outcome container for expected failure paths.
//!
//! An [`Outcome`] holds exactly one of a success value or a structured
//! [`Error`] - the invalid "both or neither" states are unrepresentable.
//! Domain failures travel as data; panics are reserved for caller contract
//! breaches (an invalid [`cast`](Outcome::cast) target, a strict accessor
//! on the wrong state).
//!
//! ## Quick Start
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! fn lookup(id: u32) -> Outcome<String> {
//!     ensure_success!(
//!         id != 0,
//!         Error::validation("ID_REQUIRED", "Validation failed", "id must be non-zero")
//!     );
//!     success(format!("record-{id}"))
//! }
//!
//! let hit = lookup(7);
//! assert!(hit.is_success());
//! assert_eq!(hit.value().map(String::as_str), Some("record-7"));
//!
//! let miss = lookup(0);
//! assert!(miss.is_failure());
//! assert_eq!(miss.error().map(|e| e.code()), Some("ID_REQUIRED"));
//! ```
//!
//! ## Features
//!
//! - **Structural invariant**: tagged union, constructed through the
//!   variants, the [factory](crate::core::factory) helpers, or [`From`]
//! - **Generic categories**: the standard [`ErrorCategory`] set, or any
//!   closed enum implementing [`Category`]
//! - **Safe casting**: [`Outcome::cast`] narrows/widens a success payload
//!   and forwards failure state losslessly
//! - **Sanitization**: [`Error::sanitize`] progressively redacts detail
//!   before an error crosses a trust boundary
//!
//! ## Sanitization at a trust boundary
//!
//! ```rust
//! use outcome::{Error, SanitizeLevel};
//!
//! let internal = Error::internal("DB_CONN", "DB Error", "pool exhausted on db-3:5432")
//!     .with_stack_trace();
//!
//! let external = internal.sanitize(SanitizeLevel::Full);
//! assert_eq!(external.code(), "DB_CONN");
//! assert_eq!(external.message(), "An error occurred.");
//! assert_eq!(external.stack_trace(), None);
//! ```

pub mod core;
pub mod kinds;
pub mod macros;

// === Public API Exports ===

/// The success/failure container
pub use self::core::Outcome;

/// Structured failure description
pub use self::core::Error;

/// Sanitization levels and redaction literals
pub use self::core::{SANITIZED_MESSAGE, SANITIZED_REASON, SanitizeLevel};

/// Zero-payload success marker
pub use self::core::Unit;

/// Capability contracts and the contract-violation taxonomy
pub use self::core::{Category, ContractViolation, OutcomeLike};

/// Stateless construction helpers
pub use self::core::factory::{failure, failure_with, ok, success};

/// The default closed category set
pub use self::kinds::ErrorCategory;

/// Convenient prelude with everything you need
pub mod prelude {
    pub use super::core::factory::{failure_with, ok, success};
    pub use super::{
        Category, ContractViolation, Error, ErrorCategory, Outcome, OutcomeLike,
        SANITIZED_MESSAGE, SANITIZED_REASON, SanitizeLevel, Unit,
    };

    // Re-export the construction macros for convenience. `failure` pulls in
    // both the factory function and the macro of the same name.
    pub use crate::{ensure_success, failure};
}
