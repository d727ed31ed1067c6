//! Capability contracts for outcome containers
//!
//! This module holds the seams the rest of the crate is programmed against:
//! - [`Category`] - the bound a custom error-category enum must satisfy
//! - [`OutcomeLike`] - the behavioral contract of "a result of `T`"
//! - [`ContractViolation`] - the taxonomy of caller contract breaches

use std::any::Any;
use std::fmt;

use thiserror::Error as ThisError;

use crate::core::error::Error;

/// Bound for error-category types.
///
/// A category set must be a finite, exhaustively-matchable enumeration.
/// Implement this marker for a closed `enum` to use it as the category
/// parameter of [`Error`] and [`Outcome`](crate::Outcome); the
/// [`Display`](fmt::Display) rendering supplies the bracketed prefix used
/// by [`Error::to_text`].
///
/// # Examples
///
/// ```rust
/// use std::fmt;
///
/// use outcome::Category;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum BillingCategory {
///     Declined,
///     Expired,
/// }
///
/// impl fmt::Display for BillingCategory {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str(match self {
///             Self::Declined => "Declined",
///             Self::Expired => "Expired",
///         })
///     }
/// }
///
/// impl Category for BillingCategory {}
/// ```
pub trait Category: fmt::Debug + fmt::Display + Clone + PartialEq + 'static {}

/// Contract breaches by the *caller* of this crate's API.
///
/// These are programmer-error signals, not expected runtime failures: they
/// indicate a misuse of the API and are treated as fatal at the call site.
/// [`Outcome::cast`](crate::Outcome::cast) and the `expect_*` accessors
/// panic with the corresponding rendering;
/// [`Outcome::try_cast`](crate::Outcome::try_cast) surfaces `TypeMismatch`
/// as an `Err` for callers that opt into handling it.
///
/// The domain failures an [`Outcome`](crate::Outcome) exists to carry are
/// never represented here - they are [`Error`] values, data rather than
/// panics.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// A cast was requested to a target type the success payload cannot be
    /// reinterpreted as.
    #[error("invalid cast from `{from}` to `{to}`")]
    TypeMismatch {
        from: &'static str,
        to: &'static str,
    },

    /// A strict accessor was called on an outcome in the opposite state.
    #[error("{accessor} called on a {actual} outcome")]
    InvalidState {
        accessor: &'static str,
        actual: &'static str,
    },
}

/// Behavioral contract of "anything usable as a result of `T`".
///
/// [`Outcome`](crate::Outcome) is the canonical implementation; the trait
/// exists so calling code can depend on the abstraction instead of the
/// concrete container, and so alternate containers (a lazily evaluated or
/// logging-wrapped result, say) can satisfy the same surface. The
/// [`Cast`](Self::Cast) associated type lets each implementation keep
/// `cast` within its own container family.
pub trait OutcomeLike<T, C: Category> {
    /// Container produced by [`cast`](Self::cast) for a new value type.
    type Cast<U: Any>: OutcomeLike<U, C>;

    /// Whether this outcome holds a success value.
    fn is_success(&self) -> bool;

    /// Whether this outcome holds a failure error.
    fn is_failure(&self) -> bool;

    /// The success value, if this outcome is a success.
    fn value(&self) -> Option<&T>;

    /// The failure error, if this outcome is a failure.
    fn error(&self) -> Option<&Error<C>>;

    /// Reinterpret the success payload as `U`, forwarding failure state
    /// unchanged.
    ///
    /// # Panics
    ///
    /// Panics with a [`ContractViolation::TypeMismatch`] rendering when the
    /// payload is incompatible with `U`.
    fn cast<U: Any>(self) -> Self::Cast<U>
    where
        Self: Sized,
        T: Any;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::factory::{failure_with, success};
    use crate::core::outcome::Outcome;
    use crate::kinds::ErrorCategory;

    fn state_of<T, C: Category>(outcome: &impl OutcomeLike<T, C>) -> &'static str {
        if outcome.is_success() { "success" } else { "failure" }
    }

    #[test]
    fn generic_code_sees_both_states() {
        let hit: Outcome<u32> = success(7);
        let miss: Outcome<u32> = failure_with("E_MISS", "Missing", "no such record");

        assert_eq!(state_of(&hit), "success");
        assert_eq!(state_of(&miss), "failure");
        assert_eq!(hit.value(), Some(&7));
        assert_eq!(miss.error().map(Error::code), Some("E_MISS"));
    }

    #[test]
    fn cast_through_the_contract() {
        fn widen<O: OutcomeLike<u32, ErrorCategory>>(outcome: O) -> O::Cast<u32> {
            outcome.cast::<u32>()
        }

        let hit: Outcome<u32> = success(7);
        assert_eq!(widen(hit).value(), Some(&7));
    }

    #[test]
    fn violation_renderings_are_stable() {
        let mismatch = ContractViolation::TypeMismatch {
            from: "i32",
            to: "alloc::string::String",
        };
        assert_eq!(
            mismatch.to_string(),
            "invalid cast from `i32` to `alloc::string::String`"
        );

        let state = ContractViolation::InvalidState {
            accessor: "expect_value",
            actual: "failure",
        };
        assert_eq!(state.to_string(), "expect_value called on a failure outcome");
    }
}
