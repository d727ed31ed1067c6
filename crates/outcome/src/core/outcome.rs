//! The success/failure container itself

use std::any::{self, Any, TypeId};

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::traits::{Category, ContractViolation, OutcomeLike};
use crate::kinds::ErrorCategory;

/// Container holding exactly one of a success value or a failure error.
///
/// The tagged-union representation makes the invalid states - value and
/// error both present, or both absent - unrepresentable: an `Outcome` is
/// a [`Success`](Outcome::Success) carrying a `T` or a
/// [`Failure`](Outcome::Failure) carrying an [`Error<C>`], never anything
/// else. Construction through the variants, the [factory
/// helpers](crate::core::factory), or [`From`] therefore enforces the
/// mutual-exclusion invariant structurally, at construction time.
///
/// Outcomes are immutable values: every operation either reads or consumes
/// the receiver and produces a new value. They are typically short-lived,
/// local to a call chain.
///
/// # Examples
///
/// ```rust
/// use outcome::prelude::*;
///
/// let found: Outcome<u32> = success(42);
/// assert!(found.is_success());
/// assert_eq!(found.value(), Some(&42));
///
/// let missing: Outcome<u32> = failure_with("404", "NotFound", "The item was not found.");
/// assert!(missing.is_failure());
/// assert_eq!(missing.error().map(|e| e.code()), Some("404"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome<T, C = ErrorCategory> {
    /// The operation succeeded with this value.
    Success(T),
    /// The operation failed with this error.
    Failure(Error<C>),
}

impl<T, C: Category> Outcome<T, C> {
    /// Whether this outcome holds a success value.
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether this outcome holds a failure error.
    #[inline]
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The success value, or `None` on a failure.
    ///
    /// Total accessor: never panics. The strict companion is
    /// [`expect_value`](Outcome::expect_value).
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The failure error, or `None` on a success.
    ///
    /// Total accessor: never panics. The strict companion is
    /// [`expect_error`](Outcome::expect_error).
    #[inline]
    #[must_use]
    pub fn error(&self) -> Option<&Error<C>> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Consume the outcome, yielding the success value if there is one.
    #[inline]
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consume the outcome, yielding the failure error if there is one.
    #[inline]
    #[must_use]
    pub fn into_error(self) -> Option<Error<C>> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Consume the outcome, yielding the success value.
    ///
    /// # Panics
    ///
    /// Panics with a [`ContractViolation::InvalidState`] rendering when
    /// called on a failure - a caller contract breach, as with
    /// [`Result::unwrap`].
    #[must_use]
    pub fn expect_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!(
                "{}",
                ContractViolation::InvalidState {
                    accessor: "expect_value",
                    actual: "failure",
                }
            ),
        }
    }

    /// Consume the outcome, yielding the failure error.
    ///
    /// # Panics
    ///
    /// Panics with a [`ContractViolation::InvalidState`] rendering when
    /// called on a success.
    #[must_use]
    pub fn expect_error(self) -> Error<C> {
        match self {
            Self::Success(_) => panic!(
                "{}",
                ContractViolation::InvalidState {
                    accessor: "expect_error",
                    actual: "success",
                }
            ),
            Self::Failure(error) => error,
        }
    }

    /// Reinterpret the success payload as `U`, forwarding failure state
    /// unchanged.
    ///
    /// A failure casts to any target type without inspection: the new
    /// outcome carries the same error, so failure state crosses API-layer
    /// type boundaries with no manual forwarding. A success payload is
    /// reinterpreted through [`Any`]; widening to the erased payload type
    /// `Box<dyn Any>` and narrowing back from it both work, so
    /// `success(42).cast::<Box<dyn Any>>().cast::<i32>()` recovers `42`.
    ///
    /// # Panics
    ///
    /// Panics with a [`ContractViolation::TypeMismatch`] rendering naming
    /// the source and target types when the payload is incompatible with
    /// `U`. An invalid cast request is a programmer error, not a
    /// recoverable result-level failure; use
    /// [`try_cast`](Outcome::try_cast) to handle it as one anyway.
    #[must_use]
    pub fn cast<U: Any>(self) -> Outcome<U, C>
    where
        T: Any,
    {
        match self.try_cast() {
            Ok(outcome) => outcome,
            Err(violation) => panic!("{violation}"),
        }
    }

    /// Fallible variant of [`cast`](Outcome::cast).
    ///
    /// Identical semantics, except an incompatible target is reported as
    /// `Err(ContractViolation::TypeMismatch)` instead of a panic.
    pub fn try_cast<U: Any>(self) -> Result<Outcome<U, C>, ContractViolation>
    where
        T: Any,
    {
        let value = match self {
            Self::Failure(error) => return Ok(Outcome::Failure(error)),
            Self::Success(value) => value,
        };

        let boxed: Box<dyn Any> = Box::new(value);
        // An already-erased payload is unwrapped one level first so that
        // widen-then-narrow chains land back on the original value.
        let boxed = match boxed.downcast::<Box<dyn Any>>() {
            Ok(erased) => *erased,
            Err(other) => other,
        };
        let boxed = match boxed.downcast::<U>() {
            Ok(hit) => return Ok(Outcome::Success(*hit)),
            Err(miss) => miss,
        };
        // Widening: the target is the erased payload type itself.
        if TypeId::of::<U>() == TypeId::of::<Box<dyn Any>>() {
            let erased: Box<dyn Any> = Box::new(boxed);
            if let Ok(hit) = erased.downcast::<U>() {
                return Ok(Outcome::Success(*hit));
            }
        }

        Err(ContractViolation::TypeMismatch {
            from: any::type_name::<T>(),
            to: any::type_name::<U>(),
        })
    }

    /// Widen the success payload to the erased `Box<dyn Any>` form.
    ///
    /// Shorthand for `cast::<Box<dyn Any>>()`; never panics, since every
    /// payload widens.
    #[must_use]
    pub fn erase(self) -> Outcome<Box<dyn Any>, C>
    where
        T: Any,
    {
        self.cast()
    }

    /// Consume the outcome, yielding the success value or the type's
    /// default on a failure. Total: never panics.
    #[must_use]
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }

    /// Convert this outcome (error chain included) to another category set.
    pub fn map_category<D: Category>(self, f: impl Fn(C) -> D) -> Outcome<T, D> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error.map_category(f)),
        }
    }
}

/// A plain value always converts to a success outcome.
impl<T, C> From<T> for Outcome<T, C> {
    fn from(value: T) -> Self {
        Self::Success(value)
    }
}

impl<T, C: Category> OutcomeLike<T, C> for Outcome<T, C> {
    type Cast<U: Any> = Outcome<U, C>;

    fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    fn value(&self) -> Option<&T> {
        self.value()
    }

    fn error(&self) -> Option<&Error<C>> {
        self.error()
    }

    fn cast<U: Any>(self) -> Outcome<U, C>
    where
        T: Any,
    {
        self.cast()
    }
}
