//! Stateless construction helpers
//!
//! Thin free functions over the [`Outcome`] variants, for type-inference
//! convenience at call sites: the value and category parameters are
//! inferred from the declared return type, so a function body reads
//! `success(user)` / `failure_with(...)` without turbofish noise.

use crate::core::error::Error;
use crate::core::outcome::Outcome;
use crate::core::traits::Category;
use crate::core::unit::Unit;

/// A success outcome with no payload.
#[must_use]
pub fn ok<C: Category>() -> Outcome<Unit, C> {
    Outcome::Success(Unit)
}

/// A success outcome wrapping `value`.
///
/// Total: in the tagged-union representation there is no absent payload
/// for a null-value rule to reclassify.
#[must_use]
pub fn success<T, C: Category>(value: T) -> Outcome<T, C> {
    Outcome::Success(value)
}

/// A failure outcome wrapping a pre-built error.
///
/// The category parameter follows the error's, so this single function is
/// also the categorized variant: pass an `Error<MyCategory>` and get an
/// `Outcome<T, MyCategory>`.
#[must_use]
pub fn failure<T, C: Category>(error: Error<C>) -> Outcome<T, C> {
    Outcome::Failure(error)
}

/// A failure outcome built from the three required error fields, with no
/// category.
#[must_use]
pub fn failure_with<T, C: Category>(
    code: impl Into<String>,
    reason: impl Into<String>,
    message: impl Into<String>,
) -> Outcome<T, C> {
    Outcome::Failure(Error::new(code, reason, message))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::kinds::ErrorCategory;

    #[test]
    fn ok_wraps_unit() {
        let done: Outcome<Unit> = ok();
        assert!(done.is_success());
        assert_eq!(done.value(), Some(&Unit));
    }

    #[test]
    fn success_wraps_the_value() {
        let hit: Outcome<&'static str> = success("payload");
        assert!(hit.is_success());
        assert!(!hit.is_failure());
        assert_eq!(hit.value(), Some(&"payload"));
    }

    #[test]
    fn failure_keeps_the_error_structurally_equal() {
        let error = Error::conflict("DUP", "Conflict", "already exists");
        let miss: Outcome<u32> = failure(error.clone());

        assert!(miss.is_failure());
        assert!(!miss.is_success());
        assert_eq!(miss.error(), Some(&error));
    }

    #[test]
    fn failure_with_builds_an_uncategorized_error() {
        let miss: Outcome<u32> = failure_with("404", "NotFound", "The item was not found.");
        let error = miss.error().unwrap();

        assert_eq!(error.code(), "404");
        assert_eq!(error.reason(), "NotFound");
        assert_eq!(error.message(), "The item was not found.");
        assert_eq!(error.category(), None);
    }

    #[test]
    fn failure_is_generic_over_the_category_set() {
        let error = Error::new("E1", "Broke", "it broke").with_category(ErrorCategory::External);
        let miss: Outcome<u32, ErrorCategory> = failure(error);
        assert_eq!(
            miss.error().and_then(Error::category),
            Some(&ErrorCategory::External)
        );
    }
}
