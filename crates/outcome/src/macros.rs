//! Convenient macros for outcome construction
//!
//! Expression-position shorthands over the factory functions, for call
//! sites where spelling out `Outcome::Failure(Error::new(...))` drowns the
//! surrounding logic.

/// Create a failure outcome in expression position.
///
/// Three arguments build an uncategorized error; a leading fourth argument
/// tags it with a category.
///
/// # Examples
///
/// ```rust
/// use outcome::{ErrorCategory, Outcome, failure};
///
/// let plain: Outcome<u32> = failure!("404", "NotFound", "The item was not found.");
/// assert!(plain.is_failure());
///
/// let tagged: Outcome<u32> = failure!(
///     ErrorCategory::Forbidden,
///     "SCOPE_MISSING",
///     "Forbidden",
///     "Token lacks the required scope"
/// );
/// assert_eq!(
///     tagged.error().and_then(|e| e.category()),
///     Some(&ErrorCategory::Forbidden)
/// );
/// ```
#[macro_export]
macro_rules! failure {
    ($code:expr, $reason:expr, $message:expr $(,)?) => {
        $crate::Outcome::Failure($crate::Error::new($code, $reason, $message))
    };
    ($category:expr, $code:expr, $reason:expr, $message:expr $(,)?) => {
        $crate::Outcome::Failure(
            $crate::Error::new($code, $reason, $message).with_category($category),
        )
    };
}

/// Early-return a failure outcome when a condition does not hold.
///
/// # Examples
///
/// ```rust
/// use outcome::prelude::*;
///
/// fn admit(age: u32) -> Outcome<Unit> {
///     ensure_success!(
///         age >= 18,
///         Error::validation("AGE_MIN", "Validation failed", "Must be 18 or older")
///     );
///     ok()
/// }
///
/// assert!(admit(21).is_success());
/// assert_eq!(admit(9).error().map(|e| e.code()), Some("AGE_MIN"));
/// ```
#[macro_export]
macro_rules! ensure_success {
    ($cond:expr, $error:expr $(,)?) => {
        if !$cond {
            return $crate::Outcome::Failure($error);
        }
    };
}
