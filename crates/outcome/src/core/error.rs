//! Structured failure description with sanitization and stack capture

use std::backtrace::Backtrace;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::traits::Category;
use crate::kinds::ErrorCategory;

/// Replacement for [`Error::message`](Error::message) at the
/// [`MessageOnly`](SanitizeLevel::MessageOnly) and
/// [`Full`](SanitizeLevel::Full) sanitization levels.
pub const SANITIZED_MESSAGE: &str = "An error occurred.";

/// Replacement for [`Error::reason`](Error::reason) at the
/// [`Full`](SanitizeLevel::Full) sanitization level.
pub const SANITIZED_REASON: &str = "Internal Error";

/// How much of an error to redact before it crosses a trust boundary.
///
/// Each level clears strictly more fields than the previous one. The set
/// is closed: there is no level that can reach an unspecified branch of
/// [`Error::sanitize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SanitizeLevel {
    /// No redaction; `sanitize` is the identity.
    None,
    /// Redact the detailed message and drop the stack trace.
    MessageOnly,
    /// Redact message and reason, drop the stack trace and the inner chain.
    Full,
}

/// Immutable structured failure description.
///
/// An `Error` carries a stable machine-readable `code`, a short
/// human-facing `reason`, a detailed `message`, an optional category tag,
/// an optional nested cause, and an optional explicitly captured stack
/// trace. Every transformation ([`with_stack_trace`](Error::with_stack_trace),
/// [`sanitize`](Error::sanitize), the `with_*` builders) produces a new
/// value; nothing mutates in place.
///
/// The inner-error chain is a finite, singly-linked list built bottom-up
/// by value. Nothing in the type exposes interior mutability, so the chain
/// cannot be made cyclic.
///
/// # Examples
///
/// ```rust
/// use outcome::{Error, ErrorCategory};
///
/// let cause = Error::new("IO_READ", "Read failed", "disk unreachable");
/// let error = Error::new("CFG_LOAD", "Config load failed", "could not load settings")
///     .with_category(ErrorCategory::Internal)
///     .with_inner(cause);
///
/// assert_eq!(error.code(), "CFG_LOAD");
/// assert_eq!(error.inner().map(|e| e.code()), Some("IO_READ"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
// The `default` field attributes below would otherwise make serde infer a
// spurious `C: Default` bound; `Option<C>: Default` holds for any `C`.
#[serde(bound(serialize = "C: Serialize", deserialize = "C: Deserialize<'de>"))]
pub struct Error<C = ErrorCategory> {
    /// Stable machine-readable identifier.
    code: String,
    /// Short human-facing summary.
    reason: String,
    /// Detailed explanation.
    message: String,
    /// Category tag; `None` means uncategorized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<C>,
    /// Nested cause, owned by value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inner: Option<Box<Error<C>>>,
    /// Captured call stack; only set by explicit capture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stack_trace: Option<String>,
}

impl<C: Category> Error<C> {
    /// Create an uncategorized error.
    ///
    /// Requires all three fields but performs no validation beyond that;
    /// empty strings are permitted, though discouraged by convention.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        reason: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            reason: reason.into(),
            message: message.into(),
            category: None,
            inner: None,
            stack_trace: None,
        }
    }

    /// Stable machine-readable identifier.
    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Short human-facing summary.
    #[inline]
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Detailed explanation.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Category tag, if any.
    #[inline]
    #[must_use]
    pub fn category(&self) -> Option<&C> {
        self.category.as_ref()
    }

    /// Nested cause, if any.
    #[inline]
    #[must_use]
    pub fn inner(&self) -> Option<&Error<C>> {
        self.inner.as_deref()
    }

    /// Captured stack trace, if any.
    #[inline]
    #[must_use]
    pub fn stack_trace(&self) -> Option<&str> {
        self.stack_trace.as_deref()
    }

    /// Tag this error with a category.
    #[must_use]
    pub fn with_category(mut self, category: C) -> Self {
        self.category = Some(category);
        self
    }

    /// Attach a nested cause.
    #[must_use]
    pub fn with_inner(mut self, inner: Error<C>) -> Self {
        self.inner = Some(Box::new(inner));
        self
    }

    /// Return a copy with a freshly captured stack trace.
    ///
    /// Capture happens here and only here - never implicitly. The rendering
    /// is platform-dependent but always non-empty and contains at least one
    /// frame identifier.
    #[must_use]
    pub fn with_stack_trace(mut self) -> Self {
        self.stack_trace = Some(Backtrace::force_capture().to_string());
        self
    }

    /// Redact this error for exposure across a trust boundary.
    ///
    /// - [`None`](SanitizeLevel::None): identity.
    /// - [`MessageOnly`](SanitizeLevel::MessageOnly): `message` becomes
    ///   [`SANITIZED_MESSAGE`], the stack trace is cleared; `code`,
    ///   `reason`, `category`, and the inner chain are kept.
    /// - [`Full`](SanitizeLevel::Full): additionally `reason` becomes
    ///   [`SANITIZED_REASON`] and the inner chain is cleared. `code` and
    ///   `category` survive every level - they are the stable handles a
    ///   programmatic consumer is allowed to see.
    ///
    /// The match is exhaustive with no wildcard arm, so a future level
    /// cannot silently fall through to an unspecified redaction.
    #[must_use]
    pub fn sanitize(&self, level: SanitizeLevel) -> Self {
        match level {
            SanitizeLevel::None => self.clone(),
            SanitizeLevel::MessageOnly => Self {
                message: SANITIZED_MESSAGE.to_owned(),
                stack_trace: None,
                ..self.clone()
            },
            SanitizeLevel::Full => Self {
                reason: SANITIZED_REASON.to_owned(),
                message: SANITIZED_MESSAGE.to_owned(),
                inner: None,
                stack_trace: None,
                ..self.clone()
            },
        }
    }

    /// Deterministic text rendering.
    ///
    /// Format: `[<category>] Code: <code>, Reason: <reason>, Message:
    /// <message>`, with the bracketed prefix omitted when uncategorized,
    /// followed by a `Stack Trace:` line and a recursively rendered
    /// `Inner Error:` line when those fields are present. Same error, same
    /// text, always.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Convert this error (inner chain included) to another category set.
    pub fn map_category<D: Category>(self, f: impl Fn(C) -> D) -> Error<D> {
        self.map_category_ref(&f)
    }

    fn map_category_ref<D: Category>(self, f: &impl Fn(C) -> D) -> Error<D> {
        Error {
            code: self.code,
            reason: self.reason,
            message: self.message,
            category: self.category.map(f),
            inner: self.inner.map(|inner| Box::new(inner.map_category_ref(f))),
            stack_trace: self.stack_trace,
        }
    }
}

impl Error<ErrorCategory> {
    /// Create an error tagged [`ErrorCategory::Validation`].
    #[must_use]
    pub fn validation(
        code: impl Into<String>,
        reason: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(code, reason, message).with_category(ErrorCategory::Validation)
    }

    /// Create an error tagged [`ErrorCategory::NotFound`].
    #[must_use]
    pub fn not_found(
        code: impl Into<String>,
        reason: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(code, reason, message).with_category(ErrorCategory::NotFound)
    }

    /// Create an error tagged [`ErrorCategory::Unauthorized`].
    #[must_use]
    pub fn unauthorized(
        code: impl Into<String>,
        reason: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(code, reason, message).with_category(ErrorCategory::Unauthorized)
    }

    /// Create an error tagged [`ErrorCategory::Forbidden`].
    #[must_use]
    pub fn forbidden(
        code: impl Into<String>,
        reason: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(code, reason, message).with_category(ErrorCategory::Forbidden)
    }

    /// Create an error tagged [`ErrorCategory::Conflict`].
    #[must_use]
    pub fn conflict(
        code: impl Into<String>,
        reason: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(code, reason, message).with_category(ErrorCategory::Conflict)
    }

    /// Create an error tagged [`ErrorCategory::Internal`].
    #[must_use]
    pub fn internal(
        code: impl Into<String>,
        reason: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(code, reason, message).with_category(ErrorCategory::Internal)
    }

    /// Create an error tagged [`ErrorCategory::External`].
    #[must_use]
    pub fn external(
        code: impl Into<String>,
        reason: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(code, reason, message).with_category(ErrorCategory::External)
    }
}

impl<C: Category> fmt::Display for Error<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(category) = &self.category {
            write!(f, "[{category}] ")?;
        }
        write!(
            f,
            "Code: {}, Reason: {}, Message: {}",
            self.code, self.reason, self.message
        )?;
        if let Some(trace) = &self.stack_trace {
            write!(f, "\nStack Trace: {trace}")?;
        }
        if let Some(inner) = &self.inner {
            write!(f, "\nInner Error: {inner}")?;
        }
        Ok(())
    }
}

impl<C: Category> std::error::Error for Error<C> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner
            .as_ref()
            .map(|inner| inner.as_ref() as &(dyn std::error::Error + 'static))
    }
}
