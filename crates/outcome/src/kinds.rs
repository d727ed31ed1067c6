//! The default closed set of error categories
//!
//! Seven standard failure classes covering the usual service-boundary
//! taxonomy. The set is deliberately closed - no `#[non_exhaustive]` - so
//! consumers can match exhaustively and the compiler flags every site when
//! a category is ever added. A domain that needs its own taxonomy defines
//! its own closed enum and implements [`Category`] for it instead.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::traits::Category;

/// Standard failure classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Input failed validation.
    Validation,
    /// A referenced resource does not exist.
    NotFound,
    /// The caller is not authenticated.
    Unauthorized,
    /// The caller is authenticated but not allowed.
    Forbidden,
    /// The request conflicts with current state.
    Conflict,
    /// A fault inside this system.
    Internal,
    /// A fault in an upstream dependency.
    External,
}

impl ErrorCategory {
    /// Stable name of the category, as rendered by
    /// [`Error::to_text`](crate::Error::to_text).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "Validation",
            Self::NotFound => "NotFound",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::Conflict => "Conflict",
            Self::Internal => "Internal",
            Self::External => "External",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Category for ErrorCategory {}
