//! Zero-payload marker type for outcomes with no meaningful return value

use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker value carried by success outcomes that have nothing to return.
///
/// `Unit` is a zero-sized type: every instance is the same instance, and
/// equality between any two `Unit` values holds trivially. Use it as the
/// value parameter of an [`Outcome`](crate::Outcome) whenever an operation
/// only signals whether it succeeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit;

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_units_are_equal() {
        assert_eq!(Unit, Unit);
        assert_eq!(Unit, Unit::default());
    }

    #[test]
    fn unit_is_zero_sized() {
        assert_eq!(size_of::<Unit>(), 0);
    }

    #[test]
    fn unit_display() {
        assert_eq!(Unit.to_string(), "()");
    }
}
