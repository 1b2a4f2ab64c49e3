//! The discriminant shared by every variant type.

use std::fmt;

/// Identifies which alternative of a variant is active.
///
/// Two-case variants only ever report [`Case::First`] or [`Case::Second`].
///
/// # Examples
///
/// ```rust
/// use varia::variant::{Case, Variant3};
///
/// let value: Variant3<i32, &str, bool> = Variant3::Third(true);
/// assert_eq!(value.case(), Case::Third);
/// assert_eq!(value.case().index(), 2);
/// assert_eq!(value.case().to_string(), "third");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Case {
    /// The first alternative.
    First,
    /// The second alternative.
    Second,
    /// The third alternative.
    Third,
}

impl Case {
    /// Zero-based position of the case.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
        }
    }

    /// Lower-case ordinal name, as used in error messages.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Case::First, 0, "first")]
    #[case(Case::Second, 1, "second")]
    #[case(Case::Third, 2, "third")]
    fn index_and_name(#[case] case: Case, #[case] index: usize, #[case] name: &str) {
        assert_eq!(case.index(), index);
        assert_eq!(case.to_string(), name);
    }

    #[rstest]
    fn cases_are_ordered_by_position() {
        assert!(Case::First < Case::Second);
        assert!(Case::Second < Case::Third);
    }
}
