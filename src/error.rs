//! Error types for contract violations detected at call time.
//!
//! Statically typed matching (`switch`, `match_with`) cannot fail: every handler
//! is a required argument and every handler returns a value. The dynamic forms
//! built from [`Cases2`](crate::variant::Cases2) and
//! [`Cases3`](crate::variant::Cases3) accept handlers one at a time, so they
//! check their contract before and after dispatch and report violations with
//! [`VariantError`].

use crate::variant::Case;

/// A violation of a matching operation's contract.
///
/// Both kinds are programming errors at the call site. They are returned to the
/// immediate caller and never retried or substituted with a fallback value.
///
/// # Examples
///
/// ```rust
/// use varia::error::VariantError;
/// use varia::variant::Case;
///
/// let error = VariantError::MissingHandler {
///     operation: "switch",
///     case: Case::Second,
/// };
/// assert_eq!(
///     format!("{error}"),
///     "switch: missing handler for the second case"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantError {
    /// A total match was run without a handler for one of the cases.
    ///
    /// Detected before any handler runs, whichever case is active.
    MissingHandler {
        /// The operation that was invoked.
        operation: &'static str,
        /// The first case, in positional order, without a handler.
        case: Case,
    },
    /// A handler declared to produce a value produced none.
    NullResult {
        /// The operation that was invoked.
        operation: &'static str,
        /// Diagnostic name of the handler that returned nothing.
        handler: &'static str,
    },
}

impl VariantError {
    /// Returns the name of the operation that reported the violation.
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::MissingHandler { operation, .. } | Self::NullResult { operation, .. } => {
                operation
            }
        }
    }

    /// Returns `true` for precondition violations (reported before dispatch).
    pub const fn is_precondition(&self) -> bool {
        matches!(self, Self::MissingHandler { .. })
    }
}

impl std::fmt::Display for VariantError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingHandler { operation, case } => {
                write!(formatter, "{operation}: missing handler for the {case} case")
            }
            Self::NullResult { operation, handler } => {
                write!(formatter, "{operation}: result of {handler} cannot be empty")
            }
        }
    }
}

impl std::error::Error for VariantError {}
