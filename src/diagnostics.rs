//! Human-readable names for function values.
//!
//! Used only to phrase [`VariantError`](crate::error::VariantError) messages.

/// Returns a readable name for a function or closure value.
///
/// Named functions yield their path (`my_crate::parse`); closures yield the path
/// of the enclosing item followed by `{{closure}}`. The exact text comes from
/// [`std::any::type_name`] and is not stable across compiler versions, so it
/// must not be parsed.
///
/// # Examples
///
/// ```rust
/// use varia::diagnostics::function_name;
///
/// fn parse_port(text: &str) -> Option<u16> {
///     text.parse().ok()
/// }
///
/// assert!(function_name(&parse_port).ends_with("parse_port"));
/// ```
pub fn function_name<F: ?Sized>(_function: &F) -> &'static str {
    std::any::type_name::<F>()
}
