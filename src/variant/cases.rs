//! Total matching with handlers supplied one at a time.
//!
//! [`Variant2::switch`] takes every handler as an argument, so it cannot be
//! called with one missing. When handlers are gathered dynamically (from
//! configuration, a registry, or optional arguments) use the builders here:
//! they check that every case is covered before dispatch and report a
//! [`VariantError`] instead of running anything.

use super::{Case, Variant2, Variant3};
use crate::diagnostics::function_name;
use crate::error::VariantError;

const OPERATION: &str = "switch";

struct Handler<'a, T, R> {
    function: Box<dyn FnOnce(T) -> R + 'a>,
    name: &'static str,
}

impl<'a, T, R> Handler<'a, T, R> {
    fn new<F>(function: F) -> Self
    where
        F: FnOnce(T) -> R + 'a,
    {
        let name = function_name(&function);
        Self {
            function: Box::new(function),
            name,
        }
    }

    fn call(self, value: T) -> (R, &'static str) {
        ((self.function)(value), self.name)
    }
}

fn require<T>(handler: Option<T>, case: Case) -> Result<T, VariantError> {
    handler.ok_or(VariantError::MissingHandler {
        operation: OPERATION,
        case,
    })
}

fn non_null<T>((result, handler): (Option<T>, &'static str)) -> Result<T, VariantError> {
    result.ok_or(VariantError::NullResult {
        operation: OPERATION,
        handler,
    })
}

// =============================================================================
// Cases2
// =============================================================================

/// A total match over a [`Variant2`] assembled handler by handler.
///
/// Created by [`Variant2::cases`].
///
/// # Examples
///
/// ```rust
/// use varia::error::VariantError;
/// use varia::variant::{Case, Variant2};
///
/// let value: Variant2<i32, String> = Variant2::First(4);
///
/// let complete = value.clone().cases().on_first(|n| n * 2).on_second(|s| s.len() as i32);
/// assert_eq!(complete.try_run(), Ok(8));
///
/// let incomplete = value.cases().on_first(|n| n * 2);
/// assert_eq!(
///     incomplete.try_run(),
///     Err(VariantError::MissingHandler { operation: "switch", case: Case::Second })
/// );
/// ```
#[must_use = "cases do nothing until `try_run` is called"]
pub struct Cases2<'a, A, B, R> {
    variant: Variant2<A, B>,
    on_first: Option<Handler<'a, A, R>>,
    on_second: Option<Handler<'a, B, R>>,
}

impl<'a, A, B, R> Cases2<'a, A, B, R> {
    /// Supplies the handler for the first case.
    pub fn on_first<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(A) -> R + 'a,
    {
        self.on_first = Some(Handler::new(handler));
        self
    }

    /// Supplies the handler for the second case.
    pub fn on_second<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(B) -> R + 'a,
    {
        self.on_second = Some(Handler::new(handler));
        self
    }

    fn dispatch(self) -> Result<(R, &'static str), VariantError> {
        let on_first = require(self.on_first, Case::First)?;
        let on_second = require(self.on_second, Case::Second)?;
        Ok(match self.variant {
            Variant2::First(value) => on_first.call(value),
            Variant2::Second(value) => on_second.call(value),
        })
    }

    /// Runs the handler for the active case.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError::MissingHandler`] naming the first case without a
    /// handler. The check happens before dispatch, so no handler runs even when
    /// the missing one belongs to an inactive case.
    pub fn try_run(self) -> Result<R, VariantError> {
        self.dispatch().map(|(result, _)| result)
    }
}

impl<A, B, T> Cases2<'_, A, B, Option<T>> {
    /// Runs the handler for the active case and requires it to produce a value.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError::MissingHandler`] as [`try_run`](Self::try_run)
    /// does, and [`VariantError::NullResult`] naming the handler if it
    /// returned `None`.
    pub fn try_run_non_null(self) -> Result<T, VariantError> {
        self.dispatch().and_then(non_null)
    }
}

impl<A, B> Variant2<A, B> {
    /// Starts a total match whose handlers are supplied one at a time.
    pub fn cases<'a, R>(self) -> Cases2<'a, A, B, R> {
        Cases2 {
            variant: self,
            on_first: None,
            on_second: None,
        }
    }
}

// =============================================================================
// Cases3
// =============================================================================

/// A total match over a [`Variant3`] assembled handler by handler.
///
/// Created by [`Variant3::cases`].
#[must_use = "cases do nothing until `try_run` is called"]
pub struct Cases3<'a, A, B, C, R> {
    variant: Variant3<A, B, C>,
    on_first: Option<Handler<'a, A, R>>,
    on_second: Option<Handler<'a, B, R>>,
    on_third: Option<Handler<'a, C, R>>,
}

impl<'a, A, B, C, R> Cases3<'a, A, B, C, R> {
    /// Supplies the handler for the first case.
    pub fn on_first<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(A) -> R + 'a,
    {
        self.on_first = Some(Handler::new(handler));
        self
    }

    /// Supplies the handler for the second case.
    pub fn on_second<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(B) -> R + 'a,
    {
        self.on_second = Some(Handler::new(handler));
        self
    }

    /// Supplies the handler for the third case.
    pub fn on_third<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(C) -> R + 'a,
    {
        self.on_third = Some(Handler::new(handler));
        self
    }

    fn dispatch(self) -> Result<(R, &'static str), VariantError> {
        let on_first = require(self.on_first, Case::First)?;
        let on_second = require(self.on_second, Case::Second)?;
        let on_third = require(self.on_third, Case::Third)?;
        Ok(match self.variant {
            Variant3::First(value) => on_first.call(value),
            Variant3::Second(value) => on_second.call(value),
            Variant3::Third(value) => on_third.call(value),
        })
    }

    /// Runs the handler for the active case.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError::MissingHandler`] naming the first case without a
    /// handler, before any handler runs.
    pub fn try_run(self) -> Result<R, VariantError> {
        self.dispatch().map(|(result, _)| result)
    }
}

impl<A, B, C, T> Cases3<'_, A, B, C, Option<T>> {
    /// Runs the handler for the active case and requires it to produce a value.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError::MissingHandler`] for an incomplete match and
    /// [`VariantError::NullResult`] if the handler returned `None`.
    pub fn try_run_non_null(self) -> Result<T, VariantError> {
        self.dispatch().and_then(non_null)
    }
}

impl<A, B, C> Variant3<A, B, C> {
    /// Starts a total match whose handlers are supplied one at a time.
    pub fn cases<'a, R>(self) -> Cases3<'a, A, B, C, R> {
        Cases3 {
            variant: self,
            on_first: None,
            on_second: None,
            on_third: None,
        }
    }
}
