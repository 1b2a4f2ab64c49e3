//! Partial matching with a default handler.
//!
//! `match_some` handles any subset of cases; the default covers the rest. This
//! is the only matching form where omitting a handler is not an error.

use super::{Variant2, Variant3};

type Handler<'a, T, R> = Option<Box<dyn FnOnce(T) -> R + 'a>>;

/// A pending partial match over a [`Variant2`].
///
/// Created by [`Variant2::match_some`]. Register handlers with
/// [`on_first`](Self::on_first) and [`on_second`](Self::on_second), then call
/// [`run`](Self::run). Registering the same case twice keeps the later handler.
#[must_use = "a partial match does nothing until `run` is called"]
pub struct PartialMatch2<'a, A, B, R> {
    variant: Variant2<A, B>,
    default: Box<dyn FnOnce() -> R + 'a>,
    on_first: Handler<'a, A, R>,
    on_second: Handler<'a, B, R>,
}

impl<'a, A, B, R> PartialMatch2<'a, A, B, R> {
    /// Handles the first case.
    pub fn on_first<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(A) -> R + 'a,
    {
        self.on_first = Some(Box::new(handler));
        self
    }

    /// Handles the second case.
    pub fn on_second<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(B) -> R + 'a,
    {
        self.on_second = Some(Box::new(handler));
        self
    }

    /// Runs the handler registered for the active case, or the default.
    ///
    /// Exactly one handler runs. The default receives no case information.
    pub fn run(self) -> R {
        match self.variant {
            Variant2::First(value) => match self.on_first {
                Some(handler) => handler(value),
                None => (self.default)(),
            },
            Variant2::Second(value) => match self.on_second {
                Some(handler) => handler(value),
                None => (self.default)(),
            },
        }
    }
}

impl<A, B> Variant2<A, B> {
    /// Starts a partial match that falls back to `default` for unhandled cases.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use varia::variant::Variant2;
    ///
    /// let value: Variant2<i32, String> = Variant2::Second("text".to_string());
    ///
    /// let result = value
    ///     .match_some(|| "unhandled")
    ///     .on_first(|_| "number")
    ///     .run();
    /// assert_eq!(result, "unhandled");
    /// ```
    pub fn match_some<'a, R, D>(self, default: D) -> PartialMatch2<'a, A, B, R>
    where
        D: FnOnce() -> R + 'a,
    {
        PartialMatch2 {
            variant: self,
            default: Box::new(default),
            on_first: None,
            on_second: None,
        }
    }
}

/// A pending partial match over a [`Variant3`].
///
/// Created by [`Variant3::match_some`].
#[must_use = "a partial match does nothing until `run` is called"]
pub struct PartialMatch3<'a, A, B, C, R> {
    variant: Variant3<A, B, C>,
    default: Box<dyn FnOnce() -> R + 'a>,
    on_first: Handler<'a, A, R>,
    on_second: Handler<'a, B, R>,
    on_third: Handler<'a, C, R>,
}

impl<'a, A, B, C, R> PartialMatch3<'a, A, B, C, R> {
    /// Handles the first case.
    pub fn on_first<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(A) -> R + 'a,
    {
        self.on_first = Some(Box::new(handler));
        self
    }

    /// Handles the second case.
    pub fn on_second<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(B) -> R + 'a,
    {
        self.on_second = Some(Box::new(handler));
        self
    }

    /// Handles the third case.
    pub fn on_third<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(C) -> R + 'a,
    {
        self.on_third = Some(Box::new(handler));
        self
    }

    /// Runs the handler registered for the active case, or the default.
    pub fn run(self) -> R {
        let default = self.default;
        match self.variant {
            Variant3::First(value) => self.on_first.map_or_else(default, |handler| handler(value)),
            Variant3::Second(value) => {
                self.on_second.map_or_else(default, |handler| handler(value))
            }
            Variant3::Third(value) => self.on_third.map_or_else(default, |handler| handler(value)),
        }
    }
}

impl<A, B, C> Variant3<A, B, C> {
    /// Starts a partial match that falls back to `default` for unhandled cases.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use varia::variant::Variant3;
    ///
    /// let value: Variant3<i32, String, bool> = Variant3::First(7);
    ///
    /// let doubled = value
    ///     .match_some(|| 0)
    ///     .on_first(|number| number * 2)
    ///     .on_third(|flag| i32::from(flag))
    ///     .run();
    /// assert_eq!(doubled, 14);
    /// ```
    pub fn match_some<'a, R, D>(self, default: D) -> PartialMatch3<'a, A, B, C, R>
    where
        D: FnOnce() -> R + 'a,
    {
        PartialMatch3 {
            variant: self,
            default: Box::new(default),
            on_first: None,
            on_second: None,
            on_third: None,
        }
    }
}
