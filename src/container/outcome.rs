//! A disjoint success/failure result.

use std::fmt;

use crate::capability::{Chainable, Combinable, Kinded, Mappable};

/// A container holding either a success payload or a failure value.
///
/// `Failure` is the short-circuit state and is ordinary, recoverable data:
/// it propagates through `map`/`bind`/`lift2` untouched and only becomes
/// fatal at an explicit [`unwrap_success`](Outcome::unwrap_success).
///
/// When two failing operands are combined with `lift2`, the left failure
/// wins the tie-break.
///
/// # Examples
///
/// ```rust
/// use monadkit::capability::Chainable;
/// use monadkit::container::Outcome;
///
/// fn checked_half(n: i32) -> Outcome<String, i32> {
///     if n % 2 == 0 {
///         Outcome::success(n / 2)
///     } else {
///         Outcome::failure(format!("{n} is odd"))
///     }
/// }
///
/// assert_eq!(checked_half(10).bind(checked_half), Outcome::failure("5 is odd".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<E, T> {
    /// The failing branch.
    Failure(E),
    /// The succeeding branch.
    Success(T),
}

impl<E, T> Outcome<E, T> {
    /// Wraps a success payload.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps a failure value.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Whether this is the succeeding branch.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether this is the failing branch.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Extracts the payload, invoking `fallback` only on the failing branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::container::Outcome;
    ///
    /// let ok: Outcome<String, i32> = Outcome::success(6);
    /// assert_eq!(ok.recover(|_| 0), 6);
    ///
    /// let bad: Outcome<String, i32> = Outcome::failure("err".to_string());
    /// assert_eq!(bad.recover(|e| e.len() as i32), 3);
    /// ```
    #[inline]
    pub fn recover<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => fallback(error),
        }
    }

    /// Extracts the payload, panicking on the failing branch.
    ///
    /// The unsafe extraction: use only when the caller asserts success.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`, with the failure value in the message.
    #[inline]
    pub fn unwrap_success(self) -> T
    where
        E: fmt::Display,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic!("unsafe extraction of a failure: {error}"),
        }
    }
}

impl<E, T> Kinded for Outcome<E, T> {
    type Payload = T;
    type Of<B> = Outcome<E, B>;
}

impl<E, T> Mappable for Outcome<E, T> {
    #[inline]
    fn map<B, F>(self, mut function: F) -> Outcome<E, B>
    where
        F: FnMut(T) -> B,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<E, T> Combinable for Outcome<E, T> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<E, B> {
        Outcome::Success(value)
    }

    #[inline]
    fn lift2<B, C, F>(self, other: Outcome<E, B>, mut function: F) -> Outcome<E, C>
    where
        F: FnMut(T, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Outcome::Success(b)) => Outcome::Success(function(a, b)),
            (Self::Failure(error), _) => Outcome::Failure(error),
            (_, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }
}

impl<E, T> Chainable for Outcome<E, T> {
    #[inline]
    fn bind<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(T) -> Outcome<E, B>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}
