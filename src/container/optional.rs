//! A value that may be absent.

use crate::capability::{Chainable, Combinable, Kinded, Mappable};

/// A container holding either one present value or nothing.
///
/// `Absent` is the short-circuit state: `map`, `bind` and `lift2` return
/// it unchanged without invoking the supplied function.
///
/// # Examples
///
/// ```rust
/// use monadkit::capability::{Chainable, Mappable};
/// use monadkit::container::Optional;
///
/// let doubled = Optional::present(21).map(|n| n * 2);
/// assert_eq!(doubled, Optional::present(42));
///
/// let chained = Optional::present(5).bind(|n| Optional::from_option((n > 3).then_some(n)));
/// assert_eq!(chained, Optional::present(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Optional<T> {
    /// A value is present.
    Present(T),
    /// No value.
    Absent,
}

impl<T> Optional<T> {
    /// Wraps a value.
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// The empty container.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Converts from a standard `Option`, mapping `None` to `Absent`.
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }

    /// Whether a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Whether the container is empty.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Extracts the value, invoking `fallback` only when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::container::Optional;
    ///
    /// assert_eq!(Optional::present(5).recover(|| 0), 5);
    /// assert_eq!(Optional::<i32>::absent().recover(|| 0), 0);
    /// ```
    #[inline]
    pub fn recover<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback(),
        }
    }

    /// Extracts the value, panicking when absent.
    ///
    /// The unsafe extraction: use only when the caller asserts presence.
    ///
    /// # Panics
    ///
    /// Panics if the container is `Absent`.
    #[inline]
    pub fn unwrap_present(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("unsafe extraction of an absent value"),
        }
    }
}

impl<T> Kinded for Optional<T> {
    type Payload = T;
    type Of<B> = Optional<B>;
}

impl<T> Mappable for Optional<T> {
    #[inline]
    fn map<B, F>(self, mut function: F) -> Optional<B>
    where
        F: FnMut(T) -> B,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent => Optional::Absent,
        }
    }
}

impl<T> Combinable for Optional<T> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Present(value)
    }

    #[inline]
    fn lift2<B, C, F>(self, other: Optional<B>, mut function: F) -> Optional<C>
    where
        F: FnMut(T, B) -> C,
    {
        match (self, other) {
            (Self::Present(a), Optional::Present(b)) => Optional::Present(function(a, b)),
            _ => Optional::Absent,
        }
    }
}

impl<T> Chainable for Optional<T> {
    #[inline]
    fn bind<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(T) -> Optional<B>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Optional::Absent,
        }
    }
}
