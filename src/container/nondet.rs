//! A nondeterministic ordered list of values.

use crate::capability::{ChainableMut, Combinable, Kinded, Mappable};

/// An ordered sequence of zero or more alternative values.
///
/// The list monad: `bind_mut` is flat-map, `lift2` is the Cartesian
/// product with the left operand varying slowest. An empty sequence is the
/// short-circuit state — any combination with it is empty.
///
/// # Examples
///
/// ```rust
/// use monadkit::capability::Combinable;
/// use monadkit::container::NonDet;
///
/// let product = NonDet::of([5, 6]).lift2(NonDet::of(["a", "b"]), |n, s| (n, s));
/// assert_eq!(
///     product,
///     NonDet::of([(5, "a"), (5, "b"), (6, "a"), (6, "b")])
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonDet<T> {
    items: Vec<T>,
}

impl<T> NonDet<T> {
    /// Builds a sequence from any ordered collection of values.
    #[inline]
    pub fn of(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// The empty sequence.
    #[inline]
    pub const fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Borrows the underlying values in order.
    #[inline]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the sequence, yielding the underlying values in order.
    #[inline]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> FromIterator<T> for NonDet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T> Kinded for NonDet<T> {
    type Payload = T;
    type Of<B> = NonDet<B>;
}

impl<T> Mappable for NonDet<T> {
    #[inline]
    fn map<B, F>(self, function: F) -> NonDet<B>
    where
        F: FnMut(T) -> B,
    {
        NonDet {
            items: self.items.into_iter().map(function).collect(),
        }
    }
}

impl<T> Combinable for NonDet<T> {
    #[inline]
    fn pure<B>(value: B) -> NonDet<B> {
        NonDet { items: vec![value] }
    }

    /// Cartesian product: the left operand varies slowest, the right
    /// fastest.
    fn lift2<B, C, F>(self, other: NonDet<B>, mut function: F) -> NonDet<C>
    where
        T: Clone,
        B: Clone,
        F: FnMut(T, B) -> C,
    {
        let mut items = Vec::with_capacity(self.items.len() * other.items.len());
        for a in &self.items {
            for b in &other.items {
                items.push(function(a.clone(), b.clone()));
            }
        }
        NonDet { items }
    }
}

impl<T> ChainableMut for NonDet<T> {
    fn bind_mut<B, F>(self, mut function: F) -> NonDet<B>
    where
        F: FnMut(T) -> NonDet<B>,
    {
        let mut items = Vec::new();
        for value in self.items {
            items.extend(function(value).items);
        }
        NonDet { items }
    }
}
