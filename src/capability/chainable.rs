//! Chainable capability - sequencing dependent computations.
//!
//! `bind` sequences computations where each step produces a new container
//! and can depend on the payload of the previous one. It short-circuits
//! exactly like [`Mappable::map`](super::Mappable::map): an Absent/Failure
//! container returns itself and never invokes the continuation.
//!
//! # Laws
//!
//! ```text
//! pure(a).bind(f)        == f(a)                      // left identity
//! m.bind(pure)           == m                         // right identity
//! m.bind(f).bind(g)      == m.bind(|x| f(x).bind(g))  // associativity
//! ```
//!
//! The split between [`Chainable`] (`FnOnce`) and [`ChainableMut`]
//! (`FnMut`) exists because a multi-valued container must invoke the
//! continuation once per element.

use super::combinable::Combinable;

/// A capability for sequencing container-producing computations.
///
/// # Examples
///
/// ```rust
/// use monadkit::capability::Chainable;
/// use monadkit::container::Optional;
///
/// let result = Optional::present(5).bind(|n| {
///     if n > 0 {
///         Optional::present(n * 2)
///     } else {
///         Optional::absent()
///     }
/// });
/// assert_eq!(result, Optional::present(10));
/// ```
pub trait Chainable: Combinable {
    /// Applies a container-producing function to the payload and flattens
    /// the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::capability::Chainable;
    /// use monadkit::container::Outcome;
    ///
    /// let e: Outcome<&str, i32> = Outcome::failure("err");
    /// assert_eq!(e.bind(|x| Outcome::success(x + 1)), Outcome::failure("err"));
    /// ```
    fn bind<B, F>(self, function: F) -> Self::Of<B>
    where
        F: FnOnce(Self::Payload) -> Self::Of<B>;
}

/// The multi-valued counterpart of [`Chainable`].
///
/// `bind_mut` is flat-map: the continuation runs once per element and the
/// per-element results are concatenated in order.
///
/// # Examples
///
/// ```rust
/// use monadkit::capability::ChainableMut;
/// use monadkit::container::NonDet;
///
/// let result = NonDet::of([5, 6]).bind_mut(|n| NonDet::of([n, n - 1, n]));
/// assert_eq!(result, NonDet::of([5, 4, 5, 6, 5, 6]));
/// ```
pub trait ChainableMut: Combinable {
    /// Applies a container-producing function to each payload and
    /// concatenates the results.
    fn bind_mut<B, F>(self, function: F) -> Self::Of<B>
    where
        F: FnMut(Self::Payload) -> Self::Of<B>;
}

/// The reference derivation of `lift2` from `bind` + `pure`:
/// `fa.bind(|a| fb.bind(|b| pure(f(a, b))))`.
///
/// Hand-rolled [`Combinable::lift2`] implementations must stay
/// observationally identical to this.
///
/// # Examples
///
/// ```rust
/// use monadkit::capability::{lift2_via_bind, Combinable};
/// use monadkit::container::Outcome;
///
/// let a: Outcome<String, i32> = Outcome::success(2);
/// let b: Outcome<String, i32> = Outcome::success(3);
/// assert_eq!(
///     lift2_via_bind(a.clone(), b.clone(), |x, y| x + y),
///     a.lift2(b, |x, y| x + y),
/// );
/// ```
pub fn lift2_via_bind<M, B, C, F>(fa: M, fb: M::Of<B>, mut function: F) -> M::Of<C>
where
    M: Chainable,
    M::Of<B>: Chainable<Payload = B, Of<C> = M::Of<C>>,
    F: FnMut(M::Payload, B) -> C,
{
    fa.bind(move |a| fb.bind::<C, _>(move |b| M::pure(function(a, b))))
}
