//! Combinable capability - lifting values and combining independent contexts.
//!
//! `Combinable` extends [`Mappable`] with:
//!
//! - `pure`: lift a plain value into the minimal context.
//! - `lift2`: combine two independently built containers with a two-argument
//!   function.
//!
//! The n-ary sequencing algorithms [`sequence`] and [`sequence_keyed`]
//! derive "combine many effects" solely from `pure` + `lift2`: a left fold
//! that starts at `pure(empty collection)` and appends one payload per
//! operand.
//!
//! # Laws
//!
//! ## Applicative Identity
//!
//! ```text
//! pure(a).lift2(pure(b), f) == pure(f(a, b))
//! ```
//!
//! ## Short-circuit tie-break
//!
//! For Result-like containers, when both operands are failing the left
//! operand's failure wins.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::capability::{sequence, Combinable};
//! use monadkit::container::Outcome;
//!
//! let a: Outcome<String, i32> = Outcome::success(1);
//! let b: Outcome<String, i32> = Outcome::success(2);
//! assert_eq!(a.lift2(b, |x, y| x + y), Outcome::success(3));
//!
//! let items: Vec<Outcome<String, i32>> = vec![Outcome::success(5), Outcome::success(6)];
//! assert_eq!(sequence(items), Outcome::success(vec![5, 6]));
//! ```

use std::collections::BTreeMap;

use super::mappable::Mappable;

/// A capability for lifting pure values and combining two contexts.
///
/// The `Clone` bounds on `lift2` exist for multi-valued containers, whose
/// Cartesian combination revisits each operand payload; single-valued
/// containers never clone.
pub trait Combinable: Mappable {
    /// Lifts a plain value into the minimal context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::capability::Combinable;
    /// use monadkit::container::Optional;
    ///
    /// let x: Optional<i32> = Optional::<()>::pure(42);
    /// assert_eq!(x, Optional::present(42));
    /// ```
    fn pure<B>(value: B) -> Self::Of<B>;

    /// Combines two containers with a two-argument function.
    ///
    /// If both operands carry the success tag the payloads are combined;
    /// otherwise the result short-circuits by the container's own rule.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::capability::Combinable;
    /// use monadkit::container::Outcome;
    ///
    /// let bad: Outcome<&str, i32> = Outcome::failure("left");
    /// let worse: Outcome<&str, i32> = Outcome::failure("right");
    /// assert_eq!(bad.lift2(worse, |x, y| x + y), Outcome::failure("left"));
    /// ```
    fn lift2<B, C, F>(self, other: Self::Of<B>, function: F) -> Self::Of<C>
    where
        Self::Payload: Clone,
        B: Clone,
        F: FnMut(Self::Payload, B) -> C;
}

/// Sequences an ordered collection of containers into a container of `Vec`.
///
/// Left fold of [`Combinable::lift2`] starting at `pure(vec![])`, appending
/// one payload per operand; an empty input yields `pure(vec![])` and the
/// first short-circuiting operand wins regardless of its position.
///
/// # Examples
///
/// ```rust
/// use monadkit::capability::sequence;
/// use monadkit::container::Optional;
///
/// let all = vec![Optional::present(5), Optional::present(6)];
/// assert_eq!(sequence(all), Optional::present(vec![5, 6]));
///
/// let broken = vec![Optional::absent(), Optional::present(6)];
/// assert_eq!(sequence(broken), Optional::absent());
/// ```
pub fn sequence<M>(items: impl IntoIterator<Item = M>) -> M::Of<Vec<M::Payload>>
where
    M: Combinable,
    M::Payload: Clone,
    M::Of<Vec<M::Payload>>: Combinable<
        Payload = Vec<M::Payload>,
        Of<M::Payload> = M,
        Of<Vec<M::Payload>> = M::Of<Vec<M::Payload>>,
    >,
{
    items.into_iter().fold(M::pure(Vec::new()), |acc, item| {
        acc.lift2(item, |mut list, value| {
            list.push(value);
            list
        })
    })
}

/// Sequences a keyed collection of containers into a container of an
/// ordered map.
///
/// The same fold as [`sequence`] over a stable key set; an empty input
/// yields `pure` of an empty map.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
///
/// use monadkit::capability::sequence_keyed;
/// use monadkit::container::Outcome;
///
/// let keyed: Vec<(&str, Outcome<String, i32>)> =
///     vec![("fst", Outcome::success(5)), ("snd", Outcome::success(6))];
/// let expected: BTreeMap<&str, i32> = [("fst", 5), ("snd", 6)].into_iter().collect();
/// assert_eq!(sequence_keyed(keyed), Outcome::success(expected));
/// ```
pub fn sequence_keyed<M, K>(
    items: impl IntoIterator<Item = (K, M)>,
) -> M::Of<BTreeMap<K, M::Payload>>
where
    K: Ord + Clone,
    M: Combinable,
    M::Payload: Clone,
    M::Of<BTreeMap<K, M::Payload>>: Combinable<
        Payload = BTreeMap<K, M::Payload>,
        Of<M::Payload> = M,
        Of<BTreeMap<K, M::Payload>> = M::Of<BTreeMap<K, M::Payload>>,
    >,
{
    items
        .into_iter()
        .fold(M::pure(BTreeMap::new()), |acc, (key, item)| {
            acc.lift2(item, move |mut map, value| {
                map.insert(key.clone(), value);
                map
            })
        })
}
