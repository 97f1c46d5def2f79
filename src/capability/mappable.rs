//! Mappable capability - transforming a container's payload.
//!
//! # Laws
//!
//! All `Mappable` implementations must satisfy:
//!
//! ## Identity Law
//!
//! ```text
//! fa.map(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.map(f).map(g) == fa.map(|x| g(f(x)))
//! ```
//!
//! # Short-circuit
//!
//! A container in its short-circuit state (Absent, Failure) returns itself
//! unchanged and never invokes the supplied function.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::capability::Mappable;
//! use monadkit::container::Optional;
//!
//! let present = Optional::present(5);
//! assert_eq!(present.map(|n| n.to_string()), Optional::present("5".to_string()));
//!
//! let absent: Optional<i32> = Optional::absent();
//! assert_eq!(absent.map(|n| n.to_string()), Optional::absent());
//! ```

use super::kinded::Kinded;

/// A capability for types whose payload can be transformed in place.
///
/// `map` applies a function to the payload(s) while preserving the
/// container's shape and tag. The function is `FnMut` so that multi-valued
/// containers ([`NonDet`](crate::container::NonDet)) can apply it to each
/// element; single-valued containers call it at most once.
///
/// Panics raised by `function` propagate as fatal for every container
/// except [`Parser`](crate::parser::Parser), which catches them and
/// converts them into its failure state.
pub trait Mappable: Kinded {
    /// Applies a function to the payload inside the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::capability::Mappable;
    /// use monadkit::container::Outcome;
    ///
    /// let success: Outcome<String, i32> = Outcome::success(5);
    /// assert_eq!(success.map(|n| n * 2), Outcome::success(10));
    /// ```
    fn map<B, F>(self, function: F) -> Self::Of<B>
    where
        F: FnMut(Self::Payload) -> B;
}
