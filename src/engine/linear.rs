//! The single-pass short-circuit front-end.
//!
//! For single-valued containers the chain degenerates to a straight line:
//! each step either yields its payload or halts the whole chain with the
//! short-circuited final container. `?` does the propagation, so a block
//! runs in one pass with O(1) live intermediates regardless of length.

use crate::capability::Combinable;
use crate::container::{Optional, Outcome};

/// The short-circuited final container, carried out of a block by `?`.
pub struct Halt<R>(pub(crate) R);

impl<R> Halt<R> {
    /// Wraps an already short-circuited container.
    #[inline]
    pub fn new(result: R) -> Self {
        Self(result)
    }
}

/// One step of a linear chain over a single-valued container.
///
/// `step` yields the payload, or the whole chain's short-circuit result.
/// Multi-valued containers cannot implement this contract; use
/// [`run`](crate::engine::run) for nondeterministic chains.
pub trait LinearStep<R>: Sized {
    /// The payload yielded on the non-short-circuit branch.
    type Payload;

    /// Unwraps this value or halts the chain.
    ///
    /// # Errors
    ///
    /// Returns [`Halt`] carrying the final container when this value is in
    /// its short-circuit state; propagate it with `?`.
    fn step(self) -> Result<Self::Payload, Halt<R>>;
}

/// Runs a linear chain block, yielding one final container.
///
/// The block's plain return value is wrapped via `pure`; a short-circuit
/// anywhere inside becomes the chain's result unchanged.
///
/// # Examples
///
/// ```rust
/// use monadkit::container::Outcome;
/// use monadkit::engine::{chain, LinearStep};
///
/// let result: Outcome<String, i32> = chain(|| {
///     let a = Outcome::<String, i32>::success(5).step()?;
///     let b = Outcome::<String, i32>::success(a + 10).step()?;
///     Ok(a + b)
/// });
/// assert_eq!(result, Outcome::success(20));
/// ```
pub fn chain<R, T, F>(block: F) -> R
where
    R: Combinable<Payload = T, Of<T> = R>,
    F: FnOnce() -> Result<T, Halt<R>>,
{
    match block() {
        Ok(value) => R::pure(value),
        Err(Halt(result)) => result,
    }
}

impl<A, B> LinearStep<Optional<B>> for Optional<A> {
    type Payload = A;

    #[inline]
    fn step(self) -> Result<A, Halt<Optional<B>>> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(Halt(Optional::Absent)),
        }
    }
}

impl<E, A, B> LinearStep<Outcome<E, B>> for Outcome<E, A> {
    type Payload = A;

    #[inline]
    fn step(self) -> Result<A, Halt<Outcome<E, B>>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(Halt(Outcome::Failure(error))),
        }
    }
}
