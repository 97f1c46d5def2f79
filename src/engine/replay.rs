//! The suspend-and-replay interpreter.
//!
//! A block runs under single-threaded cooperative suspension: reaching an
//! unresolved step, it records the pending monadic action and returns
//! `Err(Suspended)`, which `?` propagates out of the block. The driver then
//! binds the pending action with a continuation that appends the unwrapped
//! payload to the replay log and restarts the block from the top, feeding
//! logged payloads to the steps already resolved. Each cycle consumes
//! exactly one unresolved step or completes, so termination is guaranteed;
//! a short-circuit from bind ends the whole chain immediately.
//!
//! Every intermediate container is consumed by the bind that resolves it,
//! so superseded values become unreachable after each cycle.

use std::any::Any;
use std::rc::Rc;

use crate::capability::Combinable;
use crate::container::{NonDet, Optional, Outcome};

/// Marker returned by [`Scope::step`] when the block must suspend.
///
/// Blocks never construct or inspect this; they only propagate it with `?`.
pub struct Suspended {
    _private: (),
}

type PendingBind<R> = Box<dyn FnOnce(&dyn Fn(Rc<dyn Any>) -> R) -> R>;

/// One step of a chained block: a monadic value that can be fed into the
/// rest of the chain.
///
/// `R` is the engine's final container type; `feed` either invokes the
/// continuation with the unwrapped payload (possibly once per element, for
/// multi-valued containers) or short-circuits to the final container
/// directly. Implementations must agree with the container's `bind`.
pub trait ChainStep<R> {
    /// The payload handed to the rest of the chain.
    type Payload;

    /// Binds this value into the continuation of the chain.
    fn feed(self, resume: &dyn Fn(Self::Payload) -> R) -> R;
}

/// The execution context passed to a replayed block.
///
/// Holds the replay log of previously resolved payloads and, after a
/// suspension, the pending step the driver must bind next.
pub struct Scope<R> {
    replay: Vec<Rc<dyn Any>>,
    cursor: usize,
    pending: Option<PendingBind<R>>,
}

impl<R: 'static> Scope<R> {
    fn new(replay: Vec<Rc<dyn Any>>) -> Self {
        Self {
            replay,
            cursor: 0,
            pending: None,
        }
    }

    /// Declares the next step of the chain.
    ///
    /// Returns the step's unwrapped payload if this position was already
    /// resolved on an earlier cycle. Otherwise records `pending` — a
    /// deferred action producing the step's monadic value — and suspends
    /// the block; `pending` is invoked at most once, by the driver.
    ///
    /// # Errors
    ///
    /// Returns [`Suspended`] when the step is not yet resolved; propagate
    /// it with `?`.
    ///
    /// # Panics
    ///
    /// Panics if the replayed payload's type differs from what was logged
    /// for this position — the block declared different steps on different
    /// passes, which is a usage error.
    pub fn step<S, P>(&mut self, pending: P) -> Result<S::Payload, Suspended>
    where
        S: ChainStep<R> + 'static,
        S::Payload: Clone + 'static,
        P: FnOnce() -> S + 'static,
    {
        if self.cursor < self.replay.len() {
            let entry = &self.replay[self.cursor];
            self.cursor += 1;
            entry.downcast_ref::<S::Payload>().map_or_else(
                || {
                    panic!(
                        "replayed step resolved to a different payload type; \
                         chain blocks must declare the same steps on every pass"
                    )
                },
                |value| Ok(value.clone()),
            )
        } else {
            self.pending = Some(Box::new(move |resume| {
                pending().feed(&|payload| resume(Rc::new(payload)))
            }));
            Err(Suspended { _private: () })
        }
    }
}

/// Interprets a block of chained steps, yielding one final container.
///
/// The block runs against a [`Scope`]; each `scope.step(..)?` declares one
/// monadic step and receives its unwrapped payload as an ordinary value,
/// usable in later steps. On completion the plain return value is wrapped
/// via `pure`; a monadic terminal value is expressed as a final step.
///
/// The block is re-executed once per resolved step, so everything outside
/// the pending closures must be side-effect-free value computation.
///
/// # Examples
///
/// ```rust
/// use monadkit::container::Outcome;
/// use monadkit::engine::run;
///
/// let result: Outcome<String, i32> = run(|scope| {
///     let a = scope.step(|| Outcome::<String, i32>::success(5))?;
///     let b = scope.step(move || Outcome::<String, i32>::success(a + 10))?;
///     Ok(a + b)
/// });
/// assert_eq!(result, Outcome::success(20));
/// ```
///
/// Nondeterministic steps fan the rest of the chain out per element:
///
/// ```rust
/// use monadkit::container::NonDet;
/// use monadkit::engine::run;
///
/// let result: NonDet<i32> = run(|scope| {
///     let base: i32 = scope.step(|| NonDet::of([3, 5]))?;
///     let exponent = scope.step(|| NonDet::of([1u32, 2]))?;
///     Ok(base.pow(exponent))
/// });
/// assert_eq!(result, NonDet::of([3, 9, 5, 25]));
/// ```
pub fn run<R, T, F>(block: F) -> R
where
    T: 'static,
    R: Combinable<Payload = T, Of<T> = R> + 'static,
    F: Fn(&mut Scope<R>) -> Result<T, Suspended> + 'static,
{
    resume_with(&Rc::new(block), Vec::new())
}

fn resume_with<R, T, F>(block: &Rc<F>, log: Vec<Rc<dyn Any>>) -> R
where
    T: 'static,
    R: Combinable<Payload = T, Of<T> = R> + 'static,
    F: Fn(&mut Scope<R>) -> Result<T, Suspended> + 'static,
{
    let mut scope = Scope::new(log.clone());
    match block(&mut scope) {
        Ok(value) => R::pure(value),
        Err(Suspended { .. }) => {
            let Some(pending) = scope.pending.take() else {
                panic!("block suspended without declaring a pending step");
            };
            pending(&|payload| {
                let mut next = log.clone();
                next.push(payload);
                resume_with(block, next)
            })
        }
    }
}

impl<A, B> ChainStep<Optional<B>> for Optional<A> {
    type Payload = A;

    fn feed(self, resume: &dyn Fn(A) -> Optional<B>) -> Optional<B> {
        match self {
            Self::Present(value) => resume(value),
            Self::Absent => Optional::Absent,
        }
    }
}

impl<E, A, B> ChainStep<Outcome<E, B>> for Outcome<E, A> {
    type Payload = A;

    fn feed(self, resume: &dyn Fn(A) -> Outcome<E, B>) -> Outcome<E, B> {
        match self {
            Self::Success(value) => resume(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<A, B> ChainStep<NonDet<B>> for NonDet<A> {
    type Payload = A;

    fn feed(self, resume: &dyn Fn(A) -> NonDet<B>) -> NonDet<B> {
        let mut items = Vec::new();
        for value in self.into_items() {
            items.extend(resume(value).into_items());
        }
        NonDet::of(items)
    }
}
