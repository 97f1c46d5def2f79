//! Concrete monadic containers.
//!
//! Each container is a tagged value implementing the capability contracts:
//!
//! - [`Optional`]: a value that may be absent.
//! - [`Outcome`]: a disjoint success/failure result.
//! - [`NonDet`]: a nondeterministic ordered list of values.
//! - [`Reader`]: an environment-reading function, invocable only.
//!
//! All tagged containers are immutable after construction, compare
//! structurally (tag + payload) and never invoke a supplied function from
//! their short-circuit state.

mod nondet;
mod optional;
mod outcome;
mod reader;

pub use nondet::NonDet;
pub use optional::Optional;
pub use outcome::Outcome;
pub use reader::Reader;
