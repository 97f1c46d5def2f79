//! The chaining engine.
//!
//! The engine lets a block declare a sequence of named monadic steps as
//! straight-line code and reinterprets it as one composed bind chain,
//! short-circuiting by each container's own rule — producing exactly the
//! result a hand-nested `bind` chain would.
//!
//! Two interchangeable front-ends share the same bind-chain semantics:
//!
//! - [`run`]: the generic suspend-and-replay interpreter. A block is
//!   re-executed from the top once per resolved step, fast-forwarded
//!   through a replay log of already-unwrapped payloads. It supports every
//!   step-capable container, including the nondeterministic fan-out of
//!   [`NonDet`](crate::container::NonDet). Replay cost is O(n) per resolved
//!   step (O(n²) total), acceptable because chains are short; the block's
//!   step-declaring code must be side-effect-free.
//! - [`chain`]: the single-valued short-circuit front-end. Each step either
//!   yields its payload or halts the whole chain through `?`, in one pass
//!   with O(1) live intermediates. Use it for long chains over
//!   single-valued containers.
//!
//! [`Reader`](crate::container::Reader) has no suspension point and
//! implements neither step contract; using it in a block is a compile
//! error, not an inferred blocking semantic.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::container::Optional;
//! use monadkit::engine::run;
//!
//! let result: Optional<i32> = run(|scope| {
//!     let a = scope.step(|| Optional::present(5))?;
//!     let b = scope.step(move || Optional::present(a + 10))?;
//!     Ok(a + b)
//! });
//! assert_eq!(result, Optional::present(20));
//! ```

mod linear;
mod replay;

pub use linear::{chain, Halt, LinearStep};
pub use replay::{run, ChainStep, Scope, Suspended};
