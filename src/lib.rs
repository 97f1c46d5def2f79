//! # monadkit
//!
//! Composable algebraic capabilities and monadic containers, built around a
//! generic chaining engine.
//!
//! ## Overview
//!
//! This library provides a small algebraic-abstraction toolkit:
//!
//! - **Capabilities**: [`Mappable`](capability::Mappable),
//!   [`Combinable`](capability::Combinable) and
//!   [`Chainable`](capability::Chainable) contracts over a GAT-emulated
//!   type constructor.
//! - **Containers**: [`Optional`](container::Optional),
//!   [`Outcome`](container::Outcome), [`NonDet`](container::NonDet) and
//!   [`Reader`](container::Reader).
//! - **Chaining Engine**: write a sequence of monadic steps as straight-line
//!   code and have it reinterpreted as one composed bind chain, either
//!   through the generic suspend-and-replay interpreter ([`engine::run`]) or
//!   the single-valued short-circuit front-end ([`engine::chain`]).
//! - **Validating parser**: [`Parser`](parser::Parser), a named
//!   success/failure container with a required/optional disposition, for
//!   pulling fields out of dynamic lookup sources.
//!
//! ## Feature Flags
//!
//! - `capability`: capability traits (Mappable, Combinable, Chainable)
//! - `container`: concrete containers (Optional, Outcome, NonDet, Reader)
//! - `engine`: the chaining engine
//! - `parser`: the validating parser (pulls `serde_json`)
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadkit::container::Outcome;
//! use monadkit::engine::{chain, LinearStep};
//!
//! let total: Outcome<String, i32> = chain(|| {
//!     let a = Outcome::<String, i32>::success(5).step()?;
//!     let b = Outcome::<String, i32>::success(a + 10).step()?;
//!     Ok(a + b)
//! });
//! assert_eq!(total, Outcome::success(20));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use monadkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "capability")]
    pub use crate::capability::*;

    #[cfg(feature = "container")]
    pub use crate::container::*;

    #[cfg(feature = "engine")]
    pub use crate::engine::*;

    #[cfg(feature = "parser")]
    pub use crate::parser::*;
}

#[cfg(feature = "capability")]
pub mod capability;

#[cfg(feature = "container")]
pub mod container;

#[cfg(feature = "engine")]
pub mod engine;

#[cfg(feature = "parser")]
pub mod parser;
