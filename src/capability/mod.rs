//! Capability contracts for monadic containers.
//!
//! This module defines the algebraic capabilities the concrete containers
//! implement, layered the way the classic functor/applicative/monad tower
//! is layered:
//!
//! - [`Kinded`]: GAT-based emulation of a type constructor.
//! - [`Mappable`]: transform the payload without altering the shape.
//! - [`Combinable`]: lift pure values and combine two independent
//!   containers; n-ary sequencing is derived from these alone.
//! - [`Chainable`]: sequence container-producing computations where each
//!   depends on the previous payload.

mod chainable;
mod combinable;
mod kinded;
mod mappable;

pub use chainable::{lift2_via_bind, Chainable, ChainableMut};
pub use combinable::{sequence, sequence_keyed, Combinable};
pub use kinded::Kinded;
pub use mappable::Mappable;
