//! Type-constructor emulation through Generic Associated Types.
//!
//! Rust has no native Higher-Kinded Types: a trait cannot abstract over
//! `Optional<_>` or `NonDet<_>` as bare constructors. This module works
//! around that with a GAT: a container names its current payload type and
//! how to rebuild itself around a different one. Every capability trait in
//! this crate hangs off this foundation.

/// A container type viewed as a type constructor applied to a payload.
///
/// # Associated Types
///
/// - `Payload`: the type the constructor is currently applied to.
/// - `Of<B>`: the same constructor applied to `B`.
///
/// # Laws
///
/// `Self::Of<Self::Payload>` must be the same type as `Self`, and
/// `Self::Of<A>::Of<B>` the same type as `Self::Of<B>` — re-applying the
/// constructor never changes which constructor it is.
///
/// # Example
///
/// ```rust
/// use monadkit::capability::Kinded;
/// use monadkit::container::Optional;
///
/// fn payload_of<M: Kinded<Payload = i32>>() {}
/// payload_of::<Optional<i32>>();
/// ```
pub trait Kinded {
    /// The payload type this constructor is currently applied to.
    type Payload;

    /// The same constructor applied to `B`.
    type Of<B>: Kinded<Payload = B>;
}
