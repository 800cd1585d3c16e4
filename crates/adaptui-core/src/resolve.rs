#![forbid(unsafe_code)]

//! Detent resolver: maps a raw content-height measurement to a detent.
//!
//! [`resolve`] is a pure function — no state, no failure modes beyond
//! well-defined clamping. Calling it twice with the same inputs yields the
//! same detent, which the controller relies on when it decides that a
//! measurement has already been absorbed.
//!
//! # Invariants
//!
//! 1. A zero measurement never produces `Fixed(0.0)`; the overlay must not
//!    collapse during the first layout pass before content has a real size.
//! 2. The offset is applied after the limit clamp, so a shadow detent
//!    requested at [`SHADOW_OFFSET`] stays distinguishable from the primary
//!    even when the measurement exceeds the limit.
//! 3. The resolved height is never negative.

use crate::detent::Detent;

/// Offset used to derive the shadow detent one point below the true
/// resolved height.
pub const SHADOW_OFFSET: f64 = -1.0;

/// Resolve a measured content height against a height limit.
///
/// Returns [`Detent::Medium`] for an unmeasured (zero) height; otherwise a
/// [`Detent::Fixed`] at `min(height_limit, measured_height) + offset`,
/// clamped to be non-negative.
#[must_use]
pub fn resolve(measured_height: f64, height_limit: f64, offset: f64) -> Detent {
    if measured_height == 0.0 {
        return Detent::Medium;
    }
    Detent::fixed(measured_height.min(height_limit) + offset)
}
