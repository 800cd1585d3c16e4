#![forbid(unsafe_code)]

//! Detents: the discrete sizes an overlay may snap to.
//!
//! A [`Detent`] is either an explicit height ([`Detent::Fixed`]), the
//! platform's medium presentation size ([`Detent::Medium`], used while
//! content has not been measured yet), or the platform's full presentation
//! size ([`Detent::Large`]).
//!
//! # Invariants
//!
//! 1. Equality is by variant and, for `Fixed`, by height value — never by
//!    identity. Two independently computed `Fixed(200.0)` detents are equal.
//! 2. `Detent::fixed` never produces a negative height.
//! 3. `Eq`/`Hash` are lawful: height bits are canonicalized (`-0.0` folds
//!    into `0.0`, all NaN payloads fold together) so detents can be stored
//!    in host-side sets and maps.

use core::fmt;
use core::hash::{Hash, Hasher};

/// A discrete target size for an overlay container.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Detent {
    /// An explicit height in logical points.
    Fixed(f64),
    /// The platform's medium presentation size. Stands in for a real height
    /// while content is still unmeasured.
    Medium,
    /// The platform's maximum presentation size.
    Large,
}

impl Detent {
    /// Create a fixed detent, clamping negative heights to zero.
    #[must_use]
    pub fn fixed(height: f64) -> Self {
        Self::Fixed(height.max(0.0))
    }

    /// Whether this is the full-size detent.
    #[must_use]
    pub const fn is_large(&self) -> bool {
        matches!(self, Self::Large)
    }

    /// Whether this is the unmeasured-content sentinel.
    #[must_use]
    pub const fn is_medium(&self) -> bool {
        matches!(self, Self::Medium)
    }

    /// The explicit height, if this is a `Fixed` detent.
    #[must_use]
    pub const fn height(&self) -> Option<f64> {
        match self {
            Self::Fixed(h) => Some(*h),
            _ => None,
        }
    }
}

/// Canonical bit pattern for a height value, folding `-0.0` into `0.0` and
/// all NaN payloads into one representative.
fn height_bits(height: f64) -> u64 {
    if height == 0.0 {
        0
    } else if height.is_nan() {
        f64::NAN.to_bits()
    } else {
        height.to_bits()
    }
}

impl PartialEq for Detent {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Fixed(a), Self::Fixed(b)) => height_bits(*a) == height_bits(*b),
            (Self::Medium, Self::Medium) | (Self::Large, Self::Large) => true,
            _ => false,
        }
    }
}

impl Eq for Detent {}

impl Hash for Detent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Fixed(h) => {
                state.write_u8(0);
                state.write_u64(height_bits(*h));
            }
            Self::Medium => state.write_u8(1),
            Self::Large => state.write_u8(2),
        }
    }
}

impl fmt::Display for Detent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(h) => write!(f, "fixed({h})"),
            Self::Medium => write!(f, "medium"),
            Self::Large => write!(f, "large"),
        }
    }
}
