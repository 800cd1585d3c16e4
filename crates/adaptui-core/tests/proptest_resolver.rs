//! Property tests for the detent resolver.

use adaptui_core::{Detent, SHADOW_OFFSET, resolve};
use proptest::prelude::*;

proptest! {
    /// Resolving the same inputs twice yields identical detents.
    #[test]
    fn resolve_is_idempotent(
        height in 0.0f64..10_000.0,
        limit in 1.0f64..2_000.0,
        offset in -10.0f64..10.0,
    ) {
        prop_assert_eq!(
            resolve(height, limit, offset),
            resolve(height, limit, offset)
        );
    }

    /// A zero measurement never collapses the overlay to a zero height.
    #[test]
    fn zero_height_never_fixed_zero(limit in 1.0f64..2_000.0, offset in -10.0f64..10.0) {
        prop_assert_eq!(resolve(0.0, limit, offset), Detent::Medium);
    }

    /// Measurements above the limit clamp exactly to the limit.
    #[test]
    fn over_limit_clamps_to_limit(
        limit in 1.0f64..2_000.0,
        excess in 0.001f64..5_000.0,
    ) {
        prop_assert_eq!(resolve(limit + excess, limit, 0.0), Detent::Fixed(limit));
    }

    /// Resolved heights are never negative.
    #[test]
    fn resolved_height_non_negative(
        height in 0.001f64..10_000.0,
        limit in 1.0f64..2_000.0,
        offset in -10.0f64..10.0,
    ) {
        let detent = resolve(height, limit, offset);
        let h = detent.height().expect("nonzero measurement resolves to a fixed detent");
        prop_assert!(h >= 0.0);
    }

    /// The primary detent and its shadow are always one point apart for
    /// measurements comfortably inside the representable range.
    #[test]
    fn shadow_is_one_point_below_primary(
        height in 2.0f64..10_000.0,
        limit in 2.0f64..2_000.0,
    ) {
        let primary = resolve(height, limit, 0.0);
        let shadow = resolve(height, limit, SHADOW_OFFSET);
        let p = primary.height().unwrap();
        let s = shadow.height().unwrap();
        prop_assert!((p - s - 1.0).abs() < 1e-9);
        prop_assert_ne!(primary, shadow);
    }
}
