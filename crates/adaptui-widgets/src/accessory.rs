#![forbid(unsafe_code)]

//! Bottom-pinned accessory plumbing.
//!
//! Sheets may carry content pinned to their bottom edge (action rows,
//! confirmation buttons) that stays put while the scrollable card content
//! resizes behind it. The surface only tracks the vertical space the
//! accessory reserves; drawing the accessory and its fade-out backdrop is
//! the host's business.

/// Reservation for bottom-pinned accessory content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AccessorySlot {
    /// Vertical space, in points, kept clear of card content so the
    /// accessory never overlaps it at rest.
    pub reserved_height: f64,
}

impl AccessorySlot {
    /// Create a slot reserving `reserved_height` points.
    #[must_use]
    pub fn new(reserved_height: f64) -> Self {
        Self {
            reserved_height: reserved_height.max(0.0),
        }
    }
}
