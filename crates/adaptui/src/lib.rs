#![forbid(unsafe_code)]

//! AdaptUI public facade and prelude.
//!
//! Adaptive detent sizing for bottom-sheet, alert, and list overlays: the
//! surface measures nothing and draws nothing — the host reports content
//! heights, and AdaptUI maintains a small, non-oscillating set of detents
//! plus the current selection for the host's overlay mechanism to render
//! and animate.
//!
//! # Quick start
//!
//! ```
//! use adaptui::prelude::*;
//! use web_time::Instant;
//!
//! let mut sheet = SheetSurface::new(
//!     SheetConfig::new(SheetKind::Sheet),
//!     PlatformContext::new(900.0, true),
//! );
//!
//! // The host layout pass reports the rendered content height.
//! let now = Instant::now();
//! sheet.content_measured(240.0, now);
//! assert_eq!(sheet.selected(), Detent::fixed(240.0));
//!
//! // Pump the settle pass from the frame loop.
//! if let Some(deadline) = sheet.next_deadline() {
//!     sheet.tick(deadline);
//! }
//!
//! // Hand the offered detents to the overlay mechanism.
//! let offered = sheet.offered_detents();
//! assert_eq!(offered.len(), 2);
//! ```

pub use adaptui_core as core;
#[cfg(feature = "runtime")]
pub use adaptui_runtime as runtime;
#[cfg(feature = "widgets")]
pub use adaptui_widgets as widgets;

pub use adaptui_core::{AdaptiveOptions, Detent, PlatformContext, Size, resolve};
#[cfg(feature = "runtime")]
pub use adaptui_runtime::{
    AdaptationController, AdaptationState, DetentSync, Observable, SETTLE_DELAY, Subscription,
};
#[cfg(feature = "widgets")]
pub use adaptui_widgets::{AccessorySlot, DetentSet, SheetAction, SheetConfig, SheetKind, SheetSurface};

/// Convenience re-exports for host integration.
pub mod prelude {
    pub use adaptui_core::{AdaptiveOptions, Detent, PlatformContext, Size};
    #[cfg(feature = "runtime")]
    pub use adaptui_runtime::{AdaptationController, AdaptationState, DetentSync, Observable};
    #[cfg(feature = "widgets")]
    pub use adaptui_widgets::{
        AccessorySlot, DetentSet, SheetAction, SheetConfig, SheetKind, SheetSurface,
    };
}
