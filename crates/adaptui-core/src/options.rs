#![forbid(unsafe_code)]

//! Presentation options and the injected platform context.
//!
//! [`AdaptiveOptions`] is the immutable per-presentation configuration a
//! caller supplies when requesting an overlay; the two preset constructors
//! ([`AdaptiveOptions::sheet`], [`AdaptiveOptions::alert`]) carry the stock
//! defaults. [`PlatformContext`] replaces implicit screen-bounds and device
//! idiom queries with values injected at controller construction.

use crate::geometry::Size;

/// Default soft height cap for sheet-style overlays.
pub const SHEET_HEIGHT_LIMIT: f64 = 450.0;

/// Default soft height cap for alert-style overlays.
pub const ALERT_HEIGHT_LIMIT: f64 = 120.0;

/// Minimum fitting size for sheet-style overlays on wide hosts.
pub const SHEET_MIN_FITTING_SIZE: Size = Size::new(320.0, 240.0);

/// Minimum fitting size for alert-style overlays on wide hosts.
pub const ALERT_MIN_FITTING_SIZE: Size = Size::new(320.0, 60.0);

/// Seed height for the initial detent pair, used before the first real
/// content measurement arrives.
pub const DEFAULT_DETENT_HEIGHT: f64 = 100.0;

/// Vertical inset subtracted from the platform's maximum presentable
/// height when capping the configured limit.
pub const PRESENTATION_INSET: f64 = 100.0;

/// Immutable configuration for one overlay presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdaptiveOptions {
    /// Soft height cap before the full-size detent becomes available.
    pub height_limit: f64,
    /// Whether interaction outside the overlay may dismiss it.
    pub dismiss_enabled: bool,
    /// Lower size bound applied on wide (non-compact) hosts.
    pub minimum_fitting_size: Size,
    /// Seed height for the initial detent pair.
    pub default_height: f64,
}

impl AdaptiveOptions {
    /// Stock options for a sheet-style overlay.
    #[must_use]
    pub const fn sheet() -> Self {
        Self {
            height_limit: SHEET_HEIGHT_LIMIT,
            dismiss_enabled: true,
            minimum_fitting_size: SHEET_MIN_FITTING_SIZE,
            default_height: DEFAULT_DETENT_HEIGHT,
        }
    }

    /// Stock options for an alert-style overlay.
    #[must_use]
    pub const fn alert() -> Self {
        Self {
            height_limit: ALERT_HEIGHT_LIMIT,
            dismiss_enabled: true,
            minimum_fitting_size: ALERT_MIN_FITTING_SIZE,
            default_height: DEFAULT_DETENT_HEIGHT,
        }
    }

    /// Set the soft height cap.
    #[must_use]
    pub fn height_limit(mut self, limit: f64) -> Self {
        self.height_limit = limit;
        self
    }

    /// Set whether outside interaction may dismiss the overlay.
    #[must_use]
    pub fn dismiss_enabled(mut self, enabled: bool) -> Self {
        self.dismiss_enabled = enabled;
        self
    }

    /// Set the minimum fitting size used on wide hosts.
    #[must_use]
    pub fn minimum_fitting_size(mut self, size: Size) -> Self {
        self.minimum_fitting_size = size;
        self
    }

    /// Set the seed height for the initial detent pair.
    #[must_use]
    pub fn default_height(mut self, height: f64) -> Self {
        self.default_height = height;
        self
    }
}

impl Default for AdaptiveOptions {
    fn default() -> Self {
        Self::sheet()
    }
}

/// Host platform facts injected at controller construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformContext {
    /// The tallest presentation the platform allows, in points.
    pub max_presentable_height: f64,
    /// Whether the host is a compact (phone-class) environment. Wide hosts
    /// get a minimum fitting size instead of edge-to-edge presentation.
    pub is_compact_host: bool,
}

impl PlatformContext {
    /// Create a platform context.
    #[must_use]
    pub const fn new(max_presentable_height: f64, is_compact_host: bool) -> Self {
        Self {
            max_presentable_height,
            is_compact_host,
        }
    }

    /// The height cap actually enforced for the given options: the
    /// configured limit, but never more than the platform's presentable
    /// height less [`PRESENTATION_INSET`].
    #[must_use]
    pub fn effective_height_limit(&self, options: &AdaptiveOptions) -> f64 {
        let ceiling = (self.max_presentable_height - PRESENTATION_INSET).max(0.0);
        options.height_limit.min(ceiling)
    }
}
