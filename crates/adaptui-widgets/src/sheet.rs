#![forbid(unsafe_code)]

//! The adaptive sheet surface.
//!
//! [`SheetSurface`] is what a host overlay mechanism talks to: it feeds
//! content measurements in, reads the offered detent set and selection
//! out, and routes outside-interaction dismissal through the configured
//! policy. Four presets cover the stock presentations: plain sheet,
//! compact alert, navigation sheet, and navigation list.
//!
//! # Invariants
//!
//! 1. The offered set always contains two distinguishable height detents;
//!    the full-size detent joins only while content exceeds the limit.
//! 2. `request_dismiss` never tears the surface down when outside
//!    dismissal is disabled; programmatic [`SheetSurface::dismiss`] always
//!    does.
//! 3. List measurements are corrected by the list chrome bias before they
//!    reach the controller, so the resolved detents cover the navigation
//!    bar and row insets the raw content measurement misses.

use adaptui_core::{AdaptiveOptions, Detent, PlatformContext, Size};
use adaptui_runtime::{AdaptationController, AdaptationState, DetentSync, Observable};
use tracing::debug;
use web_time::Instant;

use crate::accessory::AccessorySlot;
use crate::detent_set::DetentSet;

/// Measurement correction for list presentations, covering navigation and
/// row chrome the raw list content measurement misses.
pub const LIST_MEASUREMENT_BIAS: f64 = 160.0;

/// Bottom inset reserved below list content for pinned accessories.
pub const LIST_BOTTOM_INSET: f64 = 60.0;

/// The stock presentation styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetKind {
    /// Scrollable card content in a plain sheet.
    #[default]
    Sheet,
    /// Compact alert-style card.
    Alert,
    /// Card content wrapped in a navigation container.
    NavigationSheet,
    /// List content wrapped in a navigation container.
    NavigationList,
}

impl SheetKind {
    /// The stock options for this presentation style.
    #[must_use]
    pub const fn default_options(self) -> AdaptiveOptions {
        match self {
            Self::Alert => AdaptiveOptions::alert(),
            _ => AdaptiveOptions::sheet(),
        }
    }

    /// Correction added to nonzero content measurements before resolving.
    #[must_use]
    pub const fn measurement_bias(self) -> f64 {
        match self {
            Self::NavigationList => LIST_MEASUREMENT_BIAS,
            _ => 0.0,
        }
    }

    /// Bottom inset this style reserves independent of any accessory.
    #[must_use]
    pub const fn bottom_inset(self) -> f64 {
        match self {
            Self::NavigationList => LIST_BOTTOM_INSET,
            _ => 0.0,
        }
    }

    /// Whether this style may offer the full-size detent at all. Alerts
    /// stay compact regardless of content height.
    #[must_use]
    pub const fn offers_large(self) -> bool {
        !matches!(self, Self::Alert)
    }
}

/// Immutable configuration for one surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetConfig {
    /// Presentation style.
    pub kind: SheetKind,
    /// Adaptation options; defaults to the kind's stock options.
    pub options: AdaptiveOptions,
    /// Optional bottom-pinned accessory reservation.
    pub accessory: Option<AccessorySlot>,
}

impl SheetConfig {
    /// Configuration with the stock options for `kind`.
    #[must_use]
    pub const fn new(kind: SheetKind) -> Self {
        Self {
            kind,
            options: kind.default_options(),
            accessory: None,
        }
    }

    /// Override the adaptation options.
    #[must_use]
    pub fn options(mut self, options: AdaptiveOptions) -> Self {
        self.options = options;
        self
    }

    /// Attach a bottom-pinned accessory reservation.
    #[must_use]
    pub fn accessory(mut self, slot: AccessorySlot) -> Self {
        self.accessory = Some(slot);
        self
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self::new(SheetKind::Sheet)
    }
}

/// Outcome of a dismissal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetAction {
    /// The surface was dismissed.
    Dismissed,
    /// Dismissal is disabled for this presentation; nothing happened.
    Ignored,
}

/// An adaptive overlay surface bound to one presentation.
pub struct SheetSurface {
    config: SheetConfig,
    controller: AdaptationController,
}

impl SheetSurface {
    /// Create a surface for `config` on the given platform.
    #[must_use]
    pub fn new(config: SheetConfig, platform: PlatformContext) -> Self {
        Self {
            controller: AdaptationController::new(config.options, platform),
            config,
        }
    }

    /// Register the dismissal pass-through callback.
    #[must_use]
    pub fn on_dismiss(mut self, callback: impl Fn() + 'static) -> Self {
        self.controller = self.controller.on_dismiss(callback);
        self
    }

    /// Register the callback fired when the surface enters or leaves the
    /// full-size presentation.
    #[must_use]
    pub fn on_large_changed(mut self, callback: impl Fn(bool) + 'static) -> Self {
        self.controller = self.controller.on_large_changed(callback);
        self
    }

    // ── Measurement and time ────────────────────────────────────────

    /// Feed a content-height measurement from the host's layout pass.
    ///
    /// Zero means "not measured yet" and is forwarded untouched; nonzero
    /// measurements are corrected by the kind's chrome bias first.
    pub fn content_measured(&mut self, height: f64, now: Instant) {
        let corrected = if height == 0.0 {
            0.0
        } else {
            height + self.config.kind.measurement_bias()
        };
        self.controller.handle_height_change(corrected, now);
    }

    /// Pump the delayed settle pass.
    pub fn tick(&mut self, now: Instant) {
        self.controller.tick(now);
    }

    /// When the next [`Self::tick`] call can do work, if ever.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.controller.next_deadline()
    }

    // ── Lifecycle ───────────────────────────────────────────────────

    /// Begin the presentation with clean detent state.
    pub fn present(&mut self) {
        self.controller.present();
    }

    /// Dismiss unconditionally (programmatic path).
    pub fn dismiss(&mut self) {
        self.controller.dismiss();
    }

    /// Dismiss in response to outside interaction (backdrop press, swipe
    /// down). Honors the configured dismiss policy.
    pub fn request_dismiss(&mut self) -> SheetAction {
        if !self.config.options.dismiss_enabled {
            debug!("outside dismissal ignored: dismiss disabled");
            return SheetAction::Ignored;
        }
        self.controller.dismiss();
        SheetAction::Dismissed
    }

    // ── Selection ───────────────────────────────────────────────────

    /// Apply a user-driven detent selection.
    pub fn select(&self, detent: Detent) {
        self.controller.select(detent);
    }

    /// Connect a host-owned selected-detent value bidirectionally.
    #[must_use]
    pub fn bind_host_selection(&self, host_selected: &Observable<Detent>) -> DetentSync {
        DetentSync::new(&self.controller.observe_selected(), host_selected)
    }

    // ── Presentation data ───────────────────────────────────────────

    /// The detent currently applied/rendered.
    #[must_use]
    pub fn selected(&self) -> Detent {
        self.controller.selected()
    }

    /// Whether the full-size presentation is active. Hosts branch chrome
    /// (corner radii, horizontal padding, scroll indicators) on this.
    #[must_use]
    pub fn is_large_sheet(&self) -> bool {
        self.controller.is_large()
    }

    /// Whether content currently exceeds the height limit.
    #[must_use]
    pub fn is_expandable(&self) -> bool {
        self.controller.is_expandable()
    }

    /// The detents to hand to the host overlay mechanism.
    #[must_use]
    pub fn offered_detents(&self) -> DetentSet {
        let state: AdaptationState = self.controller.state();
        DetentSet::new(
            state.primary,
            state.secondary,
            state.is_expandable && self.config.kind.offers_large(),
        )
    }

    /// Lower size bound for wide hosts; `None` on compact hosts, which
    /// present edge-to-edge instead.
    #[must_use]
    pub fn min_fitting_size(&self) -> Option<Size> {
        if self.controller.platform().is_compact_host {
            None
        } else {
            Some(self.config.options.minimum_fitting_size)
        }
    }

    /// Total bottom inset to keep clear of card content: the kind's own
    /// inset plus any accessory reservation.
    #[must_use]
    pub fn bottom_inset(&self) -> f64 {
        let accessory = self.config.accessory.map_or(0.0, |a| a.reserved_height);
        self.config.kind.bottom_inset() + accessory
    }

    /// The accessory reservation, if configured.
    #[must_use]
    pub fn accessory(&self) -> Option<&AccessorySlot> {
        self.config.accessory.as_ref()
    }

    /// This surface's configuration.
    #[must_use]
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// The underlying controller, for hosts that subscribe to individual
    /// observables.
    #[must_use]
    pub fn controller(&self) -> &AdaptationController {
        &self.controller
    }
}

impl std::fmt::Debug for SheetSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetSurface")
            .field("kind", &self.config.kind)
            .field("state", &self.controller.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adaptui_runtime::SETTLE_DELAY;

    fn compact() -> PlatformContext {
        PlatformContext::new(900.0, true)
    }

    fn wide() -> PlatformContext {
        PlatformContext::new(1200.0, false)
    }

    #[test]
    fn sheet_preset_uses_sheet_options() {
        let surface = SheetSurface::new(SheetConfig::new(SheetKind::Sheet), compact());
        assert_eq!(surface.config().options.height_limit, 450.0);
    }

    #[test]
    fn alert_preset_uses_alert_options() {
        let surface = SheetSurface::new(SheetConfig::new(SheetKind::Alert), compact());
        assert_eq!(surface.config().options.height_limit, 120.0);
        assert_eq!(
            surface.config().options.minimum_fitting_size,
            Size::new(320.0, 60.0)
        );
    }

    #[test]
    fn offered_set_tracks_measurements() {
        let mut surface = SheetSurface::new(SheetConfig::new(SheetKind::Sheet), compact());
        let now = Instant::now();
        surface.content_measured(200.0, now);
        surface.tick(now + SETTLE_DELAY);

        let offered = surface.offered_detents();
        assert!(!offered.includes_large);
        assert!(offered.contains(Detent::fixed(200.0)));
        assert!(offered.contains(Detent::fixed(199.0)));
    }

    #[test]
    fn oversized_content_offers_large() {
        let mut surface = SheetSurface::new(SheetConfig::new(SheetKind::Sheet), compact());
        surface.content_measured(600.0, Instant::now());

        let offered = surface.offered_detents();
        assert!(offered.includes_large);
        assert!(offered.contains(Detent::Large));
    }

    #[test]
    fn alerts_never_offer_large() {
        let mut surface = SheetSurface::new(SheetConfig::new(SheetKind::Alert), compact());
        surface.content_measured(600.0, Instant::now());

        assert!(surface.is_expandable(), "expandability still tracked");
        assert!(!surface.offered_detents().includes_large);
    }

    #[test]
    fn list_measurements_carry_chrome_bias() {
        let mut surface =
            SheetSurface::new(SheetConfig::new(SheetKind::NavigationList), compact());
        let now = Instant::now();
        surface.content_measured(100.0, now);
        assert_eq!(surface.selected(), Detent::fixed(260.0));
    }

    #[test]
    fn list_zero_measurement_stays_unmeasured() {
        let mut surface =
            SheetSurface::new(SheetConfig::new(SheetKind::NavigationList), compact());
        surface.content_measured(0.0, Instant::now());
        assert_eq!(surface.selected(), Detent::Medium);
    }

    #[test]
    fn outside_dismissal_honors_policy() {
        let config = SheetConfig::new(SheetKind::Sheet)
            .options(AdaptiveOptions::sheet().dismiss_enabled(false));
        let mut surface = SheetSurface::new(config, compact());
        assert_eq!(surface.request_dismiss(), SheetAction::Ignored);

        let mut surface = SheetSurface::new(SheetConfig::new(SheetKind::Sheet), compact());
        assert_eq!(surface.request_dismiss(), SheetAction::Dismissed);
    }

    #[test]
    fn programmatic_dismiss_ignores_policy() {
        let fired = std::rc::Rc::new(std::cell::Cell::new(false));
        let f = std::rc::Rc::clone(&fired);
        let config = SheetConfig::new(SheetKind::Sheet)
            .options(AdaptiveOptions::sheet().dismiss_enabled(false));
        let mut surface = SheetSurface::new(config, compact()).on_dismiss(move || f.set(true));

        surface.dismiss();
        assert!(fired.get());
    }

    #[test]
    fn min_fitting_size_only_on_wide_hosts() {
        let surface = SheetSurface::new(SheetConfig::new(SheetKind::Sheet), compact());
        assert_eq!(surface.min_fitting_size(), None);

        let surface = SheetSurface::new(SheetConfig::new(SheetKind::Sheet), wide());
        assert_eq!(surface.min_fitting_size(), Some(Size::new(320.0, 240.0)));
    }

    #[test]
    fn bottom_inset_combines_kind_and_accessory() {
        let config =
            SheetConfig::new(SheetKind::NavigationList).accessory(AccessorySlot::new(44.0));
        let surface = SheetSurface::new(config, compact());
        assert_eq!(surface.bottom_inset(), 104.0);

        let surface = SheetSurface::new(SheetConfig::new(SheetKind::Sheet), compact());
        assert_eq!(surface.bottom_inset(), 0.0);
    }

    #[test]
    fn host_binding_follows_drag_and_measurement() {
        let mut surface = SheetSurface::new(SheetConfig::new(SheetKind::Sheet), compact());
        let host_selected = Observable::new(Detent::Medium);
        let _sync = surface.bind_host_selection(&host_selected);

        assert_eq!(host_selected.get(), Detent::fixed(100.0));

        let now = Instant::now();
        surface.content_measured(240.0, now);
        assert_eq!(host_selected.get(), Detent::fixed(240.0));

        host_selected.set(Detent::Large);
        assert!(surface.is_large_sheet());
    }

    #[test]
    fn large_callback_fires_via_host_drag() {
        let edges = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let e = std::rc::Rc::clone(&edges);
        let mut surface = SheetSurface::new(SheetConfig::new(SheetKind::Sheet), compact())
            .on_large_changed(move |is_large| e.borrow_mut().push(is_large));

        let host_selected = Observable::new(Detent::Medium);
        let _sync = surface.bind_host_selection(&host_selected);

        surface.content_measured(600.0, Instant::now());
        host_selected.set(Detent::Large);
        host_selected.set(Detent::fixed(450.0));

        assert_eq!(*edges.borrow(), vec![true, false]);
    }
}
