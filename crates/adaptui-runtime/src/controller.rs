#![forbid(unsafe_code)]

//! The adaptation controller: turns raw content-height measurements into
//! stable, animatable detent state.
//!
//! One controller instance backs one presented overlay. It owns the
//! selected detent, the primary (best fit) detent, the secondary shadow
//! detent kept one point below, and the expandability flag. Hosts need two
//! distinguishable height detents to allow a drag transition between
//! sizes, which is why the shadow slot exists at all.
//!
//! # Settle protocol
//!
//! Each measurement runs a two-phase update. The immediate phase writes
//! the freshly resolved detent into whichever slot is *not* currently
//! rendered and moves the selection onto it, so the new size is visible
//! without delay. The delayed phase, [`SETTLE_DELAY`] later, rewrites the
//! previously rendered slot one point below the measurement. Splitting the
//! phases keeps the two slots from jumping in the same frame, which reads
//! as flicker during interactive resizing.
//!
//! # Invariants
//!
//! 1. `primary != secondary` whenever both are `Fixed`.
//! 2. A measurement equal to what the rendered slot already shows is
//!    absorbed without rescheduling (repeated measurements converge).
//! 3. While the full-size detent is selected, measurements refresh the
//!    shadow slots but never move the selection; collapsing later lands on
//!    an up-to-date size.
//! 4. After dismissal, no pending settle pass can write into this
//!    instance: teardown cancels the timer rather than checking for dead
//!    state at fire time.
//!
//! # Failure Modes
//!
//! None recoverable: all inputs are total. The residual risk is detent
//! oscillation under pathologically fast resize loops, damped but not
//! eliminated by the settle delay; the state self-corrects on the next
//! measurement.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use adaptui_core::{AdaptiveOptions, Detent, PlatformContext, SHADOW_OFFSET, resolve};
use tracing::trace;
use web_time::Instant;

use crate::reactive::{Observable, Subscription};
use crate::settle::{DetentSlot, SETTLE_DELAY, SettleTimer};

/// Value snapshot of the controller's detent state, for hosts that want a
/// plain struct instead of per-field observables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdaptationState {
    /// The detent currently applied/rendered.
    pub selected: Detent,
    /// The most recently committed best-fit detent.
    pub primary: Detent,
    /// The shadow detent kept one point below the primary.
    pub secondary: Detent,
    /// Whether content exceeded the height limit, making the full-size
    /// detent available.
    pub is_expandable: bool,
}

type LargeCallback = Rc<RefCell<Option<Box<dyn Fn(bool)>>>>;
type DismissCallback = Rc<RefCell<Option<Box<dyn Fn()>>>>;

/// Owns and mutates the detent state for one presented overlay.
pub struct AdaptationController {
    selected: Observable<Detent>,
    primary: Observable<Detent>,
    secondary: Observable<Detent>,
    is_expandable: Observable<bool>,
    last_height: f64,
    effective_limit: f64,
    options: AdaptiveOptions,
    platform: PlatformContext,
    timer: SettleTimer,
    on_dismiss: DismissCallback,
    on_large_changed: LargeCallback,
    _large_watch: Subscription,
}

impl AdaptationController {
    /// Create a controller for one overlay presentation.
    #[must_use]
    pub fn new(options: AdaptiveOptions, platform: PlatformContext) -> Self {
        let seed = options.default_height;
        let selected = Observable::new(Detent::fixed(seed));
        let primary = Observable::new(Detent::fixed(seed));
        let secondary = Observable::new(Detent::fixed(seed - 1.0));
        let is_expandable = Observable::new(false);

        let on_large_changed: LargeCallback = Rc::new(RefCell::new(None));
        let was_large = Rc::new(Cell::new(false));
        let callback = Rc::clone(&on_large_changed);
        let large_watch = selected.subscribe(move |detent: &Detent| {
            let is_large = detent.is_large();
            if is_large != was_large.get() {
                was_large.set(is_large);
                if let Some(notify) = &*callback.borrow() {
                    notify(is_large);
                }
            }
        });

        let effective_limit = platform.effective_height_limit(&options);
        Self {
            selected,
            primary,
            secondary,
            is_expandable,
            last_height: 0.0,
            effective_limit,
            options,
            platform,
            timer: SettleTimer::new(),
            on_dismiss: Rc::new(RefCell::new(None)),
            on_large_changed,
            _large_watch: large_watch,
        }
    }

    /// Register the dismissal pass-through callback.
    #[must_use]
    pub fn on_dismiss(self, callback: impl Fn() + 'static) -> Self {
        *self.on_dismiss.borrow_mut() = Some(Box::new(callback));
        self
    }

    /// Register the callback fired when the selection enters or leaves the
    /// full-size detent.
    #[must_use]
    pub fn on_large_changed(self, callback: impl Fn(bool) + 'static) -> Self {
        *self.on_large_changed.borrow_mut() = Some(Box::new(callback));
        self
    }

    // ── Measurement input ───────────────────────────────────────────

    /// Absorb a content-height measurement.
    ///
    /// `now` is the host's current frame time; the delayed settle pass is
    /// armed relative to it. Callers guarantee `height` is a non-negative
    /// real number.
    pub fn handle_height_change(&mut self, height: f64, now: Instant) {
        self.last_height = height;
        let limit = self.effective_limit;
        self.is_expandable.set(height > limit);

        let selected = self.selected.get();
        let primary_active = selected == self.primary.get();
        let fresh = resolve(height, limit, 0.0);

        let active_value = if primary_active {
            self.primary.get()
        } else {
            self.secondary.get()
        };
        if fresh == active_value {
            trace!(height, %fresh, "measurement already absorbed");
            return;
        }

        if primary_active {
            self.secondary.set(fresh);
        } else {
            self.primary.set(fresh);
        }
        if !selected.is_large() {
            self.selected.set(fresh);
        }

        let refine = if primary_active {
            DetentSlot::Primary
        } else {
            DetentSlot::Secondary
        };
        self.timer.arm(now, refine);
        trace!(height, %fresh, slot = ?refine, "immediate detent applied, settle pass armed");
    }

    /// Run the delayed settle pass if its deadline has elapsed.
    ///
    /// Hosts call this from their frame loop; [`Self::next_deadline`]
    /// reports when the next call can do work.
    pub fn tick(&mut self, now: Instant) {
        if let Some(slot) = self.timer.fire(now) {
            let shadow = resolve(self.last_height, self.effective_limit, SHADOW_OFFSET);
            match slot {
                DetentSlot::Primary => self.primary.set(shadow),
                DetentSlot::Secondary => self.secondary.set(shadow),
            }
            trace!(%shadow, slot = ?slot, "settle pass applied");
        }
    }

    /// When the pending settle pass becomes due, if one is armed.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.next_deadline()
    }

    // ── Host-driven selection ───────────────────────────────────────

    /// Apply a user-driven detent selection (e.g. a drag transition
    /// committed by the host overlay mechanism).
    pub fn select(&self, detent: Detent) {
        self.selected.set(detent);
    }

    // ── Lifecycle ───────────────────────────────────────────────────

    /// Begin a presentation: cancel any stale settle pass and seed the
    /// detent pair from the configured default height.
    pub fn present(&mut self) {
        self.timer.cancel();
        self.reset_detents();
        trace!("presentation started");
    }

    /// End the presentation: cancel the pending settle pass, fire the
    /// dismissal callback, snap the selection back to the primary detent,
    /// and reset state so the next presentation starts clean.
    pub fn dismiss(&mut self) {
        self.timer.cancel();
        if let Some(notify) = &*self.on_dismiss.borrow() {
            notify();
        }
        self.selected.set(self.primary.get());
        self.reset_detents();
        trace!("presentation dismissed");
    }

    fn reset_detents(&mut self) {
        let seed = self.options.default_height;
        self.last_height = 0.0;
        self.is_expandable.set(false);
        self.primary.set(Detent::fixed(seed));
        self.secondary.set(Detent::fixed(seed - 1.0));
        self.selected.set(Detent::fixed(seed));
    }

    // ── State access ────────────────────────────────────────────────

    /// The detent currently applied/rendered.
    #[must_use]
    pub fn selected(&self) -> Detent {
        self.selected.get()
    }

    /// The most recently committed best-fit detent.
    #[must_use]
    pub fn primary(&self) -> Detent {
        self.primary.get()
    }

    /// The shadow detent kept one point below the primary.
    #[must_use]
    pub fn secondary(&self) -> Detent {
        self.secondary.get()
    }

    /// Whether the last measurement exceeded the height limit.
    #[must_use]
    pub fn is_expandable(&self) -> bool {
        self.is_expandable.get()
    }

    /// Whether the full-size detent is currently selected.
    #[must_use]
    pub fn is_large(&self) -> bool {
        self.selected.get().is_large()
    }

    /// The most recent raw measurement.
    #[must_use]
    pub fn last_height(&self) -> f64 {
        self.last_height
    }

    /// The height cap actually enforced for this presentation.
    #[must_use]
    pub fn effective_height_limit(&self) -> f64 {
        self.effective_limit
    }

    /// The options this presentation was created with.
    #[must_use]
    pub fn options(&self) -> &AdaptiveOptions {
        &self.options
    }

    /// The injected platform context.
    #[must_use]
    pub fn platform(&self) -> &PlatformContext {
        &self.platform
    }

    /// Value snapshot of the full detent state.
    #[must_use]
    pub fn state(&self) -> AdaptationState {
        AdaptationState {
            selected: self.selected.get(),
            primary: self.primary.get(),
            secondary: self.secondary.get(),
            is_expandable: self.is_expandable.get(),
        }
    }

    // ── Observables for the presentation layer ──────────────────────

    /// Shared handle to the selected detent, for change subscription and
    /// bidirectional binding.
    #[must_use]
    pub fn observe_selected(&self) -> Observable<Detent> {
        self.selected.clone()
    }

    /// Shared handle to the primary detent.
    #[must_use]
    pub fn observe_primary(&self) -> Observable<Detent> {
        self.primary.clone()
    }

    /// Shared handle to the secondary detent.
    #[must_use]
    pub fn observe_secondary(&self) -> Observable<Detent> {
        self.secondary.clone()
    }

    /// Shared handle to the expandability flag.
    #[must_use]
    pub fn observe_expandable(&self) -> Observable<bool> {
        self.is_expandable.clone()
    }
}

impl std::fmt::Debug for AdaptationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdaptationController")
            .field("state", &self.state())
            .field("last_height", &self.last_height)
            .field("effective_limit", &self.effective_limit)
            .field("settle_armed", &self.timer.is_armed())
            .finish()
    }
}
