#![forbid(unsafe_code)]

//! Bidirectional detent synchronization.
//!
//! A host overlay mechanism typically owns its own notion of the currently
//! selected detent (the value its drag gesture mutates). [`DetentSync`]
//! keeps that host value and the controller's selected detent equal in
//! both directions, with a re-entrancy guard so neither side's
//! notification loops back into the other.
//!
//! Drop the `DetentSync` to disconnect both directions; this is how a
//! surface tears its binding down when the overlay is dismissed.

use std::cell::Cell;
use std::rc::Rc;

use adaptui_core::Detent;

use super::observable::{Observable, Subscription};

/// Two-way connection between the controller's selected detent and a
/// host-owned detent value.
///
/// On construction the host side adopts the controller's current
/// selection; afterwards a change to either side propagates to the other.
pub struct DetentSync {
    _controller_to_host: Subscription,
    _host_to_controller: Subscription,
}

impl DetentSync {
    /// Connect `controller_selected` and `host_selected`.
    #[must_use]
    pub fn new(
        controller_selected: &Observable<Detent>,
        host_selected: &Observable<Detent>,
    ) -> Self {
        host_selected.set(controller_selected.get());

        let syncing = Rc::new(Cell::new(false));

        let host = host_selected.clone();
        let guard = Rc::clone(&syncing);
        let controller_to_host = controller_selected.subscribe(move |detent| {
            if !guard.get() {
                guard.set(true);
                host.set(*detent);
                guard.set(false);
            }
        });

        let controller = controller_selected.clone();
        let guard = Rc::clone(&syncing);
        let host_to_controller = host_selected.subscribe(move |detent| {
            if !guard.get() {
                guard.set(true);
                controller.set(*detent);
                guard.set(false);
            }
        });

        Self {
            _controller_to_host: controller_to_host,
            _host_to_controller: host_to_controller,
        }
    }
}

impl std::fmt::Debug for DetentSync {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetentSync").finish()
    }
}
