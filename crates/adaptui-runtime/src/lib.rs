#![forbid(unsafe_code)]

//! Runtime state for AdaptUI: the reactive store and the adaptation
//! controller.
//!
//! The controller owns one [`AdaptationState`] per presented overlay and
//! serializes a stream of content-height measurements into stable detent
//! state using a two-phase settle protocol. The presentation layer
//! subscribes to the controller's observables for change notification and
//! pushes user-driven detent selection back through an explicit setter.
//!
//! All state lives on a single cooperative scheduling context; nothing in
//! this crate spawns threads. The one deferred operation — the settle
//! pass — is a deadline the host pumps from its frame loop via
//! [`AdaptationController::tick`].

pub mod controller;
pub mod reactive;
pub mod settle;

pub use controller::{AdaptationController, AdaptationState};
pub use reactive::{DetentSync, Observable, Subscription};
pub use settle::{DetentSlot, SETTLE_DELAY, SettleTimer};
