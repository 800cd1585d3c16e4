#![forbid(unsafe_code)]

//! The settle timer: a delayed, cancellable-by-superseding deadline.
//!
//! After the immediate phase of a height change, a follow-up pass rewrites
//! the previously-active detent slot one point below the true measured
//! height. That pass runs after [`SETTLE_DELAY`]; running it immediately
//! would make both detents jump in the same frame and flicker during
//! interactive drags.
//!
//! The timer is not a thread or a background task. It holds at most one
//! pending deadline; re-arming supersedes the previous one, and the host
//! pumps [`SettleTimer::fire`] from its frame loop. Cancellation clears
//! the pending deadline outright, so a deadline armed before dismissal can
//! never write into a torn-down presentation.

use std::time::Duration;
use web_time::Instant;

/// Delay between the immediate detent update and the settle pass.
pub const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Which detent slot a settle pass should rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetentSlot {
    /// The most recently committed best-fit detent.
    Primary,
    /// The shadow detent kept one point below the primary.
    Secondary,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    deadline: Instant,
    slot: DetentSlot,
}

/// Single-slot deadline store for the settle pass.
#[derive(Debug, Default)]
pub struct SettleTimer {
    pending: Option<Pending>,
}

impl SettleTimer {
    /// Create an idle timer.
    #[must_use]
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Arm a settle pass for `slot`, due [`SETTLE_DELAY`] after `now`.
    /// Any previously pending pass is superseded.
    pub fn arm(&mut self, now: Instant, slot: DetentSlot) {
        self.pending = Some(Pending {
            deadline: now + SETTLE_DELAY,
            slot,
        });
    }

    /// Drop the pending pass, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a pass is waiting to fire.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// The instant the pending pass becomes due, if any. Hosts can use
    /// this to sleep precisely instead of polling.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.deadline)
    }

    /// Consume and return the pending slot if its deadline has passed.
    pub fn fire(&mut self, now: Instant) -> Option<DetentSlot> {
        match self.pending {
            Some(p) if now >= p.deadline => {
                self.pending = None;
                Some(p.slot)
            }
            _ => None,
        }
    }
}
