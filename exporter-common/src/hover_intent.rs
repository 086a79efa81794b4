//! Hover-intent state machine
//!
//! Opens immediately, closes after a delay, and cancels the pending close when
//! the pointer comes back before the deadline. Pure data: the caller owns the
//! clock and the timer, and feeds timer completions back with the token it was
//! handed when the close was scheduled.

use tracing::{debug, trace};

/// Identifies one scheduled close. A completion carrying any other token is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CloseToken(u64);

/// Where the machine is in the open/close cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverPhase {
    Closed,
    Open,
    /// Still open, closing at `deadline_ms` unless the pointer returns
    PendingClose { token: CloseToken, deadline_ms: u64 },
}

/// Timer work the caller must perform after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEffect {
    None,
    /// Start a timer; when it fires call [`HoverIntent::close_elapsed`] with `token`
    ScheduleClose { token: CloseToken, delay_ms: u64 },
    /// Cancel the timer started for `token`
    CancelClose { token: CloseToken },
}

#[derive(Debug, Clone, PartialEq)]
pub struct HoverIntent {
    phase: HoverPhase,
    close_delay_ms: u64,
    next_token: u64,
}

impl HoverIntent {
    pub fn new(close_delay_ms: u64) -> Self {
        Self {
            phase: HoverPhase::Closed,
            close_delay_ms,
            next_token: 0,
        }
    }

    pub fn phase(&self) -> HoverPhase {
        self.phase
    }

    /// True while open, including while a close is pending.
    pub fn is_open(&self) -> bool {
        !matches!(self.phase, HoverPhase::Closed)
    }

    pub fn close_delay_ms(&self) -> u64 {
        self.close_delay_ms
    }

    /// Trigger activation (click or keyboard). Opens with no delay.
    pub fn activate(&mut self) -> HoverEffect {
        self.open_now()
    }

    /// Pointer entered the trigger or the panel.
    pub fn pointer_enter(&mut self) -> HoverEffect {
        self.open_now()
    }

    /// Pointer left the trigger or the panel.
    ///
    /// A close that is already pending keeps its original deadline.
    pub fn pointer_leave(&mut self, now_ms: u64) -> HoverEffect {
        match self.phase {
            HoverPhase::Closed | HoverPhase::PendingClose { .. } => HoverEffect::None,
            HoverPhase::Open => {
                let token = self.issue_token();
                let deadline_ms = now_ms.saturating_add(self.close_delay_ms);
                self.phase = HoverPhase::PendingClose { token, deadline_ms };
                debug!(?token, deadline_ms, "Scheduling hover-intent close");
                HoverEffect::ScheduleClose {
                    token,
                    delay_ms: self.close_delay_ms,
                }
            }
        }
    }

    /// Timer for `token` fired. Returns true if this closed the panel.
    pub fn close_elapsed(&mut self, token: CloseToken) -> bool {
        match self.phase {
            HoverPhase::PendingClose { token: pending, .. } if pending == token => {
                debug!(?token, "Hover-intent close elapsed");
                self.phase = HoverPhase::Closed;
                true
            }
            _ => {
                trace!(?token, phase = ?self.phase, "Ignoring stale close timer");
                false
            }
        }
    }

    /// Deadline-driven alternative to [`close_elapsed`](Self::close_elapsed)
    /// for callers that poll a clock instead of spawning timers.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.phase {
            HoverPhase::PendingClose { token, deadline_ms } if now_ms >= deadline_ms => {
                self.close_elapsed(token)
            }
            _ => false,
        }
    }

    /// Close synchronously, bypassing the delay.
    pub fn close_now(&mut self) -> HoverEffect {
        let effect = self.cancel_pending();
        self.phase = HoverPhase::Closed;
        effect
    }

    fn open_now(&mut self) -> HoverEffect {
        let effect = self.cancel_pending();
        self.phase = HoverPhase::Open;
        effect
    }

    fn cancel_pending(&self) -> HoverEffect {
        match self.phase {
            HoverPhase::PendingClose { token, .. } => HoverEffect::CancelClose { token },
            _ => HoverEffect::None,
        }
    }

    fn issue_token(&mut self) -> CloseToken {
        self.next_token += 1;
        CloseToken(self.next_token)
    }
}
