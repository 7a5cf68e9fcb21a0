//! Hover-intent detection.
//!
//! A block counts as hovered "with intent" only after the pointer has stayed
//! over it for [`HOVER_DELAY`]. The tracker is a plain state machine: callers
//! feed it pointer events together with the current [`Instant`] and poll it
//! with [`HoverIntent::tick`]. No timers or threads are involved.
//!
//! ```text
//!            enter(id)               tick(now >= deadline)
//!   Idle ───────────────▶ Pending ─────────────────────────▶ Confirmed
//!    ▲                      │  │                                 │
//!    │   leave(id)          │  │ enter(other)                    │
//!    │   check(false)       │  └──────────▶ Pending(other) ◀─────┘ enter(other)
//!    └──────────────────────┴──────────────────────────────────────┘ leave / check(false)
//! ```

use std::time::{Duration, Instant};

/// Dwell time before a hover is confirmed.
pub const HOVER_DELAY: Duration = Duration::from_millis(300);

/// Current hover state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Pending { block_id: String, deadline: Instant },
    Confirmed { block_id: String },
}

/// Hover-intent tracker for a set of blocks.
#[derive(Debug, Clone)]
pub struct HoverIntent {
    delay: Duration,
    state: HoverState,
}

impl Default for HoverIntent {
    fn default() -> Self {
        Self::new(HOVER_DELAY)
    }
}

impl HoverIntent {
    pub fn new(delay: Duration) -> Self {
        HoverIntent {
            delay,
            state: HoverState::Idle,
        }
    }

    pub fn state(&self) -> &HoverState {
        &self.state
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Pointer entered a block. Starts a fresh dwell, discarding any other.
    pub fn pointer_enter(&mut self, block_id: &str, now: Instant) {
        self.state = HoverState::Pending {
            block_id: block_id.to_string(),
            deadline: now + self.delay,
        };
    }

    /// Pointer left a block. Cancels the dwell if it targeted that block.
    pub fn pointer_leave(&mut self, block_id: &str) {
        if self.target() == Some(block_id) {
            self.state = HoverState::Idle;
        }
    }

    /// Global pointer check: if the pointer is over no tracked block, reset.
    ///
    /// Guards against stale hovers when a block is removed or reflowed and
    /// never delivers its leave event.
    pub fn pointer_check(&mut self, over_any_block: bool) {
        if !over_any_block {
            self.state = HoverState::Idle;
        }
    }

    /// Advances the clock, confirming a pending hover whose deadline passed.
    ///
    /// Returns the id of a block confirmed by this call.
    pub fn tick(&mut self, now: Instant) -> Option<&str> {
        let expired = match &self.state {
            HoverState::Pending { block_id, deadline } if now >= *deadline => Some(block_id.clone()),
            _ => None,
        };

        let block_id = expired?;
        self.state = HoverState::Confirmed { block_id };
        self.confirmed()
    }

    /// Block with a confirmed hover, if any.
    pub fn confirmed(&self) -> Option<&str> {
        match &self.state {
            HoverState::Confirmed { block_id } => Some(block_id),
            _ => None,
        }
    }

    /// Block still waiting out the delay, if any.
    pub fn pending(&self) -> Option<&str> {
        match &self.state {
            HoverState::Pending { block_id, .. } => Some(block_id),
            _ => None,
        }
    }

    fn target(&self) -> Option<&str> {
        match &self.state {
            HoverState::Idle => None,
            HoverState::Pending { block_id, .. } | HoverState::Confirmed { block_id } => Some(block_id),
        }
    }
}
