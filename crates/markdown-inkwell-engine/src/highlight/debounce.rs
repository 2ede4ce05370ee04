//! Decides when a re-highlight actually runs.
//!
//! Two states: idle, or one pending deadline. Rapid edits keep pushing the
//! deadline out so a burst of keystrokes coalesces into a single pass.
//! Time is injected by the host; this type owns no timer and spawns no
//! thread, it only answers "now, later, or not yet".

use std::time::{Duration, Instant};

use crate::config::HighlightConfig;

/// What the host should do about highlighting after an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Small document: highlight synchronously, right now.
    Immediate,
    /// Large document: arrange a callback at (or after) the deadline and
    /// then call [`Debouncer::fire`].
    Scheduled(Instant),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Pending { deadline: Instant },
}

/// Per-session debounce state machine.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    small_doc_limit: usize,
    state: State,
}

impl Debouncer {
    pub fn new(config: &HighlightConfig) -> Self {
        Self {
            delay: Duration::from_millis(config.delay_ms),
            small_doc_limit: config.small_doc_limit,
            state: State::Idle,
        }
    }

    /// Register an edit. Resets any pending deadline (supersede, never
    /// queue: at most one highlight is ever in flight).
    pub fn on_edit(&mut self, now: Instant, doc_len: usize) -> Trigger {
        if doc_len <= self.small_doc_limit {
            self.state = State::Idle;
            return Trigger::Immediate;
        }
        let deadline = now + self.delay;
        self.state = State::Pending { deadline };
        Trigger::Scheduled(deadline)
    }

    /// Host timer callback. Returns true exactly when a pending deadline
    /// has elapsed; a stale or cancelled timer is a no-op.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.state {
            State::Pending { deadline } if now >= deadline => {
                self.state = State::Idle;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending highlight (editor teardown, document switch).
    pub fn cancel(&mut self) {
        self.state = State::Idle;
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, State::Pending { .. })
    }

    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            State::Pending { deadline } => Some(deadline),
            State::Idle => None,
        }
    }
}
