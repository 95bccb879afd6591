//! Time-boxed highlight flags for the renderer.

use std::time::Duration;

use crate::config::{DEFAULT_PEEK_DURATION, DEFAULT_PUSH_ARROW_DURATION};

/// A flag that stays up until its deadline. Re-arming replaces the deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Indicator {
    deadline: Option<Duration>,
    slot: usize,
}

impl Indicator {
    fn arm(&mut self, now: Duration, lifetime: Duration, slot: usize) {
        self.deadline = Some(now + lifetime);
        self.slot = slot;
    }

    fn expire(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Stack position the indicator points at, when active.
    pub fn slot(&self) -> Option<usize> {
        self.deadline.map(|_| self.slot)
    }
}

#[derive(Debug, Clone)]
pub struct TransientIndicators {
    peek: Indicator,
    push_arrow: Indicator,
    peek_duration: Duration,
    push_arrow_duration: Duration,
}

impl Default for TransientIndicators {
    fn default() -> Self {
        Self::new(DEFAULT_PEEK_DURATION, DEFAULT_PUSH_ARROW_DURATION)
    }
}

impl TransientIndicators {
    pub fn new(peek_duration: Duration, push_arrow_duration: Duration) -> Self {
        Self {
            peek: Indicator::default(),
            push_arrow: Indicator::default(),
            peek_duration,
            push_arrow_duration,
        }
    }

    pub fn arm_peek(&mut self, now: Duration, slot: usize) {
        self.peek.arm(now, self.peek_duration, slot);
    }

    pub fn arm_push_arrow(&mut self, now: Duration, slot: usize) {
        self.push_arrow.arm(now, self.push_arrow_duration, slot);
    }

    /// Drops every indicator whose deadline has passed. Returns true if any changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let peek_expired = self.peek.expire(now);
        let arrow_expired = self.push_arrow.expire(now);
        peek_expired || arrow_expired
    }

    pub fn clear(&mut self) {
        self.peek = Indicator::default();
        self.push_arrow = Indicator::default();
    }

    pub fn peek(&self) -> Indicator {
        self.peek
    }

    pub fn push_arrow(&self) -> Indicator {
        self.push_arrow
    }

    pub fn is_peek_active(&self) -> bool {
        self.peek.is_active()
    }

    pub fn is_push_arrow_active(&self) -> bool {
        self.push_arrow.is_active()
    }
}
