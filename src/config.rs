//! Tunable constants of a visualizer session.

use std::time::Duration;

use crate::animation::Speed;

pub const DEFAULT_CAPACITY: usize = 20;
pub const DEFAULT_HISTORY_SIZE: usize = 10;
pub const DEFAULT_ANIMATION_STEPS: u32 = 25;
pub const DEFAULT_PEEK_DURATION: Duration = Duration::from_millis(3000);
pub const DEFAULT_PUSH_ARROW_DURATION: Duration = Duration::from_millis(2000);
pub const MAX_STRING_LENGTH: usize = 20;

/// Text shown in an untouched input field. Submitting it counts as empty input.
pub const PLACEHOLDER_TEXT: &str = "Enter value";

/// Session configuration
#[derive(Clone, Debug)]
pub struct VisualizerConfig {
    pub capacity: usize,
    pub history_size: usize,
    pub animation_steps: u32,
    pub peek_duration: Duration,
    pub push_arrow_duration: Duration,
    pub speed: Speed,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            history_size: DEFAULT_HISTORY_SIZE,
            animation_steps: DEFAULT_ANIMATION_STEPS,
            peek_duration: DEFAULT_PEEK_DURATION,
            push_arrow_duration: DEFAULT_PUSH_ARROW_DURATION,
            speed: Speed::default(),
        }
    }
}
