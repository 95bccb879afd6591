use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 10;
pub const DEFAULT_SPEED: u8 = 5;

const MIN_STEP_DELAY_MS: u64 = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpeedError {
    #[error("Speed must be between {min} and {max}, got {value}")]
    OutOfRange { value: i64, min: u8, max: u8 },
    #[error("Speed must be a number, got {input:?}")]
    NotANumber { input: String },
}

/// Animation speed level, 1 (slowest) to 10 (fastest).
#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord)]
pub struct Speed(u8);

impl Default for Speed {
    fn default() -> Self {
        Speed(DEFAULT_SPEED)
    }
}

impl Speed {
    pub fn level(&self) -> u8 {
        self.0
    }

    /// Delay between two animation steps: `max(10, 50 - 4 * level)` milliseconds.
    pub fn step_delay(&self) -> Duration {
        let delay = 50u64.saturating_sub(4 * u64::from(self.0));
        Duration::from_millis(delay.max(MIN_STEP_DELAY_MS))
    }

    pub fn faster(&self) -> Self {
        Speed((self.0 + 1).min(MAX_SPEED))
    }

    pub fn slower(&self) -> Self {
        Speed(self.0.saturating_sub(1).max(MIN_SPEED))
    }
}

impl TryFrom<i64> for Speed {
    type Error = SpeedError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < i64::from(MIN_SPEED) || value > i64::from(MAX_SPEED) {
            return Err(SpeedError::OutOfRange {
                value,
                min: MIN_SPEED,
                max: MAX_SPEED,
            });
        }
        Ok(Speed(value as u8))
    }
}

impl FromStr for Speed {
    type Err = SpeedError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let value = input
            .trim()
            .parse::<i64>()
            .map_err(|_| SpeedError::NotANumber {
                input: input.to_string(),
            })?;
        Speed::try_from(value)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
