//! The visualizer session: one owner for the stack, its history, the animation
//! state and the indicator timers, plus the UI selections that go with them.

pub mod snapshot;

#[cfg(test)]
mod tests;

use std::fmt;
use std::time::Duration;

use log::{debug, info, warn};
use thiserror::Error;

use crate::animation::{AnimationCompletion, AnimationController, AnimationError, Speed, SpeedError};
use crate::config::VisualizerConfig;
use crate::history::HistoryLog;
use crate::indicators::TransientIndicators;
use crate::stack::{ClearError, PeekError, PopError, PushError, StackEngine, TypedValue, ValueKind};

pub use snapshot::{AnimationSnapshot, SessionSnapshot};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error(transparent)]
    Push(#[from] PushError),
    #[error(transparent)]
    Pop(#[from] PopError),
    #[error(transparent)]
    Peek(#[from] PeekError),
    #[error(transparent)]
    Clear(#[from] ClearError),
    #[error(transparent)]
    InvalidSpeed(#[from] SpeedError),
    #[error("Please wait for the current animation to finish")]
    AnimationInProgress,
}

impl From<AnimationError> for CommandError {
    fn from(error: AnimationError) -> Self {
        match error {
            AnimationError::Busy => CommandError::AnimationInProgress,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

pub struct Session {
    stack: StackEngine,
    history: HistoryLog,
    animation: AnimationController,
    indicators: TransientIndicators,
    selected_kind: ValueKind,
    theme_mode: ThemeMode,
    next_step_at: Option<Duration>,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_config(VisualizerConfig::default())
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: VisualizerConfig) -> Self {
        Self {
            stack: StackEngine::with_capacity(config.capacity),
            history: HistoryLog::with_max_size(config.history_size),
            animation: AnimationController::new(config.animation_steps, config.speed),
            indicators: TransientIndicators::new(config.peek_duration, config.push_arrow_duration),
            selected_kind: ValueKind::Integer,
            theme_mode: ThemeMode::Light,
            next_step_at: None,
        }
    }

    pub fn stack(&self) -> &StackEngine {
        &self.stack
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn animation(&self) -> &AnimationController {
        &self.animation
    }

    pub fn indicators(&self) -> &TransientIndicators {
        &self.indicators
    }

    pub fn selected_kind(&self) -> ValueKind {
        self.selected_kind
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn speed(&self) -> Speed {
        self.animation.speed()
    }

    pub fn is_animating(&self) -> bool {
        !self.animation.is_idle()
    }

    /// When the next animation step is due, if one is running.
    pub fn next_step_at(&self) -> Option<Duration> {
        self.next_step_at
    }

    pub fn push(
        &mut self,
        raw: &str,
        kind: ValueKind,
        now: Duration,
    ) -> Result<TypedValue, CommandError> {
        self.ensure_idle()?;
        let value = self.stack.try_push(raw, kind)?;
        self.animation.start_push(value.clone())?;
        self.schedule_first_step(now);

        info!("pushed {} ({})", value, kind);
        self.history.append(format!("Pushed: {}", value));
        if let Some(slot) = self.stack.top_slot() {
            self.indicators.arm_push_arrow(now, slot);
        }
        Ok(value)
    }

    /// Pushes using the currently selected kind.
    pub fn push_selected(&mut self, raw: &str, now: Duration) -> Result<TypedValue, CommandError> {
        self.push(raw, self.selected_kind, now)
    }

    /// Starts a pop animation. The returned candidate stays on the stack until
    /// the animation completes in a later [`Session::tick`].
    pub fn pop(&mut self, now: Duration) -> Result<TypedValue, CommandError> {
        self.ensure_idle()?;
        let candidate = self.stack.try_pop()?;
        self.animation.start_pop(candidate.clone())?;
        self.schedule_first_step(now);

        debug!("pop of {} scheduled", candidate);
        Ok(candidate)
    }

    pub fn peek(&mut self, now: Duration) -> Result<TypedValue, CommandError> {
        let top = self.stack.peek()?.clone();
        self.history.append(format!("Peeked: {}", top));
        if let Some(slot) = self.stack.top_slot() {
            self.indicators.arm_peek(now, slot);
        }
        Ok(top)
    }

    /// Empties the stack along with the history and indicators.
    pub fn clear(&mut self) -> Result<usize, CommandError> {
        self.ensure_idle()?;
        let removed = self.stack.clear()?;
        self.history.clear();
        self.indicators.clear();
        info!("cleared {} elements", removed);
        Ok(removed)
    }

    pub fn set_speed(&mut self, level: i64) -> Result<Speed, CommandError> {
        let speed = Speed::try_from(level)?;
        self.animation.set_speed(speed);
        debug!("animation speed set to {} ({:?} per step)", speed, speed.step_delay());
        Ok(speed)
    }

    pub fn faster(&mut self) -> Speed {
        let speed = self.animation.speed().faster();
        self.animation.set_speed(speed);
        speed
    }

    pub fn slower(&mut self) -> Speed {
        let speed = self.animation.speed().slower();
        self.animation.set_speed(speed);
        speed
    }

    pub fn select_kind(&mut self, kind: ValueKind) {
        self.selected_kind = kind;
    }

    /// Moves the kind selector to the next kind. A locked stack keeps its kind.
    pub fn cycle_kind(&mut self) -> ValueKind {
        self.selected_kind = match self.stack.locked_kind() {
            Some(locked) => locked,
            None => self.selected_kind.next(),
        };
        self.selected_kind
    }

    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.theme_mode = mode;
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme_mode = self.theme_mode.toggled();
        self.theme_mode
    }

    /// Expires indicators and runs every animation step due at `now`.
    ///
    /// Returns the completion if the running animation finished.
    pub fn tick(&mut self, now: Duration) -> Option<AnimationCompletion> {
        self.indicators.tick(now);

        while let Some(due) = self.next_step_at {
            if now < due {
                break;
            }
            match self.animation.tick() {
                Some(completion) => {
                    self.next_step_at = None;
                    self.complete(&completion);
                    return Some(completion);
                }
                None => self.next_step_at = Some(due + self.animation.step_delay()),
            }
        }
        None
    }

    /// Ticks until the running animation has finished. Returns the time reached.
    pub fn settle(&mut self, mut now: Duration) -> Duration {
        while let Some(due) = self.next_step_at {
            now = now.max(due);
            self.tick(now);
        }
        now
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            elements: self.stack.elements(),
            locked_kind: self.stack.locked_kind(),
            capacity: self.stack.capacity(),
            animation: AnimationSnapshot {
                mode: self.animation.mode(),
                subject: self.animation.subject(),
                progress: self.animation.progress(),
                total_steps: self.animation.total_steps(),
                opacity: self.animation.opacity(),
            },
            history: self.history.entries().collect(),
            peek: self.indicators.peek(),
            push_arrow: self.indicators.push_arrow(),
            selected_kind: self.selected_kind,
            theme_mode: self.theme_mode,
            speed: self.animation.speed(),
        }
    }

    // Private helper methods

    fn ensure_idle(&self) -> Result<(), CommandError> {
        if self.animation.is_idle() {
            Ok(())
        } else {
            Err(CommandError::AnimationInProgress)
        }
    }

    fn schedule_first_step(&mut self, now: Duration) {
        self.next_step_at = Some(now + self.animation.step_delay());
    }

    fn complete(&mut self, completion: &AnimationCompletion) {
        match completion {
            AnimationCompletion::Pushed(value) => debug!("push of {} finished", value),
            AnimationCompletion::Popped(candidate) => match self.stack.commit_pop() {
                Ok(removed) => {
                    if &removed != candidate {
                        warn!("popped {} but {} was animated", removed, candidate);
                    }
                    info!("popped {}", removed);
                    self.history.append(format!("Popped: {}", removed));
                }
                Err(error) => warn!("pop of {} could not be applied: {}", candidate, error),
            },
        }
    }
}
