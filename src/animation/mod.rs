//! Tick-driven push/pop transitions.
//!
//! The controller never looks at a clock. Each call to [`AnimationController::tick`]
//! advances the progress counter by one step; whoever owns the controller decides
//! when a tick is due using [`AnimationController::step_delay`].

mod speed;

use std::f32::consts::FRAC_PI_2;
use std::time::Duration;

use thiserror::Error;

use crate::config::DEFAULT_ANIMATION_STEPS;
use crate::stack::TypedValue;

pub use speed::{Speed, SpeedError, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationMode {
    Idle,
    Pushing,
    Popping,
}

/// The operation currently being animated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingOperation {
    Idle,
    PendingPush(TypedValue),
    PendingPop(TypedValue),
}

/// Emitted by the tick that finishes an animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationCompletion {
    Pushed(TypedValue),
    /// The pop candidate may now be removed from the stack.
    Popped(TypedValue),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    #[error("An animation is already in progress")]
    Busy,
}

#[derive(Debug, Clone)]
pub struct AnimationController {
    pending: PendingOperation,
    progress: u32,
    total_steps: u32,
    speed: Speed,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new(DEFAULT_ANIMATION_STEPS, Speed::default())
    }
}

impl AnimationController {
    pub fn new(total_steps: u32, speed: Speed) -> Self {
        Self {
            pending: PendingOperation::Idle,
            progress: 0,
            total_steps: total_steps.max(1),
            speed,
        }
    }

    pub fn mode(&self) -> AnimationMode {
        match self.pending {
            PendingOperation::Idle => AnimationMode::Idle,
            PendingOperation::PendingPush(_) => AnimationMode::Pushing,
            PendingOperation::PendingPop(_) => AnimationMode::Popping,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.pending == PendingOperation::Idle
    }

    pub fn pending(&self) -> &PendingOperation {
        &self.pending
    }

    /// The value being animated.
    pub fn subject(&self) -> Option<&TypedValue> {
        match &self.pending {
            PendingOperation::Idle => None,
            PendingOperation::PendingPush(value) | PendingOperation::PendingPop(value) => {
                Some(value)
            }
        }
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn step_delay(&self) -> Duration {
        self.speed.step_delay()
    }

    /// Applies from the next tick on; steps already taken are not rescaled.
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    pub fn start_push(&mut self, value: TypedValue) -> Result<(), AnimationError> {
        self.start(PendingOperation::PendingPush(value))
    }

    pub fn start_pop(&mut self, candidate: TypedValue) -> Result<(), AnimationError> {
        self.start(PendingOperation::PendingPop(candidate))
    }

    fn start(&mut self, operation: PendingOperation) -> Result<(), AnimationError> {
        if !self.is_idle() {
            return Err(AnimationError::Busy);
        }
        self.pending = operation;
        self.progress = 0;
        Ok(())
    }

    /// Advances one step. Returns the completion on the step that reaches `total_steps`.
    pub fn tick(&mut self) -> Option<AnimationCompletion> {
        if self.is_idle() {
            return None;
        }

        self.progress += 1;
        if self.progress < self.total_steps {
            return None;
        }

        self.progress = 0;
        match std::mem::replace(&mut self.pending, PendingOperation::Idle) {
            PendingOperation::PendingPush(value) => Some(AnimationCompletion::Pushed(value)),
            PendingOperation::PendingPop(value) => Some(AnimationCompletion::Popped(value)),
            PendingOperation::Idle => None,
        }
    }

    /// Opacity of the animated element in `[0, 1]`.
    ///
    /// Pushes fade in with a sine ease-out, pops fade out linearly.
    pub fn opacity(&self) -> f32 {
        let fraction = self.progress as f32 / self.total_steps as f32;
        match self.mode() {
            AnimationMode::Idle => 1.0,
            AnimationMode::Pushing => (fraction * FRAC_PI_2).sin(),
            AnimationMode::Popping => 1.0 - fraction,
        }
    }
}
