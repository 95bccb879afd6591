use crate::animation::{AnimationMode, Speed};
use crate::indicators::Indicator;
use crate::stack::{TypedValue, ValueKind};

use super::ThemeMode;

/// Read-only view of a session for renderers.
#[derive(Debug, Clone)]
pub struct SessionSnapshot<'a> {
    pub elements: &'a [TypedValue],
    pub locked_kind: Option<ValueKind>,
    pub capacity: usize,
    pub animation: AnimationSnapshot<'a>,
    pub history: Vec<&'a str>,
    pub peek: Indicator,
    pub push_arrow: Indicator,
    pub selected_kind: ValueKind,
    pub theme_mode: ThemeMode,
    pub speed: Speed,
}

#[derive(Debug, Clone)]
pub struct AnimationSnapshot<'a> {
    pub mode: AnimationMode,
    pub subject: Option<&'a TypedValue>,
    pub progress: u32,
    pub total_steps: u32,
    pub opacity: f32,
}

impl SessionSnapshot<'_> {
    /// Index of the element being faded in or out, if an animation is running.
    ///
    /// Both animations act on the top of the stack: a pushed value is already
    /// stored and a pop candidate has not been removed yet.
    pub fn animated_slot(&self) -> Option<usize> {
        match self.animation.mode {
            AnimationMode::Idle => None,
            AnimationMode::Pushing | AnimationMode::Popping => self.elements.len().checked_sub(1),
        }
    }

    /// Opacity to draw the element at `slot` with.
    pub fn opacity_at(&self, slot: usize) -> f32 {
        if self.animated_slot() == Some(slot) {
            self.animation.opacity
        } else {
            1.0
        }
    }
}
