//! Common types re-exported for convenience.

pub use crate::animation::{AnimationCompletion, AnimationMode, Speed};
pub use crate::config::VisualizerConfig;
pub use crate::history::HistoryLog;
pub use crate::session::{CommandError, Session, SessionSnapshot, ThemeMode};
pub use crate::stack::{StackEngine, TypedValue, ValueKind};
