//! Terminal User Interface (TUI) for the interactive stack visualizer

pub mod app;
pub mod stack_widget;
pub mod theme;

pub use app::TuiApp;
pub use theme::Theme;
