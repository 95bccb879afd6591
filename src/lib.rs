pub mod animation;
pub mod config;
pub mod history;
pub mod indicators;
pub mod input_handler;
pub mod prelude;
pub mod session;
pub mod stack;
pub mod tui;
pub mod visualizer;
