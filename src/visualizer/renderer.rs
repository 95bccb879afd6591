use crate::session::Session;
use crate::visualizer::display::{frame_text, StackDisplay};

pub trait SessionRenderer {
    fn render(&mut self, session: &Session, message: Option<&str>);

    /// Whether intermediate animation frames should be drawn.
    fn animates(&self) -> bool;
}

pub struct PlainRenderer {
    display: StackDisplay,
    animate: bool,
}

impl PlainRenderer {
    pub fn new(animate: bool) -> Self {
        Self {
            display: StackDisplay::new(),
            animate,
        }
    }
}

impl SessionRenderer for PlainRenderer {
    fn render(&mut self, session: &Session, message: Option<&str>) {
        self.display.render_session(&session.snapshot(), message);
    }

    fn animates(&self) -> bool {
        self.animate
    }
}

/// Keeps every frame in memory instead of drawing it.
#[derive(Default)]
pub struct RecordingRenderer {
    frames: Vec<String>,
    animate: bool,
}

impl RecordingRenderer {
    pub fn new(animate: bool) -> Self {
        Self {
            frames: Vec::new(),
            animate,
        }
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl SessionRenderer for RecordingRenderer {
    fn render(&mut self, session: &Session, message: Option<&str>) {
        self.frames.push(frame_text(&session.snapshot(), message));
    }

    fn animates(&self) -> bool {
        self.animate
    }
}
