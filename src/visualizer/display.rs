use std::fmt::Write;

use termion::{clear, cursor};

use crate::animation::AnimationMode;
use crate::session::SessionSnapshot;

const CELL_WIDTH: usize = 20;
const MARGIN: &str = "        ";
const PUSH_ARROW: &str = "  ──▶  ";

/// Shade used to pad an element that is fading in or out.
fn shade(opacity: f32) -> char {
    if opacity < 0.25 {
        '░'
    } else if opacity < 0.5 {
        '▒'
    } else if opacity < 0.75 {
        '▓'
    } else {
        ' '
    }
}

/// Builds the plain text picture of a session: header, stack, history and a message line.
pub fn frame_text(snapshot: &SessionSnapshot, message: Option<&str>) -> String {
    let mut frame = String::with_capacity(2048);

    let lock = match snapshot.locked_kind {
        Some(kind) => format!("locked to {}", kind),
        None => format!("next push: {}", snapshot.selected_kind),
    };
    let _ = writeln!(
        frame,
        "STACK VISUALIZER  [{}]  Speed: {}  Theme: {}",
        lock, snapshot.speed, snapshot.theme_mode
    );
    let _ = writeln!(
        frame,
        "Operations: {}/{}\n",
        snapshot.elements.len(),
        snapshot.capacity
    );

    let border = "─".repeat(CELL_WIDTH + 2);
    if snapshot.elements.is_empty() {
        let _ = writeln!(frame, "{}{:^width$}", MARGIN, "(empty)", width = CELL_WIDTH + 4);
    } else {
        let _ = writeln!(frame, "{}┌{}┐", MARGIN, border);
    }

    for (slot, value) in snapshot.elements.iter().enumerate().rev() {
        let text = value.to_string();
        let cell = if snapshot.animated_slot() == Some(slot) {
            let fill = shade(snapshot.opacity_at(slot));
            let padding = CELL_WIDTH.saturating_sub(text.chars().count());
            let left = padding / 2;
            format!(
                "{}{}{}",
                fill.to_string().repeat(left),
                text,
                fill.to_string().repeat(padding - left)
            )
        } else {
            format!("{:^width$}", text, width = CELL_WIDTH)
        };

        let arrow = if snapshot.push_arrow.slot() == Some(slot) {
            PUSH_ARROW
        } else {
            "       "
        };
        let _ = write!(frame, "{} │ {} │", arrow, cell);

        if snapshot.peek.slot() == Some(slot) {
            frame.push_str("  ◀ peek");
        }
        if snapshot.animated_slot() == Some(slot) {
            let verb = match snapshot.animation.mode {
                AnimationMode::Pushing => "pushing",
                AnimationMode::Popping => "popping",
                AnimationMode::Idle => "",
            };
            let _ = write!(
                frame,
                "  {} {}/{}",
                verb, snapshot.animation.progress, snapshot.animation.total_steps
            );
        }
        frame.push('\n');

        if slot > 0 {
            let _ = writeln!(frame, "{}├{}┤", MARGIN, border);
        } else {
            let _ = writeln!(frame, "{}└{}┘", MARGIN, border);
        }
    }
    let _ = writeln!(frame, "{}{}\n", &MARGIN[..MARGIN.len() - 2], "▀".repeat(CELL_WIDTH + 6));

    frame.push_str("Operation History:\n");
    if snapshot.history.is_empty() {
        frame.push_str("  -\n");
    }
    for entry in &snapshot.history {
        let _ = writeln!(frame, "  • {}", entry);
    }

    if let Some(message) = message {
        let _ = write!(frame, "\n{}\n", message);
    }
    frame
}

pub struct StackDisplay {
    buffer: String,
}

impl Default for StackDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl StackDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        let _ = write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All);
    }

    pub fn render_session(&mut self, snapshot: &SessionSnapshot, message: Option<&str>) {
        self.clear();
        self.buffer.push_str(&frame_text(snapshot, message));
        self.buffer.push_str("> ");

        // Print the complete frame
        print!("{}", self.buffer);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::session::Session;
    use crate::stack::ValueKind;

    #[test]
    fn test_empty_frame() {
        let session = Session::new();
        let frame = frame_text(&session.snapshot(), None);
        assert!(frame.contains("(empty)"));
        assert!(frame.contains("Operations: 0/20"));
        assert!(frame.contains("next push: Integer"));
    }

    #[test]
    fn test_frame_shows_elements_top_first() {
        let mut session = Session::new();
        let mut now = Duration::ZERO;
        for value in &["bottom", "top"] {
            session.push(value, ValueKind::String, now).unwrap();
            now = session.settle(now);
        }
        let frame = frame_text(&session.snapshot(), Some("hello"));

        let top = frame.find("top").unwrap();
        let bottom = frame.find("bottom").unwrap();
        assert!(top < bottom);
        assert!(frame.contains("locked to String"));
        assert!(frame.contains("• Pushed: bottom"));
        assert!(frame.ends_with("hello\n"));
    }

    #[test]
    fn test_frame_marks_animation_and_indicators() {
        let mut session = Session::new();
        session.push("7", ValueKind::Integer, Duration::ZERO).unwrap();
        session.peek(Duration::ZERO).unwrap();
        session.tick(Duration::from_millis(60));

        let frame = frame_text(&session.snapshot(), None);
        assert!(frame.contains("──▶"));
        assert!(frame.contains("◀ peek"));
        assert!(frame.contains("pushing 2/25"));
        assert!(frame.contains('░'));
    }

    #[test]
    fn test_shade_levels() {
        assert_eq!(shade(0.0), '░');
        assert_eq!(shade(0.3), '▒');
        assert_eq!(shade(0.6), '▓');
        assert_eq!(shade(1.0), ' ');
    }
}
