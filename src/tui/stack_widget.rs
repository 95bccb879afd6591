//! Stack widget for TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Widget},
};

use crate::animation::AnimationMode;
use crate::session::SessionSnapshot;
use crate::tui::theme::Palette;

const MAX_CELL_WIDTH: u16 = 24;
const ARROW: &str = "──▶ ";
const PEEK_MARKER: &str = " ◀ peek";

/// Widget that renders the stack, bottom element resting on a base line
pub struct StackWidget<'a> {
    snapshot: &'a SessionSnapshot<'a>,
    palette: &'a Palette,
}

impl<'a> StackWidget<'a> {
    pub fn new(snapshot: &'a SessionSnapshot<'a>, palette: &'a Palette) -> Self {
        Self { snapshot, palette }
    }
}

impl Widget for StackWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.palette.base_style());

        let block = Block::default()
            .borders(Borders::ALL)
            .title("Stack")
            .border_style(self.palette.border_style());

        let inner = block.inner(area);
        block.render(area, buf);

        // Need room for the base line, one element and the arrow column
        if inner.height < 2 || inner.width < 12 {
            return;
        }

        let cell_width = inner.width.saturating_sub(ARROW.chars().count() as u16 * 2).min(MAX_CELL_WIDTH);
        let x = inner.x + (inner.width - cell_width) / 2;
        let base_y = inner.y + inner.height - 1;

        // Stack base
        let base_width = (cell_width + 4).min(inner.width);
        let base_x = inner.x + (inner.width - base_width) / 2;
        buf.set_string(
            base_x,
            base_y,
            "▀".repeat(base_width as usize),
            self.palette.accent_style(),
        );

        let count = self.snapshot.elements.len();
        let visible = count.min(inner.height as usize - 1);
        let hidden = count - visible;
        if hidden > 0 {
            buf.set_string(
                inner.x,
                base_y,
                format!("+{}", hidden),
                self.palette.text_style(),
            );
        }

        let popping = self.snapshot.animation.mode == AnimationMode::Popping;
        for (row, slot) in (hidden..count).enumerate() {
            let y = base_y - 1 - row as u16;
            let value = &self.snapshot.elements[slot];

            let style = if self.snapshot.animated_slot() == Some(slot) {
                self.palette
                    .animated_style(self.snapshot.opacity_at(slot), popping)
            } else if self.snapshot.peek.slot() == Some(slot) {
                self.palette.highlight_style()
            } else {
                self.palette.element_style()
            };

            let text = format!("{:^width$}", value.to_string(), width = cell_width as usize);
            buf.set_style(Rect::new(x, y, cell_width, 1), style);
            buf.set_stringn(x, y, text, cell_width as usize, style);

            let arrow_width = ARROW.chars().count() as u16;
            if self.snapshot.push_arrow.slot() == Some(slot) && x >= inner.x + arrow_width {
                buf.set_string(x - arrow_width, y, ARROW, self.palette.accent_style());
            }

            if self.snapshot.peek.slot() == Some(slot) {
                let marker_x = x + cell_width;
                let room = (inner.x + inner.width).saturating_sub(marker_x);
                buf.set_stringn(
                    marker_x,
                    y,
                    PEEK_MARKER,
                    room as usize,
                    self.palette.text_style(),
                );
            }
        }
    }
}
