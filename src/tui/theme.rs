//! Color theme for the TUI
//!
//! Colors can be configured via a `stack_colors.toml` file in the current working directory.
//! Keys are `<mode>_<role>` where mode is `light` or `dark` and role is one of
//! `background`, `element`, `text`, `accent`, `highlight`, `pop` or `border`.
//! Missing or invalid entries keep their default color.
//!
//! Example `stack_colors.toml`:
//! ```toml
//! light_accent = 100, 149, 237   # Cornflower blue
//! dark_accent = 80, 250, 123     # Bright green
//! light_highlight = 255, 215, 0
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use ratatui::style::{Color, Modifier, Style};

use crate::session::ThemeMode;

const CONFIG_FILE: &str = "stack_colors.toml";

/// Colors for one theme mode
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub element: Color,
    pub text: Color,
    pub accent: Color,
    pub highlight: Color,
    pub pop: Color,
    pub border: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(245, 245, 245),
            element: Color::Rgb(220, 220, 220),
            text: Color::Rgb(0, 0, 0),
            accent: Color::Rgb(100, 149, 237),
            highlight: Color::Rgb(255, 215, 0),
            pop: Color::Rgb(220, 53, 69),
            border: Color::Gray,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(40, 42, 54),
            element: Color::Rgb(68, 71, 90),
            text: Color::Rgb(255, 255, 255),
            accent: Color::Rgb(80, 250, 123),
            highlight: Color::Rgb(255, 193, 7),
            pop: Color::Rgb(220, 53, 69),
            border: Color::DarkGray,
        }
    }

    fn apply(&mut self, role: &str, color: Color) -> bool {
        let slot = match role {
            "background" => &mut self.background,
            "element" => &mut self.element,
            "text" => &mut self.text,
            "accent" => &mut self.accent,
            "highlight" => &mut self.highlight,
            "pop" => &mut self.pop,
            "border" => &mut self.border,
            _ => return false,
        };
        *slot = color;
        true
    }

    /// Get style for the area behind the stack
    pub fn base_style(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }

    /// Get style for a resting element
    pub fn element_style(&self) -> Style {
        Style::default()
            .bg(self.element)
            .fg(self.text)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for an element that is fading in (push) or out (pop)
    pub fn animated_style(&self, opacity: f32, popping: bool) -> Style {
        let target = if popping { self.pop } else { self.accent };
        Style::default()
            .bg(blend(self.background, target, opacity))
            .fg(blend(self.background, self.text, opacity))
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for the peeked element
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).bg(self.background)
    }

    /// Get style for text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Get style for borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border).bg(self.background)
    }
}

/// Linear mix of two colors. Non-RGB colors switch over at the halfway point.
pub fn blend(from: Color, to: Color, amount: f32) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| -> u8 {
                (f32::from(a) + (f32::from(b) - f32::from(a)) * amount).round() as u8
            };
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if amount < 0.5 => from,
        _ => to,
    }
}

/// Color theme for the stack TUI
#[derive(Clone, Debug)]
pub struct Theme {
    light: Palette,
    dark: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        let mut theme = Self::builtin();
        // Try to load overrides from config file, fall back to defaults
        if let Some(contents) = Self::read_config_file() {
            theme.apply_overrides(&parse_color_overrides(&contents));
        }
        theme
    }
}

impl Theme {
    pub fn builtin() -> Self {
        Self {
            light: Palette::light(),
            dark: Palette::dark(),
        }
    }

    pub fn palette(&self, mode: ThemeMode) -> &Palette {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    fn read_config_file() -> Option<String> {
        let config_path = Path::new(CONFIG_FILE);
        if !config_path.exists() {
            return None;
        }
        fs::read_to_string(config_path).ok()
    }

    /// Applies `<mode>_<role>` overrides. Returns how many were recognized.
    pub fn apply_overrides(&mut self, colors: &HashMap<String, Color>) -> usize {
        let mut applied = 0;
        for (key, color) in colors {
            let recognized = match key.split_once('_') {
                Some(("light", role)) => self.light.apply(role, *color),
                Some(("dark", role)) => self.dark.apply(role, *color),
                _ => false,
            };
            if recognized {
                applied += 1;
            } else {
                log::warn!("ignoring unknown color key `{}` in {}", key, CONFIG_FILE);
            }
        }
        applied
    }
}

/// Parse simple `key = r, g, b` lines. Comments and malformed lines are skipped.
pub fn parse_color_overrides(contents: &str) -> HashMap<String, Color> {
    let mut colors = HashMap::new();

    for line in contents.lines() {
        // Strip trailing comments and whitespace
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim();

            // Parse RGB values: "r, g, b" or "[r, g, b]"
            let rgb_str = value.trim_start_matches('[').trim_end_matches(']');
            let rgb_parts: Vec<&str> = rgb_str.split(',').map(|s| s.trim()).collect();
            if rgb_parts.len() == 3 {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    rgb_parts[0].parse::<u8>(),
                    rgb_parts[1].parse::<u8>(),
                    rgb_parts[2].parse::<u8>(),
                ) {
                    colors.insert(key.to_string(), Color::Rgb(r, g, b));
                }
            }
        }
    }

    colors
}
