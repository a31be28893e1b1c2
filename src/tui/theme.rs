use ratatui::style::Color;

use crate::model::UiConfig;

/// Color theme for the TUI. Built once from config and passed to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub title_fg: Color,
    pub title_bg: Color,
    pub text: Color,
    pub dim: Color,
    pub selected: Color,
    pub done: Color,
    pub group_header: Color,
    pub category: Color,
    pub warn: Color,
    pub search_match: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            title_fg: Color::Rgb(0xFF, 0xFD, 0xF5),
            title_bg: Color::Rgb(0x25, 0xA0, 0x65),
            text: Color::Reset,
            dim: Color::Rgb(0x99, 0x99, 0x99),
            selected: Color::Indexed(212),
            done: Color::Rgb(0x6C, 0x6C, 0x6C),
            group_header: Color::Rgb(0xFF, 0xD7, 0x00),
            category: Color::Rgb(0x00, 0xD7, 0xFF),
            warn: Color::Rgb(0xFF, 0x00, 0x00),
            search_match: Color::Rgb(0x40, 0xE0, 0xD0),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                log::warn!("ignoring color {} = {:?}: not a #RRGGBB value", key, value);
                continue;
            };
            match key.as_str() {
                "title_fg" => theme.title_fg = color,
                "title_bg" => theme.title_bg = color,
                "text" => theme.text = color,
                "dim" => theme.dim = color,
                "selected" => theme.selected = color,
                "done" => theme.done = color,
                "group_header" => theme.group_header = color,
                "category" => theme.category = color,
                "warn" => theme.warn = color,
                "search_match" => theme.search_match = color,
                other => log::warn!("ignoring unknown color slot {}", other),
            }
        }

        theme
    }
}
