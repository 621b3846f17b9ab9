//! Concrete ratatui styles, built once from the resolved config and passed
//! down to the components that need them.

use std::str::FromStr;

use log::warn;
use ratatui::style::{Color, Modifier, Style};

use crate::core::config::ResolvedConfig;
use crate::core::table::RowStyle;

#[derive(Debug, Clone)]
pub struct Theme {
    pub active_row: Style,
    pub default_row: Style,
    pub highlight: Style,
    pub header: Style,
    pub border: Style,
    pub hint: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::with_active_color(Color::Green)
    }
}

impl Theme {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let color = Color::from_str(&config.active_color).unwrap_or_else(|_| {
            warn!("Unknown active_color {:?}, using green", config.active_color);
            Color::Green
        });
        Self::with_active_color(color)
    }

    fn with_active_color(color: Color) -> Self {
        Self {
            active_row: Style::default().fg(color),
            default_row: Style::default(),
            highlight: Style::default().add_modifier(Modifier::REVERSED),
            header: Style::default().add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
            hint: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn row(&self, style: RowStyle) -> Style {
        match style {
            RowStyle::Active => self.active_row,
            RowStyle::Default => self.default_row,
        }
    }
}
