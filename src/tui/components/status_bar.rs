//! # StatusBar Component
//!
//! One-line summary under the table.
//!
//! ## Layout
//!
//! ```text
//! addytui | 12 aliases, 5 enabled | Enabled shop@x.com          ⟳ 1
//! └──────────────── left ─────────────────────────┘    └ right ┘
//! ```
//!
//! The right side only appears while remote calls are in flight. It is
//! padded to the right edge using display width, so wide characters in the
//! status message don't push it off screen.
//!
//! ## Stateless Component
//!
//! StatusBar is purely presentational. It receives all data as props and
//! has no internal state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub struct StatusBar {
    pub status_message: String,
    pub alias_count: usize,
    pub active_count: usize,
    /// Remote calls in flight.
    pub pending: usize,
}

impl StatusBar {
    pub fn new(
        status_message: String,
        alias_count: usize,
        active_count: usize,
        pending: usize,
    ) -> Self {
        Self {
            status_message,
            alias_count,
            active_count,
            pending,
        }
    }

    fn left_text(&self) -> String {
        let counts = format!(
            "{} aliases, {} enabled",
            self.alias_count, self.active_count
        );
        if self.status_message.is_empty() {
            format!("addytui | {}", counts)
        } else {
            format!("addytui | {} | {}", counts, self.status_message)
        }
    }

    /// Full line, right side padded to `width` display cells.
    fn line(&self, width: u16) -> String {
        let left = self.left_text();
        if self.pending == 0 {
            return left;
        }
        let right = format!("⟳ {}", self.pending);
        let used = left.width() + right.width();
        let pad = usize::from(width).saturating_sub(used).max(1);
        format!("{}{}{}", left, " ".repeat(pad), right)
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.line(area.width)), area);
    }
}
