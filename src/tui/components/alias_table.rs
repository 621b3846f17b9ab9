//! # AliasTable Component
//!
//! Draws a [`TableModel`] as a bordered ratatui `Table`: header, the rows of
//! the current page, the highlighted row reversed, and a footer with the
//! filter text and page position.
//!
//! The table is drawn at the model's target width (clamped to the area) and
//! column widths come from `TableModel::column_widths`, so fixed columns stay
//! fixed and flex columns absorb the rest.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Cell, Row, Table, TableState};

use crate::core::alias::AliasRecord;
use crate::core::table::{COLUMN_SPACING, TableModel};
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct AliasTable<'a> {
    table: &'a TableModel<AliasRecord>,
    theme: &'a Theme,
}

impl<'a> AliasTable<'a> {
    pub fn new(table: &'a TableModel<AliasRecord>, theme: &'a Theme) -> Self {
        Self { table, theme }
    }

    /// Width the table should occupy inside an area `available` cells wide.
    fn effective_width(&self, available: u16) -> u16 {
        match self.table.target_width() {
            0 => available,
            target => target.min(available),
        }
    }

    fn footer(&self) -> String {
        let page = format!(
            "{}/{}",
            self.table.current_page() + 1,
            self.table.page_count()
        );
        if self.table.is_filtering() {
            format!(" /{}▏ {} ", self.table.filter(), page)
        } else if !self.table.filter().is_empty() {
            format!(" filter: {}  {} ", self.table.filter(), page)
        } else {
            format!(" {} ", page)
        }
    }
}

impl Component for AliasTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let area = Rect {
            width: self.effective_width(area.width),
            ..area
        };
        let widths = self.table.column_widths(area.width);

        let header = Row::new(
            self.table
                .columns()
                .iter()
                .map(|column| Cell::from(column.title.as_str())),
        )
        .style(self.theme.header)
        .bottom_margin(1);

        let rows = self.table.page_rows().map(|row| {
            Row::new(row.cells.iter().map(|cell| Cell::from(cell.as_str())))
                .style(self.theme.row(row.style))
        });

        // Highlight is relative to the visible rows; the widget only sees the page.
        let selected = self
            .table
            .highlighted_index()
            .map(|i| i - self.table.page_start());
        let mut state = TableState::default().with_selected(selected);

        let block = Block::bordered()
            .border_style(self.theme.border)
            .title(" Aliases ")
            .title_bottom(Line::from(self.footer()).right_aligned());

        let table = Table::new(rows, widths.into_iter().map(Constraint::Length))
            .header(header)
            .block(block)
            .column_spacing(COLUMN_SPACING)
            .row_highlight_style(self.theme.highlight);

        frame.render_stateful_widget(table, area, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{alias, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::style::Color;

    fn draw(table: &TableModel<AliasRecord>, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|f| AliasTable::new(table, &theme).render(f, f.area()))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    /// The text of one screen row.
    fn line(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_renders_placeholder() {
        let app = test_app();
        let buffer = draw(&app.table, 100, 10);
        let text = text(&buffer);
        assert!(text.contains("Fetching..."));
        assert!(text.contains("E-Mail"));
        assert!(text.contains("Blocked/Fwd"));
        assert!(text.contains("Replied/Sent"));
    }

    #[test]
    fn test_renders_fetched_aliases_with_counters() {
        let mut app = test_app();
        let mut a = alias("1", "a@x.com", false);
        a.emails_blocked = 3;
        a.emails_forwarded = 9;
        update(&mut app, Action::AliasesFetched(vec![a, alias("2", "b@x.com", true)]));

        let buffer = draw(&app.table, 100, 10);
        let text = text(&buffer);
        assert!(text.contains("a@x.com"));
        assert!(text.contains("b@x.com"));
        assert!(text.contains("3/9"));
        assert!(!text.contains("Fetching..."));
    }

    #[test]
    fn test_active_rows_use_active_color() {
        let mut app = test_app();
        update(
            &mut app,
            Action::AliasesFetched(vec![alias("1", "a@x.com", false), alias("2", "b@x.com", true)]),
        );
        // Border, header, header margin, then rows.
        let buffer = draw(&app.table, 100, 10);
        assert!(line(&buffer, 3).contains("a@x.com"));
        assert!(line(&buffer, 4).contains("b@x.com"));
        assert_ne!(buffer[(1, 3)].fg, Color::Green);
        assert_eq!(buffer[(1, 4)].fg, Color::Green);
    }

    #[test]
    fn test_only_current_page_is_drawn() {
        let mut app = test_app();
        let aliases = (0..5)
            .map(|i| alias(&i.to_string(), &format!("user{i}@x.com"), false))
            .collect();
        update(&mut app, Action::AliasesFetched(aliases));
        update(&mut app, Action::Resize { width: 100, height: 8 });
        update(&mut app, Action::PageForward);

        let text = text(&draw(&app.table, 100, 10));
        assert!(!text.contains("user0@x.com"));
        assert!(text.contains("user2@x.com"));
        assert!(text.contains("user3@x.com"));
        assert!(!text.contains("user4@x.com"));
        assert!(text.contains("2/3"));
    }

    #[test]
    fn test_footer_shows_filter() {
        let mut app = test_app();
        update(&mut app, Action::AliasesFetched(vec![alias("1", "shop@x.com", false)]));
        update(&mut app, Action::StartFilter);
        update(&mut app, Action::FilterInput('s'));
        assert!(text(&draw(&app.table, 100, 10)).contains("/s"));

        update(&mut app, Action::FinishFilter);
        assert!(text(&draw(&app.table, 100, 10)).contains("filter: s"));
    }

    #[test]
    fn test_target_width_narrows_table() {
        let mut app = test_app();
        update(&mut app, Action::Resize { width: 60, height: 10 });
        let buffer = draw(&app.table, 100, 10);
        // Top-right corner of the block sits at the target width.
        assert_eq!(buffer[(59, 0)].symbol(), "┐");
        assert_eq!(buffer[(60, 0)].symbol(), " ");
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let mut app = test_app();
        update(&mut app, Action::Resize { width: 3, height: 2 });
        draw(&app.table, 3, 2);
    }
}
