use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::text::Span;

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{AliasTable, StatusBar};
use crate::tui::theme::Theme;

const COMMAND_HINTS: &str =
    "q quit · t toggle · r refresh · d/u page · j/k move · / filter · esc clear";
const FILTER_HINTS: &str = "type to filter · enter done · esc clear · ctrl+c quit";

/// Screen layout, top to bottom: table, status bar, key hints.
///
/// The table's border, header and header margin plus these two lines add up
/// to `state::RESERVED_LINES`.
pub fn draw_ui(frame: &mut Frame, app: &App, theme: &Theme) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Min(0), Length(1), Length(1)]);
    let [table_area, status_area, hint_area] = layout.areas(frame.area());

    AliasTable::new(&app.table, theme).render(frame, table_area);

    StatusBar::new(
        app.status_message.clone(),
        app.aliases.len(),
        app.active_count(),
        app.pending,
    )
    .render(frame, status_area);

    let hints = if app.table.is_filtering() {
        FILTER_HINTS
    } else {
        COMMAND_HINTS
    };
    frame.render_widget(Span::styled(hints, theme.hint), hint_area);
}
