//! Maps terminal events to core actions.
//!
//! While the filter is being typed, printable keys belong to the filter and
//! only Ctrl+C quits. Otherwise single letters are commands:
//!
//! | key        | action                  |
//! |------------|-------------------------|
//! | `q`        | quit                    |
//! | `d` / `→`  | next page               |
//! | `u` / `←`  | previous page           |
//! | `j` / `↓`  | next row                |
//! | `k` / `↑`  | previous row            |
//! | `t`        | toggle highlighted alias|
//! | `r`        | refresh                 |
//! | `/`        | edit filter             |
//! | `Esc`      | clear filter            |

use crate::core::action::Action;
use crate::tui::event::TuiEvent;

pub fn translate(event: &TuiEvent, filtering: bool) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Resize { width, height } => Some(Action::Resize {
            width: *width,
            height: *height,
        }),
        TuiEvent::Up => Some(Action::CursorUp),
        TuiEvent::Down => Some(Action::CursorDown),
        TuiEvent::Escape => Some(Action::ClearFilter),
        _ if filtering => filter_key(event),
        _ => command_key(event),
    }
}

fn filter_key(event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Char(c) => Some(Action::FilterInput(*c)),
        TuiEvent::Backspace => Some(Action::FilterBackspace),
        TuiEvent::Enter => Some(Action::FinishFilter),
        _ => None,
    }
}

fn command_key(event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Char('q') => Some(Action::Quit),
        TuiEvent::Char('d') | TuiEvent::Right => Some(Action::PageForward),
        TuiEvent::Char('u') | TuiEvent::Left => Some(Action::PageBackward),
        TuiEvent::Char('j') => Some(Action::CursorDown),
        TuiEvent::Char('k') => Some(Action::CursorUp),
        TuiEvent::Char('t') => Some(Action::ToggleHighlighted),
        TuiEvent::Char('r') => Some(Action::Refresh),
        TuiEvent::Char('/') => Some(Action::StartFilter),
        _ => None,
    }
}
