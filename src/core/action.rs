//! # Actions
//!
//! Everything that can happen in addytui becomes an `Action`.
//! User presses `t`? That's `Action::ToggleHighlighted`.
//! The service answers a fetch? That's `Action::AliasesFetched(aliases)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the event loop what I/O to
//! start. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Remote results come back as actions too, so every store mutation happens
//! here, one action at a time, on the loop thread.

use log::debug;

use crate::core::alias::{AliasRecord, ToggleRequest};
use crate::core::state::{App, RESERVED_LINES};
use crate::gateway::GatewayError;

#[derive(Debug)]
pub enum Action {
    Quit,
    PageForward,
    PageBackward,
    CursorUp,
    CursorDown,
    StartFilter,
    FilterInput(char),
    FilterBackspace,
    FinishFilter,
    ClearFilter,
    ToggleHighlighted,
    Refresh,
    Resize { width: u16, height: u16 },
    AliasesFetched(Vec<AliasRecord>),
    AliasToggled(ToggleRequest),
    RemoteFailed(GatewayError),
}

/// I/O the event loop must perform after an `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    FetchAliases,
    ToggleAlias(ToggleRequest),
    /// A remote call failed. The loop tears down and reports the error.
    Fatal(GatewayError),
}

/// Startup: schedules the first fetch. The placeholder row is already in
/// place from `App::new`.
pub fn init(app: &mut App) -> Effect {
    app.pending += 1;
    app.status_message = "Fetching aliases...".to_string();
    Effect::FetchAliases
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,

        Action::PageForward => {
            app.table.page_forward();
            Effect::None
        }
        Action::PageBackward => {
            app.table.page_backward();
            Effect::None
        }
        Action::CursorUp => {
            app.table.cursor_up();
            Effect::None
        }
        Action::CursorDown => {
            app.table.cursor_down();
            Effect::None
        }

        Action::StartFilter => {
            app.table.start_filter();
            Effect::None
        }
        Action::FilterInput(c) => {
            app.table.push_filter_char(c);
            Effect::None
        }
        Action::FilterBackspace => {
            app.table.pop_filter_char();
            Effect::None
        }
        Action::FinishFilter => {
            app.table.finish_filter();
            Effect::None
        }
        Action::ClearFilter => {
            app.table.clear_filter();
            Effect::None
        }

        Action::ToggleHighlighted => {
            let Some(alias) = app.table.highlighted_row().and_then(|row| row.payload.as_ref())
            else {
                debug!("Toggle ignored: no alias highlighted");
                return Effect::None;
            };
            let request = ToggleRequest::from(alias);
            app.status_message = if request.was_active {
                format!("Disabling {}...", alias.email)
            } else {
                format!("Enabling {}...", alias.email)
            };
            app.pending += 1;
            Effect::ToggleAlias(request)
        }

        Action::Refresh => {
            app.pending += 1;
            app.status_message = "Refreshing...".to_string();
            Effect::FetchAliases
        }

        Action::Resize { width, height } => {
            let page_size = height.saturating_sub(RESERVED_LINES);
            app.table.set_page_size(usize::from(page_size));
            app.table.set_target_width(width);
            Effect::None
        }

        Action::AliasesFetched(aliases) => {
            app.pending = app.pending.saturating_sub(1);
            app.status_message = format!("Loaded {} aliases", aliases.len());
            app.aliases = aliases;
            app.rebuild_rows();
            Effect::None
        }

        Action::AliasToggled(request) => {
            app.pending = app.pending.saturating_sub(1);
            match app.aliases.iter_mut().find(|a| a.id == request.id) {
                Some(alias) => {
                    alias.active = !request.was_active;
                    app.status_message = if alias.active {
                        format!("Enabled {}", alias.email)
                    } else {
                        format!("Disabled {}", alias.email)
                    };
                }
                // A fetch replaced the store while the toggle was in flight.
                None => debug!("Toggled alias {} no longer in store, dropping", request.id),
            }
            app.rebuild_rows();
            Effect::None
        }

        Action::RemoteFailed(error) => {
            app.pending = app.pending.saturating_sub(1);
            app.status_message = format!("Error: {error}");
            app.fatal = Some(error.clone());
            Effect::Fatal(error)
        }
    }
}
