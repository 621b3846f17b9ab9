//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One thread owns `App` and runs every `update()`. Remote calls run as
//! tokio tasks holding only a gateway handle and an immutable snapshot; they
//! report back by sending an `Action` over a channel that the loop drains
//! between key events. Nothing else ever touches the store.
//!
//! ```text
//!  keys ──▶ keymap ──▶ update() ──▶ Effect ──▶ spawn_fetch / spawn_toggle
//!                         ▲                                  │
//!                         └──────── mpsc<Action> ◀───────────┘
//! ```
//!
//! The loop only redraws after something happened: a key, a resize, or a
//! remote result.

mod component;
mod components;
mod event;
mod keymap;
pub mod theme;
mod ui;

use std::fmt;
use std::ops::ControlFlow;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use log::{debug, info, warn};

use crate::core::action::{Action, Effect, init, update};
use crate::core::alias::ToggleRequest;
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::gateway::{AddyClient, AliasGateway, GatewayError};
use crate::tui::event::{poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Theme;

/// How long to wait for a key before checking for remote results.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Why the TUI stopped other than the user quitting.
#[derive(Debug)]
pub enum RunError {
    Io(std::io::Error),
    Remote(GatewayError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Io(e) => write!(f, "terminal error: {e}"),
            RunError::Remote(e) => write!(f, "remote call failed: {e}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<std::io::Error> for RunError {
    fn from(e: std::io::Error) -> Self {
        RunError::Io(e)
    }
}

/// Build the gateway from a resolved config's credentials.
pub fn build_gateway(config: &ResolvedConfig) -> Arc<dyn AliasGateway> {
    if config.token.is_empty() {
        warn!("No API token configured; remote calls will be rejected");
    }
    Arc::new(AddyClient::new(
        config.token.clone(),
        Some(config.base_url.clone()),
    ))
}

/// Runs the TUI until the user quits or a remote call fails.
///
/// Must be called from within a tokio runtime; remote calls are spawned
/// onto it while this thread runs the event loop.
pub fn run(config: ResolvedConfig) -> Result<(), RunError> {
    let mut app = App::new(build_gateway(&config));
    let theme = Theme::from_config(&config);

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &theme);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    theme: &Theme,
) -> Result<(), RunError> {
    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let size = terminal.size()?;
    update(
        app,
        Action::Resize {
            width: size.width,
            height: size.height,
        },
    );
    if let ControlFlow::Break(outcome) = dispatch(init(app), app, &tx) {
        return outcome;
    }

    let mut needs_redraw = true; // Force first frame
    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, theme))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(POLL_INTERVAL);
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            let Some(action) = keymap::translate(&event, app.table.is_filtering()) else {
                continue;
            };
            debug!("Key action: {:?}", action);
            if let ControlFlow::Break(outcome) = dispatch(update(app, action), app, &tx) {
                return outcome;
            }
        }

        // Handle background task results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", summarize(&action));
            if let ControlFlow::Break(outcome) = dispatch(update(app, action), app, &tx) {
                return outcome;
            }
        }
    }
}

/// Starts the I/O an effect asks for, or tells the loop to stop.
fn dispatch(
    effect: Effect,
    app: &App,
    tx: &mpsc::Sender<Action>,
) -> ControlFlow<Result<(), RunError>> {
    match effect {
        Effect::None => {}
        Effect::Quit => {
            info!("Quit requested");
            return ControlFlow::Break(Ok(()));
        }
        Effect::FetchAliases => spawn_fetch(app.gateway.clone(), tx.clone()),
        Effect::ToggleAlias(request) => spawn_toggle(app.gateway.clone(), request, tx.clone()),
        Effect::Fatal(error) => {
            warn!("Remote call failed, shutting down: {}", error);
            return ControlFlow::Break(Err(RunError::Remote(error)));
        }
    }
    ControlFlow::Continue(())
}

/// Keeps alias payloads out of the debug log.
fn summarize(action: &Action) -> String {
    match action {
        Action::AliasesFetched(aliases) => format!("AliasesFetched({} aliases)", aliases.len()),
        other => format!("{:?}", other),
    }
}

fn spawn_fetch(gateway: Arc<dyn AliasGateway>, tx: mpsc::Sender<Action>) {
    info!("Spawning alias fetch");
    tokio::spawn(async move {
        let action = fetch_action(gateway.as_ref()).await;
        if tx.send(action).is_err() {
            warn!("Failed to send fetch result: receiver dropped");
        }
    });
}

fn spawn_toggle(gateway: Arc<dyn AliasGateway>, request: ToggleRequest, tx: mpsc::Sender<Action>) {
    info!(
        "Spawning toggle for alias {} (was_active={})",
        request.id, request.was_active
    );
    tokio::spawn(async move {
        let action = toggle_action(gateway.as_ref(), request).await;
        if tx.send(action).is_err() {
            warn!("Failed to send toggle result: receiver dropped");
        }
    });
}

async fn fetch_action(gateway: &dyn AliasGateway) -> Action {
    match gateway.fetch_all().await {
        Ok(aliases) => Action::AliasesFetched(aliases),
        Err(e) => Action::RemoteFailed(e),
    }
}

/// Disables an alias that was active, enables one that wasn't.
async fn toggle_action(gateway: &dyn AliasGateway, request: ToggleRequest) -> Action {
    let result = if request.was_active {
        gateway.disable(&request.id).await
    } else {
        gateway.enable(&request.id).await
    };
    match result {
        Ok(()) => Action::AliasToggled(request),
        Err(e) => Action::RemoteFailed(e),
    }
}
