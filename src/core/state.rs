//! # Application State
//!
//! Core business state for addytui. Domain logic only, no terminal types.
//!
//! ```text
//! App
//! ├── gateway: Arc<dyn AliasGateway>     // remote alias service
//! ├── aliases: Vec<AliasRecord>          // the store, in service order
//! ├── table: TableModel<AliasRecord>     // rows derived from the store
//! ├── status_message: String             // status bar text
//! ├── pending: usize                     // remote calls in flight
//! └── fatal: Option<GatewayError>        // set once, ends the session
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::alias::AliasRecord;
use crate::core::table::{Column, Row, RowStyle, TableModel};
use crate::gateway::{AliasGateway, GatewayError};

/// Width of the two counter columns.
pub const COUNTER_COLUMN_WIDTH: u16 = 16;

/// Lines the table chrome and status bar take away from the page.
pub const RESERVED_LINES: u16 = 6;

pub const PLACEHOLDER_TEXT: &str = "Fetching...";

pub struct App {
    pub gateway: Arc<dyn AliasGateway>,
    pub aliases: Vec<AliasRecord>,
    pub table: TableModel<AliasRecord>,
    pub status_message: String,
    /// Fetches and toggles issued but not yet answered.
    pub pending: usize,
    pub fatal: Option<GatewayError>,
}

impl App {
    /// Builds the initial view: the alias columns and a single placeholder
    /// row. The placeholder carries no back-reference, so it cannot be
    /// toggled.
    pub fn new(gateway: Arc<dyn AliasGateway>) -> Self {
        let mut table = TableModel::new(alias_columns());
        table.set_rows(vec![placeholder_row()]);
        Self {
            gateway,
            aliases: Vec::new(),
            table,
            status_message: String::new(),
            pending: 0,
            fatal: None,
        }
    }

    /// Regenerates every row from the store.
    pub fn rebuild_rows(&mut self) {
        self.table.set_columns(alias_columns());
        self.table.set_rows(alias_rows(&self.aliases));
    }

    pub fn active_count(&self) -> usize {
        self.aliases.iter().filter(|a| a.active).count()
    }
}

pub fn alias_columns() -> Vec<Column> {
    vec![
        Column::flex("E-Mail", 1).filterable(true),
        Column::flex("Description", 1).filterable(true),
        Column::fixed("Blocked/Fwd", COUNTER_COLUMN_WIDTH),
        Column::fixed("Replied/Sent", COUNTER_COLUMN_WIDTH),
    ]
}

fn placeholder_row() -> Row<AliasRecord> {
    Row::new(vec![
        String::new(),
        PLACEHOLDER_TEXT.to_string(),
        String::new(),
        String::new(),
    ])
}

/// One row per alias, in store order. Active aliases get [`RowStyle::Active`].
pub fn alias_rows(aliases: &[AliasRecord]) -> Vec<Row<AliasRecord>> {
    aliases
        .iter()
        .map(|alias| {
            let style = if alias.active {
                RowStyle::Active
            } else {
                RowStyle::Default
            };
            Row::new(vec![
                alias.email.clone(),
                alias.description().to_string(),
                alias.forward_counts(),
                alias.reply_counts(),
            ])
            .with_style(style)
            .with_payload(alias.clone())
        })
        .collect()
}
