//! # TUI Components
//!
//! Both components are transient: built each frame from borrowed props and
//! dropped after rendering. Persistent state (highlight, filter, page) lives
//! in `core::table::TableModel`, never here.
//!
//! - `AliasTable`: the paginated, filterable alias table
//! - `StatusBar`: one-line summary below the table
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into
//! global state:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! AliasTable::new(&app.table, &theme).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! AliasTable::render(frame, area); // reads from global App
//! ```

pub mod alias_table;
mod status_bar;

pub use alias_table::AliasTable;
pub use status_bar::StatusBar;
