//! # Core Application Logic
//!
//! This module contains addytui's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (alias store)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • TableModel (view)    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │  Gateway   │
//!           │  Adapter   │              │ (addy.io)  │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`alias`]: `AliasRecord`, the domain record, and `ToggleRequest`
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`table`]: `TableModel`, filter/paging/highlight state behind the table
//! - [`config`]: Config file + env resolution

pub mod action;
pub mod alias;
pub mod config;
pub mod state;
pub mod table;
