//! # Core Application Logic
//!
//! This module contains Holocron's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (view store)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • detail (projection)  │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │  Catalog   │
//!     │  Adapter   │ ── Effect::Fetch ──────▶ │  (reqwest) │
//!     │ (ratatui)  │ ◀─ FetchCompleted ────── │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and the `ViewState` store
//! - [`action`]: The `Action` enum, the reducer and fetch reconciliation
//! - [`navigator`]: Raw input → `Action` translation
//! - [`detail`]: Selected item → label/value table

pub mod action;
pub mod config;
pub mod detail;
pub mod navigator;
pub mod state;
