//! bidboard-core — shared library for the bidboard dashboard.
//!
//! Provides:
//! - `model` — bid records, amount/date parsing, seed data
//! - `provider` — bid sources (built-in seed set, JSON file)
//! - `view` — UI-agnostic view models (bid list pipeline, dashboard summary)
//! - `settings` — settings panels: skills, skill sets, freelancer profiles,
//!   AI bidding filters, AI bid log, password change
//! - `autobid` — auto-bidding toggle with simulated request latency
//! - `util` — input parsers for date and amount filters
//! - `fmt` — shared formatting helpers (dates, amounts)
//!
//! With `tui` feature (default):
//! - `tui` — TUI rendering (ratatui/crossterm), state, input, widgets

pub mod autobid;
pub mod fmt;
pub mod model;
pub mod provider;
pub mod settings;
pub mod util;
pub mod view;

#[cfg(feature = "tui")]
pub mod tui;
