//! UI-agnostic view models.
//!
//! `bids` holds the bid list state, reducer and filter/sort/paginate pipeline.
//! The remaining sub-modules build [`common::TableViewModel`]s and summary data
//! which the TUI maps to ratatui widgets for rendering.

pub mod ai_bidding;
pub mod bid_log;
pub mod bid_table;
pub mod bids;
pub mod common;
pub mod password;
pub mod profiles;
pub mod skills;
pub mod skillsets;
pub mod summary;
