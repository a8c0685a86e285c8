//! Terminal User Interface for the bidboard dashboard.
//!
//! BIDS shows the dashboard panels plus the filtered, sorted and paginated
//! bid table. The other tabs are settings panels: skills, skill sets,
//! freelancer profiles, AI bidding filters, the AI bid log, and password
//! change.

mod app;
mod event;
mod input;
mod navigable;
mod render;
pub(crate) mod state;
pub(crate) mod style;
mod widgets;

pub use app::App;
pub use state::{AppState, PopupState, Tab};
