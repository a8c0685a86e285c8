//! TUI widgets for bidboard.

mod bid_detail;
mod bids;
mod confirm_delete;
mod header;
mod help;
mod input_popup;
mod popup;
mod quit_confirm;
mod settings;
mod skills;
mod table;

pub use bid_detail::render_bid_detail;
pub use bids::render_bids;
pub use confirm_delete::render_confirm_delete;
pub use header::render_header;
pub use help::render_help;
pub use input_popup::render_input_popup;
pub use quit_confirm::render_quit_confirm;
pub use settings::{
    render_ai_bidding, render_bid_log, render_password, render_profiles, render_skillsets,
};
pub use skills::render_skills;
