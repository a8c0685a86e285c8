//! Utility modules for bidboard.

mod date_parser;

pub use date_parser::{DateParseError, parse_amount_bound, parse_date};
