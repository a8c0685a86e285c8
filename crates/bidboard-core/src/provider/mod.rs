//! Bid sources.
//!
//! The bid collection is loaded once at start-up and stays fixed for the
//! lifetime of the process. [`SeedSource`] serves the built-in seed set,
//! [`JsonFileSource`] reads an exported JSON array of bids.

mod file;

use std::fmt;

use crate::model::{Bid, seed_bids};

pub use file::JsonFileSource;

/// Error type for bid source failures.
#[derive(Debug)]
pub enum SourceError {
    /// The source could not be read.
    Io(std::io::Error),
    /// The source was read but is not a valid bid list.
    Parse(String),
    /// Two bids share the same id.
    DuplicateId(u32),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Io(e) => write!(f, "IO error: {}", e),
            SourceError::Parse(msg) => write!(f, "Parse error: {}", msg),
            SourceError::DuplicateId(id) => write!(f, "Duplicate bid id: {}", id),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SourceError {
    fn from(e: std::io::Error) -> Self {
        SourceError::Io(e)
    }
}

/// Something that can produce the bid collection.
pub trait BidSource {
    /// Loads the full bid collection.
    fn load(&self) -> Result<Vec<Bid>, SourceError>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}

/// Built-in seed collection.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeedSource;

impl BidSource for SeedSource {
    fn load(&self) -> Result<Vec<Bid>, SourceError> {
        Ok(seed_bids())
    }

    fn describe(&self) -> String {
        "seed".to_string()
    }
}
