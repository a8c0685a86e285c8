//! JSON file bid source.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{BidSource, SourceError};
use crate::model::Bid;

/// Reads bids from a JSON array on disk.
///
/// ```json
/// [{"id": 1, "project": "Project Alpha", "date": "2025-01-05", "amount": "$500", "status": "active"}]
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BidSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Bid>, SourceError> {
        let data = fs::read_to_string(&self.path)?;
        let bids: Vec<Bid> =
            serde_json::from_str(&data).map_err(|e| SourceError::Parse(e.to_string()))?;

        let mut seen = HashSet::with_capacity(bids.len());
        for bid in &bids {
            if !seen.insert(bid.id) {
                return Err(SourceError::DuplicateId(bid.id));
            }
            // Malformed fields are tolerated; the view excludes them from
            // numeric and date matching.
            if bid.amount_value().is_none() {
                warn!(id = bid.id, amount = %bid.amount, "bid amount is not numeric");
            }
            if bid.parsed_date().is_none() {
                warn!(id = bid.id, date = %bid.date, "bid date is not an ISO date");
            }
        }

        debug!(path = %self.path.display(), count = bids.len(), "loaded bids");
        Ok(bids)
    }

    fn describe(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BidStatus;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_json(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_valid_file() {
        let file = write_json(
            r#"[
                {"id": 1, "project": "Alpha", "date": "2025-02-01", "amount": "$120", "status": "active"},
                {"id": 2, "project": "Beta", "date": "2025-02-02", "amount": "$80", "status": "completed"}
            ]"#,
        );
        let bids = JsonFileSource::new(file.path()).load().unwrap();
        assert_eq!(bids.len(), 2);
        assert_eq!(bids[1].status, BidStatus::Completed);
        assert_eq!(bids[0].amount_value(), Some(120.0));
    }

    #[test]
    fn tolerates_malformed_fields() {
        let file = write_json(
            r#"[{"id": 1, "project": "Alpha", "date": "soon", "amount": "TBD", "status": "active"}]"#,
        );
        let bids = JsonFileSource::new(file.path()).load().unwrap();
        assert_eq!(bids.len(), 1);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let file = write_json(
            r#"[
                {"id": 3, "project": "A", "date": "2025-02-01", "amount": "$1", "status": "active"},
                {"id": 3, "project": "B", "date": "2025-02-02", "amount": "$2", "status": "active"}
            ]"#,
        );
        let err = JsonFileSource::new(file.path()).load().unwrap_err();
        assert!(matches!(err, SourceError::DuplicateId(3)));
    }

    #[test]
    fn rejects_unknown_status() {
        let file = write_json(
            r#"[{"id": 1, "project": "A", "date": "2025-02-01", "amount": "$1", "status": "lost"}]"#,
        );
        let err = JsonFileSource::new(file.path()).load().unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("absent.json"));
        assert!(matches!(source.load(), Err(SourceError::Io(_))));
        assert_eq!(source.describe(), "absent.json");
    }
}
