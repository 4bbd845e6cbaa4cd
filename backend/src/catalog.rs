//! Seed worker catalog
//!
//! Loads the worker list the listing server publishes. The file may hold a
//! bare record array or a `{ success, data }` envelope.

use crate::directory::model::WorkerRecord;
use crate::directory::source::decode_listing;
use crate::directory::FetchError;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the catalog file
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be read
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents are not a usable listing
    #[error("Invalid listing: {0}")]
    Invalid(#[from] FetchError),
}

/// Catalog file operations
pub struct WorkerCatalog;

impl WorkerCatalog {
    /// Load workers from a JSON file
    ///
    /// Records are returned as stored, invalid ones included; filtering is
    /// left to the directory.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<WorkerRecord>, CatalogError> {
        let json = fs::read_to_string(path.as_ref())?;
        Ok(decode_listing(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_bare_array() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "name": "Alice", "service": "Plumber", "pricePerDay": 500, "image": "a.jpg"}},
                {{"id": null, "name": "Ghost", "service": "Welder", "pricePerDay": 300, "image": "g.jpg"}}]"#
        )
        .unwrap();

        let workers = WorkerCatalog::load_from_file(file.path()).unwrap();
        assert_eq!(workers.len(), 2);
        assert_eq!(workers[1].id, None);
    }

    #[test]
    fn test_load_envelope() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"success": true, "data": [{{"id": 1, "name": "Alice", "service": "Plumber", "pricePerDay": 500}}]}}"#
        )
        .unwrap();

        let workers = WorkerCatalog::load_from_file(file.path()).unwrap();
        assert_eq!(workers.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_path_buf();
        drop(file);

        let result = WorkerCatalog::load_from_file(&path);
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = WorkerCatalog::load_from_file(file.path());
        assert!(matches!(result, Err(CatalogError::Invalid(FetchError::Malformed(_)))));
    }
}
