// Listing server state
// Holds the worker catalog loaded at startup, or the reason it could not be loaded

use crate::catalog::WorkerCatalog;
use crate::directory::WorkerRecord;
use std::path::Path;

/// Main application state
///
/// Read-only after startup; the listing is served wholesale on every request.
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: Result<Vec<WorkerRecord>, String>,
}

impl AppState {
    /// Create state around an already loaded worker list
    pub fn new(workers: Vec<WorkerRecord>) -> Self {
        Self {
            catalog: Ok(workers),
        }
    }

    /// Create state for a catalog that failed to load
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            catalog: Err(reason.into()),
        }
    }

    /// Load the catalog file, keeping the failure reason if it cannot be read
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        match WorkerCatalog::load_from_file(path.as_ref()) {
            Ok(workers) => {
                tracing::info!(
                    count = workers.len(),
                    path = %path.as_ref().display(),
                    "Loaded worker catalog"
                );
                Self::new(workers)
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.as_ref().display(),
                    error = %e,
                    "Failed to load worker catalog"
                );
                Self::unavailable(e.to_string())
            }
        }
    }

    /// The catalog, or the reason it is unavailable
    pub fn workers(&self) -> Result<&[WorkerRecord], &str> {
        self.catalog.as_deref().map_err(String::as_str)
    }
}
