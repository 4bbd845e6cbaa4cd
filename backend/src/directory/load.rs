//! Listing load state
//!
//! Loading → Loaded | Errored, and back to Loading on retry. A tagged enum
//! rather than separate flags, so "loading with an error" cannot be expressed.

use crate::directory::error::FetchError;
use crate::directory::model::WorkerRecord;

/// Where the current page load stands
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// A fetch is in flight
    #[default]
    Loading,
    /// The raw list for this load
    Loaded(Vec<WorkerRecord>),
    /// The last fetch failed
    Errored(FetchError),
}

impl LoadState {
    /// Enter `Loading` from any state (initial load or retry)
    pub fn begin(&mut self) {
        *self = LoadState::Loading;
    }

    /// Apply a fetch outcome
    ///
    /// Outcomes are applied in arrival order: a late result from an earlier
    /// fetch overwrites whatever is shown.
    pub fn resolve(&mut self, outcome: Result<Vec<WorkerRecord>, FetchError>) {
        *self = match outcome {
            Ok(workers) => LoadState::Loaded(workers),
            Err(error) => LoadState::Errored(error),
        };
    }

    /// Raw list to derive from; empty unless loaded
    pub fn raw_workers(&self) -> &[WorkerRecord] {
        match self {
            LoadState::Loaded(workers) => workers,
            LoadState::Loading | LoadState::Errored(_) => &[],
        }
    }

    /// Whether a fetch is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// The failure, if the last fetch failed
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            LoadState::Errored(error) => Some(error),
            _ => None,
        }
    }
}
