// Application state management
// Contains the load state, the user's criteria and the derived view

use workers_directory_backend::directory::{
    derive, DerivedView, FetchError, FilterCriteria, LoadState, ServiceFilter, SortKey,
    WorkerRecord,
};

/// Everything that can change what the directory shows
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// A fetch was started (initial load or retry)
    LoadStarted,
    /// A fetch completed
    LoadFinished(Result<Vec<WorkerRecord>, FetchError>),
    /// Search box text changed
    SearchChanged(String),
    /// Service selector changed
    ServiceSelected(ServiceFilter),
    /// Sort selector changed
    SortChanged(SortKey),
}

/// Main application state
/// Owns the raw list (through the load state) and the current criteria;
/// the view is rebuilt on every event
#[derive(Debug, Clone, Default)]
pub struct DirectoryState {
    /// Fetch lifecycle and, once loaded, the raw list
    pub load: LoadState,
    /// Current search, service and sort selection
    pub criteria: FilterCriteria,
    view: DerivedView,
}

impl DirectoryState {
    /// Create a new state, waiting for the first fetch
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an event and re-derive the view
    pub fn dispatch(&mut self, event: UiEvent) {
        match event {
            UiEvent::LoadStarted => self.load.begin(),
            UiEvent::LoadFinished(outcome) => self.load.resolve(outcome),
            UiEvent::SearchChanged(term) => self.criteria.search_term = term,
            UiEvent::ServiceSelected(service) => self.criteria.service = service,
            UiEvent::SortChanged(sort_by) => self.criteria.sort_by = sort_by,
        }
        self.view = derive(self.load.raw_workers(), &self.criteria);
    }

    /// The view produced by the last event
    pub fn view(&self) -> &DerivedView {
        &self.view
    }
}
