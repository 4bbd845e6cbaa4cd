// State management module
// Handles the load state, filter criteria and UI event dispatch

pub mod app_state;

pub use app_state::{DirectoryState, UiEvent};
