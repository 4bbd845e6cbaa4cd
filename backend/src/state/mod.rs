// State management module
// Holds the listing server's worker catalog

pub mod app_state;

pub use app_state::AppState;
