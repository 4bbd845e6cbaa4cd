//! Directory error types
//!
//! Every way the listing fetch can fail, plus rejected filter criteria.
//! Messages are kept as strings so errors can be stored in the load state
//! and compared in tests.

use thiserror::Error;

/// Errors that can occur while fetching the worker listing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Request could not be sent or the body could not be read
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-2xx status
    #[error("Listing endpoint returned HTTP {0}")]
    Status(u16),

    /// Envelope response with `success: false`
    #[error("Listing rejected: {0}")]
    Rejected(String),

    /// Body is neither a record array nor a well-formed envelope
    #[error("Malformed listing: {0}")]
    Malformed(String),
}

/// Criteria text that does not name a known option
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CriteriaError {
    /// Sort key other than `name` or `price`
    #[error("Unknown sort key '{0}' (expected 'name' or 'price')")]
    UnknownSortKey(String),
}

impl FetchError {
    /// Message shown to the user next to the retry button
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Rejected(reason) => reason.clone(),
            _ => "Failed to load workers. Please try again.".to_string(),
        }
    }
}
