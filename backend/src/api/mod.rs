//! API module
//!
//! Contains HTTP request handlers for the worker listing endpoint

pub mod workers;

pub use workers::list_workers;
