//! Workers Directory Backend Library
//!
//! The worker record model, the filter/sort derivation, the listing source
//! used by the directory GUI, and the pieces of the listing server.
//! The server binary is in `src/main.rs`.

pub mod api;
pub mod catalog;
pub mod config;
pub mod directory;
pub mod error;
/// Listing server state
///
/// Holds the worker catalog loaded at startup.
pub mod state;
