//! Worker directory core
//!
//! Record model, filter/sort derivation, the listing source and load state.

pub mod display;
pub mod error;
pub mod filter;
pub mod load;
pub mod model;
pub mod source;

pub use error::{CriteriaError, FetchError};
pub use filter::{derive, DerivedView, FilterCriteria, ServiceFilter, SortKey, ALL_SERVICES};
pub use load::LoadState;
pub use model::{ListingEnvelope, WorkerId, WorkerRecord};
pub use source::{HttpWorkerSource, WorkerSource};
