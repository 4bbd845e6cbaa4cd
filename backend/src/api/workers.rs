//! Worker listing API handler

use crate::directory::ListingEnvelope;
use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, response::Json};
use std::sync::Arc;

/// GET /api/workers - The full worker list in envelope form
///
/// Invalid records are published as stored; the directory filters them.
pub async fn list_workers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListingEnvelope>, AppError> {
    let workers = state
        .workers()
        .map_err(|reason| AppError::CatalogUnavailable(reason.to_string()))?;

    tracing::debug!(count = workers.len(), "Serving worker listing");
    Ok(Json(ListingEnvelope::ok(workers.to_vec())))
}
