//! Worker listing source
//!
//! HTTP client for the worker-listing endpoint. Accepts both the bare-array
//! and the `{ success, data, error }` envelope response shapes.

use crate::directory::error::FetchError;
use crate::directory::model::{ListingBody, WorkerRecord};
use async_trait::async_trait;

/// Supplies the complete raw worker list
///
/// One call per page load or explicit retry. No pagination and no partial
/// results: the caller gets the whole list or an error.
#[async_trait]
pub trait WorkerSource: Send + Sync {
    /// Fetch every worker record
    async fn fetch_all(&self) -> Result<Vec<WorkerRecord>, FetchError>;
}

/// Worker source backed by an HTTP GET
#[derive(Debug, Clone)]
pub struct HttpWorkerSource {
    client: reqwest::Client,
    url: String,
}

impl HttpWorkerSource {
    /// Create a source for the given listing URL
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Create a source sharing an existing client (connection pooling)
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Listing URL this source fetches
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl WorkerSource for HttpWorkerSource {
    async fn fetch_all(&self) -> Result<Vec<WorkerRecord>, FetchError> {
        tracing::debug!(url = %self.url, "Fetching worker listing");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                url = %self.url,
                status_code = status.as_u16(),
                "Listing endpoint returned error status"
            );
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(format!("Failed to read response body: {}", e)))?;

        let workers = decode_listing(&body)?;
        tracing::debug!(count = workers.len(), "Worker listing received");
        Ok(workers)
    }
}

/// Decode a listing body in either accepted shape
///
/// # Errors
/// * `FetchError::Rejected` - envelope with `success: false`
/// * `FetchError::Malformed` - unparseable body, or a successful envelope without `data`
pub fn decode_listing(body: &str) -> Result<Vec<WorkerRecord>, FetchError> {
    let parsed: ListingBody =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;

    match parsed {
        ListingBody::Bare(workers) => Ok(workers),
        ListingBody::Envelope(envelope) if envelope.success => envelope
            .data
            .ok_or_else(|| FetchError::Malformed("envelope has no data".to_string())),
        ListingBody::Envelope(envelope) => {
            let reason = envelope
                .error
                .unwrap_or_else(|| "Failed to load workers".to_string());
            tracing::error!(reason = %reason, "Listing envelope reported failure");
            Err(FetchError::Rejected(reason))
        }
    }
}
