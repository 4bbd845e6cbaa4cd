//! Worker record and listing wire types
//!
//! Decoding is lenient: missing or null text fields become empty strings and
//! a missing price is kept as `None` so the record falls through to invalidity
//! instead of failing the whole listing.

use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier for a worker
pub type WorkerId = i64;

/// A single worker as published by the listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerRecord {
    /// Identifier; `None` marks the record invalid
    #[serde(default)]
    pub id: Option<WorkerId>,
    /// Display name, also the search and name-sort key
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Service category label
    #[serde(default, deserialize_with = "null_as_empty")]
    pub service: String,
    /// Daily price in the base currency unit; `None` or `<= 0` marks the record invalid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_day: Option<f64>,
    /// Image URL or path, passed through untouched
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
}

impl WorkerRecord {
    /// Create a valid-looking record with an empty image reference
    pub fn new(id: WorkerId, name: impl Into<String>, service: impl Into<String>, price_per_day: f64) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            service: service.into(),
            price_per_day: Some(price_per_day),
            image: String::new(),
        }
    }

    /// Set the image reference
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// A record is shown only if it has an id and a positive daily price
    pub fn is_valid(&self) -> bool {
        self.id.is_some() && self.price_per_day.is_some_and(|price| price > 0.0)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Envelope form of the listing response
///
/// `{ "success": true, "data": [...] }` or `{ "success": false, "error": "..." }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingEnvelope {
    /// Whether the listing was produced
    pub success: bool,
    /// Worker records, present on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<WorkerRecord>>,
    /// Failure description, present on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ListingEnvelope {
    /// Successful envelope wrapping the given records
    pub fn ok(data: Vec<WorkerRecord>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Failed envelope carrying an error message
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Both accepted shapes of a listing body
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListingBody {
    /// A bare JSON array of records
    Bare(Vec<WorkerRecord>),
    /// The `{ success, data, error }` envelope
    Envelope(ListingEnvelope),
}
