//! Response shapes for the SkyBlock items resource and the Bazaar endpoint.
//!
//! Both endpoints answer `{ "success": true, ... }` on success and
//! `{ "success": false, "cause": "..." }` on failure. Bodies are parsed into
//! [`ApiResponse`] at the boundary; only the fields name resolution needs are
//! checked.

use bazaar_names_catalog::{CatalogEntry, ListingId};
use serde_json::{Map, Value};

use crate::error::FetchError;

/// Cause reported when a failed response doesn't carry one.
pub const UNKNOWN_CAUSE: &str = "Unknown API error";

/// A parsed endpoint response.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success(T),
    Failure { cause: Option<String> },
}

/// A success payload extracted from a response body.
pub trait Payload: Sized {
    /// Endpoint label used in error messages (e.g., "Items").
    const LABEL: &'static str;

    /// Pull the payload out of a body that already has `success: true`.
    /// Returns `None` when a required field is missing or has the wrong shape.
    fn from_body(body: &Map<String, Value>) -> Option<Self>;
}

impl<T: Payload> ApiResponse<T> {
    /// Parse a raw JSON body. Anything that isn't a well-formed success is a
    /// `Failure`, carrying the body's `cause` if it has one.
    pub fn parse(value: &Value) -> Self {
        let Some(body) = value.as_object() else {
            return Self::Failure { cause: None };
        };

        if body.get("success") == Some(&Value::Bool(true)) {
            if let Some(payload) = T::from_body(body) {
                return Self::Success(payload);
            }
        }

        Self::Failure {
            cause: extract_cause(body),
        }
    }

    pub fn into_result(self) -> Result<T, FetchError> {
        match self {
            Self::Success(payload) => Ok(payload),
            Self::Failure { cause } => Err(FetchError::api(
                T::LABEL,
                cause.unwrap_or_else(|| UNKNOWN_CAUSE.to_string()),
            )),
        }
    }
}

fn extract_cause(body: &Map<String, Value>) -> Option<String> {
    match body.get("cause")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn last_updated(body: &Map<String, Value>) -> Option<u64> {
    body.get("lastUpdated").and_then(Value::as_u64)
}

// ── Items ───────────────────────────────────────────────────────────────────

/// Success payload of the items resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemsPayload {
    pub last_updated: Option<u64>,
    pub items: Vec<CatalogEntry>,
}

impl Payload for ItemsPayload {
    const LABEL: &'static str = "Items";

    fn from_body(body: &Map<String, Value>) -> Option<Self> {
        let raw_items = body.get("items")?.as_array()?;

        let mut items = Vec::with_capacity(raw_items.len());
        for raw in raw_items {
            match raw.get("id").and_then(Value::as_str) {
                Some(id) => items.push(CatalogEntry {
                    id: id.to_string(),
                    name: raw.get("name").and_then(Value::as_str).map(str::to_string),
                }),
                None => log::debug!("Skipping catalog item without a string id: {raw}"),
            }
        }

        Some(Self {
            last_updated: last_updated(body),
            items,
        })
    }
}

// ── Bazaar ──────────────────────────────────────────────────────────────────

/// Success payload of the Bazaar endpoint. Only the product keys are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct BazaarPayload {
    pub last_updated: Option<u64>,
    /// Listed product ids, in ascending order.
    pub product_ids: Vec<ListingId>,
}

impl Payload for BazaarPayload {
    const LABEL: &'static str = "Bazaar";

    fn from_body(body: &Map<String, Value>) -> Option<Self> {
        let products = body.get("products")?.as_object()?;
        let mut product_ids: Vec<ListingId> = products.keys().cloned().collect();
        product_ids.sort();

        Some(Self {
            last_updated: last_updated(body),
            product_ids,
        })
    }
}
