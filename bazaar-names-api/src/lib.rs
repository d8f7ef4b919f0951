pub mod client;
pub mod error;
pub mod types;

pub use client::{BAZAAR_API_URL, Endpoints, HypixelClient, ITEMS_API_URL, USER_AGENT};
pub use error::FetchError;
pub use types::{ApiResponse, BazaarPayload, ItemsPayload, Payload};
