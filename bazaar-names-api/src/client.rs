use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FetchError;
use crate::types::{ApiResponse, BazaarPayload, ItemsPayload, Payload};

pub const ITEMS_API_URL: &str = "https://api.hypixel.net/v2/resources/skyblock/items";
pub const BAZAAR_API_URL: &str = "https://api.hypixel.net/v2/skyblock/bazaar";

/// Identifies this tool to the API.
pub const USER_AGENT: &str = "bazaar-utils-generator";

/// The two endpoints a generation run reads from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub items_url: String,
    pub bazaar_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            items_url: ITEMS_API_URL.to_string(),
            bazaar_url: BAZAAR_API_URL.to_string(),
        }
    }
}

/// HTTP client for the SkyBlock items and Bazaar endpoints.
///
/// Both endpoints are public, so there are no credentials and no rate
/// limiting: a run makes exactly one request to each.
pub struct HypixelClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl HypixelClient {
    pub fn new(endpoints: Endpoints, user_agent: &str) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { http, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// GET `url` and parse the body as untyped JSON.
    ///
    /// Non-2xx responses fail with [`FetchError::Request`] without reading
    /// the body.
    pub async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        log::debug!("GET {url}");
        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Request {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                url: url.to_string(),
            });
        }

        let text = resp.text().await?;
        serde_json::from_str(&text).map_err(|source| FetchError::Json {
            url: url.to_string(),
            source,
        })
    }

    /// Fetch and validate the items resource.
    pub async fn fetch_items(&self) -> Result<ItemsPayload, FetchError> {
        self.fetch_payload(&self.endpoints.items_url).await
    }

    /// Fetch and validate the Bazaar listing.
    pub async fn fetch_bazaar(&self) -> Result<BazaarPayload, FetchError> {
        self.fetch_payload(&self.endpoints.bazaar_url).await
    }

    /// Fetch both endpoints concurrently, then validate Bazaar before Items.
    ///
    /// Fails as soon as either request fails; nothing is returned for the
    /// other.
    pub async fn fetch_all(&self) -> Result<(BazaarPayload, ItemsPayload), FetchError> {
        let (bazaar_raw, items_raw) = tokio::try_join!(
            self.fetch_json(&self.endpoints.bazaar_url),
            self.fetch_json(&self.endpoints.items_url),
        )?;

        let bazaar = ApiResponse::<BazaarPayload>::parse(&bazaar_raw).into_result()?;
        let items = ApiResponse::<ItemsPayload>::parse(&items_raw).into_result()?;
        Ok((bazaar, items))
    }

    async fn fetch_payload<T: Payload>(&self, url: &str) -> Result<T, FetchError> {
        let raw = self.fetch_json(url).await?;
        ApiResponse::<T>::parse(&raw).into_result()
    }
}
