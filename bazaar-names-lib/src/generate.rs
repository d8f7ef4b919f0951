//! The full fetch → resolve → write pipeline.

use std::path::PathBuf;

use bazaar_names_api::HypixelClient;
use bazaar_names_catalog::ListingId;

use crate::error::GenerateError;
use crate::output::write_conversions;
use crate::resolve::resolve_conversions;
use crate::settings::GeneratorConfig;

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub output_path: PathBuf,
    /// Number of products the Bazaar listed.
    pub listed: usize,
    /// Number of conversions written.
    pub written: usize,
    /// Listed products missing from the items resource.
    pub unmatched: Vec<ListingId>,
}

/// Fetch both endpoints, resolve every listed product and write the table.
///
/// Any fetch or validation failure aborts before the output file is touched.
pub async fn generate(config: &GeneratorConfig) -> Result<GenerateReport, GenerateError> {
    let client = HypixelClient::new(config.endpoints.clone(), &config.user_agent)?;

    log::debug!(
        "Fetching {} and {}",
        config.endpoints.bazaar_url,
        config.endpoints.items_url
    );
    let (bazaar, items) = client.fetch_all().await?;
    log::debug!(
        "Bazaar returned {} products (lastUpdated: {:?})",
        bazaar.product_ids.len(),
        bazaar.last_updated
    );
    log::debug!(
        "Items resource returned {} entries (lastUpdated: {:?})",
        items.items.len(),
        items.last_updated
    );

    let resolution = resolve_conversions(&bazaar.product_ids, &items.items);
    let written = write_conversions(&config.output_path, &resolution.table)?;

    Ok(GenerateReport {
        output_path: config.output_path.clone(),
        listed: bazaar.product_ids.len(),
        written,
        unmatched: resolution.unmatched,
    })
}
