//! Bazaar conversion table generation.
//!
//! Ties the stages together: fetch both endpoints ([`bazaar_names_api`]),
//! resolve a display name for every listed product ([`resolve`]), and write
//! the sorted table ([`output`]).

pub mod error;
pub mod generate;
pub mod output;
pub mod resolve;
pub mod settings;

pub use bazaar_names_api::{Endpoints, FetchError};
pub use bazaar_names_catalog::{CatalogEntry, ConversionTable, ListingId, format_name};
pub use error::GenerateError;
pub use generate::{GenerateReport, generate};
pub use output::{to_json, write_conversions};
pub use resolve::{Resolution, resolve_conversions};
pub use settings::{ConfigFile, GeneratorConfig, OUTPUT_FILE_NAME};
