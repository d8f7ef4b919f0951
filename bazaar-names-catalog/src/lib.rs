//! Item catalog data model and display-name derivation for Bazaar products.
//!
//! This crate is pure: it takes ids and optional catalog names and produces
//! the display strings written to the conversion table. Fetching and writing
//! live in `bazaar-names-api` and `bazaar-names-lib`.

pub mod format;
pub mod overrides;
pub mod prettify;
pub mod roman;
pub mod types;

pub use format::{clean_raw_name, format_name, strip_color_codes, strip_placeholders};
pub use overrides::{name_override, overrides};
pub use prettify::prettify;
pub use roman::to_roman;
pub use types::*;
