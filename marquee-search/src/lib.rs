//! Marquee Search - remote catalog providers

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Implements [`CatalogProvider`] against the OMDb search API: request URL
//! construction, response decoding and classification of "no matches"
//! versus real failures.

use std::sync::Arc;

use marquee_core::CatalogProvider;
use marquee_core::catalog::CatalogError;
use marquee_core::config::CatalogConfig;

pub mod omdb;
pub mod wire;

// Re-export main types
pub use omdb::{OmdbCatalog, build_search_url};
pub use wire::{OmdbSearchItem, OmdbSearchResponse, parse_search_body};

/// Builds the catalog provider described by `config`.
///
/// # Errors
/// - `CatalogError::MissingApiKey` - No API key configured
/// - `CatalogError::InvalidBaseUrl` - Base URL does not parse
/// - `CatalogError::Network` - HTTP client could not be constructed
pub fn catalog_from_config(
    config: &CatalogConfig,
) -> Result<Arc<dyn CatalogProvider>, CatalogError> {
    Ok(Arc::new(OmdbCatalog::new(config)?))
}
