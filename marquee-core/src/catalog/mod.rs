//! Catalog search domain: query and result types, errors and the provider
//! trait implemented by concrete catalog backends.

use async_trait::async_trait;

pub mod errors;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_mocks;
pub mod types;

pub use errors::CatalogError;
#[cfg(any(test, feature = "test-utils"))]
pub use test_mocks::{GatedCatalog, MockCatalog, sample_entries};
pub use types::{CatalogEntry, DEFAULT_QUERY_TEXT, MediaKind, SearchQuery, TypeFilter};

/// Trait for remote catalog search backends.
///
/// Implementations translate a [`SearchQuery`] into a request against a
/// concrete catalog and classify the answer. A response that reports no
/// matches must come back as `Ok` with an empty list.
#[async_trait]
pub trait CatalogProvider: Send + Sync + std::fmt::Debug {
    /// Searches the catalog for entries matching the query.
    ///
    /// # Errors
    /// - `CatalogError::Network` - Transport failure or timeout
    /// - `CatalogError::HttpStatus` - Non-success HTTP status
    /// - `CatalogError::Provider` - Catalog reported a failure other than "no matches"
    /// - `CatalogError::Parse` - Response body could not be parsed
    async fn search(&self, query: &SearchQuery) -> Result<Vec<CatalogEntry>, CatalogError>;

    /// Short provider name used in logs.
    fn name(&self) -> &'static str;
}
