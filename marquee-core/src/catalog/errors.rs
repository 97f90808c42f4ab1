//! Error types for catalog search.

use thiserror::Error;

/// Errors that can occur while searching the remote catalog.
///
/// An empty match list is not an error: providers report it as an empty
/// result set so the screen can tell "nothing found" apart from a failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Transport failure: connection refused, DNS, timeout, broken body.
    #[error("Network error: {reason}")]
    Network {
        /// The reason for the network error
        reason: String,
    },

    /// The catalog answered with a non-success HTTP status.
    #[error("Catalog returned HTTP {status}")]
    HttpStatus {
        /// HTTP status code of the response
        status: u16,
    },

    /// The catalog answered 200 but reported a failure in the body.
    #[error("Catalog error: {reason}")]
    Provider {
        /// Error message reported by the catalog
        reason: String,
    },

    /// The response body could not be parsed.
    #[error("Parse error: {reason}")]
    Parse {
        /// The reason for the parse error
        reason: String,
    },

    /// The configured catalog base URL is not a valid URL.
    #[error("Invalid catalog URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected URL
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// No API key was configured for a catalog that requires one.
    #[error("No catalog API key configured")]
    MissingApiKey,

    /// Unsupported type filter value.
    #[error("Invalid type filter: {value}")]
    InvalidTypeFilter {
        /// The rejected value
        value: String,
    },
}

impl CatalogError {
    /// Short message suitable for showing in place of the result grid.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Network { .. } => {
                "Could not reach the movie catalog. Check your connection and try again.".to_string()
            }
            CatalogError::HttpStatus { status } => {
                format!("The movie catalog is unavailable right now (HTTP {status}).")
            }
            CatalogError::Provider { reason } => format!("The movie catalog said: {reason}"),
            CatalogError::Parse { .. } => {
                "The movie catalog sent a response that could not be read.".to_string()
            }
            CatalogError::InvalidBaseUrl { url, .. } => format!("Invalid catalog URL '{url}'."),
            CatalogError::MissingApiKey => "No catalog API key is configured.".to_string(),
            CatalogError::InvalidTypeFilter { value } => format!("Unknown type filter '{value}'."),
        }
    }
}
