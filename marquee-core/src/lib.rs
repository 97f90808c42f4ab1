//! Marquee Core - catalog search domain and screen state machines
//!
//! This crate provides the building blocks of the Marquee search UI:
//! catalog query and result types, the provider trait remote catalogs
//! implement, the search control and screen state machines, the actor that
//! drives one mounted screen, and configuration and tracing setup.

pub mod catalog;
pub mod config;
pub mod screen;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use catalog::{CatalogEntry, CatalogError, CatalogProvider, SearchQuery, TypeFilter};
pub use config::MarqueeConfig;
pub use screen::{ScreenError, SearchScreenHandle, spawn_search_screen};

/// Errors that can bubble up from any Marquee subsystem.
#[derive(Debug, thiserror::Error)]
pub enum MarqueeError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Screen error: {0}")]
    Screen(#[from] ScreenError),

    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {reason}")]
    Server { reason: String },
}

impl MarqueeError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            MarqueeError::Catalog(CatalogError::MissingApiKey) => {
                "No catalog API key configured. Pass --api-key or set MARQUEE_OMDB_API_KEY."
                    .to_string()
            }
            MarqueeError::Catalog(e) => e.user_message(),
            MarqueeError::Screen(_) => "The search screen stopped unexpectedly".to_string(),
            MarqueeError::Configuration { reason } => format!("Configuration error: {reason}"),
            MarqueeError::Io(_) => "File system error occurred".to_string(),
            MarqueeError::Server { reason } => format!("Web server error: {reason}"),
        }
    }

    /// Checks if this error is due to user input or configuration.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            MarqueeError::Configuration { .. }
                | MarqueeError::Catalog(CatalogError::MissingApiKey)
                | MarqueeError::Catalog(CatalogError::InvalidBaseUrl { .. })
                | MarqueeError::Catalog(CatalogError::InvalidTypeFilter { .. })
        )
    }
}

pub type Result<T> = std::result::Result<T, MarqueeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_is_user_error() {
        let error = MarqueeError::from(CatalogError::MissingApiKey);

        assert!(error.is_user_error());
        assert!(error.user_message().contains("--api-key"));
    }

    #[test]
    fn test_network_error_is_not_user_error() {
        let error = MarqueeError::from(CatalogError::Network {
            reason: "timed out".to_string(),
        });

        assert!(!error.is_user_error());
        assert!(error.user_message().contains("connection"));
    }
}
