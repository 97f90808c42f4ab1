//! Centralized configuration for Marquee.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase.

use std::time::Duration;

use crate::catalog::{DEFAULT_QUERY_TEXT, SearchQuery, TypeFilter};

/// Central configuration for all Marquee components.
///
/// Groups related configuration settings into logical sections.
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct MarqueeConfig {
    pub catalog: CatalogConfig,
    pub server: ServerConfig,
    pub search: SearchDefaults,
}

/// Remote catalog API configuration.
///
/// Controls where search requests are sent, how they authenticate and how
/// long a single request may take before it is reported as a network failure.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog search endpoint
    pub base_url: String,
    /// API key appended to every request
    pub api_key: Option<String>,
    /// Upper bound for a single search request
    pub request_timeout: Duration,
    /// User agent for HTTP requests
    pub user_agent: &'static str,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "http://www.omdbapi.com/".to_string(),
            api_key: None,
            request_timeout: Duration::from_secs(10),
            user_agent: "marquee/0.1.0",
        }
    }
}

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Screen sessions idle for longer than this are evicted
    pub session_idle_timeout: Duration,
    /// How often the session sweeper runs
    pub sweep_interval: Duration,
    /// How often a loading results region asks for the settled view
    pub poll_interval: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            session_idle_timeout: Duration::from_secs(1800), // 30 minutes
            sweep_interval: Duration::from_secs(60),
            poll_interval: Duration::from_millis(400),
        }
    }
}

/// Initial state of a freshly mounted search screen.
#[derive(Debug, Clone)]
pub struct SearchDefaults {
    /// Query text searched on mount
    pub default_query: String,
    /// Type filter selected on mount
    pub default_filter: TypeFilter,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            default_query: DEFAULT_QUERY_TEXT.to_string(),
            default_filter: TypeFilter::All,
        }
    }
}

impl SearchDefaults {
    /// Query issued when a screen is mounted.
    pub fn initial_query(&self) -> SearchQuery {
        SearchQuery::new(self.default_query.clone(), self.default_filter)
    }
}

impl MarqueeConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Allows runtime configuration via environment variables while
    /// maintaining sensible defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Catalog configuration overrides
        if let Ok(api_key) = std::env::var("MARQUEE_OMDB_API_KEY") {
            config.catalog.api_key = Some(api_key);
        } else if let Ok(api_key) = std::env::var("OMDB_API_KEY") {
            config.catalog.api_key = Some(api_key);
        }

        if let Ok(base_url) = std::env::var("MARQUEE_CATALOG_URL") {
            config.catalog.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("MARQUEE_REQUEST_TIMEOUT") {
            if let Ok(seconds) = timeout.parse::<u64>() {
                config.catalog.request_timeout = Duration::from_secs(seconds);
            }
        }

        // Server configuration overrides
        if let Ok(host) = std::env::var("MARQUEE_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = std::env::var("MARQUEE_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                config.server.port = port;
            }
        }

        if let Ok(idle) = std::env::var("MARQUEE_SESSION_IDLE_TIMEOUT") {
            if let Ok(seconds) = idle.parse::<u64>() {
                config.server.session_idle_timeout = Duration::from_secs(seconds);
            }
        }

        // Search defaults
        if let Ok(query) = std::env::var("MARQUEE_DEFAULT_QUERY") {
            if !query.trim().is_empty() {
                config.search.default_query = query;
            }
        }

        config
    }

    /// Creates a configuration optimized for testing.
    pub fn for_testing() -> Self {
        Self {
            catalog: CatalogConfig {
                base_url: "http://127.0.0.1:9/".to_string(),
                api_key: Some("test-key".to_string()),
                request_timeout: Duration::from_secs(2),
                ..Default::default()
            },
            server: ServerConfig {
                port: 0,
                session_idle_timeout: Duration::from_secs(60),
                sweep_interval: Duration::from_millis(50),
                poll_interval: Duration::from_millis(50),
                ..Default::default()
            },
            search: SearchDefaults::default(),
        }
    }
}
