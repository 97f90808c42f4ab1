//! OMDb search provider.

use async_trait::async_trait;
use marquee_core::catalog::{CatalogEntry, CatalogError, CatalogProvider, SearchQuery};
use marquee_core::config::CatalogConfig;
use url::Url;

use crate::wire::parse_search_body;

/// Catalog provider backed by the OMDb search endpoint.
#[derive(Debug, Clone)]
pub struct OmdbCatalog {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl OmdbCatalog {
    /// Creates an OMDb provider from catalog configuration.
    ///
    /// # Errors
    /// - `CatalogError::MissingApiKey` - No API key configured
    /// - `CatalogError::InvalidBaseUrl` - Base URL does not parse
    /// - `CatalogError::Network` - HTTP client could not be constructed
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(CatalogError::MissingApiKey)?
            .to_string();

        let base_url =
            Url::parse(&config.base_url).map_err(|e| CatalogError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: e.to_string(),
            })?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| CatalogError::Network {
                reason: format!("HTTP client setup failed: {e}"),
            })?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// URL a search for `query` is sent to.
    pub fn search_url(&self, query: &SearchQuery) -> Url {
        build_search_url(&self.base_url, &self.api_key, query)
    }
}

/// Builds `<base>?apikey=<key>&s=<text>[&type=<movie|series>]`.
///
/// The `type` parameter is only present when the filter restricts results;
/// leaving it out is how the catalog is asked for every type.
pub fn build_search_url(base_url: &Url, api_key: &str, query: &SearchQuery) -> Url {
    let mut url = base_url.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("apikey", api_key);
        pairs.append_pair("s", &query.text);
        if let Some(media_type) = query.filter.api_param() {
            pairs.append_pair("type", media_type);
        }
    }
    url
}

#[async_trait]
impl CatalogProvider for OmdbCatalog {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<CatalogEntry>, CatalogError> {
        let url = self.search_url(query);

        // Errors are stripped of their URL so the API key never reaches logs.
        let response = self.client.get(url).send().await.map_err(|e| {
            CatalogError::Network {
                reason: format!("HTTP request failed: {}", e.without_url()),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("OMDb search for '{}' returned {}", query.text, status);
            return Err(CatalogError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| CatalogError::Network {
            reason: format!("Failed to read response body: {}", e.without_url()),
        })?;

        let entries = parse_search_body(&body)?;
        tracing::debug!(
            "OMDb search for '{}' ({}) returned {} entries",
            query.text,
            query.filter,
            entries.len()
        );
        Ok(entries)
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}

#[cfg(test)]
mod tests {
    use marquee_core::catalog::TypeFilter;

    use super::*;

    fn config_with_key(api_key: Option<&str>) -> CatalogConfig {
        CatalogConfig {
            api_key: api_key.map(str::to_string),
            ..CatalogConfig::default()
        }
    }

    fn query_pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_requires_api_key() {
        assert!(matches!(
            OmdbCatalog::new(&config_with_key(None)),
            Err(CatalogError::MissingApiKey)
        ));
        assert!(matches!(
            OmdbCatalog::new(&config_with_key(Some("  "))),
            Err(CatalogError::MissingApiKey)
        ));
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let config = CatalogConfig {
            base_url: "not a url".to_string(),
            ..config_with_key(Some("key"))
        };

        assert!(matches!(
            OmdbCatalog::new(&config),
            Err(CatalogError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_all_filter_omits_type_parameter() {
        let catalog = OmdbCatalog::new(&config_with_key(Some("329ffa13"))).unwrap();
        let url = catalog.search_url(&SearchQuery::new("panda", TypeFilter::All));

        assert_eq!(
            query_pairs(&url),
            vec![
                ("apikey".to_string(), "329ffa13".to_string()),
                ("s".to_string(), "panda".to_string()),
            ]
        );
        assert_eq!(url.host_str(), Some("www.omdbapi.com"));
    }

    #[test]
    fn test_movie_and_series_filters_add_type_parameter() {
        let catalog = OmdbCatalog::new(&config_with_key(Some("k"))).unwrap();

        let movie = catalog.search_url(&SearchQuery::new("panda", TypeFilter::Movie));
        assert!(query_pairs(&movie).contains(&("type".to_string(), "movie".to_string())));

        let series = catalog.search_url(&SearchQuery::new("panda", TypeFilter::Series));
        assert!(query_pairs(&series).contains(&("type".to_string(), "series".to_string())));
    }

    #[test]
    fn test_query_text_is_encoded() {
        let base = Url::parse("http://www.omdbapi.com/").unwrap();
        let url = build_search_url(
            &base,
            "k",
            &SearchQuery::new("fast & furious", TypeFilter::All),
        );

        assert!(!url.as_str().contains("fast & furious"));
        assert!(query_pairs(&url).contains(&("s".to_string(), "fast & furious".to_string())));
    }
}
