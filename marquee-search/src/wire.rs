//! OMDb search response format.
//!
//! The search endpoint answers either
//! `{"Search":[...],"totalResults":"N","Response":"True"}` or
//! `{"Response":"False","Error":"Movie not found!"}`. Fields are decoded
//! leniently; anything the screen needs defaults to an empty string.

use std::collections::HashSet;

use marquee_core::catalog::{CatalogEntry, CatalogError, MediaKind};
use serde::Deserialize;

/// Body of an OMDb search response.
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchResponse {
    /// Matching entries, absent when nothing matched
    #[serde(rename = "Search")]
    pub search: Option<Vec<OmdbSearchItem>>,
    /// "True" or "False"
    #[serde(rename = "Response")]
    pub response: Option<String>,
    /// Error message when `Response` is "False"
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

/// One entry of an OMDb search response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OmdbSearchItem {
    /// Title of the media item
    #[serde(rename = "Title")]
    pub title: String,
    /// Release year, or year range for series
    #[serde(rename = "Year")]
    pub year: String,
    /// IMDb identifier
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    /// Media type (movie, series, episode, game)
    #[serde(rename = "Type")]
    pub media_type: String,
    /// URL to poster image, or "N/A"
    #[serde(rename = "Poster")]
    pub poster: String,
}

impl From<OmdbSearchItem> for CatalogEntry {
    fn from(item: OmdbSearchItem) -> Self {
        CatalogEntry {
            id: item.imdb_id,
            title: item.title,
            year: item.year,
            kind: MediaKind::from(item.media_type),
            poster_url: item.poster,
        }
    }
}

impl OmdbSearchResponse {
    /// Classifies the response into a result list or a catalog error.
    ///
    /// "Not found" answers and answers without a `Search` field become an
    /// empty list. Entries repeating an earlier id are dropped so ids stay
    /// unique within one result list.
    ///
    /// # Errors
    /// - `CatalogError::Provider` - `Response` is "False", or `Search` is absent,
    ///   with an `Error` other than no matches
    pub fn into_entries(self) -> Result<Vec<CatalogEntry>, CatalogError> {
        let failed = self.response.as_deref() == Some("False");
        match (self.search, self.error) {
            (_, Some(reason)) if failed && !is_no_match(&reason) => {
                Err(CatalogError::Provider { reason })
            }
            (None, Some(reason)) if !is_no_match(&reason) => Err(CatalogError::Provider { reason }),
            (Some(items), _) if !failed => {
                let mut seen = HashSet::new();
                Ok(items
                    .into_iter()
                    .filter(|item| seen.insert(item.imdb_id.clone()))
                    .map(CatalogEntry::from)
                    .collect())
            }
            _ => Ok(Vec::new()),
        }
    }
}

fn is_no_match(reason: &str) -> bool {
    reason.to_lowercase().contains("not found")
}

/// Decodes and classifies a raw OMDb search response body.
///
/// # Errors
/// - `CatalogError::Parse` - Body is not a JSON object of the expected shape
/// - `CatalogError::Provider` - Catalog reported a failure other than no matches
pub fn parse_search_body(body: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    let response: OmdbSearchResponse =
        serde_json::from_str(body).map_err(|e| CatalogError::Parse {
            reason: format!("JSON parsing failed: {e}"),
        })?;

    response.into_entries()
}
