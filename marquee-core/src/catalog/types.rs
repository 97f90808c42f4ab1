//! Data types for catalog search.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::CatalogError;

/// Query text searched when a screen mounts without user input.
pub const DEFAULT_QUERY_TEXT: &str = "panda";

/// Mutually exclusive restriction of catalog entries by type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    /// No restriction
    #[default]
    All,
    /// Movies only
    Movie,
    /// Series only
    Series,
}

impl TypeFilter {
    /// Every filter in display order.
    pub const ALL: [TypeFilter; 3] = [TypeFilter::All, TypeFilter::Movie, TypeFilter::Series];

    /// Form and wire value of the filter.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Movie => "movie",
            TypeFilter::Series => "series",
        }
    }

    /// Value of the catalog's `type` parameter, `None` when unrestricted.
    pub fn api_param(self) -> Option<&'static str> {
        match self {
            TypeFilter::All => None,
            other => Some(other.as_str()),
        }
    }

    /// Human readable label for the filter control.
    pub fn label(self) -> &'static str {
        match self {
            TypeFilter::All => "All",
            TypeFilter::Movie => "Movies",
            TypeFilter::Series => "Series",
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "" => Ok(TypeFilter::All),
            "movie" => Ok(TypeFilter::Movie),
            "series" => Ok(TypeFilter::Series),
            _ => Err(CatalogError::InvalidTypeFilter {
                value: s.to_string(),
            }),
        }
    }
}

/// Free-text query plus type filter, as entered in the search control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    pub filter: TypeFilter,
}

impl SearchQuery {
    /// Creates a query from text and filter.
    pub fn new(text: impl Into<String>, filter: TypeFilter) -> Self {
        Self {
            text: text.into(),
            filter,
        }
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY_TEXT, TypeFilter::All)
    }
}

/// Type of a catalog entry as reported by the catalog.
///
/// Unknown types are kept verbatim so they still render on the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaKind {
    Movie,
    Series,
    Episode,
    Game,
    Other(String),
}

impl MediaKind {
    /// Catalog wire value.
    pub fn as_str(&self) -> &str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Series => "series",
            MediaKind::Episode => "episode",
            MediaKind::Game => "game",
            MediaKind::Other(other) => other,
        }
    }
}

impl From<String> for MediaKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "movie" => MediaKind::Movie,
            "series" => MediaKind::Series,
            "episode" => MediaKind::Episode,
            "game" => MediaKind::Game,
            _ => MediaKind::Other(value),
        }
    }
}

impl From<MediaKind> for String {
    fn from(kind: MediaKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique per result, used as the display key
    pub id: String,
    pub title: String,
    /// Kept as text: series report ranges such as "2011–2019"
    pub year: String,
    pub kind: MediaKind,
    /// Passed through as received, including "N/A"
    pub poster_url: String,
}
