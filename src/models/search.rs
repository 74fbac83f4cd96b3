//! Catalog search results returned by the book search endpoint

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppResult;

/// Treat a JSON `null` like a missing field
fn nullable<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_items<'de, D>(deserializer: D) -> Result<Vec<Candidate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Candidate>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single book record eligible for selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub isbn: String,
    #[serde(default, deserialize_with = "nullable")]
    pub author: String,
    #[serde(default, deserialize_with = "nullable")]
    pub publisher: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    /// Publication date as sent by the catalog (usually `YYYYMMDD`)
    #[serde(
        rename = "pubdate",
        alias = "pubDate",
        default,
        deserialize_with = "nullable"
    )]
    pub pub_date: String,
    /// Cover image URL
    #[serde(alias = "imageUrl", default, deserialize_with = "nullable")]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Search response as sent on the wire.
///
/// The endpoint has answered both with a paged wrapper and with a bare
/// array of candidates. An object carrying neither `items` nor `total`
/// is not a search response.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Paged {
        #[serde(default)]
        total: Option<i64>,
        #[serde(default)]
        start: Option<i64>,
        #[serde(default)]
        display: Option<i64>,
        #[serde(deserialize_with = "nullable_items")]
        items: Vec<Candidate>,
    },
    /// Wrapper whose `items` were left out
    Count { total: i64 },
    Bare(Vec<Candidate>),
}

/// Decoded search result, held while the selection modal is displayed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Result count reported by the catalog, when the response carried one
    pub total: Option<i64>,
    pub candidates: Vec<Candidate>,
}

impl SearchResult {
    /// Decode a response body. A literal `null` body yields an empty result.
    pub fn from_slice(body: &[u8]) -> AppResult<Self> {
        let response: Option<SearchResponse> = serde_json::from_slice(body)?;
        Ok(response.map(Self::from).unwrap_or_default())
    }

    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl From<SearchResponse> for SearchResult {
    fn from(response: SearchResponse) -> Self {
        match response {
            SearchResponse::Paged { total, items, .. } => Self {
                total,
                candidates: items,
            },
            SearchResponse::Count { total } => Self {
                total: Some(total),
                candidates: Vec::new(),
            },
            SearchResponse::Bare(items) => Self {
                total: None,
                candidates: items,
            },
        }
    }
}
