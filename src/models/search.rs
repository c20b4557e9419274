//! Search request and result structures.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Parameters of a topic search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    /// Search phrase
    pub keyword: String,

    /// Room identifiers to search within; empty searches every room
    #[serde(default)]
    pub rooms: Vec<String>,

    /// 1-based result page
    #[serde(default = "default_page")]
    pub page: u32,

    /// Sort by time instead of relevance
    #[serde(default)]
    pub sort_by_time: bool,
}

fn default_page() -> u32 {
    1
}

impl SearchQuery {
    /// Create a query for the first page across all rooms.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            rooms: Vec::new(),
            page: default_page(),
            sort_by_time: false,
        }
    }

    pub fn rooms(mut self, rooms: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.rooms = rooms.into_iter().map(Into::into).collect();
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn sort_by_time(mut self, sort_by_time: bool) -> Self {
        self.sort_by_time = sort_by_time;
        self
    }

    /// JSON body expected by the search service.
    pub fn to_request_body(&self) -> Value {
        json!({
            "keyword": self.keyword,
            "page": self.page,
            "rooms": self.rooms,
            "timebias": self.sort_by_time,
        })
    }
}

/// Result of a topic search.
///
/// A failed search yields empty containers, a zero count and `error` set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    /// Topic objects from the result page
    pub data: Vec<Value>,

    /// Identifiers of the topics in `data`
    pub topic_ids: Vec<String>,

    /// Total number of matching topics reported by the service
    pub total_topics: usize,

    /// Formatted error message when the search failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResult {
    /// Create the empty result returned for a failed search.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body() {
        let query = SearchQuery::new("กาแฟ")
            .rooms(["food", "travel"])
            .page(3)
            .sort_by_time(true);

        assert_eq!(
            query.to_request_body(),
            json!({
                "keyword": "กาแฟ",
                "page": 3,
                "rooms": ["food", "travel"],
                "timebias": true,
            })
        );
    }

    #[test]
    fn test_query_defaults() {
        let query = SearchQuery::new("x");
        assert_eq!(query.page, 1);
        assert!(query.rooms.is_empty());
        assert!(!query.sort_by_time);
    }

    #[test]
    fn test_failed_result_shape() {
        let result = SearchResult::failed("Failed to search for 'x': timeout");
        assert!(result.is_error());
        assert!(result.data.is_empty() && result.topic_ids.is_empty());
        assert_eq!(result.total_topics, 0);
    }
}
