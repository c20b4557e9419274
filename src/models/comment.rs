//! Comment page data structure.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page of comments for a topic.
///
/// A failed fetch yields an empty page with `error` set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CommentPage {
    /// Comment objects as returned by the comment endpoint
    pub data: Vec<Value>,

    /// Total number of comment pages for the topic
    pub page_count: usize,

    /// Formatted error message when the page could not be fetched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommentPage {
    /// Create the empty page returned for a failed fetch.
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
    fn test_failed_page_is_empty() {
        let page = CommentPage::failed("boom");
        assert!(page.is_error());
        assert!(page.data.is_empty());
        assert_eq!(page.page_count, 0);
    }

    #[test]
    fn test_error_omitted_when_absent() {
        let json = serde_json::to_value(CommentPage::default()).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["page_count"], 0);
    }
}
