//! Service layer for the scraper.
//!
//! This module contains the fetch → decode → extract building blocks:
//! - Request context and single-call fetching (`Session`)
//! - Response decoders (`decode`)
//! - Topic, comment and search fetchers and extractors
//! - Post body cleaning (`cleaner`)

pub mod cleaner;
pub mod comment;
pub mod decode;
pub mod extract;
pub mod search;
mod session;
pub mod topic;

#[cfg(test)]
pub(crate) mod testing;

pub use cleaner::{BaseCleaner, clean_text};
pub use comment::{count_comment_pages, extract_comments, fetch_comments};
pub use decode::{ensure_api_success, response_content_to_json, response_to_document, response_to_json};
pub use extract::{extract_json_array, extract_json_key};
pub use search::{count_total_topics, extract_search_results, extract_topic_ids, search_topics};
pub use session::{AUTH_HEADER, Session};
pub use topic::{extract_topic_content, extract_topic_text, fetch_topic};
