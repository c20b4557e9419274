// src/client.rs

//! High-level Pantip client.
//!
//! Every operation runs a fetch → decode → extract chain and hands back a
//! plain value. Failures are logged through the injected [`EventLog`] and
//! replaced by an empty default: `""` for text, an empty list, zero, or a
//! record with empty fields and `error` set.

use std::fmt::Display;
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use log::Level;
use serde_json::Value;

use crate::either::{Failure, Maybe, Success};
use crate::error::Result;
use crate::models::{CommentPage, Config, SearchQuery, SearchResult};
use crate::services::{
    BaseCleaner, Session, clean_text, count_comment_pages, count_total_topics, ensure_api_success,
    extract_comments, extract_search_results, extract_topic_content, extract_topic_ids,
    extract_topic_text, fetch_comments, fetch_topic, response_content_to_json,
    response_to_document, response_to_json, search_topics,
};
use crate::utils::log::{EventLog, LogFacade};

/// Facade over the topic, comment and search pipelines.
pub struct PantipClient {
    session: Session,
    log: Arc<dyn EventLog>,
}

impl PantipClient {
    /// Build a client using `reqwest` and the `log` crate.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_parts(
            Session::from_config(&config.scraper)?,
            Arc::new(LogFacade::default()),
        ))
    }

    pub fn with_parts(session: Session, log: Arc<dyn EventLog>) -> Self {
        Self { session, log }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Fetch the opening post text of a topic, or `""` on failure.
    pub async fn get_topic_detail(&self, topic_id: &str) -> String {
        self.debug(format!("Fetching topic {topic_id}"));

        let result = fetch_topic(&self.session, topic_id, None)
            .await
            .chain(response_to_document)
            .chain(|document| extract_topic_content(&document).chain(extract_topic_text));

        match result {
            Success(text) => {
                self.debug(format!("Successfully fetched topic {topic_id}"));
                text
            }
            Failure(error) => {
                self.report("fetch topic", topic_id, &error);
                String::new()
            }
        }
    }

    /// Fetch a topic and run the cleaning passes over its text.
    pub async fn get_clean_topic_detail(
        &self,
        topic_id: &str,
        remove_punctuations: bool,
        base: Option<BaseCleaner<'_>>,
    ) -> String {
        let text = self.get_topic_detail(topic_id).await;
        clean_text(&text, remove_punctuations, base)
    }

    /// Fetch one page of comments.
    pub async fn get_topic_comments(&self, topic_id: &str, page: u32) -> CommentPage {
        self.debug(format!("Fetching comments for topic {topic_id}, page {page}"));

        let payload = fetch_comments(&self.session, topic_id, page, None)
            .await
            .chain(response_content_to_json);

        let comments = borrowed(&payload).chain(extract_comments);
        match comments {
            Success(data) => {
                self.debug(format!(
                    "Successfully fetched comments for topic {topic_id}, page {page}"
                ));
                CommentPage {
                    data,
                    page_count: payload.chain(|p| count_comment_pages(&p)).unwrap_or(0),
                    error: None,
                }
            }
            Failure(error) => CommentPage::failed(self.report(
                "fetch comments for topic",
                format!("{topic_id}, page {page}"),
                &error,
            )),
        }
    }

    /// Fetch every comment page of a topic and concatenate them in page
    /// order.
    ///
    /// A page that fails is logged and skipped.
    pub async fn get_all_comments(&self, topic_id: &str) -> Vec<Value> {
        let page_count = self.comment_page_count(topic_id).await;
        if page_count == 0 {
            return Vec::new();
        }

        let last_page = u32::try_from(page_count).unwrap_or(u32::MAX);
        let concurrency = self.session.config().max_concurrent.max(1);
        let pages: Vec<CommentPage> = stream::iter(1..=last_page)
            .map(|page| self.get_topic_comments(topic_id, page))
            .buffered(concurrency)
            .collect()
            .await;

        let failed = pages.iter().filter(|page| page.is_error()).count();
        if failed > 0 {
            self.log.log(
                Level::Warn,
                &format!("{failed} of {page_count} comment pages failed for topic {topic_id}"),
            );
        }
        pages.into_iter().flat_map(|page| page.data).collect()
    }

    /// Search topics, returning results, their ids and the total count.
    pub async fn search(&self, query: &SearchQuery) -> SearchResult {
        self.debug(format!(
            "Searching for '{}' in rooms {:?}, page {}",
            query.keyword, query.rooms, query.page
        ));

        let payload = match self.search_payload(query).await {
            Success(payload) => payload,
            Failure(error) => {
                let subject = format!("'{}'", query.keyword);
                return SearchResult::failed(self.report("search for", subject, &error));
            }
        };

        let data = self.or_default(
            extract_search_results(&payload),
            "extract search results for",
            &query.keyword,
        );
        let topic_ids = self.or_default(
            extract_topic_ids(&data),
            "extract topic ids for",
            &query.keyword,
        );
        let total_topics = self.or_default(
            count_total_topics(&payload),
            "count topics for",
            &query.keyword,
        );

        SearchResult {
            data,
            topic_ids,
            total_topics,
            error: None,
        }
    }

    /// Total number of topics matching `keyword`, or zero on failure.
    pub async fn count_search_results(&self, keyword: &str, rooms: &[String]) -> usize {
        let query = SearchQuery::new(keyword).rooms(rooms.iter().cloned());
        let result = self
            .search_payload(&query)
            .await
            .chain(|payload| count_total_topics(&payload));

        match result {
            Success(total) => total,
            Failure(error) => {
                self.report("count search results for", format!("'{keyword}'"), &error);
                0
            }
        }
    }

    /// Topic ids on one page of search results, or empty on failure.
    pub async fn get_search_topic_ids(&self, query: &SearchQuery) -> Vec<String> {
        let result = self
            .search_payload(query)
            .await
            .chain(|payload| extract_search_results(&payload))
            .chain(|topics| extract_topic_ids(&topics));

        match result {
            Success(ids) => ids,
            Failure(error) => {
                let subject = format!("'{}', page {}", query.keyword, query.page);
                self.report("get topic ids for", subject, &error);
                Vec::new()
            }
        }
    }

    async fn search_payload(&self, query: &SearchQuery) -> Maybe<Value> {
        search_topics(&self.session, query, None)
            .await
            .chain(response_to_json)
            .chain(ensure_api_success)
    }

    async fn comment_page_count(&self, topic_id: &str) -> usize {
        let result = fetch_comments(&self.session, topic_id, 1, None)
            .await
            .chain(response_content_to_json)
            .chain(|payload| count_comment_pages(&payload));

        match result {
            Success(count) => count,
            Failure(error) => {
                self.report("count comment pages for topic", topic_id, &error);
                0
            }
        }
    }

    /// Log a failed operation at error level and return the message.
    fn report(&self, operation: &str, subject: impl Display, error: &str) -> String {
        let message = format!("Failed to {operation} {subject}: {error}");
        self.log.log(Level::Error, &message);
        message
    }

    /// Unwrap a secondary extraction, logging a warning on failure.
    fn or_default<T: Default>(&self, result: Maybe<T>, operation: &str, keyword: &str) -> T {
        result.unwrap_or_else(|error| {
            self.log.log(
                Level::Warn,
                &format!("Failed to {operation} '{keyword}': {error}"),
            );
            T::default()
        })
    }

    fn debug(&self, message: String) {
        self.log.log(Level::Debug, &message);
    }
}

fn borrowed<T>(result: &Maybe<T>) -> Maybe<&T> {
    result.as_ref().map_err(String::clone)
}
