// src/services/topic.rs

//! Topic page fetching and extraction.

use scraper::{ElementRef, Html, Selector};

use crate::either::{Failure, Maybe, Success};
use crate::services::Session;
use crate::utils::http::{FetchRequest, RawResponse};
use crate::utils::url::join_segment;

/// Wrapper of the opening post written by the topic author.
pub const TOPIC_CONTENT_SELECTOR: &str = ".display-post-wrapper.main-post.type";

/// Story body inside a post wrapper.
pub const TOPIC_TEXT_SELECTOR: &str = ".display-post-story";

/// Fetch the HTML page of a topic.
pub async fn fetch_topic(
    session: &Session,
    topic_id: &str,
    user_agent: Option<&str>,
) -> Maybe<RawResponse> {
    let url = join_segment(&session.config().topic_base_url, topic_id);
    let request = session.authorize(FetchRequest::get(url), user_agent);
    session.send(request).await
}

/// Locate the opening post of a topic page.
pub fn extract_topic_content(document: &Html) -> Maybe<ElementRef<'_>> {
    parse_selector(TOPIC_CONTENT_SELECTOR).chain(|selector| {
        let found = document.select(&selector).next();
        match found {
            Some(element) => Success(element),
            None => Failure("Cannot find topic content section".to_string()),
        }
    })
}

/// Collect the visible text of the story body inside `content`.
pub fn extract_topic_text(content: ElementRef<'_>) -> Maybe<String> {
    parse_selector(TOPIC_TEXT_SELECTOR).chain(|selector| {
        let found = content.select(&selector).next();
        match found {
            Some(story) => Success(story.text().collect()),
            None => Failure("Cannot find content section in topic".to_string()),
        }
    })
}

fn parse_selector(css: &str) -> Maybe<Selector> {
    Selector::parse(css)
        .map_err(|e| format!("Invalid selector '{css}': {e:?}"))
        .into()
}
