// src/services/search.rs

//! Topic search and result extraction.

use regex::Regex;
use serde_json::Value;

use crate::either::{Failure, Maybe, Success};
use crate::models::SearchQuery;
use crate::services::Session;
use crate::services::extract::{extract_json_array, extract_json_key, json_type_name};
use crate::utils::http::{FetchRequest, RawResponse};

/// Patterns for the localized result count, tried in order:
/// "found N topics", then "found more than N topics".
const TOTAL_PATTERNS: [&str; 2] = [
    r"พบ\s([\d,]+)\sกระทู้",
    r"พบมากกว่า\s([\d,]+)\sกระทู้",
];

/// Post a search query to the search service.
pub async fn search_topics(
    session: &Session,
    query: &SearchQuery,
    user_agent: Option<&str>,
) -> Maybe<RawResponse> {
    let request = FetchRequest::post_json(
        session.config().search_api.as_str(),
        query.to_request_body(),
    );
    let request = session.authorize(request, user_agent);
    session.send(request).await
}

/// Parse the total number of matching topics from the `total` phrase.
pub fn count_total_topics(payload: &Value) -> Maybe<usize> {
    extract_json_key(payload, "total").chain(|total| match total {
        Value::String(text) => parse_total(&text),
        other => Failure(format!(
            "Key 'total' is not a string (got {})",
            json_type_name(&other)
        )),
    })
}

fn parse_total(text: &str) -> Maybe<usize> {
    let captured = TOTAL_PATTERNS.iter().find_map(|pattern| {
        let caps = Regex::new(pattern).ok()?.captures(text)?;
        caps.get(1).map(|m| m.as_str().to_string())
    });

    let Some(digits) = captured else {
        return Failure(format!("Could not extract topic count from '{text}'"));
    };
    match parse_localized_integer(&digits) {
        Some(total) => Success(total),
        None => Failure(format!("Failed to convert '{digits}' to integer")),
    }
}

/// Parse ASCII or Thai digits, ignoring thousands separators.
fn parse_localized_integer(text: &str) -> Option<usize> {
    let mut digits = text.chars().filter(|c| *c != ',').peekable();
    digits.peek()?;
    digits.try_fold(0usize, |acc, c| {
        let digit = match c {
            '\u{0E50}'..='\u{0E59}' => c as u32 - 0x0E50,
            _ => c.to_digit(10)?,
        };
        acc.checked_mul(10)?.checked_add(digit as usize)
    })
}

/// The topic list of a search result page.
pub fn extract_search_results(payload: &Value) -> Maybe<Vec<Value>> {
    extract_json_array(payload, "data")
}

/// Collect the `id` of every topic that has one.
///
/// An empty input is a valid empty result. A non-empty input where no topic
/// carries an id is a failure.
pub fn extract_topic_ids(topics: &[Value]) -> Maybe<Vec<String>> {
    if topics.is_empty() {
        return Success(Vec::new());
    }

    let ids: Vec<String> = topics
        .iter()
        .filter_map(|topic| extract_json_key(topic, "id").into_value())
        .filter_map(|id| match id {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect();

    if ids.is_empty() {
        return Failure(format!(
            "Could not extract any IDs from {} topics",
            topics.len()
        ));
    }
    Success(ids)
}
