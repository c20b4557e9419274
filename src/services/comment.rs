// src/services/comment.rs

//! Comment page fetching and extraction.

use serde_json::Value;

use crate::either::{Failure, Maybe, Success};
use crate::services::Session;
use crate::services::extract::{extract_json_array, extract_json_key, json_type_name};
use crate::utils::http::{FetchRequest, RawResponse};

/// Comments served per page by the comment endpoint.
pub const COMMENTS_PER_PAGE: u64 = 100;

/// Largest page count accepted from `paging.max_comments`.
pub const MAX_COMMENT_PAGES: u64 = 10_000;

/// Fetch one page of comments for a topic.
pub async fn fetch_comments(
    session: &Session,
    topic_id: &str,
    page: u32,
    user_agent: Option<&str>,
) -> Maybe<RawResponse> {
    let request = FetchRequest::get(session.config().comment_api.as_str())
        .query("tid", topic_id)
        .query("param", format!("page{page}"))
        .header("x-requested-with", "XMLHttpRequest");
    let request = session.authorize(request, user_agent);
    session.send(request).await
}

/// Number of comment pages, from `paging.max_comments`.
pub fn count_comment_pages(payload: &Value) -> Maybe<usize> {
    extract_json_key(payload, "paging")
        .chain(|paging| extract_json_key(&paging, "max_comments"))
        .chain(pages_for)
}

/// The comment list of a comment page.
pub fn extract_comments(payload: &Value) -> Maybe<Vec<Value>> {
    extract_json_array(payload, "comments")
}

fn pages_for(max_comments: Value) -> Maybe<usize> {
    let total = match &max_comments {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.ceil() as u64)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    let Some(total) = total else {
        return Failure(format!(
            "max_comments is not a non-negative number (got {} {})",
            json_type_name(&max_comments),
            max_comments
        ));
    };
    let pages = total.div_ceil(COMMENTS_PER_PAGE);
    if pages > MAX_COMMENT_PAGES {
        return Failure(format!(
            "max_comments {total} exceeds the limit of {MAX_COMMENT_PAGES} pages"
        ));
    }
    Success(pages as usize)
}
