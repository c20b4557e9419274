// src/services/decode.rs

//! Response decoders.
//!
//! Each decoder consumes a [`RawResponse`] and produces a parsed payload or a
//! failure describing why the body could not be decoded.

use scraper::Html;
use serde_json::Value;

use crate::either::{Failure, Maybe, Success};
use crate::utils::http::RawResponse;

/// Decode the body as text, then parse it as JSON.
///
/// Invalid UTF-8 sequences are replaced and a leading byte-order mark is
/// ignored.
pub fn response_to_json(response: RawResponse) -> Maybe<Value> {
    let text = String::from_utf8_lossy(&response.body);
    serde_json::from_str(text.trim_start_matches('\u{feff}'))
        .map_err(|e| format!("JsonError: {e}"))
        .into()
}

/// Parse JSON straight from the raw body bytes.
///
/// The comment endpoint returns its payload pre-encoded in the byte stream.
pub fn response_content_to_json(response: RawResponse) -> Maybe<Value> {
    serde_json::from_slice(&response.body)
        .map_err(|e| format!("JsonError: {e}"))
        .into()
}

/// Parse the body as an HTML document.
///
/// Invalid UTF-8 sequences are replaced; HTML parsing itself never fails.
pub fn response_to_document(response: RawResponse) -> Maybe<Html> {
    let text = String::from_utf8_lossy(&response.body);
    Success(Html::parse_document(&text))
}

/// Surface a logical failure reported inside a 200 response.
///
/// The search service answers `{"success": false, "error_message": ...}`
/// with status 200 when it rejects a query.
pub fn ensure_api_success(payload: Value) -> Maybe<Value> {
    if payload.get("success") != Some(&Value::Bool(false)) {
        return Success(payload);
    }
    let message = match payload.get("error_message") {
        Some(Value::String(message)) => message.clone(),
        Some(Value::Null) | None => "Unknown error".to_string(),
        Some(other) => other.to_string(),
    };
    Failure(message)
}
