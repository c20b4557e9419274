// src/services/cleaner.rs

//! Text cleaning for Pantip post bodies.
//!
//! Site-specific markers are removed before HTML is unescaped and stripped,
//! since the markers themselves sit inside the markup.

use scraper::Html;

/// Placeholder rendered in place of hidden spoiler text.
pub const SPOILER_MARKER: &str = "[Spoil] คลิกเพื่อดูข้อความที่ซ่อนไว้";

/// Prefix of the "edited at" notice appended to posts.
pub const EDITED_MARKER: &str = "แก้ไขข้อความเมื่อ";

/// Emphasis escape artifacts left in the raw text, removed in this order.
pub const EMPHASIS_MARKERS: [&str; 2] = ["{{eem}}", "{{em}}"];

/// Externally supplied cleaner run after the built-in passes, receiving the
/// text and whether punctuation should be removed.
pub type BaseCleaner<'a> = &'a dyn Fn(&str, bool) -> String;

/// Built-in passes in the order they are applied.
pub const CLEANING_PASSES: [fn(&str) -> String; 6] = [
    remove_spoiler_marker,
    remove_edited_marker,
    remove_emphasis_markers,
    unescape_html,
    strip_html_tags,
    trim_whitespace,
];

pub fn remove_spoiler_marker(text: &str) -> String {
    text.replace(SPOILER_MARKER, "")
}

pub fn remove_edited_marker(text: &str) -> String {
    text.replace(EDITED_MARKER, "")
}

pub fn remove_emphasis_markers(text: &str) -> String {
    EMPHASIS_MARKERS
        .iter()
        .fold(text.to_string(), |acc, marker| acc.replace(marker, ""))
}

/// Decode HTML character references, leaving any markup in place.
pub fn unescape_html(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    // Escaping '<' keeps the parser from building elements, so only
    // character references are decoded.
    let fragment = Html::parse_fragment(&text.replace('<', "&lt;"));
    fragment.root_element().text().collect()
}

/// Reduce markup to its visible text.
pub fn strip_html_tags(text: &str) -> String {
    let fragment = Html::parse_fragment(text);
    fragment.root_element().text().collect()
}

pub fn trim_whitespace(text: &str) -> String {
    text.trim().to_string()
}

/// Run every built-in pass, then the optional base cleaner.
pub fn clean_text(text: &str, remove_punctuations: bool, base: Option<BaseCleaner<'_>>) -> String {
    let cleaned = CLEANING_PASSES
        .iter()
        .fold(text.to_string(), |acc, pass| pass(&acc));
    match base {
        Some(base) => base(&cleaned, remove_punctuations),
        None => cleaned,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_markup_and_emphasis_removed() {
        assert_eq!(
            clean_text("<p>Hello {{em}}World{{eem}}</p>  ", true, None),
            "Hello World"
        );
        assert_eq!(clean_text("<p>Hello{{em}}World{{eem}}</p>", true, None), "HelloWorld");
    }

    #[test]
    fn test_spoiler_and_edit_markers_removed() {
        let raw = format!("เนื้อหา <span class=\"spoil-btn\">{SPOILER_MARKER}</span> ซ่อน<br>{EDITED_MARKER} 12 ม.ค.");
        assert_eq!(clean_text(&raw, false, None), "เนื้อหา  ซ่อน 12 ม.ค.");
    }

    #[test]
    fn test_escaped_markup_is_stripped_after_unescape() {
        assert_eq!(
            clean_text("&lt;b&gt;bold&lt;/b&gt; &amp; more&nbsp;", false, None),
            "bold & more"
        );
    }

    #[test]
    fn test_unescape_keeps_tags() {
        assert_eq!(unescape_html("<i>a &amp; b</i>"), "<i>a & b</i>");
        assert_eq!(unescape_html("AT&T &#3588; &#x0E01;"), "AT&T ค ก");
        assert_eq!(unescape_html("plain"), "plain");
    }

    #[test]
    fn test_strip_html_tags() {
        assert_eq!(strip_html_tags("<div>a<br>b <b>c</b></div>"), "ab c");
        assert_eq!(strip_html_tags("no tags"), "no tags");
    }

    #[test]
    fn test_base_cleaner_receives_flag_and_runs_last() {
        let seen = Cell::new(None);
        let base = |text: &str, remove_punctuations: bool| {
            seen.set(Some(remove_punctuations));
            text.replace('!', "")
        };

        assert_eq!(clean_text("  <b>Hi!</b> ", true, Some(&base)), "Hi");
        assert_eq!(seen.get(), Some(true));
    }

    #[test]
    fn test_pass_order() {
        let raw = "{{em}}";
        assert_eq!(CLEANING_PASSES[2](raw), "");
        assert_eq!(CLEANING_PASSES[5]("  x  "), "x");
    }
}
