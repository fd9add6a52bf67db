//! Pattern extraction over the raw watch page.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;
use truthcheck_protocols::VideoMeta;

static UPLOAD_DATE_JSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""uploadDate"\s*:\s*"([^"]+)""#).expect("valid uploadDate pattern")
});

static UPLOAD_DATE_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<meta[^>]*itemprop="uploadDate"[^>]*content="([^"]+)""#)
        .expect("valid uploadDate meta pattern")
});

static SHORT_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""shortDescription"\s*:\s*"((?:[^"\\]|\\.)*)""#)
        .expect("valid shortDescription pattern")
});

static VIEW_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""viewCount"\s*:\s*"(\d+)""#).expect("valid viewCount pattern")
});

fn first_capture<'a>(pattern: &Regex, page: &'a str) -> Option<&'a str> {
    pattern
        .captures(page)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Reduce an RFC 3339 timestamp or plain date to `YYYY-MM-DD`.
///
/// Anything else is returned unchanged.
pub fn normalize_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp.date_naive().format("%Y-%m-%d").to_string();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Undo JSON string escapes; falls back to the raw text when malformed.
fn unescape_json(raw: &str) -> String {
    serde_json::from_str::<String>(&format!("\"{raw}\"")).unwrap_or_else(|_| raw.to_string())
}

/// Extract whatever signals `page` carries. `None` when it carries none.
pub fn extract_meta(page: &str) -> Option<VideoMeta> {
    let upload_date = first_capture(&UPLOAD_DATE_JSON, page)
        .or_else(|| first_capture(&UPLOAD_DATE_META, page))
        .map(normalize_date)
        .unwrap_or_default();
    let description = first_capture(&SHORT_DESCRIPTION, page)
        .map(unescape_json)
        .unwrap_or_default();
    let view_count = first_capture(&VIEW_COUNT, page)
        .map(str::to_string)
        .unwrap_or_default();

    let meta = VideoMeta {
        description,
        upload_date,
        view_count,
    };
    (!meta.is_empty()).then_some(meta)
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
