//! Formatting for the detail view's "Added On" and "Website" fields.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use url::Url;

use crate::types::errors::DetailFieldError;

pub const UNKNOWN_DATE: &str = "Unknown date";
pub const UNKNOWN_WEBSITE: &str = "Unknown website";

/// Parses `raw` as RFC 3339, `YYYY-MM-DD HH:MM:SS`, or `YYYY-MM-DD`.
pub fn parse_added_on(raw: &str) -> Result<NaiveDate, DetailFieldError> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.date());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| DetailFieldError::InvalidDate(raw.to_string()))
}

/// Whether chrono can render `pattern` without hitting an unknown specifier.
pub fn is_valid_date_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Formats the date a link was added with a chrono pattern.
///
/// A pattern chrono cannot render is reported as `InvalidDate`.
pub fn format_added_on(raw: &str, pattern: &str) -> Result<String, DetailFieldError> {
    let date = parse_added_on(raw)?;
    let mut out = String::new();
    write!(&mut out, "{}", date.format(pattern))
        .map_err(|_| DetailFieldError::InvalidDate(format!("{} (pattern {:?})", raw, pattern)))?;
    Ok(out)
}

/// Whether `raw` is an absolute `http` or `https` URL.
pub fn is_web_url(raw: &str) -> bool {
    Url::parse(raw.trim())
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Host of `raw` with a leading `www.` removed.
pub fn website_host(raw: &str) -> Result<String, DetailFieldError> {
    let url = Url::parse(raw.trim()).map_err(|_| DetailFieldError::InvalidUrl(raw.to_string()))?;
    let host = url
        .host_str()
        .ok_or_else(|| DetailFieldError::InvalidUrl(raw.to_string()))?;
    Ok(host.strip_prefix("www.").unwrap_or(host).to_string())
}
