//! Publish date discovery for article pages.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use scraper::{Html, Selector};
use serde_json::Value;

use crate::errors::{NewsError, NewsResult};

/// Meta tags carrying a publish timestamp, most specific first.
const META_SELECTORS: &[&str] = &[
    "meta[property='article:published_time']",
    "meta[name='article:published_time']",
    "meta[property='og:published_time']",
    "meta[itemprop='datePublished']",
    "meta[name='pubdate']",
    "meta[name='publishdate']",
    "meta[name='publish-date']",
    "meta[name='DC.date.issued']",
    "meta[name='sailthru.date']",
    "meta[name='date']",
];

/// Find the publish date of a parsed page, falling back to the URL path.
pub fn find_publish_date(document: &Html, url: &str) -> NewsResult<Option<NaiveDate>> {
    for selector in META_SELECTORS {
        let selector = parse_selector(selector)?;
        let found = document
            .select(&selector)
            .filter_map(|el| el.value().attr("content"))
            .find_map(parse_date);
        if found.is_some() {
            return Ok(found);
        }
    }

    let time_selector = parse_selector("time[datetime]")?;
    if let Some(date) = document
        .select(&time_selector)
        .filter_map(|el| el.value().attr("datetime"))
        .find_map(parse_date)
    {
        return Ok(Some(date));
    }

    let ld_selector = parse_selector("script[type='application/ld+json']")?;
    for script in document.select(&ld_selector) {
        let raw = script.text().collect::<String>();
        let Ok(value) = serde_json::from_str::<Value>(&raw) else {
            continue;
        };
        if let Some(date) = json_ld_date(&value) {
            return Ok(Some(date));
        }
    }

    date_from_url(url)
}

/// Parse the common timestamp shapes found in pages into a calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }

    // Plain date, or a date prefix followed by something chrono rejects
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

fn json_ld_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::Object(map) => map
            .get("datePublished")
            .and_then(Value::as_str)
            .and_then(parse_date)
            .or_else(|| map.values().find_map(json_ld_date)),
        Value::Array(items) => items.iter().find_map(json_ld_date),
        _ => None,
    }
}

fn date_from_url(url: &str) -> NewsResult<Option<NaiveDate>> {
    let pattern = Regex::new(r"/(\d{4})/(\d{1,2})/(\d{1,2})(?:/|$)")
        .map_err(|e| NewsError::Extraction(e.to_string()))?;

    Ok(pattern.captures(url).and_then(|caps| {
        let year = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let day = caps[3].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }))
}

pub(crate) fn parse_selector(selector: &str) -> NewsResult<Selector> {
    Selector::parse(selector)
        .map_err(|e| NewsError::Extraction(format!("bad selector {}: {}", selector, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2024-03-09T10:15:00+05:30"), ymd(2024, 3, 9));
        assert_eq!(parse_date("Sat, 09 Mar 2024 10:00:00 +0530"), ymd(2024, 3, 9));
        assert_eq!(parse_date("2024-03-09 10:15:00"), ymd(2024, 3, 9));
        assert_eq!(parse_date("2024-03-09"), ymd(2024, 3, 9));
        assert_eq!(parse_date("  "), None);
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn test_date_keeps_publisher_offset() {
        // 23:30 in India is still the 9th locally
        assert_eq!(parse_date("2024-03-09T23:30:00+05:30"), ymd(2024, 3, 9));
    }

    #[test]
    fn test_meta_tag_date() {
        let html = Html::parse_document(
            r#"<html><head><meta property="article:published_time" content="2024-02-01T08:00:00Z"></head><body></body></html>"#,
        );
        assert_eq!(
            find_publish_date(&html, "https://example.test/a").unwrap(),
            ymd(2024, 2, 1)
        );
    }

    #[test]
    fn test_time_element_date() {
        let html = Html::parse_document(
            r#"<html><body><time datetime="2023-12-31">31 दिसंबर</time></body></html>"#,
        );
        assert_eq!(
            find_publish_date(&html, "https://example.test/a").unwrap(),
            ymd(2023, 12, 31)
        );
    }

    #[test]
    fn test_json_ld_date() {
        let html = Html::parse_document(
            r#"<html><head><script type="application/ld+json">{"@context":"https://schema.org","@graph":[{"@type":"NewsArticle","datePublished":"2024-05-20T06:00:00+05:30"}]}</script></head><body></body></html>"#,
        );
        assert_eq!(
            find_publish_date(&html, "https://example.test/a").unwrap(),
            ymd(2024, 5, 20)
        );
    }

    #[test]
    fn test_url_date_fallback() {
        let html = Html::parse_document("<html><body></body></html>");
        assert_eq!(
            find_publish_date(&html, "https://example.test/2024/7/04/story").unwrap(),
            ymd(2024, 7, 4)
        );
        assert_eq!(
            find_publish_date(&html, "https://example.test/story").unwrap(),
            None
        );
    }
}
