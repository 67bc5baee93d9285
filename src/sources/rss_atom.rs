use std::time::Duration;

use feed_rs::parser;
use reqwest::blocking::Client;

use crate::domain::{MediaAttachment, RawEntry};
use crate::errors::{NewsError, NewsResult};
use crate::http;
use crate::sources::traits::FeedFetcher;

/// RSS/Atom/JSON feed source backed by feed-rs.
pub struct RssAtomSource {
    client: Client,
}

impl RssAtomSource {
    pub fn new(timeout: Duration) -> NewsResult<Self> {
        Ok(Self::with_client(http::build_client(timeout)?))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn fetch_and_parse(&self, url: &str) -> NewsResult<feed_rs::model::Feed> {
        let response = http::get_checked(&self.client, url)?;
        let bytes = response.bytes()?;

        Self::parse_bytes(&bytes)
    }

    fn parse_bytes(bytes: &[u8]) -> NewsResult<feed_rs::model::Feed> {
        parser::parse(bytes).map_err(|e| NewsError::FeedParse(e.to_string()))
    }

    /// Parse entries from raw feed bytes
    pub fn entries_from_bytes(bytes: &[u8]) -> NewsResult<Vec<RawEntry>> {
        let parsed = Self::parse_bytes(bytes)?;
        Ok(Self::entries_from_feed(parsed))
    }

    fn entries_from_feed(feed: feed_rs::model::Feed) -> Vec<RawEntry> {
        feed.entries.into_iter().map(Self::entry_from_model).collect()
    }

    fn entry_from_model(entry: feed_rs::model::Entry) -> RawEntry {
        let title = entry.title.map(|t| t.content);
        let link = entry.links.into_iter().next().map(|l| l.href);
        let description = entry.summary.map(|s| s.content);
        let published = entry.published.map(|dt| dt.to_rfc3339());

        // media:content and enclosures both land in `media`; only untyped
        // or image content can serve as the entry's image
        let media: Vec<MediaAttachment> = entry
            .media
            .iter()
            .flat_map(|m| m.content.iter())
            .filter(|c| Self::is_image_content(c))
            .filter_map(|c| c.url.as_ref())
            .map(|u| MediaAttachment {
                url: u.as_str().to_string(),
            })
            .collect();

        RawEntry::new()
            .with_title(title)
            .with_link(link)
            .with_description(description)
            .with_published(published)
            .with_media(media)
    }

    fn is_image_content(content: &feed_rs::model::MediaContent) -> bool {
        content
            .content_type
            .as_ref()
            .map_or(true, |mime| mime.essence().to_string().starts_with("image/"))
    }
}

impl FeedFetcher for RssAtomSource {
    fn fetch(&self, url: &str) -> NewsResult<Vec<RawEntry>> {
        http::validate_url(url)?;

        let parsed = self.fetch_and_parse(url)?;
        Ok(Self::entries_from_feed(parsed))
    }
}
