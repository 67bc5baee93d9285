use crate::domain::RawEntry;
use crate::errors::NewsResult;

/// Retrieves and parses the feed published at a URL.
#[cfg_attr(test, mockall::automock)]
pub trait FeedFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> NewsResult<Vec<RawEntry>>;
}
