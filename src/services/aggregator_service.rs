use tracing::{info, warn};

use crate::domain::RawEntry;
use crate::sources::FeedFetcher;

/// Collects entries from many feed sources, isolating each source's failure.
pub struct FeedAggregator<F: FeedFetcher> {
    fetcher: F,
}

impl<F: FeedFetcher> FeedAggregator<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetch a single source. Failures and empty feeds yield no entries.
    pub fn fetch(&self, source: &str) -> Vec<RawEntry> {
        match self.fetcher.fetch(source) {
            Ok(entries) if entries.is_empty() => {
                warn!(%source, "No entries found in feed");
                entries
            }
            Ok(entries) => {
                info!(%source, count = entries.len(), "Fetched feed");
                entries
            }
            Err(e) => {
                // Log error but continue with other feeds
                warn!(%source, error = %e, "Error fetching feed");
                Vec::new()
            }
        }
    }

    /// Fetch every source in order and concatenate their entries
    pub fn fetch_all<S: AsRef<str>>(&self, sources: &[S]) -> Vec<RawEntry> {
        sources
            .iter()
            .flat_map(|source| self.fetch(source.as_ref()))
            .collect()
    }
}
