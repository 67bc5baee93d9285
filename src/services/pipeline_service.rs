use tracing::info;

use crate::domain::{ClassifiedEntry, ExtractionResult};
use crate::extract::ArticleExtractor;
use crate::services::{ArticleService, EntrySelector, FeedAggregator};
use crate::sources::FeedFetcher;

/// Aggregation, selection and extraction wired in sequence.
pub struct Pipeline<F: FeedFetcher, E: ArticleExtractor> {
    aggregator: FeedAggregator<F>,
    selector: EntrySelector,
    articles: ArticleService<E>,
}

impl<F: FeedFetcher, E: ArticleExtractor> Pipeline<F, E> {
    pub fn new(
        aggregator: FeedAggregator<F>,
        selector: EntrySelector,
        articles: ArticleService<E>,
    ) -> Self {
        Self {
            aggregator,
            selector,
            articles,
        }
    }

    /// Fetch every source and keep the disaster-related entries
    pub fn select<S: AsRef<str>>(&self, sources: &[S]) -> Vec<ClassifiedEntry> {
        let entries = self.aggregator.fetch_all(sources);
        let selected = self.selector.select(&entries);

        info!(
            sources = sources.len(),
            entries = entries.len(),
            selected = selected.len(),
            "Selected disaster entries"
        );

        selected
    }

    pub fn run<S: AsRef<str>>(&self, sources: &[S]) -> Vec<ExtractionResult> {
        let urls: Vec<String> = self
            .select(sources)
            .into_iter()
            .map(|entry| entry.link)
            .collect();

        self.articles.extract_all(&urls)
    }
}
