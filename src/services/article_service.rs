use tracing::{info, warn};

use crate::domain::ExtractionResult;
use crate::extract::ArticleExtractor;

/// Turns article URLs into extraction records, one per URL.
pub struct ArticleService<E: ArticleExtractor> {
    extractor: E,
}

impl<E: ArticleExtractor> ArticleService<E> {
    pub fn new(extractor: E) -> Self {
        Self { extractor }
    }

    /// Extract one URL; any failure becomes a `Failed` record.
    pub fn extract(&self, url: &str) -> ExtractionResult {
        match self.extractor.extract(url) {
            Ok(article) => ExtractionResult::success(url, article),
            Err(e) => {
                warn!(%url, error = %e, "Article extraction failed");
                ExtractionResult::failed(url, &e)
            }
        }
    }

    pub fn extract_all<S: AsRef<str>>(&self, urls: &[S]) -> Vec<ExtractionResult> {
        let results: Vec<ExtractionResult> =
            urls.iter().map(|url| self.extract(url.as_ref())).collect();

        let succeeded = results.iter().filter(|r| r.is_success()).count();
        info!(
            total = results.len(),
            succeeded,
            failed = results.len() - succeeded,
            "Extracted articles"
        );

        results
    }
}
