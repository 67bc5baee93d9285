use crate::domain::ExtractedArticle;
use crate::errors::NewsResult;

/// Downloads an article page and pulls out its structured content.
#[cfg_attr(test, mockall::automock)]
pub trait ArticleExtractor: Send + Sync {
    fn extract(&self, url: &str) -> NewsResult<ExtractedArticle>;
}
