use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::NewsError;

/// Structured content pulled out of an article page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedArticle {
    pub title: String,
    pub text: String,
    pub publish_date: Option<NaiveDate>,
}

/// Outcome of extracting a single URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum ExtractionResult {
    #[serde(rename = "success")]
    Success {
        title: String,
        content: String,
        text_length: usize,
        publish_date: Option<String>,
        url: String,
    },
    #[serde(rename = "failed")]
    Failed { url: String, error: String },
}

impl ExtractionResult {
    pub fn success(url: &str, article: ExtractedArticle) -> Self {
        let text_length = article.text.chars().count();

        ExtractionResult::Success {
            title: article.title,
            content: article.text,
            text_length,
            publish_date: article
                .publish_date
                .map(|d| d.format("%Y-%m-%d").to_string()),
            url: url.to_string(),
        }
    }

    pub fn failed(url: &str, error: &NewsError) -> Self {
        ExtractionResult::Failed {
            url: url.to_string(),
            error: error.to_string(),
        }
    }

    pub fn url(&self) -> &str {
        match self {
            ExtractionResult::Success { url, .. } | ExtractionResult::Failed { url, .. } => url,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionResult::Success { .. })
    }
}
