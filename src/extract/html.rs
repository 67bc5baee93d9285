use std::time::Duration;

use reqwest::blocking::Client;
use scraper::{ElementRef, Html};
use tracing::debug;

use crate::domain::ExtractedArticle;
use crate::errors::{NewsError, NewsResult};
use crate::extract::date::{find_publish_date, parse_selector};
use crate::extract::language::Language;
use crate::extract::traits::ArticleExtractor;
use crate::http;

/// Paragraphs with fewer stopwords than this do not vote for their container.
const MIN_PARAGRAPH_STOPWORDS: usize = 2;

/// Article extractor that scores paragraph containers by stopword density
/// in a fixed language.
pub struct HtmlArticleExtractor {
    client: Client,
    language: Language,
}

impl HtmlArticleExtractor {
    pub fn new(language: Language, timeout: Duration) -> NewsResult<Self> {
        Ok(Self::with_client(http::build_client(timeout)?, language))
    }

    pub fn with_client(client: Client, language: Language) -> Self {
        Self { client, language }
    }

    /// Extract article structure from an already downloaded page.
    pub fn parse_html(html: &str, url: &str, language: Language) -> NewsResult<ExtractedArticle> {
        let document = Html::parse_document(html);

        let title = find_title(&document)?;
        let text = find_body_text(&document, language)?;
        if text.is_empty() {
            return Err(NewsError::MissingContent("body text".to_string()));
        }
        let publish_date = find_publish_date(&document, url)?;

        Ok(ExtractedArticle {
            title,
            text,
            publish_date,
        })
    }
}

impl ArticleExtractor for HtmlArticleExtractor {
    fn extract(&self, url: &str) -> NewsResult<ExtractedArticle> {
        http::validate_url(url)?;

        let response = http::get_checked(&self.client, url)?;
        let html = response.text()?;
        debug!(%url, bytes = html.len(), "Downloaded article page");

        Self::parse_html(&html, url, self.language)
    }
}

fn find_title(document: &Html) -> NewsResult<String> {
    let og_title = parse_selector("meta[property='og:title']")?;
    if let Some(title) = document
        .select(&og_title)
        .filter_map(|el| el.value().attr("content"))
        .map(normalize_whitespace)
        .find(|t| !t.is_empty())
    {
        return Ok(title);
    }

    for selector in ["title", "h1"] {
        let selector = parse_selector(selector)?;
        if let Some(title) = document
            .select(&selector)
            .map(element_text)
            .find(|t| !t.is_empty())
        {
            return Ok(title);
        }
    }

    Ok(String::new())
}

/// Body text from the best-scoring paragraph container, or from every
/// paragraph on the page when no container scores.
fn find_body_text(document: &Html, language: Language) -> NewsResult<String> {
    let paragraph = parse_selector("p")?;

    let mut candidates: Vec<(ElementRef, usize)> = Vec::new();
    for p in document.select(&paragraph) {
        let score = language.stopword_count(&element_text(p));
        if score < MIN_PARAGRAPH_STOPWORDS {
            continue;
        }
        let Some(parent) = p.parent().and_then(ElementRef::wrap) else {
            continue;
        };
        match candidates.iter_mut().find(|(el, _)| el.id() == parent.id()) {
            Some((_, total)) => *total += score,
            None => candidates.push((parent, score)),
        }
    }

    // max_by_key keeps the last maximum; reverse so document order wins ties
    let best = candidates
        .iter()
        .rev()
        .max_by_key(|(_, score)| *score)
        .map(|(el, _)| *el);

    let paragraphs: Vec<String> = match best {
        Some(container) => container
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "p")
            .map(element_text)
            .filter(|t| !t.is_empty())
            .collect(),
        None => document
            .select(&paragraph)
            .map(element_text)
            .filter(|t| !t.is_empty())
            .collect(),
    };

    Ok(paragraphs.join("\n\n"))
}

fn element_text(element: ElementRef) -> String {
    normalize_whitespace(&element.text().collect::<String>())
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
