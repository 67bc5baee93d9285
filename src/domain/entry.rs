use serde::{Deserialize, Serialize};

/// Placeholder used for any entry field the feed did not provide.
pub const MISSING_FIELD: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAttachment {
    pub url: String,
}

/// One item parsed out of a feed, before classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    /// Publish timestamp re-rendered as RFC 3339; feed parsing does not keep
    /// the feed's raw date string.
    pub published: Option<String>,
    pub media: Vec<MediaAttachment>,
}

impl RawEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_link(mut self, link: Option<String>) -> Self {
        self.link = link;
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_published(mut self, published: Option<String>) -> Self {
        self.published = published;
        self
    }

    pub fn with_media(mut self, media: Vec<MediaAttachment>) -> Self {
        self.media = media;
        self
    }

    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or(MISSING_FIELD)
    }

    pub fn link_or_default(&self) -> &str {
        self.link.as_deref().unwrap_or(MISSING_FIELD)
    }

    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or(MISSING_FIELD)
    }

    pub fn published_or_default(&self) -> &str {
        self.published.as_deref().unwrap_or(MISSING_FIELD)
    }

    /// Text the classifier sees: title and description joined by a space,
    /// with missing fields already replaced by the placeholder.
    pub fn classification_text(&self) -> String {
        format!(
            "{} {}",
            self.title_or_default(),
            self.description_or_default()
        )
    }

    /// URL of the first media attachment, if any
    pub fn first_media_url(&self) -> Option<&str> {
        self.media.first().map(|m| m.url.as_str())
    }
}
