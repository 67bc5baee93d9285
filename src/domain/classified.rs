use serde::{Deserialize, Serialize};

use super::{Category, RawEntry};

/// A feed entry that matched the disaster taxonomy.
///
/// Text fields carry the placeholder defaults of [`RawEntry`], so an entry
/// without a link still reaches extraction with `"N/A"` as its URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedEntry {
    pub title: String,
    pub link: String,
    pub description: String,
    #[serde(rename = "publish_date")]
    pub published: String,
    #[serde(rename = "disaster_type")]
    pub category: Category,
    pub image_url: Option<String>,
}

impl ClassifiedEntry {
    pub fn from_entry(entry: &RawEntry, category: Category) -> Self {
        Self {
            title: entry.title_or_default().to_string(),
            link: entry.link_or_default().to_string(),
            description: entry.description_or_default().to_string(),
            published: entry.published_or_default().to_string(),
            category,
            image_url: entry.first_media_url().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MediaAttachment;

    #[test]
    fn test_from_entry_copies_first_image() {
        let entry = RawEntry::new()
            .with_title(Some("Flood".to_string()))
            .with_link(Some("https://example.test/a".to_string()))
            .with_media(vec![MediaAttachment {
                url: "https://example.test/a.jpg".to_string(),
            }]);

        let classified = ClassifiedEntry::from_entry(&entry, Category::Natural);

        assert_eq!(classified.title, "Flood");
        assert_eq!(classified.link, "https://example.test/a");
        assert_eq!(classified.description, "N/A");
        assert_eq!(classified.published, "N/A");
        assert_eq!(classified.image_url.as_deref(), Some("https://example.test/a.jpg"));
    }

    #[test]
    fn test_serialized_field_names() {
        let entry = RawEntry::new().with_title(Some("Blast".to_string()));
        let classified = ClassifiedEntry::from_entry(&entry, Category::ManMade);

        let json = serde_json::to_value(&classified).unwrap();
        assert_eq!(json["disaster_type"], "man-made");
        assert_eq!(json["publish_date"], "N/A");
        assert_eq!(json["link"], "N/A");
        assert!(json["image_url"].is_null());
    }
}
