pub mod taxonomy;

pub use taxonomy::Taxonomy;

use crate::domain::Category;

/// Keyword classifier over an injected [`Taxonomy`].
///
/// Natural-disaster terms are checked first, so text matching both lists is
/// always [`Category::Natural`].
#[derive(Debug, Clone, Default)]
pub struct DisasterClassifier {
    taxonomy: Taxonomy,
}

impl DisasterClassifier {
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self { taxonomy }
    }

    pub fn classify(&self, text: &str) -> Option<Category> {
        let text = text.to_lowercase();

        if contains_any(&text, self.taxonomy.natural()) {
            return Some(Category::Natural);
        }

        if contains_any(&text, self.taxonomy.man_made()) {
            return Some(Category::ManMade);
        }

        None
    }
}

fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| text.contains(k.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hindi() -> DisasterClassifier {
        DisasterClassifier::new(Taxonomy::hindi())
    }

    #[test]
    fn test_natural_keyword() {
        assert_eq!(hindi().classify("भूकंप से तबाही"), Some(Category::Natural));
    }

    #[test]
    fn test_man_made_keyword() {
        assert_eq!(
            hindi().classify("कारखाने में विस्फोट"),
            Some(Category::ManMade)
        );
    }

    #[test]
    fn test_no_keyword() {
        assert_eq!(hindi().classify("सामान्य समाचार"), None);
        assert_eq!(hindi().classify("N/A N/A"), None);
        assert_eq!(hindi().classify(""), None);
    }

    #[test]
    fn test_natural_takes_precedence() {
        let classifier = hindi();

        assert_eq!(
            classifier.classify("कारखाने में विस्फोट के बाद भूकंप"),
            Some(Category::Natural)
        );
        // "आग" is man-made on its own but part of the natural phrase
        assert_eq!(
            classifier.classify("जंगल की आग फैली"),
            Some(Category::Natural)
        );
    }

    #[test]
    fn test_substring_match() {
        assert_eq!(hindi().classify("भीषणबाढ़ग्रस्त"), Some(Category::Natural));
    }

    #[test]
    fn test_case_insensitive() {
        let classifier = DisasterClassifier::new(Taxonomy::new(["earthquake"], ["explosion"]));

        for text in ["EARTHQUAKE hits", "Factory Explosion", "nothing here"] {
            assert_eq!(
                classifier.classify(text),
                classifier.classify(&text.to_lowercase())
            );
        }
        assert_eq!(
            classifier.classify("Massive EARTHQUAKE"),
            Some(Category::Natural)
        );
    }

    #[test]
    fn test_lowercasing_keeps_devanagari_intact() {
        let text = "भूकंप से तबाही";
        assert_eq!(text.to_lowercase(), text);
    }

    #[test]
    fn test_padded_keyword_acts_as_word_boundary() {
        let classifier = DisasterClassifier::new(Taxonomy::new([" fire "], ["blast"]));

        assert_eq!(classifier.classify("forest fire spreads"), Some(Category::Natural));
        assert_eq!(classifier.classify("firefighters on strike"), None);
    }

    #[test]
    fn test_independent_taxonomies() {
        let english = DisasterClassifier::new(Taxonomy::new(["flood"], ["blast"]));
        let hindi = hindi();

        assert_eq!(english.classify("flood warning"), Some(Category::Natural));
        assert_eq!(hindi.classify("flood warning"), None);
    }
}
