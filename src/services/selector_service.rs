use tracing::debug;

use crate::classifier::DisasterClassifier;
use crate::domain::{ClassifiedEntry, RawEntry};

/// Keeps only the entries the classifier recognises as disaster news.
pub struct EntrySelector {
    classifier: DisasterClassifier,
}

impl EntrySelector {
    pub fn new(classifier: DisasterClassifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &DisasterClassifier {
        &self.classifier
    }

    pub fn select(&self, entries: &[RawEntry]) -> Vec<ClassifiedEntry> {
        let selected: Vec<ClassifiedEntry> = entries
            .iter()
            .filter_map(|entry| {
                self.classifier
                    .classify(&entry.classification_text())
                    .map(|category| ClassifiedEntry::from_entry(entry, category))
            })
            .collect();

        debug!(
            input = entries.len(),
            selected = selected.len(),
            "Classified feed entries"
        );

        selected
    }
}
