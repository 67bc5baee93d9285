pub mod entry;
pub mod category;
pub mod classified;
pub mod extraction;

pub use entry::{MediaAttachment, RawEntry, MISSING_FIELD};
pub use category::Category;
pub use classified::ClassifiedEntry;
pub use extraction::{ExtractedArticle, ExtractionResult};
