pub mod traits;
pub mod language;
pub mod date;
pub mod html;

pub use traits::ArticleExtractor;
pub use language::Language;
pub use html::HtmlArticleExtractor;
