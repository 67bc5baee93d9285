pub mod aggregator_service;
pub mod selector_service;
pub mod article_service;
pub mod pipeline_service;

pub use aggregator_service::FeedAggregator;
pub use selector_service::EntrySelector;
pub use article_service::ArticleService;
pub use pipeline_service::Pipeline;
