pub mod analytics;
pub mod api;
pub mod catalog;
pub mod editor;
pub mod heuristics;
pub mod models;
pub mod orchestration;
pub mod slug;
pub mod suggestion;

// Re-export commonly used types for convenience.
pub use catalog::{AppConfig, CatalogManager, ContentItem, ExampleDraft};
pub use models::{FaqEntry, SeoVariant};
pub use orchestration::{OrchestrationEvent, OrchestrationLog};
pub use suggestion::{SuggestionService, VariantProvenance, VariantResolution};
