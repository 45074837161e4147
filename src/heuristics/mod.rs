pub mod builder;
pub mod highlights;
pub mod language;
pub mod theme;

pub use builder::{derive_title, fallback_variants};
pub use highlights::extract_highlights;
pub use language::{cyrillic_ratio, detect_language, is_majority_russian};
pub use theme::{infer_theme, GENERIC_THEME};
