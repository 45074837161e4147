use serde::{Deserialize, Serialize};

/// Number of variants every generation cycle produces.
pub const VARIANT_SLOTS: usize = 3;

/// Field length limits enforced both by the builders and at save time.
pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 400;
pub const MAX_SEO_TITLE_LEN: usize = 120;
pub const MAX_SEO_DESCRIPTION_LEN: usize = 200;

/// One candidate metadata rendering for a generation example.
///
/// Variants are ephemeral: a generation cycle produces exactly three of
/// them, the operator applies one to the example draft, and the set is
/// discarded unless saved through the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoVariant {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub seo_title: String,
    pub seo_description: String,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
}

/// Ordered question/answer pair attached to a variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl SeoVariant {
    /// Clamp every text field to its storage limit.
    pub fn clip(mut self) -> Self {
        self.title = truncate_chars(&self.title, MAX_TITLE_LEN);
        self.description = truncate_chars(&self.description, MAX_DESCRIPTION_LEN);
        self.seo_title = truncate_chars(&self.seo_title, MAX_SEO_TITLE_LEN);
        self.seo_description = truncate_chars(&self.seo_description, MAX_SEO_DESCRIPTION_LEN);
        self
    }
}

/// Character-boundary-safe truncation with whitespace cleanup at the cut.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    cut.trim_end().to_string()
}
