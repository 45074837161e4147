//! Remote variant suggestion collaborator contract.
//!
//! The admin console prefers AI-assisted metadata drafts from the
//! content-suggestion service, but that call can fail, stall or come
//! back half-empty. The orchestrator in this module guarantees the
//! caller always receives exactly three fully populated variants, with
//! provenance saying where they really came from.

mod orchestrator;

pub use orchestrator::resolve_variants;

use crate::models::FaqEntry;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

pub use crate::models::VARIANT_SLOTS;

/// Draft fields handed to the suggestion service as context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestionDraft {
    pub example_id: Option<Uuid>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub prompt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
}

/// One variant as returned by the remote service. Every field is
/// optional: the service is allowed to answer partially.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestedVariant {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
}

/// Raw remote response before normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestionResponse {
    #[serde(default)]
    pub variants: Vec<SuggestedVariant>,
    #[serde(default)]
    pub selected_index: Option<usize>,
}

/// External content-suggestion collaborator.
///
/// Implementations must treat `timeout` as the total budget for the
/// call; the orchestrator additionally measures wall-clock time and
/// discards answers that arrive past the budget.
pub trait SuggestionService {
    fn suggest(&self, draft: &SuggestionDraft, timeout: Duration) -> Result<SuggestionResponse>;
}

/// Where a resolved variant set actually came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariantProvenance {
    /// All three slots came from the remote service untouched.
    External,
    /// Remote answer was padded or backfilled from the local builder.
    ExternalPartial,
    /// Local heuristic builder output, remote unavailable or skipped.
    LocalFallback,
}

/// Final resolution handed to the admin console.
#[derive(Debug, Clone)]
pub struct VariantResolution {
    pub variants: Vec<crate::models::SeoVariant>,
    pub selected_index: usize,
    pub provenance: VariantProvenance,
    /// Non-fatal notice to surface to the operator, e.g. that the
    /// remote service was unreachable and local drafts are shown.
    pub advisory: Option<String>,
}
