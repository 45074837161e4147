//! Variant selection state for the example editor.
//!
//! Holds the editable draft of one example, the last generated variant
//! set and the last persisted snapshot. All transitions are plain
//! methods on a value object, so selection mechanics are testable
//! without any rendering surface. Nothing here writes to storage until
//! `save` is called explicitly.

use crate::catalog::{CatalogManager, ContentItem, ExampleDraft};
use crate::models::SeoVariant;
use crate::suggestion::VariantResolution;
use anyhow::Result;
use uuid::Uuid;

/// Per-item, per-session editing state.
#[derive(Debug, Clone)]
pub struct VariantEditor {
    pub example_id: Uuid,
    pub draft: ExampleDraft,
    variants: Vec<SeoVariant>,
    snapshot: ExampleDraft,
}

/// Field-level manual edits staged into the draft. `None` leaves the
/// field untouched.
#[derive(Debug, Clone, Default)]
pub struct DraftUpdate {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub prompt: Option<String>,
    pub image_url: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_published: Option<bool>,
}

impl VariantEditor {
    /// Open an editor over a stored example.
    pub fn open(item: &ContentItem) -> Self {
        let draft = ExampleDraft::from_item(item);
        Self {
            example_id: item.id,
            snapshot: draft.clone(),
            draft,
            variants: Vec::new(),
        }
    }

    /// Start an editor for a brand-new example.
    pub fn create(example_id: Uuid, draft: ExampleDraft) -> Self {
        Self {
            example_id,
            snapshot: draft.clone(),
            draft,
            variants: Vec::new(),
        }
    }

    pub fn variants(&self) -> &[SeoVariant] {
        &self.variants
    }

    /// Install a freshly resolved variant set without touching the
    /// draft. The operator still has to apply a variant explicitly.
    pub fn install_variants(&mut self, resolution: &VariantResolution) {
        self.variants = resolution.variants.clone();
    }

    /// Copy the chosen variant's metadata fields into the draft and
    /// record its index as the pending selection. Out-of-range indices
    /// are clamped to the last variant. Returns the index actually
    /// applied, or `None` when no variants are installed.
    pub fn apply_variant(&mut self, index: usize) -> Option<usize> {
        if self.variants.is_empty() {
            return None;
        }
        let clamped = index.min(self.variants.len() - 1);
        let variant = &self.variants[clamped];
        self.draft.slug = variant.slug.clone();
        self.draft.title = variant.title.clone();
        self.draft.description = variant.description.clone();
        self.draft.seo_title = variant.seo_title.clone();
        self.draft.seo_description = variant.seo_description.clone();
        self.draft.seo_variant_index = clamped;
        Some(clamped)
    }

    /// Stage manual field edits into the draft.
    pub fn stage(&mut self, update: DraftUpdate) {
        if let Some(slug) = update.slug {
            self.draft.slug = slug;
        }
        if let Some(title) = update.title {
            self.draft.title = title;
        }
        if let Some(description) = update.description {
            self.draft.description = description;
        }
        if let Some(prompt) = update.prompt {
            self.draft.prompt = prompt;
        }
        if let Some(image_url) = update.image_url {
            self.draft.image_url = image_url;
        }
        if let Some(seo_title) = update.seo_title {
            self.draft.seo_title = seo_title;
        }
        if let Some(seo_description) = update.seo_description {
            self.draft.seo_description = seo_description;
        }
        if let Some(tags) = update.tags {
            self.draft.tags = tags;
        }
        if let Some(is_published) = update.is_published {
            self.draft.is_published = is_published;
        }
    }

    /// Whether the draft differs from the last persisted snapshot in
    /// any field, `seo_variant_index` included. The save button in the
    /// console is enabled off this check.
    pub fn has_pending_changes(&self) -> bool {
        self.draft != self.snapshot
    }

    /// Persist the draft through the catalog and adopt the canonical
    /// item the server returns (the server may normalize fields
    /// further, e.g. the slug). Errors propagate untouched.
    pub fn save(&mut self, manager: &CatalogManager, editor: Option<&str>) -> Result<ContentItem> {
        let saved = manager.save_example(self.example_id, &self.draft, editor)?;
        self.draft = ExampleDraft::from_item(&saved);
        self.snapshot = self.draft.clone();
        Ok(saved)
    }
}
