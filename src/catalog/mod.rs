mod config;

pub use config::{
    config_file_path, ensure_workspace_structure, load_or_default, save, workspace_root,
    AppConfig, HeuristicsSettings, ReportSettings, SuggestionSettings, WorkspacePaths,
    CONFIG_FILE_NAME,
};

use crate::heuristics::language::detect_language;
use crate::models::{
    MAX_DESCRIPTION_LEN, MAX_SEO_DESCRIPTION_LEN, MAX_SEO_TITLE_LEN, MAX_TITLE_LEN,
};
use crate::slug;
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use uuid::Uuid;

/// Highest variant index an example may select.
pub const MAX_VARIANT_INDEX: usize = 2;

/// A generation example: the prompt/image pair end users launch
/// generations from, together with its active SEO metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: Uuid,
    pub slug: String,
    /// Which of the last generated variants is live, 0..=2.
    pub seo_variant_index: usize,
    pub title: String,
    pub description: String,
    pub prompt: String,
    pub image_url: String,
    pub seo_title: String,
    pub seo_description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Incremented by usage events elsewhere; never mutated here.
    #[serde(default)]
    pub uses_count: u64,
    pub is_published: bool,
    /// Detected prompt language, recorded at save time.
    pub language: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub updated_by: Option<String>,
}

/// Editable fields of an example as staged by the admin console.
///
/// This is the exact payload `save_example` accepts; the field-wise
/// equality derive is what powers the pending-changes check in the
/// editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExampleDraft {
    pub slug: String,
    pub seo_variant_index: usize,
    pub title: String,
    pub description: String,
    pub prompt: String,
    pub image_url: String,
    pub seo_title: String,
    pub seo_description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_published: bool,
}

impl ExampleDraft {
    pub fn from_item(item: &ContentItem) -> Self {
        Self {
            slug: item.slug.clone(),
            seo_variant_index: item.seo_variant_index,
            title: item.title.clone(),
            description: item.description.clone(),
            prompt: item.prompt.clone(),
            image_url: item.image_url.clone(),
            seo_title: item.seo_title.clone(),
            seo_description: item.seo_description.clone(),
            tags: item.tags.clone(),
            is_published: item.is_published,
        }
    }
}

/// Manages the example catalog, configuration, and storage.
pub struct CatalogManager {
    pub config: AppConfig,
    pub paths: WorkspacePaths,
}

impl CatalogManager {
    pub fn new() -> Result<Self> {
        let paths = ensure_workspace_structure()?;
        let config = config::load_or_default()?;
        Ok(Self { config, paths })
    }

    /// Load a single example by id. `Ok(None)` when it does not exist.
    pub fn load_example(&self, id: Uuid) -> Result<Option<ContentItem>> {
        let path = self.paths.example_file(id);
        if !path.exists() {
            return Ok(None);
        }
        let data =
            fs::read(&path).with_context(|| format!("Failed to read example file {:?}", path))?;
        let item = serde_json::from_slice(&data)
            .with_context(|| format!("Failed to parse example file {:?}", path))?;
        Ok(Some(item))
    }

    /// Load every stored example.
    pub fn list_examples(&self) -> Result<Vec<ContentItem>> {
        let mut items = Vec::new();
        if !self.paths.catalog_dir.exists() {
            return Ok(items);
        }
        for entry in fs::read_dir(&self.paths.catalog_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let data = fs::read(&path)
                .with_context(|| format!("Failed to read example file {:?}", path))?;
            let item: ContentItem = serde_json::from_slice(&data)
                .with_context(|| format!("Failed to parse example file {:?}", path))?;
            items.push(item);
        }
        items.sort_by_key(|item| item.created_at);
        Ok(items)
    }

    /// Persist an example draft and return the canonical stored item.
    ///
    /// The server side of the save contract lives here: the slug is
    /// re-normalized and checked for uniqueness, field length limits are
    /// enforced, tags are deduplicated and lowercased, the prompt
    /// language is detected and audit fields are stamped. Violations are
    /// returned as errors untouched; there is no retry.
    pub fn save_example(
        &self,
        id: Uuid,
        draft: &ExampleDraft,
        editor: Option<&str>,
    ) -> Result<ContentItem> {
        if draft.prompt.trim().is_empty() {
            bail!("Example prompt is required");
        }
        if draft.image_url.trim().is_empty() {
            bail!("Example image URL is required");
        }
        if draft.seo_variant_index > MAX_VARIANT_INDEX {
            bail!(
                "seo_variant_index {} is out of range 0..={}",
                draft.seo_variant_index,
                MAX_VARIANT_INDEX
            );
        }
        check_limit("title", &draft.title, MAX_TITLE_LEN)?;
        check_limit("description", &draft.description, MAX_DESCRIPTION_LEN)?;
        check_limit("seo_title", &draft.seo_title, MAX_SEO_TITLE_LEN)?;
        check_limit(
            "seo_description",
            &draft.seo_description,
            MAX_SEO_DESCRIPTION_LEN,
        )?;

        let canonical_slug = slug::normalize(&draft.slug);
        if canonical_slug.is_empty() {
            bail!("Example slug is required");
        }
        for other in self.list_examples()? {
            if other.id != id && other.slug == canonical_slug {
                bail!("Slug '{}' is already used by example {}", canonical_slug, other.id);
            }
        }

        let existing = self.load_example(id)?;
        let now = Utc::now();
        let item = ContentItem {
            id,
            slug: canonical_slug,
            seo_variant_index: draft.seo_variant_index,
            title: draft.title.clone(),
            description: draft.description.clone(),
            prompt: draft.prompt.clone(),
            image_url: draft.image_url.clone(),
            seo_title: draft.seo_title.clone(),
            seo_description: draft.seo_description.clone(),
            tags: normalize_tags(&draft.tags),
            uses_count: existing.as_ref().map(|e| e.uses_count).unwrap_or(0),
            is_published: draft.is_published,
            language: detect_language(&draft.prompt),
            created_at: existing.as_ref().map(|e| e.created_at).unwrap_or(now),
            updated_at: now,
            updated_by: editor.map(str::to_string),
        };

        fs::create_dir_all(&self.paths.catalog_dir)?;
        let path = self.paths.example_file(id);
        let data = serde_json::to_vec_pretty(&item)?;
        fs::write(&path, data)
            .with_context(|| format!("Failed to write example file {:?}", path))?;
        Ok(item)
    }
}

/// Lowercase, trim and deduplicate tags, preserving first-seen order.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() || normalized.contains(&tag) {
            continue;
        }
        normalized.push(tag);
    }
    normalized
}

fn check_limit(field: &str, value: &str, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max {
        bail!("Field '{}' is {} characters long, limit is {}", field, len, max);
    }
    Ok(())
}
