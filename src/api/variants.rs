use crate::catalog::CatalogManager;
use crate::models::SeoVariant;
use crate::orchestration::{log_event, EventType};
use crate::suggestion::{
    resolve_variants, SuggestionDraft, SuggestionService, VariantProvenance,
};
use anyhow::{bail, Result};
use serde_json::json;
use uuid::Uuid;

/// Current draft fields sent by the console when the operator asks for
/// fresh variants.
#[derive(Debug, Clone, Default)]
pub struct GenerateVariantsPayload {
    pub example_id: Option<Uuid>,
    pub prompt: String,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct GenerateVariantsResponse {
    pub variants: Vec<SeoVariant>,
    pub selected_index: usize,
    pub provenance: VariantProvenance,
    pub advisory: Option<String>,
}

/// Resolve the three candidate variants for a draft and log the
/// outcome. The suggestion call itself never persists anything; only
/// the provenance event is written.
pub fn generate_variants(
    manager: &CatalogManager,
    payload: GenerateVariantsPayload,
    service: &dyn SuggestionService,
) -> Result<GenerateVariantsResponse> {
    if payload.prompt.trim().is_empty() {
        bail!("prompt is required for variant generation");
    }

    let draft = SuggestionDraft {
        example_id: payload.example_id,
        slug: payload.slug,
        title: payload.title,
        description: payload.description,
        prompt: payload.prompt,
        tags: payload.tags,
        seo_title: payload.seo_title,
        seo_description: payload.seo_description,
    };

    let resolution = resolve_variants(
        &draft,
        service,
        &manager.config.suggestion,
        &manager.config.heuristics,
    );

    let event_type = match resolution.provenance {
        VariantProvenance::LocalFallback => EventType::VariantsFallback,
        _ => EventType::VariantsSuggested,
    };
    log_event(
        manager,
        payload.example_id,
        event_type,
        json!({
            "provenance": resolution.provenance,
            "selected_index": resolution.selected_index,
            "advisory": resolution.advisory,
            "slugs": resolution.variants.iter().map(|v| v.slug.clone()).collect::<Vec<_>>(),
        }),
    )?;

    Ok(GenerateVariantsResponse {
        variants: resolution.variants,
        selected_index: resolution.selected_index,
        provenance: resolution.provenance,
        advisory: resolution.advisory,
    })
}
