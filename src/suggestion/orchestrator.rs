use super::{
    SuggestedVariant, SuggestionDraft, SuggestionResponse, SuggestionService, VariantProvenance,
    VariantResolution, VARIANT_SLOTS,
};
use crate::catalog::{HeuristicsSettings, SuggestionSettings};
use crate::heuristics::builder::fallback_variants;
use crate::models::{
    truncate_chars, SeoVariant, MAX_DESCRIPTION_LEN, MAX_SEO_DESCRIPTION_LEN, MAX_SEO_TITLE_LEN,
    MAX_TITLE_LEN,
};
use crate::slug;
use std::time::{Duration, Instant};

/// Obtain the best available set of three variants for a draft.
///
/// Prefers the remote suggestion service; any failure, timeout or empty
/// answer falls back to the local heuristic builder with an advisory
/// for the operator. Partial answers are padded and backfilled slot by
/// slot so no field ever reaches the console blank. Never persists
/// anything.
pub fn resolve_variants(
    draft: &SuggestionDraft,
    service: &dyn SuggestionService,
    suggestion: &SuggestionSettings,
    heuristics: &HeuristicsSettings,
) -> VariantResolution {
    let fallback = fallback_variants(&draft.prompt, &draft.tags, heuristics);

    if !suggestion.remote_allowed {
        return local_resolution(fallback, None);
    }

    let timeout = Duration::from_millis(suggestion.timeout_ms.max(1));
    let started = Instant::now();
    let outcome = service.suggest(draft, timeout);
    let elapsed = started.elapsed();

    match outcome {
        Ok(_) if elapsed > timeout => local_resolution(
            fallback,
            Some(format!(
                "Suggestion service answered in {} ms, over the {} ms budget; showing local drafts",
                elapsed.as_millis(),
                timeout.as_millis()
            )),
        ),
        Ok(response) if response.variants.is_empty() => local_resolution(
            fallback,
            Some("Suggestion service returned no variants; showing local drafts".to_string()),
        ),
        Ok(response) => merge_response(response, fallback),
        Err(err) => local_resolution(
            fallback,
            Some(format!(
                "Suggestion service unavailable ({}); showing local drafts",
                err
            )),
        ),
    }
}

fn local_resolution(fallback: Vec<SeoVariant>, advisory: Option<String>) -> VariantResolution {
    VariantResolution {
        variants: fallback,
        selected_index: 0,
        provenance: VariantProvenance::LocalFallback,
        advisory,
    }
}

/// Normalize a non-empty remote answer to exactly three variants.
///
/// Extra variants beyond the third are dropped; missing slots are
/// filled with the local fallback; inside each remote slot, empty
/// fields are backfilled from the fallback variant at the same index.
fn merge_response(response: SuggestionResponse, fallback: Vec<SeoVariant>) -> VariantResolution {
    let mut touched = response.variants.len() != VARIANT_SLOTS;
    let mut variants = Vec::with_capacity(VARIANT_SLOTS);
    for (slot, local) in fallback.iter().enumerate() {
        match response.variants.get(slot) {
            Some(remote) => variants.push(merge_slot(remote, local, &mut touched)),
            None => variants.push(local.clone()),
        }
    }

    let selected_index = response
        .selected_index
        .unwrap_or(0)
        .min(VARIANT_SLOTS - 1);

    VariantResolution {
        variants,
        selected_index,
        provenance: if touched {
            VariantProvenance::ExternalPartial
        } else {
            VariantProvenance::External
        },
        advisory: None,
    }
}

fn merge_slot(remote: &SuggestedVariant, local: &SeoVariant, touched: &mut bool) -> SeoVariant {
    let title = pick(&remote.title, &local.title, MAX_TITLE_LEN, touched);
    let description = pick(&remote.description, &local.description, MAX_DESCRIPTION_LEN, touched);
    let seo_title = pick(&remote.seo_title, &local.seo_title, MAX_SEO_TITLE_LEN, touched);
    let seo_description = pick(
        &remote.seo_description,
        &local.seo_description,
        MAX_SEO_DESCRIPTION_LEN,
        touched,
    );

    let slug = match remote.slug.as_deref().map(slug::normalize) {
        Some(normalized) if !normalized.is_empty() => normalized,
        _ => {
            *touched = true;
            local.slug.clone()
        }
    };

    // An empty FAQ is a legitimate remote answer, not a gap to backfill.
    let faq = remote.faq.clone();

    SeoVariant {
        slug,
        title,
        description,
        seo_title,
        seo_description,
        faq,
    }
}

fn pick(remote: &Option<String>, local: &str, max: usize, touched: &mut bool) -> String {
    match remote.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => truncate_chars(value, max),
        _ => {
            *touched = true;
            local.to_string()
        }
    }
}
