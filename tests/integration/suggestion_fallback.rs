use super::IntegrationHarness;
use anyhow::{bail, Result};
use seobase::api::{generate_variants, GenerateVariantsPayload};
use seobase::catalog::HeuristicsSettings;
use seobase::heuristics::fallback_variants;
use seobase::orchestration::{EventType, OrchestrationLog};
use seobase::suggestion::{
    SuggestedVariant, SuggestionDraft, SuggestionResponse, SuggestionService, VariantProvenance,
};
use std::time::Duration;

const PROMPT: &str = "Red couture dress, studio lighting, full-length";

struct PartialService;

impl SuggestionService for PartialService {
    fn suggest(&self, _: &SuggestionDraft, _: Duration) -> Result<SuggestionResponse> {
        Ok(SuggestionResponse {
            variants: vec![SuggestedVariant {
                slug: Some("ai-red-dress".to_string()),
                title: Some("Красное платье от кутюр".to_string()),
                description: Some("Съёмка красного платья в студии".to_string()),
                seo_title: Some("Красное платье — пример генерации".to_string()),
                seo_description: Some("".to_string()),
                faq: Vec::new(),
            }],
            selected_index: None,
        })
    }
}

struct DownService;

impl SuggestionService for DownService {
    fn suggest(&self, _: &SuggestionDraft, _: Duration) -> Result<SuggestionResponse> {
        bail!("suggestion backend timed out")
    }
}

struct SlowService;

impl SuggestionService for SlowService {
    fn suggest(&self, _: &SuggestionDraft, _: Duration) -> Result<SuggestionResponse> {
        std::thread::sleep(Duration::from_millis(40));
        Ok(SuggestionResponse {
            variants: vec![SuggestedVariant::default()],
            selected_index: None,
        })
    }
}

fn payload() -> GenerateVariantsPayload {
    GenerateVariantsPayload {
        prompt: PROMPT.to_string(),
        ..GenerateVariantsPayload::default()
    }
}

#[test]
fn partial_answer_is_padded_and_backfilled_per_slot() -> Result<()> {
    let harness = IntegrationHarness::new();
    let manager = harness.catalog_manager();

    let response = generate_variants(&manager, payload(), &PartialService)?;
    assert_eq!(response.variants.len(), 3);
    assert_eq!(response.provenance, VariantProvenance::ExternalPartial);
    assert_eq!(response.selected_index, 0);

    let local = fallback_variants(PROMPT, &[], &HeuristicsSettings::default());

    // Slot 0 keeps the remote fields and backfills only the empty one.
    assert_eq!(response.variants[0].slug, "ai-red-dress");
    assert_eq!(response.variants[0].title, "Красное платье от кутюр");
    assert_eq!(response.variants[0].seo_description, local[0].seo_description);

    // Slots 1 and 2 are entirely the local fallback.
    assert_eq!(response.variants[1], local[1]);
    assert_eq!(response.variants[2], local[2]);
    Ok(())
}

#[test]
fn failure_surfaces_as_advisory_with_local_variants() -> Result<()> {
    let harness = IntegrationHarness::new();
    let manager = harness.catalog_manager();

    let response = generate_variants(&manager, payload(), &DownService)?;
    assert_eq!(response.variants.len(), 3);
    assert_eq!(response.provenance, VariantProvenance::LocalFallback);
    let advisory = response.advisory.expect("advisory expected");
    assert!(advisory.contains("suggestion backend timed out"), "advisory: {advisory}");

    let local = fallback_variants(PROMPT, &[], &HeuristicsSettings::default());
    assert_eq!(response.variants, local);

    // The outcome is recorded in the event log.
    let events = OrchestrationLog::for_workspace(&manager.paths).read_events()?;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type, EventType::VariantsFallback);
    Ok(())
}

#[test]
fn overrunning_the_budget_falls_back_even_on_success() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut manager = harness.catalog_manager();
    manager.config.suggestion.timeout_ms = 5;

    let response = generate_variants(&manager, payload(), &SlowService)?;
    assert_eq!(response.provenance, VariantProvenance::LocalFallback);
    let advisory = response.advisory.expect("advisory expected");
    assert!(advisory.contains("budget"), "advisory: {advisory}");
    Ok(())
}

#[test]
fn successful_suggestion_is_logged_with_provenance() -> Result<()> {
    let harness = IntegrationHarness::new();
    let manager = harness.catalog_manager();

    generate_variants(&manager, payload(), &PartialService)?;
    let events = OrchestrationLog::for_workspace(&manager.paths).read_events()?;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type, EventType::VariantsSuggested);
    assert_eq!(events[0].details["provenance"], "ExternalPartial");
    Ok(())
}

#[test]
fn empty_prompt_is_rejected_before_any_call() {
    let harness = IntegrationHarness::new();
    let manager = harness.catalog_manager();

    let err = generate_variants(
        &manager,
        GenerateVariantsPayload::default(),
        &DownService,
    )
    .unwrap_err();
    assert!(err.to_string().contains("prompt is required"), "error: {err}");
}
