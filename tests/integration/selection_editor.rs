use super::IntegrationHarness;
use anyhow::Result;
use seobase::catalog::ExampleDraft;
use seobase::editor::{DraftUpdate, VariantEditor};
use seobase::models::SeoVariant;
use seobase::suggestion::{VariantProvenance, VariantResolution};
use uuid::Uuid;

fn draft(slug: &str) -> ExampleDraft {
    ExampleDraft {
        slug: slug.to_string(),
        seo_variant_index: 0,
        title: "Студийная фэшн-съёмка".to_string(),
        description: "Описание примера".to_string(),
        prompt: "Red couture dress, studio lighting".to_string(),
        image_url: "https://cdn.example.com/looks/1.jpg".to_string(),
        seo_title: "Студийная фэшн-съёмка".to_string(),
        seo_description: "Пример генерации".to_string(),
        tags: vec!["Fashion".to_string(), "fashion".to_string()],
        is_published: false,
    }
}

fn variant(n: usize) -> SeoVariant {
    SeoVariant {
        slug: format!("variant-slug-{}", n),
        title: format!("Вариант {}", n),
        description: format!("Описание варианта {}", n),
        seo_title: format!("SEO вариант {}", n),
        seo_description: format!("SEO описание {}", n),
        faq: Vec::new(),
    }
}

fn resolution() -> VariantResolution {
    VariantResolution {
        variants: (0..3).map(variant).collect(),
        selected_index: 0,
        provenance: VariantProvenance::LocalFallback,
        advisory: None,
    }
}

#[test]
fn apply_variant_clamps_out_of_range_index() {
    let mut editor = VariantEditor::create(Uuid::new_v4(), draft("primer"));
    editor.install_variants(&resolution());

    let applied = editor.apply_variant(99).expect("variants installed");
    assert_eq!(applied, 2);
    assert_eq!(editor.draft.seo_variant_index, 2);
    assert_eq!(editor.draft.slug, "variant-slug-2");
    assert_eq!(editor.draft.title, "Вариант 2");
    // Prompt and image are not variant fields and must survive.
    assert_eq!(editor.draft.prompt, "Red couture dress, studio lighting");
}

#[test]
fn apply_variant_without_variants_is_a_no_op() {
    let mut editor = VariantEditor::create(Uuid::new_v4(), draft("primer"));
    assert_eq!(editor.apply_variant(1), None);
    assert_eq!(editor.draft.seo_variant_index, 0);
}

#[test]
fn selection_index_alone_counts_as_a_pending_change() -> Result<()> {
    let harness = IntegrationHarness::new();
    let manager = harness.catalog_manager();
    let id = Uuid::new_v4();

    let mut editor = VariantEditor::create(id, draft("primer"));
    editor.save(&manager, Some("ops@admin"))?;
    assert!(!editor.has_pending_changes());

    // A variant whose fields mirror the draft: applying it changes
    // nothing but the selection index.
    let mirror = SeoVariant {
        slug: editor.draft.slug.clone(),
        title: editor.draft.title.clone(),
        description: editor.draft.description.clone(),
        seo_title: editor.draft.seo_title.clone(),
        seo_description: editor.draft.seo_description.clone(),
        faq: Vec::new(),
    };
    editor.install_variants(&VariantResolution {
        variants: vec![mirror.clone(), mirror.clone(), mirror],
        selected_index: 0,
        provenance: VariantProvenance::LocalFallback,
        advisory: None,
    });
    editor.apply_variant(1);
    assert!(editor.has_pending_changes());

    editor.apply_variant(0);
    assert!(!editor.has_pending_changes());
    Ok(())
}

#[test]
fn save_adopts_server_canonical_fields() -> Result<()> {
    let harness = IntegrationHarness::new();
    let manager = harness.catalog_manager();
    let id = Uuid::new_v4();

    let mut editor = VariantEditor::create(id, draft("Красное Платье, Студия!"));
    let saved = editor.save(&manager, Some("ops@admin"))?;

    // The server normalized the slug and tags; the editor adopted them.
    assert_eq!(saved.slug, "krasnoe-plate-studiya");
    assert_eq!(editor.draft.slug, "krasnoe-plate-studiya");
    assert_eq!(saved.tags, vec!["fashion"]);
    assert_eq!(saved.updated_by.as_deref(), Some("ops@admin"));
    assert!(!editor.has_pending_changes());

    // Round-trip through storage.
    let loaded = manager.load_example(id)?.expect("example stored");
    assert_eq!(loaded.slug, saved.slug);
    assert_eq!(loaded.seo_variant_index, 0);
    Ok(())
}

#[test]
fn duplicate_slug_is_rejected_verbatim() -> Result<()> {
    let harness = IntegrationHarness::new();
    let manager = harness.catalog_manager();

    let mut first = VariantEditor::create(Uuid::new_v4(), draft("vechernii-obraz"));
    first.save(&manager, None)?;

    let mut second = VariantEditor::create(Uuid::new_v4(), draft("vechernii-obraz"));
    let err = second.save(&manager, None).unwrap_err();
    assert!(err.to_string().contains("already used"), "error: {err}");
    Ok(())
}

#[test]
fn oversized_title_is_rejected() {
    let harness = IntegrationHarness::new();
    let manager = harness.catalog_manager();

    let mut editor = VariantEditor::create(Uuid::new_v4(), draft("primer"));
    editor.stage(DraftUpdate {
        title: Some("т".repeat(201)),
        ..DraftUpdate::default()
    });
    let err = editor.save(&manager, None).unwrap_err();
    assert!(err.to_string().contains("limit is 200"), "error: {err}");
}

#[test]
fn staged_edits_flip_and_save_clears_pending_changes() -> Result<()> {
    let harness = IntegrationHarness::new();
    let manager = harness.catalog_manager();

    let mut editor = VariantEditor::create(Uuid::new_v4(), draft("primer"));
    editor.save(&manager, None)?;
    assert!(!editor.has_pending_changes());

    editor.stage(DraftUpdate {
        is_published: Some(true),
        ..DraftUpdate::default()
    });
    assert!(editor.has_pending_changes());

    editor.save(&manager, None)?;
    assert!(!editor.has_pending_changes());
    Ok(())
}

#[test]
fn uses_count_survives_resaves_untouched() -> Result<()> {
    let harness = IntegrationHarness::new();
    let manager = harness.catalog_manager();
    let id = Uuid::new_v4();

    let mut editor = VariantEditor::create(id, draft("primer"));
    let saved = editor.save(&manager, None)?;
    assert_eq!(saved.uses_count, 0);

    // Simulate the usage pipeline bumping the counter out of band.
    let mut item = manager.load_example(id)?.expect("example stored");
    item.uses_count = 17;
    let path = manager.paths.example_file(id);
    std::fs::write(&path, serde_json::to_vec_pretty(&item)?)?;

    let mut editor = VariantEditor::open(&item);
    editor.stage(DraftUpdate {
        description: Some("Новое описание".to_string()),
        ..DraftUpdate::default()
    });
    let resaved = editor.save(&manager, None)?;
    assert_eq!(resaved.uses_count, 17);
    Ok(())
}
