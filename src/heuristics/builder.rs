//! Deterministic fallback metadata for generation examples.
//!
//! Builds a presentable title, description and SEO fields from nothing
//! but the prompt text and tags, and renders them as the three-variant
//! set used whenever the remote suggestion service is unavailable or
//! incomplete. Same input always yields the same output: no
//! randomness, no I/O.

use crate::catalog::HeuristicsSettings;
use crate::heuristics::highlights::extract_highlights;
use crate::heuristics::language::is_majority_russian;
use crate::heuristics::theme::{infer_theme, GENERIC_THEME};
use crate::models::{
    truncate_chars, FaqEntry, SeoVariant, MAX_DESCRIPTION_LEN, MAX_SEO_DESCRIPTION_LEN,
    MAX_SEO_TITLE_LEN, MAX_TITLE_LEN, VARIANT_SLOTS,
};
use crate::slug;

/// Words taken from a majority-Russian prompt when quoting it as a title.
const TITLE_WORD_LIMIT: usize = 7;

/// Derive a presentable title from the prompt.
///
/// Majority-Russian prompts are quoted directly: quote characters are
/// stripped, whitespace collapsed, the first few words kept and the
/// first letter capitalized. Anything else goes through the theme
/// cascade so the catalog always shows a Russian title.
pub fn derive_title(prompt: &str, cyrillic_ratio_threshold: f32) -> String {
    let cleaned = clean_prompt(prompt);
    if cleaned.is_empty() || !is_majority_russian(&cleaned, cyrillic_ratio_threshold) {
        return infer_theme(&cleaned).unwrap_or(GENERIC_THEME).to_string();
    }
    let excerpt = cleaned
        .split_whitespace()
        .take(TITLE_WORD_LIMIT)
        .collect::<Vec<_>>()
        .join(" ");
    truncate_chars(&capitalize_first(&excerpt), MAX_TITLE_LEN)
}

/// Produce the full three-variant fallback set for a prompt.
///
/// Variant 1 carries the base title/description, variants 2 and 3 are
/// templated paraphrases with their own slugs. All fields are populated
/// and clipped to their limits; minimal input degrades to placeholder
/// strings rather than empty fields.
pub fn fallback_variants(
    prompt: &str,
    tags: &[String],
    settings: &HeuristicsSettings,
) -> Vec<SeoVariant> {
    let title = derive_title(prompt, settings.cyrillic_ratio_threshold);
    let highlights = extract_highlights(prompt, tags, settings.max_highlights);
    let description = base_description(&title, prompt, &highlights);

    let titles = [
        title.clone(),
        format!("{} — сценарий генерации", title),
        format!("{} — пример по промпту", title),
    ];
    let descriptions = [
        description.clone(),
        format!("Сценарий генерации: {}", description),
        format!("Пример по промпту: {}", description),
    ];

    (0..VARIANT_SLOTS)
        .map(|slot| {
            let variant_title = truncate_chars(&titles[slot], MAX_TITLE_LEN);
            let faq = if slot == 0 {
                fallback_faq(&title)
            } else {
                Vec::new()
            };
            SeoVariant {
                slug: variant_slug(&variant_title, slot),
                seo_title: truncate_chars(&variant_title, MAX_SEO_TITLE_LEN),
                seo_description: truncate_chars(&descriptions[slot], MAX_SEO_DESCRIPTION_LEN),
                description: truncate_chars(&descriptions[slot], MAX_DESCRIPTION_LEN),
                title: variant_title,
                faq,
            }
        })
        .collect()
}

/// Slug for the variant at `slot`, derived from its own title. Slots 1
/// and 2 get a disambiguating suffix so the three slugs never collide.
fn variant_slug(title: &str, slot: usize) -> String {
    let base = slug::normalize(title);
    let base = if base.is_empty() {
        format!("example-{}", slot + 1)
    } else {
        base
    };
    if slot == 0 {
        return base;
    }
    let suffix = format!("-variant-{}", slot + 1);
    let trimmed: String = base
        .chars()
        .take(slug::MAX_SLUG_LEN - suffix.chars().count())
        .collect();
    format!("{}{}", trimmed.trim_end_matches('-'), suffix)
}

fn base_description(title: &str, prompt: &str, highlights: &[String]) -> String {
    let mut description = format!(
        "{} — готовый пример генерации изображения по текстовому описанию.",
        title
    );
    if !highlights.is_empty() {
        description.push_str(&format!(" Особенности: {}.", highlights.join(", ")));
    }
    let cleaned_prompt = clean_prompt(prompt);
    if !cleaned_prompt.is_empty() {
        description.push_str(&format!(" Промпт: «{}».", cleaned_prompt));
    }
    truncate_chars(&description, MAX_DESCRIPTION_LEN)
}

fn fallback_faq(title: &str) -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "Как воспользоваться этим примером?".to_string(),
            answer: format!(
                "Откройте пример «{}» и запустите генерацию — промпт уже заполнен.",
                title
            ),
        },
        FaqEntry {
            question: "Можно ли изменить промпт?".to_string(),
            answer: "Да, текст промпта можно отредактировать перед запуском генерации."
                .to_string(),
        },
    ]
}

/// Strip quote characters and collapse whitespace runs.
fn clean_prompt(prompt: &str) -> String {
    let stripped: String = prompt
        .chars()
        .map(|c| match c {
            '"' | '\'' | '«' | '»' | '„' | '“' | '”' | '‘' | '’' | '`' => ' ',
            other => other,
        })
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
