//! Theme inference for non-Russian prompts.
//!
//! When a prompt cannot be quoted directly (it is not majority
//! Russian), the title comes from this cascade instead: a priority
//! ordered list of composite keyword rules, each mapping a keyword
//! combination to a short Russian theme phrase. The first matching
//! rule wins, so narrow combinations must stay above their generic
//! prefixes in the table.

/// Composite rule: every keyword group must be represented in the
/// prompt (any synonym within a group counts) for the rule to fire.
pub struct ThemeRule {
    pub required: &'static [&'static [&'static str]],
    pub theme: &'static str,
}

const STUDIO: &[&str] = &["studio", "softbox", "студи"];
const FASHION: &[&str] = &["fashion", "couture", "dress", "gown", "кутюр", "плать", "фэшн"];
const BOW: &[&str] = &["bow", "ribbon", "бант"];
const PORTRAIT: &[&str] = &["portrait", "close-up", "портрет"];
const WEDDING: &[&str] = &["wedding", "bride", "свадьб", "невест"];
const NEON: &[&str] = &["neon", "неон"];
const STREET: &[&str] = &["street", "urban", "улиц"];
const BEACH: &[&str] = &["beach", "sea", "пляж", "море"];
const WINTER: &[&str] = &["winter", "snow", "зим", "снег"];
const BUSINESS: &[&str] = &["suit", "office", "костюм", "офис"];

/// Narrow combinations first, single-keyword genres after.
pub const THEME_RULES: &[ThemeRule] = &[
    ThemeRule {
        required: &[STUDIO, FASHION, BOW],
        theme: "Студийная фэшн-съёмка с бантами",
    },
    ThemeRule {
        required: &[STUDIO, FASHION],
        theme: "Студийная фэшн-съёмка",
    },
    ThemeRule {
        required: &[STUDIO, PORTRAIT],
        theme: "Студийный портрет",
    },
    ThemeRule {
        required: &[NEON, PORTRAIT],
        theme: "Неоновый портрет",
    },
    ThemeRule {
        required: &[WEDDING],
        theme: "Свадебная фотосессия",
    },
    ThemeRule {
        required: &[BEACH],
        theme: "Фотосессия у моря",
    },
    ThemeRule {
        required: &[WINTER],
        theme: "Зимняя фотосессия",
    },
    ThemeRule {
        required: &[STREET],
        theme: "Уличная съёмка",
    },
    ThemeRule {
        required: &[BUSINESS],
        theme: "Деловой портрет",
    },
    ThemeRule {
        required: &[PORTRAIT],
        theme: "Портретная съёмка",
    },
    ThemeRule {
        required: &[FASHION],
        theme: "Фэшн-образ",
    },
    ThemeRule {
        required: &[STUDIO],
        theme: "Студийная съёмка",
    },
];

/// Fallback title when no rule matches.
pub const GENERIC_THEME: &str = "Пример генерации образа";

/// First matching theme for the prompt, scanning the cascade top to
/// bottom over the lowercased text.
pub fn infer_theme(prompt: &str) -> Option<&'static str> {
    let lowered = prompt.to_lowercase();
    THEME_RULES
        .iter()
        .find(|rule| {
            rule.required
                .iter()
                .all(|group| group.iter().any(|kw| lowered.contains(kw)))
        })
        .map(|rule| rule.theme)
}
