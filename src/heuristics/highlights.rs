//! Highlight extraction for example descriptions.
//!
//! An ordered rule table maps prompt keywords to short human-readable
//! labels ("Студийный свет", "В полный рост", ...). Rules are scanned
//! top to bottom against the lowercased prompt; every rule whose
//! keyword set intersects the text contributes its label once.

/// One (keyword set -> label) rule. A rule fires when any of its
/// keywords occurs in the lowercased prompt.
pub struct HighlightRule {
    pub keywords: &'static [&'static str],
    pub label: &'static str,
}

/// Rule order determines label order in the output, so the most
/// visually defining traits come first.
pub const HIGHLIGHT_RULES: &[HighlightRule] = &[
    HighlightRule {
        keywords: &["studio", "softbox", "студи", "софтбокс"],
        label: "Студийный свет",
    },
    HighlightRule {
        keywords: &["couture", "gown", "dress", "кутюр", "плать"],
        label: "Дизайнерский наряд",
    },
    HighlightRule {
        keywords: &["full-length", "full length", "полный рост"],
        label: "В полный рост",
    },
    HighlightRule {
        keywords: &["portrait", "close-up", "портрет", "крупный план"],
        label: "Портретный кадр",
    },
    HighlightRule {
        keywords: &["wedding", "bride", "свадьб", "невест"],
        label: "Свадебный образ",
    },
    HighlightRule {
        keywords: &["suit", "office", "костюм", "офис"],
        label: "Деловой стиль",
    },
    HighlightRule {
        keywords: &["neon", "неон"],
        label: "Неоновая подсветка",
    },
    HighlightRule {
        keywords: &["street", "urban", "улиц", "город"],
        label: "Городская сцена",
    },
    HighlightRule {
        keywords: &["beach", "sea", "пляж", "море"],
        label: "Морской пейзаж",
    },
    HighlightRule {
        keywords: &["winter", "snow", "зим", "снег"],
        label: "Зимняя атмосфера",
    },
    HighlightRule {
        keywords: &["bow", "ribbon", "бант", "лент"],
        label: "Декор с бантами",
    },
    HighlightRule {
        keywords: &["red", "красн", "алый"],
        label: "Яркий акцент",
    },
];

/// Scan the rule table against `prompt` plus any `tags`, deduplicate and
/// cap the result at `max` labels.
pub fn extract_highlights(prompt: &str, tags: &[String], max: usize) -> Vec<String> {
    let mut haystack = prompt.to_lowercase();
    for tag in tags {
        haystack.push(' ');
        haystack.push_str(&tag.to_lowercase());
    }

    let mut labels: Vec<String> = Vec::new();
    for rule in HIGHLIGHT_RULES {
        if rule.keywords.iter().any(|kw| haystack.contains(kw))
            && !labels.iter().any(|l| l == rule.label)
        {
            labels.push(rule.label.to_string());
        }
    }
    labels.truncate(max);
    labels
}
