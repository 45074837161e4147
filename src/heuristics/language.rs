//! Prompt language heuristics.
//!
//! Operators write prompts in Russian, English, or a mix of both. Title
//! extraction only quotes the prompt verbatim when it is majority
//! Russian; otherwise the theme cascade supplies a Russian title. The
//! gate is a plain character ratio so its behavior stays predictable on
//! the short, keyword-heavy prompts the catalog actually contains.

use whatlang::detect;

/// Share of Cyrillic letters among all Cyrillic and Latin letters in
/// the text. Digits, punctuation and other scripts are ignored. Returns
/// 0.0 when the text contains no letters from either script.
pub fn cyrillic_ratio(text: &str) -> f32 {
    let mut cyrillic = 0usize;
    let mut latin = 0usize;
    for c in text.chars() {
        if is_cyrillic_letter(c) {
            cyrillic += 1;
        } else if c.is_ascii_alphabetic() {
            latin += 1;
        }
    }
    let total = cyrillic + latin;
    if total == 0 {
        return 0.0;
    }
    cyrillic as f32 / total as f32
}

/// Whether the text reads as mostly Russian under the given threshold.
/// The threshold is a tuning knob; call sites take it from config.
pub fn is_majority_russian(text: &str, threshold: f32) -> bool {
    cyrillic_ratio(text) >= threshold
}

/// Three-letter language code for stored examples, via whatlang.
pub fn detect_language(text: &str) -> Option<String> {
    detect(text).map(|info| format!("{:?}", info.lang()).to_lowercase())
}

fn is_cyrillic_letter(c: char) -> bool {
    ('\u{0400}'..='\u{04FF}').contains(&c)
}
