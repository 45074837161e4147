//! URL slug derivation for generation examples.
//!
//! Titles in the catalog mix Russian and English freely, so slugs are
//! produced by transliterating Cyrillic letters into Latin before the
//! usual lowercase/hyphenate pass. The result is stable: feeding a slug
//! back through `normalize` returns it unchanged.

/// Hard cap on stored slug length.
pub const MAX_SLUG_LEN: usize = 240;

/// Derive a URL-safe slug from arbitrary text.
///
/// Lowercases, transliterates Cyrillic to Latin, replaces every run of
/// characters outside `[a-z0-9]` with a single hyphen, trims edge
/// hyphens and caps the result at [`MAX_SLUG_LEN`] characters. Returns
/// an empty string when nothing usable remains; the caller is expected
/// to substitute its own fallback in that case.
pub fn normalize(text: &str) -> String {
    let mut latin = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        match transliterate(c) {
            Some(mapped) => latin.push_str(mapped),
            None => latin.push(c),
        }
    }

    let mut slug = String::with_capacity(latin.len());
    for c in latin.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }

    let capped: String = slug.trim_matches('-').chars().take(MAX_SLUG_LEN).collect();
    capped.trim_end_matches('-').to_string()
}

/// Fixed Cyrillic-to-Latin character map. Unmapped characters are left
/// to the caller untouched.
fn transliterate(c: char) -> Option<&'static str> {
    let mapped = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "i",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' => "",
        'ы' => "y",
        'ь' => "",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(mapped)
}
