//! Locale-tolerant string comparison for region names.
//!
//! Names are compared on a folded key: compatibility decomposition, combining
//! marks dropped, lowercased, stroke and ligature letters spelled out with
//! their base letters, whitespace collapsed. This makes "Zürich", "ZURICH",
//! full-width "Ｚｕｒｉｃｈ" and "Łódź" / "Lodz" equal while keeping distinct
//! base letters distinct.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compares strings ignoring case, diacritics, width and spacing.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringCompare;

impl StringCompare {
    pub fn new() -> Self {
        Self
    }

    /// Equality on the folded form.
    pub fn natural_equals(&self, a: &str, b: &str) -> bool {
        fold_key(a) == fold_key(b)
    }

    /// Ordering on the folded form.
    pub fn natural_less(&self, a: &str, b: &str) -> bool {
        fold_key(a) < fold_key(b)
    }
}

/// Fold a string to its comparison key.
pub fn fold_key(s: &str) -> String {
    let mut folded = String::with_capacity(s.len());
    for c in s
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
    {
        match base_letters(c) {
            Some(base) => folded.push_str(base),
            None => folded.push(c),
        }
    }

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Base letters for lowercase letters whose stroke, slash or ligature has no
/// Unicode decomposition.
fn base_letters(c: char) -> Option<&'static str> {
    let base = match c {
        'đ' | 'ð' => "d",
        'ł' => "l",
        'ø' => "o",
        'ħ' => "h",
        'ı' => "i",
        'ŧ' => "t",
        'ß' => "ss",
        'æ' => "ae",
        'œ' => "oe",
        'þ' => "th",
        _ => return None,
    };
    Some(base)
}
