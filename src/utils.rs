//! String processing helpers shared by the matcher and the highlighter.
//!
//! Everything here works in **character** offsets. The match spans and
//! snippet windows are consumed by a frontend with UTF-16-ish string
//! semantics, so byte offsets never leave this crate.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for search: lowercase, strip diacritics, and collapse whitespace.
///
/// This enables fuzzy matching between ASCII and accented versions:
/// - "café" → "cafe"
/// - "naïve" → "naive"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks (category Mn = Mark, Nonspacing)
/// 3. NFC recompose — Hangul syllables decompose into jamo under NFD and
///    must be put back together or Korean queries stop matching composed
///    field text
/// 4. Lowercase
/// 5. Collapse whitespace
///
/// # Algorithm (without unicode-normalization)
///
/// 1. Lowercase only (assumes input is pre-normalized or ASCII)
/// 2. Collapse whitespace
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lightweight normalization without the unicode-normalization dependency.
/// Just lowercases and collapses whitespace.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Lowercase a string one character at a time, preserving character count.
///
/// Full `str::to_lowercase` can change the number of characters (ß → ss),
/// which would desynchronize match spans from the original field text. Taking
/// only the first mapped character keeps positions 1:1; the matcher tolerates
/// the rare imprecision, span fidelity matters more.
pub fn fold_chars(value: &str) -> String {
    value
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Number of characters in a string.
pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

/// Slice a string by character offsets, end-exclusive and clamped.
pub fn char_slice(value: &str, start: usize, end: usize) -> String {
    value.chars().skip(start).take(end.saturating_sub(start)).collect()
}

/// Find the character offset of the first case-insensitive occurrence of
/// `needle` in `haystack`. Empty needles never match.
pub fn char_find_ci(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    let hay = fold_chars(haystack);
    let needle = fold_chars(needle);
    let hay_chars: Vec<char> = hay.chars().collect();
    let needle_chars: Vec<char> = needle.chars().collect();
    if needle_chars.len() > hay_chars.len() {
        return None;
    }
    (0..=hay_chars.len() - needle_chars.len())
        .find(|&i| hay_chars[i..i + needle_chars.len()] == needle_chars[..])
}
