//! Text cleaning and word splitting.
//!
//! A cleaned word is lowercase, alphabetic-only and non-empty. Accents are
//! stripped by decomposing to NFD and dropping the combining marks, so
//! `"Café"` and `"cafe"` clean to the same word.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

// Anything that is neither a letter nor whitespace.
static CLEAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{Alphabetic}\p{White_Space}]+").unwrap());

/// Normalize text: NFD decomposition, lowercase, then remove every
/// character that is not alphabetic or whitespace.
pub fn clean(text: &str) -> String {
    let lowered = text.nfd().collect::<String>().to_lowercase();
    CLEAN_RE.replace_all(&lowered, "").into_owned()
}

/// Split text on runs of whitespace. Blank text yields no words.
pub fn split(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Clean and split text into words.
pub fn parse(text: &str) -> Vec<String> {
    split(&clean(text)).into_iter().map(str::to_owned).collect()
}
