use std::fmt;
use std::ops::Deref;

use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

/// Text reduced to `[a-z0-9 ]` with single interior spaces and no leading or
/// trailing whitespace.
///
/// Only [`normalize`] builds one, so every value upholds the invariant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for NormalizedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonicalizes raw text for comparison.
///
/// Lowercases, decomposes (NFD), drops nonspacing marks, maps anything outside
/// `[a-z0-9 ]` to a space, then collapses whitespace runs and trims.
/// Total and idempotent.
pub fn normalize(text: &str) -> NormalizedText {
    let lowered = text.to_lowercase();

    let mut out = String::with_capacity(lowered.len());
    let mut pending_space = false;
    for ch in lowered
        .nfd()
        .filter(|c| get_general_category(*c) != GeneralCategory::NonspacingMark)
    {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        } else {
            pending_space = true;
        }
    }

    NormalizedText(out)
}

/// Splits normalized text into its whitespace-delimited tokens.
pub fn tokenize(text: &NormalizedText) -> Vec<&str> {
    text.split_whitespace().collect()
}
