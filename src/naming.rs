//! Case conventions for generated identifiers.
//!
//! Artboard names, layer names, and archive entry stems are derived from
//! user-supplied text ("Sign Up Form") and must come out as stable machine
//! identifiers. [`CaseConvention::apply`] normalizes a name into the chosen
//! convention; [`NamingConfig`] selects a convention per identifier class.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CaseConvention
// ---------------------------------------------------------------------------

/// A case convention for generated identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseConvention {
    /// `sign-up-form`
    Kebab,
    /// `sign_up_form`
    Snake,
    /// `signUpForm`
    Camel,
    /// `SignUpForm`
    Pascal,
}

impl CaseConvention {
    /// Normalize `input` into this convention.
    ///
    /// Words are split on whitespace, `-`, `_`, and lower-to-upper case
    /// boundaries; characters that are not alphanumeric are dropped.
    pub fn apply(self, input: &str) -> String {
        let words = split_words(input);
        match self {
            CaseConvention::Kebab => words.join("-"),
            CaseConvention::Snake => words.join("_"),
            CaseConvention::Camel => {
                let mut out = String::new();
                for (i, word) in words.iter().enumerate() {
                    if i == 0 {
                        out.push_str(word);
                    } else {
                        out.push_str(&capitalize(word));
                    }
                }
                out
            }
            CaseConvention::Pascal => words.iter().map(|w| capitalize(w)).collect(),
        }
    }
}

/// Split input into lowercase words on separators and case boundaries.
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for ch in input.chars() {
        if ch.is_whitespace() || ch == '-' || ch == '_' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if !ch.is_alphanumeric() {
            continue;
        }
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        for lower in ch.to_lowercase() {
            current.push(lower);
        }
        prev_lower = ch.is_lowercase() || ch.is_numeric();
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Uppercase the first character of an already-lowercase word.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// NamingConfig
// ---------------------------------------------------------------------------

/// Conventions for each class of generated identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Convention for artboard names.
    pub artboards: CaseConvention,
    /// Convention for layer names.
    pub layers: CaseConvention,
    /// Convention for archive entry name stems.
    pub entries: CaseConvention,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            artboards: CaseConvention::Kebab,
            layers: CaseConvention::Kebab,
            entries: CaseConvention::Kebab,
        }
    }
}
