//! Month and day name localization for formatted dates.
//!
//! Tokens match as whole words, case-insensitively. Word boundaries follow the
//! Unicode definition used by the `regex` crate: a boundary sits between a
//! Unicode word character and a non-word character, so matches never begin or
//! end inside a multi-byte character (`Mär` never matches inside `Märzen`).
//!
//! All tokens are replaced in one pass over a single alternation, longest token
//! first, so a replacement is never matched again by a later token. French
//! `Tue` -> `Mar` is therefore not turned into `Mars` on the way out.
//!
//! `standardize(localize(s)) == s` only holds when translations are distinct
//! case-insensitively. When two tokens share one (`March` -> `mars`,
//! `Mar` -> `Mars`), standardizing picks the token listed first.

use std::collections::HashMap;

use regex::{Captures, Regex};
use tracing::warn;

/// Ordered list of canonical (English) date/time tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatetimeDictionary {
    tokens: Vec<String>,
}

impl DatetimeDictionary {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Replace canonical tokens by their translations.
    pub fn localize(&self, input: &str, translate: impl Fn(&str) -> String) -> String {
        let pairs = self
            .tokens
            .iter()
            .map(|token| (token.clone(), translate(token)));
        substitute(input, pairs)
    }

    /// Replace translated tokens by their canonical form, then turn the
    /// locale's date/time `separator` into a plain space.
    ///
    /// When two tokens share a translation, the one listed first wins.
    pub fn standardize(
        &self,
        input: &str,
        translate: impl Fn(&str) -> String,
        separator: &str,
    ) -> String {
        let pairs = self
            .tokens
            .iter()
            .map(|token| (translate(token), token.clone()));
        let standardized = substitute(input, pairs);

        if separator.is_empty() || separator == " " {
            standardized
        } else {
            standardized.replace(separator, " ")
        }
    }
}

fn substitute(input: &str, pairs: impl Iterator<Item = (String, String)>) -> String {
    let mut replacements: HashMap<String, String> = HashMap::new();
    for (from, to) in pairs {
        if from.trim().is_empty() {
            continue;
        }
        replacements.entry(from.to_lowercase()).or_insert(to);
    }
    if replacements.is_empty() {
        return input.to_string();
    }

    let mut alternatives: Vec<&String> = replacements.keys().collect();
    alternatives.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    let pattern = format!(
        r"(?i)\b(?:{})\b",
        alternatives
            .iter()
            .map(|a| regex::escape(a))
            .collect::<Vec<_>>()
            .join("|")
    );

    let regex = match Regex::new(&pattern) {
        Ok(regex) => regex,
        Err(e) => {
            warn!(error = %e, "could not build datetime pattern");
            return input.to_string();
        }
    };

    regex
        .replace_all(input, |caps: &Captures<'_>| {
            replacements
                .get(&caps[0].to_lowercase())
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
