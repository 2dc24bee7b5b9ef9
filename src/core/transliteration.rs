use anyhow::{Context, Result};
use regex::Regex;

/// A single transliteration rule: every match of `pattern` becomes `replacement`.
///
/// The replacement may refer to capture groups (`$1`, `${name}`).
#[derive(Debug, Clone)]
pub struct Transliteration {
    pattern: String,
    regex: Regex,
    replacement: String,
}

impl Transliteration {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        let regex = Regex::new(&pattern)
            .with_context(|| format!("Invalid transliteration pattern: \"{}\"", pattern))?;
        Ok(Self {
            pattern,
            regex,
            replacement: replacement.into(),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

/// Ordered table of transliteration rules.
///
/// Insertion keeps the position of an existing pattern and only swaps its
/// replacement; new patterns go to the end.
#[derive(Debug, Clone, Default)]
pub struct TransliterationTable {
    rules: Vec<Transliteration>,
}

impl TransliterationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, P, R>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, R)>,
        P: Into<String>,
        R: Into<String>,
    {
        let mut table = Self::new();
        for (pattern, replacement) in pairs {
            table.push(Transliteration::new(pattern, replacement)?);
        }
        Ok(table)
    }

    pub fn push(&mut self, rule: Transliteration) {
        match self.rules.iter_mut().find(|r| r.pattern == rule.pattern) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }

    pub fn merge(&mut self, other: TransliterationTable) {
        for rule in other.rules {
            self.push(rule);
        }
    }

    /// Run every rule, in table order, over the whole string.
    pub fn apply(&self, input: &str) -> String {
        self.rules.iter().fold(input.to_string(), |acc, rule| {
            rule.regex
                .replace_all(&acc, rule.replacement.as_str())
                .into_owned()
        })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transliteration> {
        self.rules.iter()
    }
}
