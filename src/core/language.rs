use std::collections::BTreeMap;

use serde::Serialize;

/// What the registry knows about one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageInfo {
    /// Language code, e.g. `fr` or `pt-br`.
    pub code: String,
    /// Display name declared by the language's files.
    pub name: String,
    /// Core pack handle: the core pack extension is `<marker><handle>`.
    /// `None` when only contributors ship translations for this language.
    pub handle: Option<String>,
    /// Extensions contributing translations, in discovery order.
    pub extensions: Vec<String>,
}

impl LanguageInfo {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            handle: None,
            extensions: Vec::new(),
        }
    }

    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.add_extension(extension);
        self
    }

    pub fn add_extension(&mut self, extension: impl Into<String>) {
        let extension = extension.into();
        if !self.extensions.contains(&extension) {
            self.extensions.push(extension);
        }
    }

    /// Fold a later discovery of the same language into this one.
    ///
    /// A non-empty name and a present handle overwrite; extensions are unioned.
    pub fn merge(&mut self, other: LanguageInfo) {
        if !other.name.is_empty() {
            self.name = other.name;
        }
        if other.handle.is_some() {
            self.handle = other.handle;
        }
        for extension in other.extensions {
            self.add_extension(extension);
        }
    }
}

/// Every known language, keyed by code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    languages: BTreeMap<String, LanguageInfo>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `info`, merging into an existing entry with the same code.
    pub fn merge(&mut self, info: LanguageInfo) {
        match self.languages.get_mut(&info.code) {
            Some(existing) => existing.merge(info),
            None => {
                self.languages.insert(info.code.clone(), info);
            }
        }
    }

    pub fn get(&self, code: &str) -> Option<&LanguageInfo> {
        self.languages.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.languages.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Languages ordered by code.
    pub fn iter(&self) -> impl Iterator<Item = &LanguageInfo> {
        self.languages.values()
    }
}
