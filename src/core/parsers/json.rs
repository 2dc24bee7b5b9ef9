use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::{Dictionary, TransliterationTable};

static LANG_FILE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^lang\.([^.]+)\.json$").unwrap());

/// Display metadata declared by a lang file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct About {
    #[serde(default)]
    pub name: String,
}

/// Wire shape of a lang file. Unknown keys (authors, release dates) are ignored.
#[derive(Debug, Default, Deserialize)]
struct RawLangFile {
    #[serde(default)]
    about: About,
    #[serde(default)]
    dictionary: Dictionary,
    #[serde(default)]
    transliterations: Map<String, Value>,
}

/// A parsed `lang.<code>.json` file.
#[derive(Debug, Clone)]
pub struct LangFile {
    pub path: PathBuf,
    pub about: About,
    pub dictionary: Dictionary,
    pub transliterations: TransliterationTable,
}

impl LangFile {
    /// Load a lang file. A missing file is not an error and yields `None`.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.is_file() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read lang file: {:?}", path))?;
        Self::parse(&content, path).map(Some)
    }

    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let raw: RawLangFile = serde_json::from_str(content)
            .with_context(|| format!("Failed to parse lang file: {:?}", path))?;
        let transliterations = transliterations_from_map(raw.transliterations)
            .with_context(|| format!("Invalid transliterations in {:?}", path))?;

        Ok(Self {
            path: path.to_path_buf(),
            about: raw.about,
            dictionary: raw.dictionary,
            transliterations,
        })
    }
}

fn transliterations_from_map(map: Map<String, Value>) -> Result<TransliterationTable> {
    let mut pairs = Vec::with_capacity(map.len());
    for (pattern, value) in map {
        let Value::String(replacement) = value else {
            bail!("Replacement for \"{}\" must be a string", pattern);
        };
        pairs.push((pattern, replacement));
    }
    TransliterationTable::from_pairs(pairs)
}

/// Extracts the language code from a lang file name.
///
/// Examples:
/// - "lang.fr.json" -> Some("fr")
/// - "lang.pt-br.json" -> Some("pt-br")
/// - "fr.json" -> None
pub fn extract_code(path: impl AsRef<Path>) -> Option<String> {
    let file_name = path.as_ref().file_name()?.to_str()?;
    LANG_FILE_REGEX
        .captures(file_name)
        .map(|caps| caps[1].to_string())
}

/// File name of the lang file for `code`.
pub fn lang_file_name(code: &str) -> String {
    format!("lang.{}.json", code)
}

/// Load the ordered list of canonical date/time tokens from `datetime.json`.
pub fn load_datetime_tokens(path: &Path) -> Result<Option<Vec<String>>> {
    if !path.is_file() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read datetime file: {:?}", path))?;
    parse_datetime_tokens(&content)
        .with_context(|| format!("Failed to parse datetime file: {:?}", path))
        .map(Some)
}

pub fn parse_datetime_tokens(content: &str) -> Result<Vec<String>> {
    let tokens: Vec<String> = serde_json::from_str(content)?;
    Ok(tokens.into_iter().filter(|t| !t.trim().is_empty()).collect())
}

/// Load the default transliteration table from `transliterations.json`.
pub fn load_transliterations(path: &Path) -> Result<Option<TransliterationTable>> {
    if !path.is_file() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read transliterations file: {:?}", path))?;
    parse_transliterations(&content)
        .with_context(|| format!("Failed to parse transliterations file: {:?}", path))
        .map(Some)
}

pub fn parse_transliterations(content: &str) -> Result<TransliterationTable> {
    let map: Map<String, Value> = serde_json::from_str(content)?;
    transliterations_from_map(map)
}
