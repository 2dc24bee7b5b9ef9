//! Handle and filename builders. Both preserve multi-byte characters.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::TransliterationTable;

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

static PUNCTUATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[.'"‘’“”]+"#).unwrap());

/// Runs of characters allowed in a handle: letters, marks and digits.
static HANDLE_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{M}\p{N}]+").unwrap());

/// Runs of characters allowed in a filename.
static FILENAME_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w:;.,+=~]+").unwrap());

pub const DEFAULT_MAX_LENGTH: usize = 255;
pub const DEFAULT_DELIMITER: &str = "-";

/// Options for [`create_handle`](crate::core::Session::create_handle) and
/// [`create_filename`](crate::core::Session::create_filename).
#[derive(Debug, Clone)]
pub struct HandleOptions {
    /// Maximum length in characters; 0 means unlimited.
    pub max_length: usize,
    pub delimiter: String,
    /// Run the active transliteration table first.
    pub apply_transliteration: bool,
    /// Percent-encode the handle. Handles only.
    pub uri_encode: bool,
    /// Extra rules run on the joined handle, before delimiters are trimmed.
    /// Handles only.
    pub additional_rules: TransliterationTable,
}

impl Default for HandleOptions {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            delimiter: DEFAULT_DELIMITER.to_string(),
            apply_transliteration: true,
            uri_encode: false,
            additional_rules: TransliterationTable::new(),
        }
    }
}

/// Build a lowercase handle: tags and quotes are dropped and every other run of
/// non-word characters becomes a single `delimiter`.
///
/// ```
/// use langkit::core::slug::handleize;
///
/// assert_eq!(handleize("Hello, World!", 255, "-"), "hello-world");
/// assert_eq!(handleize("<b>Don't</b> panic", 255, "_"), "dont_panic");
/// assert_eq!(handleize("Über uns", 255, "-"), "über-uns");
/// ```
pub fn handleize(input: &str, max_length: usize, delimiter: &str) -> String {
    let options = HandleOptions {
        max_length,
        delimiter: delimiter.to_string(),
        ..Default::default()
    };
    handleize_with(input, &options)
}

/// [`handleize`] with the additional rules and URI encoding of `options`.
///
/// Encoding happens last, after truncation, and the escapes are lowercased
/// along with the rest of the handle.
///
/// ```
/// use langkit::core::{HandleOptions, slug::handleize_with};
///
/// let options = HandleOptions {
///     uri_encode: true,
///     ..Default::default()
/// };
/// assert_eq!(handleize_with("Über uns", &options), "%c3%bcber-uns");
/// ```
pub fn handleize_with(input: &str, options: &HandleOptions) -> String {
    let delimiter = options.delimiter.as_str();
    let stripped = TAG_REGEX.replace_all(input, "");
    let stripped = PUNCTUATION_REGEX.replace_all(&stripped, "");

    let words: Vec<&str> = HANDLE_WORD_REGEX
        .find_iter(&stripped)
        .map(|m| m.as_str())
        .collect();
    let joined = options.additional_rules.apply(&words.join(delimiter));
    let handle = trim_delimiter(&joined, delimiter).to_lowercase();
    let handle = truncate(&handle, options.max_length, delimiter);

    if options.uri_encode {
        urlencoding::encode(&handle).to_lowercase()
    } else {
        handle
    }
}

/// Build a filename: tags are dropped and runs of characters outside
/// `[\w:;.,+=~]` become a single `delimiter`.
///
/// ```
/// use langkit::core::slug::filenameize;
///
/// assert_eq!(filenameize("My Report (final).PDF", "-"), "my-report-final-.pdf");
/// ```
pub fn filenameize(input: &str, delimiter: &str) -> String {
    let stripped = TAG_REGEX.replace_all(input, "");

    let words: Vec<&str> = FILENAME_WORD_REGEX
        .find_iter(&stripped)
        .map(|m| m.as_str())
        .collect();
    let joined = words.join(delimiter);

    trim_delimiter(&joined, delimiter).to_lowercase()
}

fn truncate(handle: &str, max_length: usize, delimiter: &str) -> String {
    if max_length == 0 || handle.chars().count() <= max_length {
        return handle.to_string();
    }
    let truncated: String = handle.chars().take(max_length).collect();
    trim_delimiter(&truncated, delimiter).to_string()
}

fn trim_delimiter<'a>(s: &'a str, delimiter: &str) -> &'a str {
    if delimiter.is_empty() {
        return s;
    }
    let mut s = s;
    while let Some(rest) = s.strip_prefix(delimiter) {
        s = rest;
    }
    while let Some(rest) = s.strip_suffix(delimiter) {
        s = rest;
    }
    s
}
