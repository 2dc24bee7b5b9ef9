//! The translation registry and its request-scoped sessions.
//!
//! [`Registry`] is built once per process and never mutated: it owns the
//! language catalog, the datetime tokens and the default transliteration table.
//! Each request creates a [`Session`] from it, which owns the active language
//! and its merged dictionary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::{
    config::Config,
    core::{
        Catalog, DatetimeDictionary, Dictionary, HandleOptions, Host, Insert, LanguageInfo,
        TransliterationTable,
        discover::{DiscoveryWarning, LANG_DIR, discover},
        format::{FormatError, vsprintf},
        parsers::json::{
            LangFile, lang_file_name, load_datetime_tokens, load_transliterations,
            parse_datetime_tokens, parse_transliterations,
        },
        resolve::{Resolved, resolve},
        slug::{filenameize, handleize_with},
    },
};

pub const DATETIME_FILE: &str = "datetime.json";
pub const TRANSLITERATIONS_FILE: &str = "transliterations.json";

const DEFAULT_DATETIME: &str = include_str!("../../assets/lang/datetime.json");
const DEFAULT_TRANSLITERATIONS: &str = include_str!("../../assets/lang/transliterations.json");

/// Where the registry finds its files and how it recognizes core packs.
#[derive(Debug, Clone)]
pub struct RegistryOptions {
    pub extensions_root: PathBuf,
    pub lang_root: PathBuf,
    pub core_marker: String,
    /// The identity language: source strings are written in it.
    pub identity: LanguageInfo,
}

impl RegistryOptions {
    /// Resolve the configured roots against `base_dir`.
    pub fn from_config(config: &Config, base_dir: &Path) -> Self {
        Self {
            extensions_root: base_dir.join(&config.extensions_root),
            lang_root: base_dir.join(&config.lang_root),
            core_marker: config.core_marker.clone(),
            identity: LanguageInfo::new(
                config.identity_language.as_str(),
                config.identity_name.as_str(),
            )
            .with_handle(config.identity_handle.as_str()),
        }
    }
}

#[derive(Debug)]
pub struct Registry {
    extensions_root: PathBuf,
    core_marker: String,
    identity: String,
    catalog: Catalog,
    datetime: DatetimeDictionary,
    transliterations: TransliterationTable,
    warnings: Vec<DiscoveryWarning>,
}

impl Registry {
    /// Load the datetime tokens and default transliterations, then discover
    /// every installed language.
    ///
    /// Core files missing from `lang_root` fall back to the built-in defaults;
    /// core files that exist but are malformed are an error.
    pub fn initialize(options: RegistryOptions) -> Result<Self> {
        let datetime_path = options.lang_root.join(DATETIME_FILE);
        let tokens = match load_datetime_tokens(&datetime_path)? {
            Some(tokens) => tokens,
            None => parse_datetime_tokens(DEFAULT_DATETIME)
                .context("Failed to parse built-in datetime tokens")?,
        };

        let transliterations_path = options.lang_root.join(TRANSLITERATIONS_FILE);
        let transliterations = match load_transliterations(&transliterations_path)? {
            Some(table) => table,
            None => parse_transliterations(DEFAULT_TRANSLITERATIONS)
                .context("Failed to parse built-in transliterations")?,
        };

        let identity = options.identity.code.clone();
        let mut seed = Catalog::new();
        seed.merge(options.identity);

        let discovered = discover(&options.extensions_root, &options.core_marker, seed);
        for warning in &discovered.warnings {
            warn!(file = %warning.file_path, error = %warning.error, "skipped lang file");
        }
        debug!(
            languages = discovered.catalog.len(),
            files = discovered.files_scanned,
            "language catalog built"
        );

        Ok(Self {
            extensions_root: options.extensions_root,
            core_marker: options.core_marker,
            identity,
            catalog: discovered.catalog,
            datetime: DatetimeDictionary::new(tokens),
            transliterations,
            warnings: discovered.warnings,
        })
    }

    pub fn from_config(config: &Config, base_dir: &Path) -> Result<Self> {
        Self::initialize(RegistryOptions::from_config(config, base_dir))
    }

    /// Every discovered language, enabled or not.
    pub fn languages(&self) -> &Catalog {
        &self.catalog
    }

    pub fn identity_code(&self) -> &str {
        &self.identity
    }

    pub fn core_marker(&self) -> &str {
        &self.core_marker
    }

    pub fn datetime(&self) -> &DatetimeDictionary {
        &self.datetime
    }

    pub fn default_transliterations(&self) -> &TransliterationTable {
        &self.transliterations
    }

    /// Lang files skipped during discovery.
    pub fn warnings(&self) -> &[DiscoveryWarning] {
        &self.warnings
    }

    /// Start a session in the identity language.
    pub fn session<'a>(&'a self, host: &'a dyn Host) -> Session<'a> {
        Session {
            registry: self,
            host,
            current: self.identity.clone(),
            dictionary: Dictionary::new(),
            transliterations: self.transliterations.clone(),
            loaded_files: Vec::new(),
        }
    }

    /// Lang files to load for `info`: the core pack first, then contributors
    /// in catalog order.
    fn lang_files(&self, info: &LanguageInfo) -> Vec<PathBuf> {
        let file_name = lang_file_name(&info.code);
        let core = info
            .handle
            .as_ref()
            .map(|handle| format!("{}{}", self.core_marker, handle));

        core.iter()
            .chain(info.extensions.iter())
            .map(|extension| {
                self.extensions_root
                    .join(extension)
                    .join(LANG_DIR)
                    .join(&file_name)
            })
            .collect()
    }
}

/// Outcome of [`Session::activate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The code was empty or already active; nothing was loaded.
    Unchanged,
    /// The identity language is now active.
    Identity,
    /// The language is active; `files` lang files were loaded.
    Activated { code: String, files: usize },
    /// The language is unknown or disabled; the identity language is active.
    FellBack { requested: String },
}

/// Request-scoped translation state.
pub struct Session<'a> {
    registry: &'a Registry,
    host: &'a dyn Host,
    current: String,
    dictionary: Dictionary,
    transliterations: TransliterationTable,
    loaded_files: Vec<PathBuf>,
}

impl<'a> Session<'a> {
    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    /// Code of the active language.
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn is_localized(&self) -> bool {
        self.current != self.registry.identity
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn transliterations(&self) -> &TransliterationTable {
        &self.transliterations
    }

    /// Lang files loaded by this session, in load order.
    pub fn loaded_files(&self) -> &[PathBuf] {
        &self.loaded_files
    }

    /// Whether `code` may be activated: the identity language always can, any
    /// other language only when its core pack extension is enabled.
    pub fn is_language_enabled(&self, code: &str) -> bool {
        if code == self.registry.identity {
            return true;
        }
        let Some(handle) = self
            .registry
            .catalog
            .get(code)
            .and_then(|info| info.handle.as_deref())
        else {
            return false;
        };
        let extension = format!("{}{}", self.registry.core_marker, handle);
        self.host.enabled_extensions().contains(&extension)
    }

    /// Codes and names of every enabled language.
    pub fn available_languages(&self) -> Vec<(String, String)> {
        self.registry
            .catalog
            .iter()
            .filter(|info| self.is_language_enabled(&info.code))
            .map(|info| (info.code.clone(), info.name.clone()))
            .collect()
    }

    /// Switch the active language.
    ///
    /// With `enforce_enabled` unset, a known but disabled language is loaded
    /// anyway. Unknown or disabled languages fall back to the identity language
    /// and report a warning through the host.
    pub fn activate(&mut self, code: &str, enforce_enabled: bool) -> Activation {
        if code.is_empty() || code == self.current {
            return Activation::Unchanged;
        }

        if code == self.registry.identity {
            self.reset(self.registry.identity.clone());
            return Activation::Identity;
        }

        let registry = self.registry;
        let info = match registry.catalog.get(code) {
            Some(info) if !enforce_enabled || self.is_language_enabled(code) => info,
            _ => return self.fall_back(code),
        };

        self.reset(code.to_string());
        let mut files = 0;
        for path in registry.lang_files(info) {
            match self.load_file(&path) {
                Ok(true) => files += 1,
                Ok(false) => {}
                Err(e) => self.host.warn(&format!("Skipped lang file: {:#}", e)),
            }
        }

        debug!(code, files, "language activated");
        Activation::Activated {
            code: code.to_string(),
            files,
        }
    }

    fn fall_back(&mut self, requested: &str) -> Activation {
        self.reset(self.registry.identity.clone());
        self.host.warn(&format!(
            "The selected language '{}' could not be found or is not enabled. Using '{}' instead.",
            requested, self.registry.identity
        ));
        Activation::FellBack {
            requested: requested.to_string(),
        }
    }

    fn reset(&mut self, code: String) {
        self.current = code;
        self.dictionary.clear();
        self.transliterations = self.registry.transliterations.clone();
    }

    /// Merge a lang file into this session. Returns `Ok(false)` when the file
    /// does not exist.
    pub fn load_file(&mut self, path: &Path) -> Result<bool> {
        let Some(file) = LangFile::load(path)? else {
            return Ok(false);
        };
        debug!(
            path = %path.display(),
            entries = file.dictionary.len(),
            transliterations = file.transliterations.len(),
            "loaded lang file"
        );
        self.dictionary.merge(file.dictionary);
        self.transliterations.merge(file.transliterations);
        self.loaded_files.push(path.to_path_buf());
        Ok(true)
    }

    /// Look `string` up without substitution. A `None` namespace asks the host
    /// for the current page namespace.
    pub fn lookup<'s>(&'s self, string: &'s str, namespace: Option<&str>) -> Resolved<'s> {
        match namespace {
            Some(namespace) => resolve(&self.dictionary, string, Some(namespace)),
            None => {
                let namespace = self.host.page_namespace();
                resolve(&self.dictionary, string, namespace.as_deref())
            }
        }
    }

    /// Translate `string`, then substitute `inserts` into the result.
    ///
    /// Untranslated strings come back unchanged. Placeholder errors are the
    /// caller's and are returned as is.
    pub fn translate(
        &self,
        string: &str,
        inserts: &[Insert],
        namespace: Option<&str>,
    ) -> Result<String, FormatError> {
        let resolved = self.lookup(string, namespace);
        if inserts.is_empty() {
            Ok(resolved.text.to_string())
        } else {
            vsprintf(resolved.text, inserts)
        }
    }

    /// Translate `string` in the page namespace, without inserts.
    pub fn tr(&self, string: &str) -> String {
        self.lookup(string, None).text.to_string()
    }

    pub fn apply_transliterations(&self, string: &str) -> String {
        self.transliterations.apply(string)
    }

    pub fn create_handle(&self, string: &str, options: &HandleOptions) -> String {
        let source = self.maybe_transliterate(string, options);
        handleize_with(&source, options)
    }

    pub fn create_filename(&self, string: &str, options: &HandleOptions) -> String {
        let source = self.maybe_transliterate(string, options);
        filenameize(&source, &options.delimiter)
    }

    fn maybe_transliterate(&self, string: &str, options: &HandleOptions) -> String {
        if options.apply_transliteration {
            self.apply_transliterations(string)
        } else {
            string.to_string()
        }
    }

    /// Translate month and day names in a formatted date.
    pub fn localize_date(&self, string: &str) -> String {
        if !self.is_localized() {
            return string.to_string();
        }
        self.registry.datetime.localize(string, |token| self.tr(token))
    }

    /// Turn a localized date back into one a strict date parser accepts.
    pub fn standardize_date(&self, string: &str) -> String {
        if !self.is_localized() {
            return string.to_string();
        }
        let separator = self.host.datetime_separator();
        self.registry
            .datetime
            .standardize(string, |token| self.tr(token), &separator)
    }
}
