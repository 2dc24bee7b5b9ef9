use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".langkitrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding one sub-directory per installed extension.
    #[serde(default = "default_extensions_root")]
    pub extensions_root: String,
    /// Directory holding `datetime.json` and `transliterations.json`.
    #[serde(default = "default_lang_root")]
    pub lang_root: String,
    #[serde(default = "default_identity_language")]
    pub identity_language: String,
    #[serde(default = "default_identity_name")]
    pub identity_name: String,
    #[serde(default = "default_identity_handle")]
    pub identity_handle: String,
    /// Extension-name prefix marking a core language pack.
    #[serde(default = "default_core_marker")]
    pub core_marker: String,
    /// Handles of installed and enabled extensions.
    #[serde(default)]
    pub enabled_extensions: Vec<String>,
    #[serde(default = "default_datetime_separator")]
    pub datetime_separator: String,
    /// Language activated when no `--lang` flag is given.
    #[serde(default = "default_identity_language")]
    pub language: String,
}

fn default_extensions_root() -> String {
    "./extensions".to_string()
}

fn default_lang_root() -> String {
    "./lang".to_string()
}

fn default_identity_language() -> String {
    "en".to_string()
}

fn default_identity_name() -> String {
    "English".to_string()
}

fn default_identity_handle() -> String {
    "english".to_string()
}

fn default_core_marker() -> String {
    "lang_".to_string()
}

fn default_datetime_separator() -> String {
    " ".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions_root: default_extensions_root(),
            lang_root: default_lang_root(),
            identity_language: default_identity_language(),
            identity_name: default_identity_name(),
            identity_handle: default_identity_handle(),
            core_marker: default_core_marker(),
            enabled_extensions: Vec::new(),
            datetime_separator: default_datetime_separator(),
            language: default_identity_language(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.identity_language.trim().is_empty() {
            bail!("'identityLanguage' must not be empty");
        }
        if self.core_marker.is_empty() {
            bail!("'coreMarker' must not be empty");
        }
        if self.datetime_separator.is_empty() {
            bail!("'datetimeSeparator' must not be empty (use \" \" for none)");
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory the config file was found in; relative roots resolve against it.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
