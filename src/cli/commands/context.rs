//! Shared setup for commands that need a translation session.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};

use crate::{
    cli::{args::CommonArgs, report::print_warning},
    config::{Config, load_config},
    core::{Activation, ConfigHost, Host, Registry, RegistryOptions, Session},
};

/// [`Host`] for the command line: configuration answers the queries and
/// warnings go to stderr.
pub struct CliHost {
    inner: ConfigHost,
}

impl CliHost {
    pub fn new(config: &Config, namespace: Option<&str>) -> Self {
        let inner = ConfigHost::from_config(config);
        let inner = match namespace {
            Some(namespace) => inner.with_namespace(namespace),
            None => inner,
        };
        Self { inner }
    }
}

impl Host for CliHost {
    fn enabled_extensions(&self) -> Vec<String> {
        self.inner.enabled_extensions()
    }

    fn page_namespace(&self) -> Option<String> {
        self.inner.page_namespace()
    }

    fn datetime_separator(&self) -> String {
        self.inner.datetime_separator()
    }

    fn warn(&self, message: &str) {
        print_warning(message);
    }
}

pub struct CommandContext {
    pub config: Config,
    pub registry: Registry,
    pub host: CliHost,
    /// Language to activate: `--lang` if given, else the configured one.
    pub language: String,
    /// Refuse to activate languages whose core pack is not enabled.
    pub enforce_enabled: bool,
}

impl CommandContext {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read current directory")?;

        // CLI > config file > defaults
        let config_result = load_config(&cwd)?;
        if common_args.verbose && !config_result.from_file {
            eprintln!("Note: No .langkitrc.json found, using default configuration");
        }
        let config = config_result.config;

        let mut options = RegistryOptions::from_config(&config, &config_result.base_dir);
        if let Some(root) = &common_args.extensions_root {
            options.extensions_root = resolve_cli_path(&cwd, root);
        }
        if let Some(root) = &common_args.lang_root {
            options.lang_root = resolve_cli_path(&cwd, root);
        }

        let registry = Registry::initialize(options)?;
        for warning in registry.warnings() {
            print_warning(&format!(
                "Skipped lang file {}: {}",
                warning.file_path, warning.error
            ));
        }

        let host = CliHost::new(&config, common_args.namespace.as_deref());
        let language = common_args
            .lang
            .clone()
            .unwrap_or_else(|| config.language.clone());

        Ok(Self {
            config,
            registry,
            host,
            language,
            enforce_enabled: !common_args.force,
        })
    }

    /// Start a session and switch it to the requested language.
    pub fn session(&self) -> (Session<'_>, Activation) {
        let mut session = self.registry.session(&self.host);
        let activation = session.activate(&self.language, self.enforce_enabled);
        (session, activation)
    }
}

/// CLI paths are relative to the working directory, not the config file.
fn resolve_cli_path(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_cli_path() {
        let cwd = Path::new("/work");
        assert_eq!(
            resolve_cli_path(cwd, Path::new("ext")),
            PathBuf::from("/work/ext")
        );
        assert_eq!(
            resolve_cli_path(cwd, Path::new("/abs/ext")),
            PathBuf::from("/abs/ext")
        );
    }

    #[test]
    fn test_cli_host_namespace() {
        let config = Config {
            enabled_extensions: vec!["lang_fr".to_string()],
            ..Default::default()
        };

        let host = CliHost::new(&config, Some("/blog"));
        assert_eq!(host.page_namespace(), Some("/blog".to_string()));
        assert_eq!(host.enabled_extensions(), vec!["lang_fr".to_string()]);
        assert_eq!(host.datetime_separator(), " ");

        let host = CliHost::new(&config, None);
        assert_eq!(host.page_namespace(), None);
    }
}
