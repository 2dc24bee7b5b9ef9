use tracing::warn;

use crate::config::Config;

/// Queries the registry makes to the application embedding it.
pub trait Host {
    /// Handles of installed and enabled extensions.
    fn enabled_extensions(&self) -> Vec<String>;

    /// Namespace of the page being rendered, used when `translate` is called
    /// without one.
    fn page_namespace(&self) -> Option<String> {
        None
    }

    /// Separator the locale puts between date and time.
    fn datetime_separator(&self) -> String {
        " ".to_string()
    }

    /// Report a non-fatal problem.
    fn warn(&self, message: &str) {
        warn!("{}", message);
    }
}

/// [`Host`] backed by static configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigHost {
    pub enabled_extensions: Vec<String>,
    pub page_namespace: Option<String>,
    pub datetime_separator: String,
}

impl ConfigHost {
    pub fn from_config(config: &Config) -> Self {
        Self {
            enabled_extensions: config.enabled_extensions.clone(),
            page_namespace: None,
            datetime_separator: config.datetime_separator.clone(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.page_namespace = Some(namespace.into());
        self
    }
}

impl Host for ConfigHost {
    fn enabled_extensions(&self) -> Vec<String> {
        self.enabled_extensions.clone()
    }

    fn page_namespace(&self) -> Option<String> {
        self.page_namespace.clone()
    }

    fn datetime_separator(&self) -> String {
        if self.datetime_separator.is_empty() {
            " ".to_string()
        } else {
            self.datetime_separator.clone()
        }
    }
}
