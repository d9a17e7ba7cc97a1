//! Configuration surface for the `trans` extension.

use std::fs;
use std::path::{Path, PathBuf};

use bon::Builder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{DEFAULT_NAMESPACE, Resources, Translator};

/// Errors that occur while loading an [`ExtensionConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error when reading a configuration file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON or has the wrong shape.
    #[error("{origin}: invalid configuration: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Options fixed when the extension is constructed.
///
/// Serialized field names are camelCase, so a JSON configuration reads:
///
/// ```
/// use i18n_tag::ExtensionConfig;
///
/// let config = ExtensionConfig::from_json_str(r#"{
///     "translationResources": {
///         "en": { "translation": { "message.hello": "Hello" } }
///     },
///     "defaultLocale": "en"
/// }"#).unwrap();
///
/// assert_eq!(config.default_locale, "en");
/// assert!(config.escape_value);
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct ExtensionConfig {
    /// All available translations: locale -> namespace -> key -> text.
    /// Numbers and booleans are read as text; `null` leaves a key undefined.
    #[serde(default)]
    #[builder(default)]
    pub translation_resources: Resources,

    /// Locale used when a `trans` tag supplies none, and the first fallback
    /// for every lookup.
    #[serde(default = "default_locale")]
    #[builder(default = default_locale())]
    pub default_locale: String,

    /// Namespace for keys without an `ns:` prefix.
    #[serde(default = "default_namespace")]
    #[builder(default = default_namespace())]
    pub default_namespace: String,

    /// HTML-escape interpolated parameter values.
    #[serde(default = "default_escape_value")]
    #[builder(default = true)]
    pub escape_value: bool,

    /// Locales tried after the default locale.
    #[serde(default)]
    #[builder(default)]
    pub fallback_locales: Vec<String>,
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_escape_value() -> bool {
    true
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        ExtensionConfig::builder().build()
    }
}

impl ExtensionConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|source| ConfigError::Json {
            origin: "<string>".to_string(),
            source,
        })
    }

    /// Read a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            origin: path.display().to_string(),
            source,
        })
    }

    /// The full fallback list: the default locale, then `fallback_locales`.
    pub fn fallback_chain(&self) -> Vec<String> {
        let mut chain = vec![self.default_locale.clone()];
        for locale in &self.fallback_locales {
            if !chain.contains(locale) {
                chain.push(locale.clone());
            }
        }
        chain
    }

    /// Build the translation engine seeded by this configuration.
    pub fn translator(&self) -> Translator {
        Translator::builder()
            .resources(self.translation_resources.clone())
            .fallback_locales(self.fallback_chain())
            .default_namespace(self.default_namespace.clone())
            .escape_value(self.escape_value)
            .language(self.default_locale.clone())
            .build()
    }
}
