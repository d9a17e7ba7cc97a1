//! Integration tests for extension configuration.

use std::io::Write;

use i18n_tag::{ConfigError, ExtensionConfig, Params, Resources, TransExtension};
use tempfile::NamedTempFile;

const CONFIG: &str = r#"{
    "translationResources": {
        "en": { "translation": { "message.hello": "Hello" } },
        "de": { "translation": { "message.hello": "Hallo" } }
    },
    "defaultLocale": "de"
}"#;

#[test]
fn defaults_apply_to_empty_config() {
    let config = ExtensionConfig::from_json_str("{}").unwrap();
    assert_eq!(config, ExtensionConfig::default());
    assert_eq!(config.default_locale, "en");
    assert_eq!(config.default_namespace, "translation");
    assert!(config.escape_value);
    assert!(config.translation_resources.is_empty());
}

#[test]
fn camel_case_options_are_recognized() {
    let config = ExtensionConfig::from_json_str(CONFIG).unwrap();
    assert_eq!(config.default_locale, "de");
    assert_eq!(
        config.translation_resources,
        Resources::new()
            .with("en", "translation", "message.hello", "Hello")
            .with("de", "translation", "message.hello", "Hallo")
    );
}

#[test]
fn default_locale_drives_fallback() {
    let extension = TransExtension::new(ExtensionConfig::from_json_str(CONFIG).unwrap());
    let translator = extension.translator();
    assert_eq!(translator.fallback_locales(), ["de".to_string()]);
    assert_eq!(translator.language(), "de");
}

#[test]
fn fallback_chain_starts_with_default_locale() {
    let config = ExtensionConfig::builder()
        .default_locale("en")
        .fallback_locales(vec!["de".to_string(), "en".to_string()])
        .build();
    assert_eq!(config.fallback_chain(), vec!["en", "de"]);
}

#[test]
fn scalar_resource_values_load_as_text() {
    let config = ExtensionConfig::from_json_str(
        r#"{ "translationResources": { "en": { "translation": {
            "limit": 5, "enabled": false, "unset": null, "hello": "Hello"
        } } } }"#,
    )
    .unwrap();
    let translator = config.translator();
    let p = Params::new();
    assert_eq!(translator.translate("en", "limit", &p), "5");
    assert_eq!(translator.translate("en", "enabled", &p), "false");
    assert_eq!(translator.translate("en", "unset", &p), "unset");
    assert_eq!(translator.translate("en", "hello", &p), "Hello");
}

#[test]
fn invalid_json_is_reported() {
    let err = ExtensionConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json { .. }));
    assert!(err.to_string().starts_with("<string>: invalid configuration"));
}

#[test]
fn wrong_shape_is_reported() {
    let err = ExtensionConfig::from_json_str(r#"{ "defaultLocale": 3 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json { .. }));
}

#[test]
fn loads_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CONFIG.as_bytes()).unwrap();
    file.flush().unwrap();

    let config = ExtensionConfig::from_path(file.path()).unwrap();
    assert_eq!(config.default_locale, "de");
}

#[test]
fn missing_file_is_io_error() {
    let err = ExtensionConfig::from_path("/nonexistent/i18n.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/i18n.json"));
}
