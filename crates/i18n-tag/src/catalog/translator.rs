//! Translation lookup with locale fallback.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{PoisonError, RwLock};

use bon::bon;
use tracing::{debug, trace};

use crate::catalog::registry::{Entry, KeyRegistry};
use crate::catalog::resources::Resources;
use crate::catalog::warning::TranslationWarning;
use crate::interpolation::render;
use crate::types::Params;

/// Namespace used for keys without an explicit `ns:` prefix.
pub const DEFAULT_NAMESPACE: &str = "translation";

/// Translation engine holding the catalog and the active locale.
///
/// Every lookup walks a fallback chain: the requested locale, its base
/// language (`de-AT` -> `de`), then the configured fallback locales in
/// order. A key missing from the whole chain translates to itself.
///
/// The active locale is shared state. [`Translator::translate`] takes the
/// locale explicitly and never touches it; [`Translator::translate_as`] sets
/// it and looks up under one write guard, so concurrent callers cannot
/// observe each other's locale between the two steps.
///
/// # Example
///
/// ```
/// use i18n_tag::{Params, Resources, Translator};
///
/// let translator = Translator::builder()
///     .resources(
///         Resources::new()
///             .with("en", "translation", "message.hello", "Hello")
///             .with("de", "translation", "message.hello", "Hallo"),
///     )
///     .fallback_locales(vec!["en".to_string()])
///     .build();
///
/// let params = Params::new();
/// assert_eq!(translator.translate("de", "message.hello", &params), "Hallo");
/// assert_eq!(translator.translate("fr", "message.hello", &params), "Hello");
/// assert_eq!(translator.translate("de", "unknown", &params), "unknown");
/// ```
#[derive(Debug)]
pub struct Translator {
    /// locale -> namespace -> registry.
    registries: BTreeMap<String, BTreeMap<String, KeyRegistry>>,

    /// Every namespace name seen in the resources, for `ns:key` splitting.
    namespaces: BTreeSet<String>,

    /// Locales tried after the requested locale and its base language.
    fallback_locales: Vec<String>,

    default_namespace: String,

    /// HTML-escape interpolated values.
    escape_value: bool,

    /// Locale consulted by [`Translator::t`].
    active: RwLock<String>,
}

#[bon]
impl Translator {
    /// Build a translator from a resource tree.
    ///
    /// The active locale starts as `language`, or the first fallback locale,
    /// or `"en"`.
    #[builder]
    pub fn new(
        resources: Resources,
        #[builder(default)] fallback_locales: Vec<String>,
        #[builder(into, default = DEFAULT_NAMESPACE.to_string())] default_namespace: String,
        #[builder(default = true)] escape_value: bool,
        #[builder(into)] language: Option<String>,
    ) -> Self {
        let mut registries: BTreeMap<String, BTreeMap<String, KeyRegistry>> = BTreeMap::new();
        let mut namespaces = BTreeSet::new();

        for entry in resources.entries() {
            namespaces.insert(entry.namespace.to_string());
            registries
                .entry(entry.locale.to_string())
                .or_default()
                .entry(entry.namespace.to_string())
                .or_default()
                .insert(entry.key, Entry::parse(entry.text));
        }

        let active = language
            .or_else(|| fallback_locales.first().cloned())
            .unwrap_or_else(|| "en".to_string());

        debug!(
            locales = registries.len(),
            fallback = ?fallback_locales,
            "translation catalog initialized"
        );

        Self {
            registries,
            namespaces,
            fallback_locales,
            default_namespace,
            escape_value,
            active: RwLock::new(active),
        }
    }
}

impl Translator {
    // =========================================================================
    // Active Locale
    // =========================================================================

    /// The currently active locale.
    pub fn language(&self) -> String {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Change the active locale.
    ///
    /// The locale does not need to have resources; lookups under it simply
    /// fall back.
    pub fn change_language(&self, language: impl Into<String>) {
        *self.active.write().unwrap_or_else(PoisonError::into_inner) = language.into();
    }

    /// Translate `key` under the active locale.
    pub fn t(&self, key: &str, params: &Params) -> String {
        let active = self.active.read().unwrap_or_else(PoisonError::into_inner);
        self.translate(&active, key, params)
    }

    /// Make `locale` active and translate `key` under it, as one step.
    pub fn translate_as(&self, locale: &str, key: &str, params: &Params) -> String {
        let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
        locale.clone_into(&mut *active);
        self.translate(&active, key, params)
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Translate `key` under an explicit locale.
    ///
    /// Returns the interpolated text from the first locale in the fallback
    /// chain that has the key, or the key itself.
    pub fn translate(&self, locale: &str, key: &str, params: &Params) -> String {
        match self.lookup(locale, key) {
            Some((found_in, entry)) => {
                if found_in != locale {
                    trace!(key, requested = locale, found_in, "translation served from fallback");
                }
                render(&entry.template, params, self.escape_value)
            }
            None => {
                debug!(key, locale, "missing translation, returning key");
                key.to_string()
            }
        }
    }

    /// Whether `key` resolves anywhere in the fallback chain of `locale`.
    pub fn exists(&self, locale: &str, key: &str) -> bool {
        self.lookup(locale, key).is_some()
    }

    /// Find the entry for `key`, returning the locale that supplied it.
    pub fn lookup<'a>(&'a self, locale: &'a str, key: &'a str) -> Option<(&'a str, &'a Entry)> {
        let (namespace, key) = self.split_namespace(key);
        self.fallback_chain(locale).into_iter().find_map(|candidate| {
            self.registries
                .get(candidate)?
                .get(namespace)?
                .get(key)
                .map(|entry| (candidate, entry))
        })
    }

    /// Locales consulted for `locale`, in order, without duplicates.
    pub fn fallback_chain<'a>(&'a self, locale: &'a str) -> Vec<&'a str> {
        let mut chain: Vec<&str> = Vec::with_capacity(self.fallback_locales.len() + 2);
        let base = base_language(locale);
        let candidates = [Some(locale), base]
            .into_iter()
            .flatten()
            .chain(self.fallback_locales.iter().map(String::as_str));
        for candidate in candidates {
            if !candidate.is_empty() && !chain.contains(&candidate) {
                chain.push(candidate);
            }
        }
        chain
    }

    /// Split `ns:key` when `ns` is a known namespace.
    fn split_namespace<'a>(&'a self, key: &'a str) -> (&'a str, &'a str) {
        match key.split_once(':') {
            Some((namespace, rest)) if self.namespaces.contains(namespace) => (namespace, rest),
            _ => (self.default_namespace.as_str(), key),
        }
    }

    // =========================================================================
    // Catalog Inspection
    // =========================================================================

    /// Locales that have resources, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.registries.keys().map(String::as_str)
    }

    /// The configured fallback locales.
    pub fn fallback_locales(&self) -> &[String] {
        &self.fallback_locales
    }

    /// All keys defined directly in `locale`, sorted.
    ///
    /// Keys outside the default namespace carry their `ns:` prefix.
    pub fn keys(&self, locale: &str) -> Vec<String> {
        let Some(namespaces) = self.registries.get(locale) else {
            return Vec::new();
        };
        let mut keys: Vec<String> = namespaces
            .iter()
            .flat_map(|(namespace, registry)| {
                registry.keys().map(move |key| {
                    if *namespace == self.default_namespace {
                        key.to_string()
                    } else {
                        format!("{namespace}:{key}")
                    }
                })
            })
            .collect();
        keys.sort();
        keys
    }

    /// Keys defined in `source` but not directly in `target`.
    pub fn missing_keys(&self, source: &str, target: &str) -> Vec<String> {
        let present: BTreeSet<String> = self.keys(target).into_iter().collect();
        self.keys(source)
            .into_iter()
            .filter(|key| !present.contains(key))
            .collect()
    }

    /// Compare the texts of `target` against `source`.
    ///
    /// Reports keys that exist only in the target, and texts whose set of
    /// placeholders differs from the source text. Texts with a malformed
    /// placeholder are skipped. Returns nothing if either locale has no
    /// resources.
    pub fn validate_translations(&self, source: &str, target: &str) -> Vec<TranslationWarning> {
        let mut warnings = Vec::new();

        let Some(source_namespaces) = self.registries.get(source) else {
            return warnings;
        };
        let Some(target_namespaces) = self.registries.get(target) else {
            return warnings;
        };

        for (namespace, target_registry) in target_namespaces {
            let source_registry = source_namespaces.get(namespace);
            for key in target_registry.keys() {
                let qualified = if *namespace == self.default_namespace {
                    key.to_string()
                } else {
                    format!("{namespace}:{key}")
                };
                let Some(source_entry) = source_registry.and_then(|r| r.get(key)) else {
                    warnings.push(TranslationWarning::UnknownKey {
                        key: qualified,
                        locale: target.to_string(),
                    });
                    continue;
                };
                let Some(target_entry) = target_registry.get(key) else {
                    continue;
                };
                if source_entry.malformed || target_entry.malformed {
                    continue;
                }
                let expected: BTreeSet<&str> = source_entry.template.placeholders().collect();
                let found: BTreeSet<&str> = target_entry.template.placeholders().collect();
                if expected != found {
                    warnings.push(TranslationWarning::PlaceholderMismatch {
                        key: qualified,
                        locale: target.to_string(),
                        expected: expected.into_iter().map(str::to_string).collect(),
                        found: found.into_iter().map(str::to_string).collect(),
                    });
                }
            }
        }

        warnings
    }

    /// Keys in `locale` close to `key`, closest first, at most three.
    pub fn suggest_keys(&self, locale: &str, key: &str) -> Vec<String> {
        compute_suggestions(key, &self.keys(locale))
    }
}

/// `de-AT` -> `de`, `pt_BR` -> `pt`.
fn base_language(locale: &str) -> Option<&str> {
    locale
        .split_once(['-', '_'])
        .map(|(base, _)| base)
        .filter(|base| !base.is_empty())
}

/// Compute "did you mean" suggestions using Levenshtein distance.
///
/// Short keys tolerate one edit, longer keys two.
pub fn compute_suggestions(target: &str, available: &[String]) -> Vec<String> {
    let max_distance = if target.len() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (strsim::levenshtein(target, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort();
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
