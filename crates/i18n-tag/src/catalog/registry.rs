//! Key registry for storing and looking up catalog entries.

use std::collections::BTreeMap;

use tracing::warn;

use crate::interpolation::{Template, parse_template, parse_template_lossy};

/// A catalog text together with its parsed form.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// The text as written in the resources.
    pub text: String,
    /// Parsed form. Malformed placeholders are literal text here.
    pub template: Template,
    /// Whether the text contains a malformed placeholder.
    pub malformed: bool,
}

impl Entry {
    /// Parse `text`. A malformed `{{` stays literal; the rest still
    /// interpolates.
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        let (template, malformed) = match parse_template(&text) {
            Ok(template) => (template, false),
            Err(e) => {
                warn!(%text, error = %e, "malformed interpolation, keeping it as literal text");
                (parse_template_lossy(&text), true)
            }
        };
        Self {
            text,
            template,
            malformed,
        }
    }
}

/// The entries of one namespace in one locale, indexed by dotted key.
#[derive(Debug, Default)]
pub struct KeyRegistry {
    entries: BTreeMap<String, Entry>,
}

impl KeyRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an entry by key.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert an entry.
    ///
    /// The first entry for a key wins: a flat `a.b` and a nested `a: { b }`
    /// collide on the same dotted key, and the later one is dropped.
    pub fn insert(&mut self, key: String, entry: Entry) {
        if self.entries.contains_key(&key) {
            warn!(%key, "duplicate catalog key, keeping the first definition");
            return;
        }
        self.entries.insert(key, entry);
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
