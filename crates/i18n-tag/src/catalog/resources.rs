use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A catalog node: a text, a scalar used as text, or a group of nested keys.
///
/// Nested groups are addressed with dotted keys, so
/// `{ "message": { "hello": "Hello" } }` and `{ "message.hello": "Hello" }`
/// both answer the key `message.hello`. Numbers and booleans translate to
/// their JSON spelling; `null` leaves the key undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceNode {
    Text(String),
    Bool(bool),
    Number(Number),
    Nested(BTreeMap<String, ResourceNode>),
    Null,
}

/// The resource tree seeding a catalog: locale -> namespace -> key -> node.
///
/// # Example
///
/// ```
/// use i18n_tag::Resources;
///
/// let resources = Resources::new()
///     .with("en", "translation", "message.hello", "Hello")
///     .with("de", "translation", "message.hello", "Hallo");
///
/// assert_eq!(resources.locales().collect::<Vec<_>>(), vec!["de", "en"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resources(BTreeMap<String, BTreeMap<String, BTreeMap<String, ResourceNode>>>);

/// A single flattened text from a resource tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry<'a> {
    pub locale: &'a str,
    pub namespace: &'a str,
    /// Full dotted key within the namespace.
    pub key: String,
    pub text: Cow<'a, str>,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a flat text entry, replacing any previous text under that key.
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        namespace: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut Self {
        self.0
            .entry(locale.into())
            .or_default()
            .entry(namespace.into())
            .or_default()
            .insert(key.into(), ResourceNode::Text(text.into()));
        self
    }

    /// Chaining form of [`Resources::insert`].
    pub fn with(
        mut self,
        locale: impl Into<String>,
        namespace: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.insert(locale, namespace, key, text);
        self
    }

    /// Configured locale codes, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every text in the tree with nested keys joined by `.`.
    pub fn entries(&self) -> Vec<ResourceEntry<'_>> {
        let mut entries = Vec::new();
        for (locale, namespaces) in &self.0 {
            for (namespace, nodes) in namespaces {
                for (key, node) in nodes {
                    flatten_into(&mut entries, locale, namespace, key.clone(), node);
                }
            }
        }
        entries
    }
}

fn flatten_into<'a>(
    out: &mut Vec<ResourceEntry<'a>>,
    locale: &'a str,
    namespace: &'a str,
    key: String,
    node: &'a ResourceNode,
) {
    match node {
        ResourceNode::Text(text) => out.push(ResourceEntry {
            locale,
            namespace,
            key,
            text: Cow::Borrowed(text),
        }),
        ResourceNode::Bool(b) => out.push(ResourceEntry {
            locale,
            namespace,
            key,
            text: Cow::Owned(b.to_string()),
        }),
        ResourceNode::Number(n) => out.push(ResourceEntry {
            locale,
            namespace,
            key,
            text: Cow::Owned(n.to_string()),
        }),
        ResourceNode::Nested(children) => {
            for (child_key, child) in children {
                flatten_into(out, locale, namespace, format!("{key}.{child_key}"), child);
            }
        }
        ResourceNode::Null => {}
    }
}
