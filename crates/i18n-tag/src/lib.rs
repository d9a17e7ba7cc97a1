//! A `trans` block tag for template engines.
//!
//! ```text
//! {% trans "de" { name: user } %}message.greeting{% endtrans %}
//! ```
//!
//! The block body renders to a translation key. At render time the tag looks
//! the key up in an in-memory catalog under the given locale (or the
//! configured default), substitutes `{{name}}` placeholders and emits the
//! result unescaped. Keys missing from every locale render as themselves.

pub mod catalog;
pub mod config;
pub mod interpolation;
pub mod tag;
pub mod types;

pub use catalog::{Resources, Translator};
pub use config::{ConfigError, ExtensionConfig};
pub use tag::{CallArg, Extension, TagError, TransExtension};
pub use types::{Params, SafeString, Value};

/// Creates a [`Params`] map from key-value pairs.
///
/// Values are converted via `Into<Value>`.
///
/// # Example
///
/// ```
/// use i18n_tag::{params, Value};
///
/// let p = params! { "count" => 3, "name" => "World" };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p["name"].as_string(), Some("World"));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        $crate::Params::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Params::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
