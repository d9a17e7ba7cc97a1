//! In-memory translation catalog.
//!
//! Resources are organized as locale -> namespace -> key -> text. The
//! [`Translator`] flattens them into per-locale registries at construction
//! time and resolves lookups through a fallback chain of locales.

mod registry;
mod resources;
mod translator;
mod warning;

pub use registry::{Entry, KeyRegistry};
pub use resources::{ResourceEntry, ResourceNode, Resources};
pub use translator::{DEFAULT_NAMESPACE, Translator, compute_suggestions};
pub use warning::TranslationWarning;
