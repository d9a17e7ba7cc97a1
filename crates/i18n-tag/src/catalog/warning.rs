use thiserror::Error;

/// A problem found when comparing a translation against its source locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationWarning {
    /// The target locale defines a key the source locale does not have.
    #[error("'{key}' in '{locale}' does not exist in the source locale")]
    UnknownKey { key: String, locale: String },

    /// The target text uses different placeholders than the source text.
    #[error(
        "'{key}' in '{locale}' uses placeholders [{}], source uses [{}]",
        found.join(", "),
        expected.join(", ")
    )]
    PlaceholderMismatch {
        key: String,
        locale: String,
        expected: Vec<String>,
        found: Vec<String>,
    },
}
