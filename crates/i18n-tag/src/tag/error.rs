use std::error::Error as StdError;

use thiserror::Error;

/// Boxed error type for failures raised by the host engine.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// An error that occurred while evaluating a tag call.
///
/// Missing translations and unusable locales are not errors; they fall back
/// to the key and the default locale respectively.
#[derive(Debug, Error)]
pub enum TagError {
    /// Rendering the block body failed inside the host engine.
    #[error("failed to render trans body: {source}")]
    Body {
        #[source]
        source: BoxError,
    },

    /// The host dispatched a method this extension does not provide.
    #[error("extension '{extension}' has no method '{method}'")]
    UnknownMethod { extension: String, method: String },
}
