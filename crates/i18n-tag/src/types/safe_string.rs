use std::fmt::{Display, Formatter, Result as FmtResult};

/// Rendered text that the host engine must emit verbatim, without escaping.
///
/// Translations may contain markup (`<b>Hallo</b>`) that the translator put
/// there on purpose, so the tag hands its output back wrapped in this marker.
/// Interpolated parameter values are escaped before they get here unless the
/// catalog was configured otherwise.
///
/// # Example
///
/// ```
/// use i18n_tag::SafeString;
///
/// let s = SafeString::new("Hallo");
/// assert_eq!(s.as_str(), "Hallo");
/// assert_eq!(s.len(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SafeString {
    val: String,
}

impl SafeString {
    /// Mark `val` as safe for verbatim output.
    pub fn new(val: impl Into<String>) -> Self {
        Self { val: val.into() }
    }

    /// The wrapped text.
    pub fn as_str(&self) -> &str {
        &self.val
    }

    /// Length of the wrapped text in bytes.
    pub fn len(&self) -> usize {
        self.val.len()
    }

    pub fn is_empty(&self) -> bool {
        self.val.is_empty()
    }

    /// Unwrap into the underlying string.
    pub fn into_string(self) -> String {
        self.val
    }
}

impl Display for SafeString {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.val)
    }
}

impl From<String> for SafeString {
    fn from(val: String) -> Self {
        Self { val }
    }
}

impl PartialEq<str> for SafeString {
    fn eq(&self, other: &str) -> bool {
        self.val == other
    }
}

impl PartialEq<&str> for SafeString {
    fn eq(&self, other: &&str) -> bool {
        self.val == *other
    }
}
