//! Parsed form of a catalog text.

/// A catalog text split into literal runs and placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    /// True when the text has no placeholders at all.
    pub fn is_literal(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Literal(_)))
    }

    /// Parameter paths referenced by this template, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder { path, .. } => Some(path.as_str()),
            Segment::Literal(_) => None,
        })
    }
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text.
    Literal(String),
    /// `{{path}}`, or `{{- path}}` when `raw` is set.
    Placeholder {
        /// Dotted parameter path (e.g., "name", "user.name").
        path: String,
        /// Insert the value without HTML escaping.
        raw: bool,
    },
}
