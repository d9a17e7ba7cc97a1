//! Miette diagnostics for configuration and catalog text errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use i18n_tag::interpolation::InterpolationError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A configuration file that is not valid JSON or has the wrong shape.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid configuration: {message}")]
#[diagnostic(code(i18n_tag::config))]
pub struct ConfigDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,
}

impl ConfigDiagnostic {
    /// Create a diagnostic from a JSON error with source context.
    pub fn from_json_error(path: &Path, content: &str, err: &serde_json::Error) -> Self {
        let offset = line_column_offset(content, err.line(), err.column());
        ConfigDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: err.to_string(),
        }
    }
}

/// A catalog text with a malformed placeholder.
#[derive(Debug, Error, Diagnostic)]
#[error("malformed text for '{key}' in '{locale}': {message}")]
#[diagnostic(
    code(i18n_tag::interpolation),
    help("every placeholder opened with a double brace needs a name and a closing double brace")
)]
pub struct TemplateDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    locale: String,
    key: String,
    message: String,
}

impl TemplateDiagnostic {
    /// Create a diagnostic for the text of `key` in `locale`.
    pub fn new(path: &Path, locale: &str, key: &str, text: &str, err: &InterpolationError) -> Self {
        let InterpolationError::Syntax {
            line,
            column,
            message,
        } = err;
        let offset = line_column_offset(text, *line, *column);
        TemplateDiagnostic {
            src: NamedSource::new(format!("{}#{locale}/{key}", path.display()), text.to_string()),
            span: (offset, 1).into(),
            locale: locale.to_string(),
            key: key.to_string(),
            message: message.clone(),
        }
    }
}

/// Convert 1-based line:column to a byte offset clamped to the content.
fn line_column_offset(content: &str, line: usize, column: usize) -> usize {
    let offset = content
        .lines()
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum::<usize>()
        + column.saturating_sub(1);
    offset.min(content.len())
}
