//! Catalog text parser using winnow.
//!
//! Handles literal text and `{{ path }}` placeholders. Everything between
//! the braces is the parameter path, trimmed. A leading `-` (`{{- path}}`)
//! marks the value as raw, and a `,` starts a format suffix that is ignored
//! (`{{ count, number }}` reads `count`). A single `{` is ordinary text.
//!
//! [`parse_template`] rejects a `{{` without a closing `}}` or with nothing
//! inside. [`parse_template_lossy`] keeps such a piece as literal text and
//! parses the rest.

use winnow::combinator::{alt, cut_err, preceded, repeat, terminated};
use winnow::error::ErrMode;
use winnow::prelude::*;
use winnow::token::{take_till, take_until};

use super::ast::{Segment, Template};
use super::error::InterpolationError;

/// Parse a catalog text into a [`Template`].
pub fn parse_template(input: &str) -> Result<Template, InterpolationError> {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(t) if remaining.is_empty() => Ok(t),
        Ok(_) => {
            let (line, column) = calculate_position(input, remaining);
            Err(InterpolationError::Syntax {
                line,
                column,
                message: format!(
                    "unexpected character: '{}'",
                    remaining.chars().next().unwrap_or('?')
                ),
            })
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            let message = match e {
                ErrMode::Cut(_) => "unterminated or malformed placeholder".to_string(),
                other => format!("parse error: {other}"),
            };
            Err(InterpolationError::Syntax {
                line,
                column,
                message,
            })
        }
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

/// Parse a catalog text, keeping malformed placeholders as literal text.
pub fn parse_template_lossy(input: &str) -> Template {
    let mut remaining = input;
    let segments: Vec<Segment> = repeat(0.., lossy_segment)
        .parse_next(&mut remaining)
        .unwrap_or_default();
    Template {
        segments: merge_literals(segments),
    }
}

fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other @ Segment::Placeholder { .. } => result.push(other),
        }
    }

    result
}

fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((placeholder, literal_run, lone_brace)).parse_next(input)
}

fn lossy_segment(input: &mut &str) -> ModalResult<Segment> {
    alt((preceded("{{", placeholder_body), literal_run, lone_brace)).parse_next(input)
}

/// Text up to the next `{`.
fn literal_run(input: &mut &str) -> ModalResult<Segment> {
    take_till(1.., '{')
        .map(|s: &str| Segment::Literal(s.to_string()))
        .parse_next(input)
}

/// A `{` that does not open a placeholder.
fn lone_brace(input: &mut &str) -> ModalResult<Segment> {
    '{'.value(Segment::Literal("{".to_string()))
        .parse_next(input)
}

/// `{{ path }}` or `{{- path }}`.
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    preceded("{{", cut_err(placeholder_body)).parse_next(input)
}

fn placeholder_body(input: &mut &str) -> ModalResult<Segment> {
    terminated(take_until(1.., "}}"), "}}")
        .verify_map(placeholder_from_inner)
        .parse_next(input)
}

/// Interpret the text between `{{` and `}}`.
fn placeholder_from_inner(inner: &str) -> Option<Segment> {
    let inner = inner.trim();
    let (raw, inner) = match inner.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, inner),
    };
    let path = inner.split_once(',').map_or(inner, |(path, _)| path).trim();
    if path.is_empty() {
        return None;
    }
    Some(Segment::Placeholder {
        path: path.to_string(),
        raw,
    })
}
