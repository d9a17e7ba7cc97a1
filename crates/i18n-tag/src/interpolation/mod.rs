//! `{{placeholder}}` interpolation for catalog entries.
//!
//! Catalog texts are parsed once when the catalog is built; rendering then
//! substitutes parameter values into the parsed segments.

pub mod ast;
mod error;
mod parser;
mod render;

pub use ast::{Segment, Template};
pub use error::InterpolationError;
pub use parser::{parse_template, parse_template_lossy};
pub use render::{escape_html, render};
