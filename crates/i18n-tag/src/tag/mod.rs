//! The `trans` block tag.
//!
//! Parsing happens once per template through the [`TagParser`] and
//! [`NodeFactory`] traits the host engine implements. Evaluation happens per
//! render through [`TransExtension::trans`], which receives the positional
//! arguments the host captured in the call node.

mod args;
mod error;
mod extension;
mod host;
mod parse;

pub use args::{BodyProducer, CallArg, TransArgs};
pub use error::{BoxError, TagError};
pub use extension::{EXTENSION_NAME, TransExtension};
pub use host::{CallExtension, Extension, NodeFactory, Nodes, TagParser, Token};
pub use parse::{END_TAG, TRANS_METHOD, TRANS_TAG, parse_trans};
