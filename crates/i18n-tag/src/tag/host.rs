//! The narrow slice of a host template engine the `trans` tag depends on.

use crate::tag::args::CallArg;
use crate::tag::error::TagError;
use crate::types::SafeString;

/// A token taken from the host's token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Source text of the token (for a tag name token, the tag name).
    pub value: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(value: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            value: value.into(),
            line,
            column,
        }
    }
}

/// Compile-time cursor over a template's tokens.
///
/// `Expr` is the host's argument expression node and `Node` its body node;
/// the tag passes both through to the call node without inspecting them.
pub trait TagParser {
    type Expr;
    type Node;
    type Error;

    /// Consume and return the next token.
    fn next_token(&mut self) -> Result<Token, Self::Error>;

    /// Parse the argument list of the current tag.
    ///
    /// With `allow_bare` set, arguments may appear without surrounding
    /// parentheses (`trans "de" params`); a parenthesized list is accepted
    /// either way.
    fn parse_signature(&mut self, allow_bare: bool) -> Result<Vec<Self::Expr>, Self::Error>;

    /// Move past the end of the current block tag (`%}`). When `name` is
    /// given, the tag being closed must be that tag.
    fn advance_after_block_end(&mut self, name: Option<&str>) -> Result<(), Self::Error>;

    /// Parse template content up to, not including, the first block tag
    /// named in `names`. Reaching the end of input first is an error.
    fn parse_until_blocks(&mut self, names: &[&str]) -> Result<Self::Node, Self::Error>;
}

/// Constructs the call node a parsed tag compiles to.
pub trait NodeFactory<E, N> {
    type CallNode;

    /// A node that, at render time, calls `method` on the extension named
    /// `extension` with `args` followed by one body producer per entry of
    /// `bodies`.
    fn call_extension(
        &mut self,
        extension: &str,
        method: &str,
        args: Vec<E>,
        bodies: Vec<N>,
    ) -> Self::CallNode;
}

/// A plain call node for hosts without their own node type.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExtension<E, N> {
    pub extension: String,
    pub method: String,
    pub args: Vec<E>,
    pub bodies: Vec<N>,
}

/// [`NodeFactory`] producing [`CallExtension`] nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nodes;

impl<E, N> NodeFactory<E, N> for Nodes {
    type CallNode = CallExtension<E, N>;

    fn call_extension(
        &mut self,
        extension: &str,
        method: &str,
        args: Vec<E>,
        bodies: Vec<N>,
    ) -> CallExtension<E, N> {
        CallExtension {
            extension: extension.to_string(),
            method: method.to_string(),
            args,
            bodies,
        }
    }
}

/// A custom-tag extension as seen by the host engine.
pub trait Extension {
    /// Tag names this extension handles.
    fn tags(&self) -> &[&str];

    /// Compile one tag block into a call node.
    fn parse<P, F>(&self, parser: &mut P, nodes: &mut F) -> Result<F::CallNode, P::Error>
    where
        P: TagParser,
        F: NodeFactory<P::Expr, P::Node>;

    /// Execute a call node's method with its positional arguments.
    fn call(&self, method: &str, args: Vec<CallArg<'_>>) -> Result<SafeString, TagError>;
}
