use crate::tag::host::{NodeFactory, TagParser};

/// Opening tag name.
pub const TRANS_TAG: &str = "trans";

/// Closing tag name.
pub const END_TAG: &str = "endtrans";

/// Method the call node invokes at render time.
pub const TRANS_METHOD: &str = "trans";

/// Compile `{% trans [locale] [params] %} body {% endtrans %}`.
///
/// The cursor must be positioned on the tag name token. Errors from the
/// host (a malformed signature, a missing `endtrans`) are returned as-is.
pub fn parse_trans<P, F>(
    parser: &mut P,
    nodes: &mut F,
    extension: &str,
) -> Result<F::CallNode, P::Error>
where
    P: TagParser,
    F: NodeFactory<P::Expr, P::Node>,
{
    let tok = parser.next_token()?;

    let args = parser.parse_signature(true)?;
    parser.advance_after_block_end(Some(tok.value.as_str()))?;

    let body = parser.parse_until_blocks(&[END_TAG])?;

    parser.advance_after_block_end(None)?;

    Ok(nodes.call_extension(extension, TRANS_METHOD, args, vec![body]))
}
