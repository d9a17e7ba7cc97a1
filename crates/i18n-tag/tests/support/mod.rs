//! A miniature host template engine used to drive the `trans` tag end to end.
//!
//! Supports text, `{{ var }}` output and `{% tag args %}` blocks, where the
//! only known block tag is whatever the extension declares.

use std::collections::BTreeMap;

use i18n_tag::tag::{BoxError, CallExtension, Nodes, TagParser, Token};
use i18n_tag::{CallArg, Extension, TransExtension, Value};
use thiserror::Error;
use winnow::combinator::{alt, delimited, opt, repeat, separated, terminated};
use winnow::prelude::*;
use winnow::token::{take_till, take_while};

#[derive(Debug, Error, PartialEq)]
#[error("{0}")]
pub struct HostError(pub String);

/// A signature argument expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Str(String),
    Var(String),
    Object(Vec<(String, Expr)>),
}

/// A compiled template node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Output(String),
    Call(CallExtension<Expr, Vec<Node>>),
}

#[derive(Debug, Clone, PartialEq)]
enum Piece {
    Text(String),
    Output(String),
    Tag(String),
}

fn lex(source: &str) -> Result<Vec<Piece>, HostError> {
    let mut pieces = Vec::new();
    let mut rest = source;
    while !rest.is_empty() {
        let next = [rest.find("{%"), rest.find("{{")].into_iter().flatten().min();
        match next {
            Some(0) => {
                let close = if rest.starts_with("{%") { "%}" } else { "}}" };
                let end = rest
                    .find(close)
                    .ok_or_else(|| HostError(format!("unclosed '{}'", &rest[..2])))?;
                let inner = rest[2..end].trim().to_string();
                if close == "%}" {
                    pieces.push(Piece::Tag(inner));
                } else {
                    pieces.push(Piece::Output(inner));
                }
                rest = &rest[end + 2..];
            }
            Some(n) => {
                pieces.push(Piece::Text(rest[..n].to_string()));
                rest = &rest[n..];
            }
            None => {
                pieces.push(Piece::Text(rest.to_string()));
                rest = "";
            }
        }
    }
    Ok(pieces)
}

/// Records what the extension asked for while parsing.
#[derive(Debug, Default)]
pub struct Calls {
    pub signature_allow_bare: Vec<bool>,
    pub block_ends: Vec<Option<String>>,
}

pub struct MiniParser<'e> {
    extension: &'e TransExtension,
    pieces: Vec<Piece>,
    pos: usize,
    /// Unconsumed content of the current block tag.
    tag_rest: Option<String>,
    pub calls: Calls,
}

impl<'e> MiniParser<'e> {
    pub fn new(extension: &'e TransExtension, source: &str) -> Result<Self, HostError> {
        Ok(Self {
            extension,
            pieces: lex(source)?,
            pos: 0,
            tag_rest: None,
            calls: Calls::default(),
        })
    }

    /// Compile the whole template.
    pub fn compile(&mut self) -> Result<Vec<Node>, HostError> {
        let nodes = self.parse_nodes(&[])?;
        match self.pieces.get(self.pos) {
            None => Ok(nodes),
            Some(piece) => Err(HostError(format!("unexpected {piece:?}"))),
        }
    }

    fn parse_nodes(&mut self, until: &[&str]) -> Result<Vec<Node>, HostError> {
        let mut nodes = Vec::new();
        while let Some(piece) = self.pieces.get(self.pos).cloned() {
            match piece {
                Piece::Text(text) => {
                    nodes.push(Node::Text(text));
                    self.pos += 1;
                }
                Piece::Output(var) => {
                    nodes.push(Node::Output(var));
                    self.pos += 1;
                }
                Piece::Tag(content) => {
                    let (name, _) = split_tag_name(&content);
                    if until.contains(&name) {
                        return Ok(nodes);
                    }
                    if !self.extension.tags().contains(&name) {
                        return Err(HostError(format!("unknown block tag '{name}'")));
                    }
                    let extension = self.extension;
                    let call = extension.parse(self, &mut Nodes)?;
                    nodes.push(Node::Call(call));
                }
            }
        }
        if until.is_empty() {
            Ok(nodes)
        } else {
            Err(HostError(format!("unexpected end of template, expected '{}'", until.join("', '"))))
        }
    }
}

impl TagParser for MiniParser<'_> {
    type Expr = Expr;
    type Node = Vec<Node>;
    type Error = HostError;

    fn next_token(&mut self) -> Result<Token, HostError> {
        let Some(Piece::Tag(content)) = self.pieces.get(self.pos) else {
            return Err(HostError("expected a block tag".to_string()));
        };
        let (name, rest) = split_tag_name(content);
        let token = Token::new(name, 1, self.pos + 1);
        self.tag_rest = Some(rest.trim().to_string());
        Ok(token)
    }

    fn parse_signature(&mut self, allow_bare: bool) -> Result<Vec<Expr>, HostError> {
        self.calls.signature_allow_bare.push(allow_bare);
        let rest = self.tag_rest.take().unwrap_or_default();
        if !allow_bare && !rest.starts_with('(') {
            return Err(HostError("expected arguments".to_string()));
        }
        let mut input = rest.as_str();
        let args = signature(&mut input).map_err(|e| HostError(format!("bad signature: {e}")))?;
        if !input.trim().is_empty() {
            return Err(HostError(format!("unexpected '{input}' in signature")));
        }
        self.tag_rest = Some(String::new());
        Ok(args)
    }

    fn advance_after_block_end(&mut self, name: Option<&str>) -> Result<(), HostError> {
        self.calls.block_ends.push(name.map(str::to_string));
        if let Some(rest) = self.tag_rest.take().filter(|r| !r.is_empty()) {
            return Err(HostError(format!(
                "expected end of block '{}', found '{rest}'",
                name.unwrap_or("?")
            )));
        }
        match self.pieces.get(self.pos) {
            Some(Piece::Tag(_)) => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(HostError("expected block end".to_string())),
        }
    }

    fn parse_until_blocks(&mut self, names: &[&str]) -> Result<Vec<Node>, HostError> {
        self.parse_nodes(names)
    }
}

/// Split block tag content into its name and the remaining arguments.
fn split_tag_name(content: &str) -> (&str, &str) {
    let content = content.trim_start();
    let split = content
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(content.len());
    content.split_at(split)
}

fn signature(input: &mut &str) -> ModalResult<Vec<Expr>> {
    alt((
        delimited(('(', ws), arg_list, (ws, ')', ws)),
        arg_list,
    ))
    .parse_next(input)
}

fn arg_list(input: &mut &str) -> ModalResult<Vec<Expr>> {
    repeat(0.., terminated(expr, (ws, opt(','), ws))).parse_next(input)
}

fn expr(input: &mut &str) -> ModalResult<Expr> {
    alt((
        string.map(Expr::Str),
        object,
        ident.map(|s: &str| Expr::Var(s.to_string())),
    ))
    .parse_next(input)
}

fn object(input: &mut &str) -> ModalResult<Expr> {
    delimited(
        ('{', ws),
        separated(0.., entry, (ws, ',', ws)),
        (ws, '}'),
    )
    .map(Expr::Object)
    .parse_next(input)
}

fn entry(input: &mut &str) -> ModalResult<(String, Expr)> {
    (alt((string, ident.map(str::to_string))), ws, ':', ws, expr)
        .map(|(key, _, _, _, value)| (key, value))
        .parse_next(input)
}

fn string(input: &mut &str) -> ModalResult<String> {
    delimited('"', take_till(0.., '"'), '"')
        .map(str::to_string)
        .parse_next(input)
}

fn ident<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_alphanumeric() || c == '_' || c == '.').parse_next(input)
}

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., char::is_whitespace).void().parse_next(input)
}

fn eval_expr(expr: &Expr, ctx: &Value) -> Value {
    match expr {
        Expr::Str(s) => Value::String(s.clone()),
        Expr::Var(path) => ctx.get_path(path).cloned().unwrap_or(Value::Null),
        Expr::Object(entries) => Value::Map(
            entries
                .iter()
                .map(|(k, v)| (k.clone(), eval_expr(v, ctx)))
                .collect::<BTreeMap<_, _>>(),
        ),
    }
}

/// Render compiled nodes against a context object.
pub fn render(
    extension: &TransExtension,
    nodes: &[Node],
    ctx: &Value,
) -> Result<String, BoxError> {
    let mut out = String::new();
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Output(path) => {
                if let Some(value) = ctx.get_path(path) {
                    out.push_str(&value.to_string());
                }
            }
            Node::Call(call) => {
                let mut args = vec![CallArg::Context(ctx.clone())];
                args.extend(call.args.iter().map(|e| CallArg::Value(eval_expr(e, ctx))));
                for body in &call.bodies {
                    args.push(CallArg::body(move || render(extension, body, ctx)));
                }
                let text = extension.call(&call.method, args)?;
                out.push_str(text.as_str());
            }
        }
    }
    Ok(out)
}

/// Compile and render `source` in one step.
pub fn render_str(
    extension: &TransExtension,
    source: &str,
    ctx: &Value,
) -> Result<String, BoxError> {
    let nodes = MiniParser::new(extension, source)?.compile()?;
    render(extension, &nodes, ctx)
}
