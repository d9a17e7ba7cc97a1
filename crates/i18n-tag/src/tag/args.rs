//! Positional call arguments and their normalization.

use std::collections::VecDeque;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use tracing::{debug, warn};

use crate::tag::error::{BoxError, TagError};
use crate::types::{Params, Value};

/// Renders the tag body; invoked at most once per evaluation.
pub type BodyProducer<'a> = Box<dyn FnOnce() -> Result<String, BoxError> + 'a>;

/// One positional argument of a compiled `trans` call.
///
/// The host passes `[Context, locale?, params?, Body]`.
pub enum CallArg<'a> {
    /// The rendering context. Always first; never inspected.
    Context(Value),
    /// A value evaluated from the tag's signature.
    Value(Value),
    /// The body producer. Always last.
    Body(BodyProducer<'a>),
}

impl<'a> CallArg<'a> {
    /// Wrap a closure as a body producer.
    pub fn body(f: impl FnOnce() -> Result<String, BoxError> + 'a) -> Self {
        CallArg::Body(Box::new(f))
    }

    /// A body producer that renders static text.
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        CallArg::Body(Box::new(move || Ok(text)))
    }
}

impl From<Value> for CallArg<'_> {
    fn from(value: Value) -> Self {
        CallArg::Value(value)
    }
}

impl Debug for CallArg<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            CallArg::Context(v) => f.debug_tuple("Context").field(v).finish(),
            CallArg::Value(v) => f.debug_tuple("Value").field(v).finish(),
            CallArg::Body(_) => f.write_str("Body(..)"),
        }
    }
}

/// Normalized arguments of one `trans` evaluation.
pub struct TransArgs<'a> {
    /// Locale from the tag, if it named a usable one.
    pub locale: Option<String>,
    /// Interpolation parameters; empty when the tag passed none.
    pub params: Params,
    /// Producer of the translation key, if the call supplied one.
    pub body: Option<BodyProducer<'a>>,
}

impl<'a> TransArgs<'a> {
    /// Map the raw positional list onto its named slots.
    ///
    /// 1. A leading [`CallArg::Context`] is dropped.
    /// 2. The last element is the body producer. If it is not a
    ///    [`CallArg::Body`] it is discarded and there is no body.
    /// 3. Of what remains, the first value is the locale and the second the
    ///    parameter object. A shorter list lacks the parameters first, then
    ///    the locale. Extra values are ignored.
    ///
    /// A locale that is not a non-blank string counts as absent. Parameters
    /// that are not an object count as empty.
    pub fn from_positional(args: Vec<CallArg<'a>>) -> Self {
        let mut args = VecDeque::from(args);

        if matches!(args.front(), Some(CallArg::Context(_))) {
            args.pop_front();
        }

        let body = match args.pop_back() {
            Some(CallArg::Body(body)) => Some(body),
            Some(other) => {
                warn!(arg = ?other, "trans call without a body producer, using empty key");
                None
            }
            None => {
                warn!("trans call without arguments, using empty key");
                None
            }
        };

        let mut values = args.into_iter().map(|arg| match arg {
            CallArg::Context(v) | CallArg::Value(v) => v,
            CallArg::Body(_) => Value::Null,
        });

        let locale = values
            .next()
            .and_then(|v| v.as_locale().map(str::to_string));

        let params = match values.next() {
            Some(Value::Map(m)) => m.into_iter().collect(),
            Some(Value::Null) | None => Params::new(),
            Some(other) => {
                warn!(params = %other, "trans parameters are not an object, ignoring");
                Params::new()
            }
        };

        let extra = values.count();
        if extra > 0 {
            debug!(extra, "ignoring surplus trans arguments");
        }

        Self {
            locale,
            params,
            body,
        }
    }

    /// Render the body to obtain the translation key.
    ///
    /// Without a body producer the key is the empty string.
    pub fn take_key(&mut self) -> Result<String, TagError> {
        match self.body.take() {
            Some(body) => body().map_err(|source| TagError::Body { source }),
            None => Ok(String::new()),
        }
    }
}
