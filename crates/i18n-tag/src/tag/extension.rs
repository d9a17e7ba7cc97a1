use tracing::trace;

use crate::catalog::Translator;
use crate::config::ExtensionConfig;
use crate::tag::args::{CallArg, TransArgs};
use crate::tag::error::TagError;
use crate::tag::host::{Extension, NodeFactory, TagParser};
use crate::tag::parse::{TRANS_METHOD, TRANS_TAG, parse_trans};
use crate::types::{Params, SafeString};

/// Name call nodes use to refer back to this extension.
pub const EXTENSION_NAME: &str = "TransExtension";

/// Template extension providing `{% trans %}...{% endtrans %}`.
///
/// The block body renders to a translation key; the tag outputs the key's
/// translation in the requested locale, or the default locale when none is
/// given.
///
/// # Example
///
/// ```
/// use i18n_tag::{CallArg, ExtensionConfig, Resources, TransExtension, Value};
///
/// let extension = TransExtension::new(
///     ExtensionConfig::builder()
///         .translation_resources(
///             Resources::new()
///                 .with("en", "translation", "message.hello", "Hello")
///                 .with("de", "translation", "message.hello", "Hallo"),
///         )
///         .default_locale("en")
///         .build(),
/// );
///
/// let out = extension
///     .trans(vec![
///         CallArg::Context(Value::Null),
///         CallArg::Value("de".into()),
///         CallArg::text("message.hello"),
///     ])
///     .unwrap();
/// assert_eq!(out.as_str(), "Hallo");
/// ```
#[derive(Debug)]
pub struct TransExtension {
    config: ExtensionConfig,
    translator: Translator,
}

impl Default for TransExtension {
    fn default() -> Self {
        Self::new(ExtensionConfig::default())
    }
}

impl TransExtension {
    /// Create the extension and seed its translator from `config`.
    pub fn new(config: ExtensionConfig) -> Self {
        let translator = config.translator();
        Self { config, translator }
    }

    pub fn config(&self) -> &ExtensionConfig {
        &self.config
    }

    /// The translation engine backing this extension.
    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Evaluate a compiled `trans` call.
    ///
    /// `args` is the positional list described on [`TransArgs::from_positional`].
    /// The only failure is the body producer itself failing.
    pub fn trans(&self, args: Vec<CallArg<'_>>) -> Result<SafeString, TagError> {
        let mut args = TransArgs::from_positional(args);
        let key = args.take_key()?;
        let text = self.translate_text(&key, args.locale.as_deref(), &args.params);
        Ok(SafeString::new(text))
    }

    /// Translate `key` in `locale`, substituting `params`.
    ///
    /// `None` means the configured default locale. A given locale is used
    /// as is; [`Value::as_locale`](crate::Value::as_locale) decides which
    /// tag values count as one.
    pub fn translate_text(&self, key: &str, locale: Option<&str>, params: &Params) -> String {
        let locale = locale.unwrap_or_else(|| {
            trace!(default = %self.config.default_locale, "no locale given, using default");
            self.config.default_locale.as_str()
        });
        trace!(key, locale, "evaluating trans");
        self.translator.translate_as(locale, key, params)
    }
}

impl Extension for TransExtension {
    fn tags(&self) -> &[&str] {
        &[TRANS_TAG]
    }

    fn parse<P, F>(&self, parser: &mut P, nodes: &mut F) -> Result<F::CallNode, P::Error>
    where
        P: TagParser,
        F: NodeFactory<P::Expr, P::Node>,
    {
        parse_trans(parser, nodes, EXTENSION_NAME)
    }

    fn call(&self, method: &str, args: Vec<CallArg<'_>>) -> Result<SafeString, TagError> {
        if method == TRANS_METHOD {
            self.trans(args)
        } else {
            Err(TagError::UnknownMethod {
                extension: EXTENSION_NAME.to_string(),
                method: method.to_string(),
            })
        }
    }
}
