//! Implementation of the `i18n-tag eval` command.

use std::path::PathBuf;

use i18n_tag::{Params, TransExtension, Value};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::load_config;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Configuration file (JSON)
    #[arg(long, short = 'c', env = "I18N_TAG_CONFIG")]
    pub config: PathBuf,

    /// Locale to translate into; the configured default when omitted
    #[arg(long)]
    pub locale: Option<String>,

    /// Translation key
    #[arg(required = true)]
    pub key: String,

    /// Parameters in name=value format (repeatable). Values that parse as
    /// JSON are used as such, anything else is a string.
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Exit with non-zero code if the key has no translation
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub locale: String,
    pub key: String,
    pub result: String,
    pub found: bool,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

fn parse_value(raw: String) -> Value {
    match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(json) => Value::from(json),
        Err(_) => Value::from(raw),
    }
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let extension = TransExtension::new(load_config(&args.config)?);

    let params: Params = args
        .params
        .into_iter()
        .map(|(k, v)| (k, parse_value(v)))
        .collect();

    let locale = args.locale.map(Value::from);
    let locale = locale.as_ref().and_then(Value::as_locale);
    let result = extension.translate_text(&args.key, locale, &params);
    let locale = extension.translator().language();
    let found = extension.translator().exists(&locale, &args.key);

    if args.json {
        let output = EvalResult {
            locale,
            key: args.key,
            result,
            found,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else {
        println!("{}", result);
        if !found {
            eprintln!(
                "{} no translation for '{}' in '{}'",
                "warning:".yellow().bold(),
                args.key,
                locale
            );
            let suggestions = extension
                .translator()
                .suggest_keys(&extension.config().default_locale, &args.key);
            if !suggestions.is_empty() {
                eprintln!("  did you mean: {}", suggestions.join(", ").cyan());
            }
        }
    }

    if args.strict && !found {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
