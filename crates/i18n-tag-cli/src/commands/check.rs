//! Implementation of the `i18n-tag check` command.

use std::path::PathBuf;

use i18n_tag::catalog::TranslationWarning;
use i18n_tag::interpolation::parse_template;
use miette::Report;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::load_config;
use crate::output::TemplateDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Configuration files to check (JSON)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Treat translation warnings (unknown keys, placeholder drift) as errors
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct CheckJson {
    file: String,
    errors: Vec<String>,
    warnings: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut reports = Vec::new();
    let mut any_errors = false;
    let mut any_warnings = false;

    for path in &args.files {
        let config = match load_config(path) {
            Ok(config) => config,
            Err(report) => {
                any_errors = true;
                if args.json {
                    reports.push(CheckJson {
                        file: path.display().to_string(),
                        errors: vec![report.to_string()],
                        warnings: Vec::new(),
                    });
                } else {
                    eprintln!("{:?}", report);
                }
                continue;
            }
        };

        let mut errors = Vec::new();
        for entry in config.translation_resources.entries() {
            if let Err(e) = parse_template(&entry.text) {
                let key = format!("{}:{}", entry.namespace, entry.key);
                let diagnostic = TemplateDiagnostic::new(path, entry.locale, &key, &entry.text, &e);
                errors.push(Report::new(diagnostic));
            }
        }

        let translator = config.translator();
        let warnings: Vec<TranslationWarning> = translator
            .locales()
            .filter(|locale| *locale != config.default_locale)
            .flat_map(|locale| translator.validate_translations(&config.default_locale, locale))
            .collect();

        any_errors |= !errors.is_empty();
        any_warnings |= !warnings.is_empty();

        if args.json {
            reports.push(CheckJson {
                file: path.display().to_string(),
                errors: errors.iter().map(ToString::to_string).collect(),
                warnings: warnings.iter().map(ToString::to_string).collect(),
            });
        } else {
            for report in &errors {
                eprintln!("{:?}", report);
            }
            for warning in &warnings {
                eprintln!("{} {}", "warning:".yellow().bold(), warning);
            }
            if errors.is_empty() {
                println!("{} {}", "ok".green(), path.display());
            }
        }
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).expect("JSON serialization should not fail")
        );
    }

    if any_errors || (args.strict && any_warnings) {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
