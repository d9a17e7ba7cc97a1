//! Coverage command implementation.

use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use super::load_config;
use crate::output::table::{format_coverage_table, LocaleCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Configuration file (JSON)
    #[arg(long, short = 'c', env = "I18N_TAG_CONFIG")]
    pub config: PathBuf,

    /// Locales to check (comma-separated). Defaults to every configured
    /// locale other than the default locale.
    #[arg(long, value_delimiter = ',')]
    pub locale: Vec<String>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    locale: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let config = load_config(&args.config)?;
    let translator = config.translator();
    let source = config.default_locale.as_str();
    let source_count = translator.keys(source).len();

    let locales: Vec<String> = if args.locale.is_empty() {
        translator
            .locales()
            .filter(|locale| *locale != source)
            .map(str::to_string)
            .collect()
    } else {
        args.locale.clone()
    };

    let coverage_data: Vec<LocaleCoverage> = locales
        .into_iter()
        .map(|locale| {
            let missing = translator.missing_keys(source, &locale);
            LocaleCoverage {
                translated: source_count - missing.len(),
                locale,
                missing,
            }
        })
        .collect();

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                locale: c.locale.clone(),
                translated: c.translated,
                total: source_count,
                missing: c.missing.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        let table = format_coverage_table(source_count, &coverage_data);
        println!("{}", table);

        for entry in &coverage_data {
            if !entry.missing.is_empty() {
                println!("\nMissing in {}:", entry.locale);
                for key in &entry.missing {
                    println!("  - {}", key);
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
