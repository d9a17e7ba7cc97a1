//! CLI command implementations.

mod check;
mod coverage;
mod eval;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use eval::{run_eval, EvalArgs};

use std::fs::read_to_string;
use std::path::Path;

use i18n_tag::{ConfigError, ExtensionConfig};

use crate::output::ConfigDiagnostic;

/// Load a configuration file, turning JSON errors into source diagnostics.
pub(crate) fn load_config(path: &Path) -> miette::Result<ExtensionConfig> {
    match ExtensionConfig::from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::Json { source, .. }) => {
            let content = read_to_string(path).unwrap_or_default();
            Err(ConfigDiagnostic::from_json_error(path, &content, &source).into())
        }
        Err(e) => Err(miette::miette!("{}", e)),
    }
}
