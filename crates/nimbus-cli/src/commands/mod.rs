//! Command handlers.
//!
//! Each handler translates its parsed arguments into a `ParamBag`, runs the
//! relevant validators, and reports the normalized result. No validation
//! logic lives here.

pub mod completions;
pub mod deploy;
pub mod project;
pub mod provider;
pub mod user;

use nimbus_adapters::HttpRemoteLookup;
use nimbus_core::{
    application::{EngineError, ValidationEngine},
    domain::{ParamBag, ParamValue},
};

use crate::{
    cli::OutputFormat,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Lift an engine error into the CLI error type.
pub(crate) fn core_err(e: EngineError) -> CliError {
    CliError::Core(e.into())
}

/// Build a validation engine against the resolved platform base URL.
pub(crate) fn build_engine(base_url: &str, config: &AppConfig) -> CliResult<ValidationEngine> {
    let remote = HttpRemoteLookup::new(base_url)
        .map_err(core_err)?
        .with_releases_owner(config.platform.releases_owner.clone());
    Ok(ValidationEngine::new(Box::new(remote)))
}

/// Print the validated parameter bag, honoring the output format.
pub(crate) fn report_parameters(out: &OutputManager, bag: &ParamBag) -> CliResult<()> {
    if out.format() == OutputFormat::Json {
        out.print(&to_json(bag)?)?;
        return Ok(());
    }
    for (key, value) in bag.iter() {
        out.print(&format!("  {key}: {}", render_value(value)))?;
    }
    Ok(())
}

/// Serialize any value as pretty JSON for output.
pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::IoError {
        message: "could not encode JSON output".into(),
        source: std::io::Error::other(e),
    })
}

fn render_value(value: &ParamValue) -> String {
    match value {
        ParamValue::Str(s) => s.clone(),
        ParamValue::Bool(b) => b.to_string(),
        ParamValue::List(l) => l.join(", "),
        ParamValue::Map(m) => m
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(", "),
    }
}
