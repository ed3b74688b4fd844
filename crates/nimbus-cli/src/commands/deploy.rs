//! Implementation of the `nimbus deploy` command.
//!
//! Responsibility: translate CLI arguments into a parameter bag, run the
//! deployment validators, and display the normalized result. No validation
//! logic lives here.

use tracing::{debug, info, instrument};

use nimbus_core::domain::ParamBag;

use crate::{
    cli::{DeployArgs, global::GlobalArgs},
    commands::{build_engine, core_err, report_parameters},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// GitHub repository whose release tags are valid `--version` values.
const PLATFORM_REPOSITORY: &str = "nimbus";

/// Execute the `nimbus deploy` command.
#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("")))]
pub fn execute(
    args: DeployArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let base_url = args
        .base_url
        .clone()
        .unwrap_or_else(|| config.platform.base_url.clone());

    let mut bag = build_bag(&args, &base_url);
    debug!(%base_url, "deploy parameters collected");

    let engine = build_engine(&base_url, &config)?;
    engine.url(&mut bag, "base_url").map_err(core_err)?;
    engine.auth_code(&mut bag).map_err(core_err)?;
    engine
        .deploy(&mut bag, PLATFORM_REPOSITORY)
        .map_err(core_err)?;

    info!("deploy parameters validated");
    output.success("Deployment parameters validated")?;
    if !global.quiet {
        report_parameters(&output, &bag)?;
    }
    Ok(())
}

fn build_bag(args: &DeployArgs, base_url: &str) -> ParamBag {
    let mut bag = ParamBag::new();
    if let Some(name) = &args.name {
        bag.insert_str("name", name);
    }
    if let Some(version) = &args.version {
        bag.insert_str("version", version);
    }
    bag.insert_bool("prerelease", args.prerelease);
    if let Some(index_url) = &args.index_url {
        bag.insert_str("index_url", index_url);
    }
    if let Some(principal_name) = &args.principal_name {
        bag.insert_str("principal_name", principal_name);
    }
    if let Some(principal_password) = &args.principal_password {
        bag.insert_str("principal_password", principal_password);
    }
    bag.insert_bool("skip_name_validation", args.skip_name_validation);
    if let Some(auth_code) = &args.auth_code {
        bag.insert_str("auth_code", auth_code);
    }
    bag.insert_str("base_url", base_url);
    bag
}
