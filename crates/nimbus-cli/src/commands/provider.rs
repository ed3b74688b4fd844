//! Implementation of the `nimbus provider` subcommands.

use tracing::{info, instrument};

use nimbus_core::domain::ParamBag;

use crate::{
    cli::{ProviderCommands, ProviderRegisterArgs, global::GlobalArgs},
    commands::{build_engine, core_err, report_parameters},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// GitHub repository whose release tags are valid provider `--version` values.
const PROVIDERS_REPOSITORY: &str = "nimbus-providers";

pub fn execute(
    cmd: ProviderCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ProviderCommands::Register(args) => register(args, global, config, output),
    }
}

/// Execute `nimbus provider register`.
#[instrument(skip_all, fields(provider = %args.name))]
fn register(
    args: ProviderRegisterArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let base_url = args
        .base_url
        .clone()
        .unwrap_or_else(|| config.platform.base_url.clone());

    let mut bag = build_bag(&args, &base_url);

    let engine = build_engine(&base_url, &config)?;
    engine.url(&mut bag, "base_url").map_err(core_err)?;
    engine.type_id(&mut bag, "name").map_err(core_err)?;
    engine.url(&mut bag, "url").map_err(core_err)?;
    engine.id_list(&mut bag, "events").map_err(core_err)?;
    engine.auth_code(&mut bag).map_err(core_err)?;
    engine
        .source_version(&mut bag, Some(PROVIDERS_REPOSITORY))
        .map_err(core_err)?;

    info!(provider = %args.name, "provider parameters validated");
    output.success(&format!("Provider '{}' parameters validated", args.name))?;
    if !global.quiet {
        report_parameters(&output, &bag)?;
    }
    Ok(())
}

fn build_bag(args: &ProviderRegisterArgs, base_url: &str) -> ParamBag {
    let mut bag = ParamBag::new();
    bag.insert_str("name", &args.name);
    if let Some(url) = &args.url {
        bag.insert_str("url", url);
    }
    if !args.events.is_empty() {
        bag.insert_list("events", args.events.clone());
    }
    if let Some(auth_code) = &args.auth_code {
        bag.insert_str("auth_code", auth_code);
    }
    if let Some(version) = &args.version {
        bag.insert_str("version", version);
    }
    bag.insert_bool("prerelease", args.prerelease);
    if let Some(index_url) = &args.index_url {
        bag.insert_str("index_url", index_url);
    }
    bag.insert_str("base_url", base_url);
    bag
}
