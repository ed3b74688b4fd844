//! Implementation of the `nimbus project` subcommands.

use tracing::{info, instrument};

use nimbus_core::domain::ParamBag;

use crate::{
    cli::{ProjectCommands, ProjectCreateArgs, ProjectShowArgs, global::GlobalArgs},
    commands::{build_engine, core_err, report_parameters},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    cmd: ProjectCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ProjectCommands::Create(args) => create(args, global, config, output),
        ProjectCommands::Show(args) => show(args, global, config, output),
    }
}

/// Execute `nimbus project create`.
#[instrument(skip_all, fields(name = %args.name))]
fn create(
    args: ProjectCreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let base_url = args
        .base_url
        .clone()
        .unwrap_or_else(|| config.platform.base_url.clone());

    let mut bag = ParamBag::new();
    bag.insert_str("name", &args.name);
    if !args.subscriptions.is_empty() {
        bag.insert_list("subscriptions", args.subscriptions.clone());
    }
    bag.insert_str("base_url", &base_url);

    let engine = build_engine(&base_url, &config)?;
    engine.url(&mut bag, "base_url").map_err(core_err)?;
    engine.project_name(&mut bag).map_err(core_err)?;
    engine.uuid_list(&mut bag, "subscriptions").map_err(core_err)?;

    info!(name = %args.name, "project parameters validated");

    output.success(&format!("Project {} parameters validated", args.name))?;
    if !global.quiet {
        report_parameters(&output, &bag)?;
    }
    Ok(())
}

/// Execute `nimbus project show`.
///
/// A project passed by name is resolved against the platform and replaced
/// with its id before display.
#[instrument(skip_all, fields(project = %args.project))]
fn show(
    args: ProjectShowArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let base_url = args
        .base_url
        .clone()
        .unwrap_or_else(|| config.platform.base_url.clone());

    let mut bag = ParamBag::new();
    bag.insert_str("project", &args.project);
    bag.insert_str("base_url", &base_url);

    let engine = build_engine(&base_url, &config)?;
    engine.url(&mut bag, "base_url").map_err(core_err)?;
    engine.project_ref(&mut bag, "project").map_err(core_err)?;

    let id = bag.get_str("project").unwrap_or(args.project.as_str());
    info!(%id, "project reference resolved");

    output.success(&format!("Project {id}"))?;
    if !global.quiet {
        report_parameters(&output, &bag)?;
    }
    Ok(())
}
