//! Implementation of the `nimbus user` subcommands.

use tracing::{info, instrument};

use nimbus_core::domain::{ParamBag, ProjectMembership, User};

use crate::{
    cli::{UserCommands, UserShowArgs, global::GlobalArgs},
    commands::{build_engine, core_err, to_json},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    cmd: UserCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        UserCommands::Show(args) => show(args, global, config, output),
    }
}

/// Execute `nimbus user show`.
///
/// Normalizes the user reference, resolves a project scope if given, and
/// prints the resulting user record as JSON.
#[instrument(skip_all, fields(user = %args.user))]
fn show(
    args: UserShowArgs,
    _global: GlobalArgs,
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
    engine.user_ref(&mut bag).map_err(core_err)?;
    engine.tracking_id(&mut bag).map_err(core_err)?;
    engine.properties(&mut bag).map_err(core_err)?;
    engine.project_ref(&mut bag, "project").map_err(core_err)?;

    let user = build_user(&bag);
    info!(user = %user.id, "user record assembled");

    output.print(&to_json(&user)?)?;
    Ok(())
}

fn build_bag(args: &UserShowArgs, base_url: &str) -> ParamBag {
    let mut bag = ParamBag::new();
    bag.insert_str("user", &args.user);
    if let Some(tracking_id) = &args.tracking_id {
        bag.insert_str("tracking_id", tracking_id);
    }
    if !args.properties.is_empty() {
        bag.insert_list("properties", args.properties.clone());
    }
    if let Some(project) = &args.project {
        bag.insert_str("project", project);
    }
    bag.insert_str("base_url", base_url);
    bag
}

/// Assemble the user record from the normalized bag.
fn build_user(bag: &ParamBag) -> User {
    let mut user = User::with_id(bag.get_str("user").unwrap_or_default());
    if let Some(properties) = bag.get_map("properties") {
        user.properties = properties.clone();
    }
    if let Some(project_id) = bag.get_str("project") {
        user.project_memberships.push(ProjectMembership {
            project_id: Some(project_id.to_string()),
            role: None,
            properties: Default::default(),
        });
    }
    user
}
