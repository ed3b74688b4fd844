//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "nimbus",
    bin_name = "nimbus",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2601} Nimbus cloud platform CLI",
    long_about = "Nimbus deploys and manages cloud-platform instances, \
                  projects, providers, and users.",
    after_help = "EXAMPLES:\n\
        \x20 nimbus deploy -n my-instance --version 1.2.3\n\
        \x20 nimbus project show -p web-shop\n\
        \x20 nimbus provider register -n azure.devops --url https://provider.example.com\n\
        \x20 nimbus completions bash > /usr/share/bash-completion/completions/nimbus",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Deploy a platform instance.
    #[command(
        visible_alias = "d",
        about = "Deploy a platform instance",
        after_help = "EXAMPLES:\n\
            \x20 nimbus deploy -n my-instance\n\
            \x20 nimbus deploy -n my-instance --version 1.2.3\n\
            \x20 nimbus deploy -n my-instance --pre --skip-name-validation"
    )]
    Deploy(DeployArgs),

    /// Work with projects.
    #[command(
        about = "Project management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 nimbus project show -p web-shop\n\
            \x20 nimbus project show -p 2e9b0c56-2f26-4d95-9300-54a3bfd7f234"
    )]
    Project(ProjectCommands),

    /// Work with providers.
    #[command(
        about = "Provider management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 nimbus provider register -n azure.devops --url https://provider.example.com"
    )]
    Provider(ProviderCommands),

    /// Work with users.
    #[command(
        about = "User management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 nimbus user show --user user@example.com\n\
            \x20 nimbus user show --user https://login.example.com/me --properties team=core"
    )]
    User(UserCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 nimbus completions bash > ~/.local/share/bash-completion/completions/nimbus\n\
            \x20 nimbus completions zsh  > ~/.zfunc/_nimbus\n\
            \x20 nimbus completions fish > ~/.config/fish/completions/nimbus.fish"
    )]
    Completions(CompletionsArgs),
}

// ── deploy ────────────────────────────────────────────────────────────────────

/// Arguments for `nimbus deploy`.
#[derive(Debug, Args)]
pub struct DeployArgs {
    /// Instance name; sanitized and checked for availability.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Instance name")]
    pub name: Option<String>,

    /// Release version to deploy (e.g. `1.2.3` or `v1.2.3`).
    #[arg(
        long = "version",
        value_name = "VERSION",
        help = "Release version to deploy"
    )]
    pub version: Option<String>,

    /// Deploy the latest pre-release instead of the latest stable release.
    #[arg(long = "pre", help = "Deploy the latest pre-release")]
    pub prerelease: bool,

    /// Deploy from a custom package index.
    #[arg(
        long = "index-url",
        value_name = "URL",
        help = "Custom package index URL"
    )]
    pub index_url: Option<String>,

    /// Service-principal name.  Requires `--principal-password`.
    #[arg(
        long = "principal-name",
        value_name = "NAME",
        help = "Service principal name"
    )]
    pub principal_name: Option<String>,

    /// Service-principal password.  Requires `--principal-name`.
    #[arg(
        long = "principal-password",
        value_name = "PASSWORD",
        help = "Service principal password"
    )]
    pub principal_password: Option<String>,

    /// Skip the deployment-name availability check.
    #[arg(
        long = "skip-name-validation",
        help = "Skip the name availability check"
    )]
    pub skip_name_validation: bool,

    /// Function-host auth code.
    #[arg(long = "auth-code", value_name = "CODE", help = "Function auth code")]
    pub auth_code: Option<String>,

    /// Platform API base URL.
    #[arg(
        short = 'u',
        long = "base-url",
        value_name = "URL",
        help = "Platform API base URL"
    )]
    pub base_url: Option<String>,
}

// ── project ───────────────────────────────────────────────────────────────────

/// Subcommands for `nimbus project`.
#[derive(Debug, Subcommand)]
pub enum ProjectCommands {
    /// Create a project.
    Create(ProjectCreateArgs),
    /// Show a project by name or id.
    Show(ProjectShowArgs),
}

/// Arguments for `nimbus project create`.
#[derive(Debug, Args)]
pub struct ProjectCreateArgs {
    /// Project name (4-30 characters) or id.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Project name"
    )]
    pub name: String,

    /// Azure subscription ids to associate with the project.
    #[arg(
        long = "subscriptions",
        value_name = "ID",
        num_args = 1..,
        help = "Subscription ids"
    )]
    pub subscriptions: Vec<String>,

    /// Platform API base URL.
    #[arg(
        short = 'u',
        long = "base-url",
        value_name = "URL",
        help = "Platform API base URL"
    )]
    pub base_url: Option<String>,
}

/// Arguments for `nimbus project show`.
#[derive(Debug, Args)]
pub struct ProjectShowArgs {
    /// Project name or id.
    #[arg(
        short = 'p',
        long = "project",
        value_name = "NAME_OR_ID",
        help = "Project name or id"
    )]
    pub project: String,

    /// Platform API base URL.
    #[arg(
        short = 'u',
        long = "base-url",
        value_name = "URL",
        help = "Platform API base URL"
    )]
    pub base_url: Option<String>,
}

// ── provider ──────────────────────────────────────────────────────────────────

/// Subcommands for `nimbus provider`.
#[derive(Debug, Subcommand)]
pub enum ProviderCommands {
    /// Register a provider with the platform.
    Register(ProviderRegisterArgs),
}

/// Arguments for `nimbus provider register`.
#[derive(Debug, Args)]
pub struct ProviderRegisterArgs {
    /// Provider id (e.g. `azure.devops`).
    #[arg(short = 'n', long = "name", value_name = "ID", help = "Provider id")]
    pub name: String,

    /// Provider endpoint URL.
    #[arg(long = "url", value_name = "URL", help = "Provider endpoint URL")]
    pub url: Option<String>,

    /// Event ids the provider subscribes to.
    #[arg(
        long = "events",
        value_name = "ID",
        num_args = 1..,
        help = "Event ids to subscribe to"
    )]
    pub events: Vec<String>,

    /// Function-host auth code.
    #[arg(long = "auth-code", value_name = "CODE", help = "Function auth code")]
    pub auth_code: Option<String>,

    /// Provider release version.
    #[arg(
        long = "version",
        value_name = "VERSION",
        help = "Provider release version"
    )]
    pub version: Option<String>,

    /// Register the latest pre-release instead of the latest stable release.
    #[arg(long = "pre", help = "Register the latest pre-release")]
    pub prerelease: bool,

    /// Register from a custom package index.
    #[arg(
        long = "index-url",
        value_name = "URL",
        help = "Custom package index URL"
    )]
    pub index_url: Option<String>,

    /// Platform API base URL.
    #[arg(
        short = 'u',
        long = "base-url",
        value_name = "URL",
        help = "Platform API base URL"
    )]
    pub base_url: Option<String>,
}

// ── user ──────────────────────────────────────────────────────────────────────

/// Subcommands for `nimbus user`.
#[derive(Debug, Subcommand)]
pub enum UserCommands {
    /// Show a user by id, email, or login URL.
    Show(UserShowArgs),
}

/// Arguments for `nimbus user show`.
#[derive(Debug, Args)]
pub struct UserShowArgs {
    /// User id, email, or login URL.
    #[arg(
        long = "user",
        value_name = "ID_OR_EMAIL",
        help = "User id, email, or login URL"
    )]
    pub user: String,

    /// Correlation tracking id.
    #[arg(
        short = 't',
        long = "tracking-id",
        value_name = "ID",
        help = "Correlation tracking id"
    )]
    pub tracking_id: Option<String>,

    /// `key=value` properties to attach.
    #[arg(
        long = "properties",
        value_name = "KEY=VALUE",
        num_args = 1..,
        help = "Properties as key=value pairs"
    )]
    pub properties: Vec<String>,

    /// Scope the lookup to a project (name or id).
    #[arg(
        short = 'p',
        long = "project",
        value_name = "NAME_OR_ID",
        help = "Project name or id"
    )]
    pub project: Option<String>,

    /// Platform API base URL.
    #[arg(
        short = 'u',
        long = "base-url",
        value_name = "URL",
        help = "Platform API base URL"
    )]
    pub base_url: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `nimbus completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
