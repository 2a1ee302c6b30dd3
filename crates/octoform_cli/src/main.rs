//! Octoform CLI - bootstrap Terraform from an existing GitHub organization.

mod commands;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "octoform")]
#[command(version)]
#[command(about = "Bootstrap Terraform from an existing GitHub organization")]
#[command(
    long_about = "Octoform lets teams start using Terraform by describing and importing the \
resources that already exist in a GitHub organization. Each subcommand writes one .tf file \
of resource blocks plus matching `terraform import` comments; nothing is ever applied or \
modified on GitHub."
)]
#[command(after_long_help = r#"EXAMPLES
    Export every supported resource kind:
        $ octoform all -o my-org

    Export only repositories, into a dedicated directory:
        $ octoform repository -o my-org -d ./terraform/github

    Generate shell completions:
        $ octoform completions bash > ~/.local/share/bash-completion/completions/octoform

CONFIGURATION
    Octoform reads configuration from:
      1. CLI flags
      2. Environment variables (GITHUB_TOKEN, GITHUB_ORGANIZATION; .env is loaded)
      3. OCTOFORM_* environment variables (e.g., OCTOFORM_GITHUB_TOKEN)
      4. ~/.config/octoform/config.toml or ./octoform.toml
"#)]
struct Cli {
    /// GitHub personal access token
    #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// Scope operations to this organization
    #[arg(short, long, env = "GITHUB_ORGANIZATION", global = true)]
    organization: Option<String>,

    /// Write resource files to this directory (defaults to the current directory)
    #[arg(short = 'd', long, global = true)]
    out_dir: Option<PathBuf>,

    /// Verbose output (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export organization members
    Membership,
    /// Export repositories
    Repository,
    /// Export repository branches
    RepositoryBranch,
    /// Export repository collaborators, split by affiliation
    RepositoryCollaborator,
    /// Export repository webhooks
    RepositoryWebhook,
    /// Export organization blocked users
    OrganizationBlock,
    /// Export organization teams
    Team,
    /// Export team memberships
    TeamMembership,
    /// Export team repository bindings
    TeamRepository,
    /// Export all supported resource kinds
    All,
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if cli.verbose => EnvFilter::new("octoform=debug,octoform_cli=debug"),
        Err(_) => EnvFilter::new("octoform=info,octoform_cli=info"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    // Completions need neither credentials nor network access.
    if let Commands::Completions { shell } = &cli.command {
        return match commands::meta::handle_completions(*shell) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!(error = %e, "Failed to generate completions");
                ExitCode::FAILURE
            }
        };
    }

    let config = config::Config::load();

    let Some(token) = cli.token.clone().or_else(|| config.github_token()) else {
        error!("-t/--token option or GITHUB_TOKEN env var must be set");
        return ExitCode::FAILURE;
    };
    let Some(organization) = cli.organization.clone().or_else(|| config.organization()) else {
        error!("-o/--organization option or GITHUB_ORGANIZATION env var must be set");
        return ExitCode::FAILURE;
    };
    let out_dir = cli
        .out_dir
        .clone()
        .or_else(|| config.out_dir())
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    debug!(
        token = %redact_token(&token),
        organization = %organization,
        out_dir = %out_dir.display(),
        "Initializing GitHub client"
    );

    match commands::export::run(&cli.command, &token, &organization, out_dir).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Export failed");
            ExitCode::FAILURE
        }
    }
}

/// Keep only the first few characters of the token in log output.
fn redact_token(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    format!("*************{visible}")
}
