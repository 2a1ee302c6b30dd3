//! Dispatch from the CLI surface into the library's export pipelines.

use std::path::PathBuf;

use octoform::export::{self, ExportContext, ExportError};
use octoform::github;

use crate::Commands;

/// Build the export context and run the selected resource kind's pipeline.
///
/// The organization is looked up once before any export so a typo fails
/// early, instead of once per resource kind.
pub(crate) async fn run(
    command: &Commands,
    token: &str,
    organization: &str,
    out_dir: PathBuf,
) -> Result<(), ExportError> {
    let client = github::create_client(token)?;
    github::get_org(&client, organization).await?;

    let ctx = ExportContext::new(client, organization, out_dir);

    match command {
        Commands::Membership => export::membership::export(&ctx).await,
        Commands::Repository => export::repository::export(&ctx).await,
        Commands::RepositoryBranch => export::branch::export(&ctx).await,
        Commands::RepositoryCollaborator => export::collaborator::export(&ctx).await,
        Commands::RepositoryWebhook => export::webhook::export(&ctx).await,
        Commands::OrganizationBlock => export::block::export(&ctx).await,
        Commands::Team => export::team::export(&ctx).await,
        Commands::TeamMembership => export::team_membership::export(&ctx).await,
        Commands::TeamRepository => export::team_repository::export(&ctx).await,
        Commands::All => export::export_all(&ctx).await,
        // Handled before credential resolution in main.
        Commands::Completions { .. } => Ok(()),
    }
}
