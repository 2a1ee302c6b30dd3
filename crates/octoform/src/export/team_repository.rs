//! Team repository binding export.

use std::io::Write;

use tracing::debug;

use super::{ExportContext, ExportError};
use crate::github::team;
use crate::github::types::Team;
use crate::hcl::{self, BlockBuilder};
use crate::identifier;
use crate::permission::PermissionLevel;

pub const FILE_NAME: &str = "github_team_repository.tf";

/// Export every team's repository bindings with the resolved permission.
///
/// Bindings whose permission record has no flag set are skipped.
pub async fn export(ctx: &ExportContext) -> Result<(), ExportError> {
    debug!("Getting team repository data");

    let teams = team::list_teams(ctx.client(), ctx.org()).await?;
    let mut output = ctx.create_output(FILE_NAME)?;

    for team in &teams {
        let repos = team::list_team_repos(ctx.client(), ctx.org(), &team.slug).await?;

        for repo in repos {
            debug!(team = %team.name, repository = %repo.name, "Processing team repository");

            let Some(level) = repo.permissions.resolve() else {
                debug!(
                    team = %team.name,
                    repository = %repo.name,
                    "No effective permission, skipping"
                );
                continue;
            };

            output.write_all(render(team, &repo.name, level).as_bytes())?;
        }
    }

    Ok(())
}

/// Render one `github_team_repository` block and import comment.
pub fn render(team: &Team, repo_name: &str, permission: PermissionLevel) -> String {
    let ident = format!(
        "{}-{}",
        identifier::sanitize(&team.name),
        identifier::sanitize(repo_name)
    );

    let block = BlockBuilder::resource("github_team_repository", &ident)
        .attr("team_id", team.id)
        .attr_str("repository", repo_name)
        .attr_str("permission", permission.as_str())
        .build();

    hcl::render_entity(
        "github_team_repository",
        &ident,
        &team.name,
        format!("{}:{repo_name}", team.id),
        block,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team() -> Team {
        Team {
            id: 9001,
            name: "Platform".to_string(),
            slug: "platform".to_string(),
            description: None,
            privacy: None,
            ldap_dn: None,
            parent: None,
        }
    }

    #[test]
    fn renders_binding_with_resolved_permission() {
        let text = render(&team(), "tooling", PermissionLevel::Admin);

        assert_eq!(
            text,
            "# terraform import github_team_repository.Platform-tooling 9001:tooling\n\
             resource \"github_team_repository\" \"Platform-tooling\" {\n\
             \x20 team_id = 9001\n\
             \x20 repository = \"tooling\"\n\
             \x20 permission = \"admin\"\n\
             }\n\n"
        );
    }

    #[test]
    fn repository_names_are_sanitized_in_the_identifier_only() {
        let text = render(&team(), "legacy.app", PermissionLevel::Pull);

        assert!(text.contains("resource \"github_team_repository\" \"Platform-legacy_app\""));
        assert!(text.contains("# terraform import github_team_repository.Platform-legacy_app 9001:legacy.app\n"));
        assert!(text.contains("repository = \"legacy.app\""));
    }
}
