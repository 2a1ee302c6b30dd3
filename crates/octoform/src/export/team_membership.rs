//! Team membership export.

use std::io::Write;

use tracing::debug;

use super::{ExportContext, ExportError};
use crate::github::team;
use crate::github::types::{Team, TeamRole};
use crate::hcl::{self, BlockBuilder};
use crate::identifier;

pub const FILE_NAME: &str = "github_team_membership.tf";

/// Export every team's members, maintainers first.
///
/// The members listing is per role, so each team is queried once per role;
/// a user appears under exactly one of them.
pub async fn export(ctx: &ExportContext) -> Result<(), ExportError> {
    debug!("Getting team membership data");

    let teams = team::list_teams(ctx.client(), ctx.org()).await?;
    let mut output = ctx.create_output(FILE_NAME)?;

    for role in [TeamRole::Maintainer, TeamRole::Member] {
        for team in &teams {
            let members =
                team::list_team_members(ctx.client(), ctx.org(), &team.slug, role).await?;

            for member in members {
                debug!(
                    team = %team.name,
                    member = %member.login,
                    role = role.as_str(),
                    "Processing team membership"
                );
                output.write_all(render(team, &member.login, role).as_bytes())?;
            }
        }
    }

    Ok(())
}

/// Render one `github_team_membership` block and import comment.
pub fn render(team: &Team, login: &str, role: TeamRole) -> String {
    let ident = format!(
        "{}-{}",
        identifier::sanitize(&team.name),
        identifier::sanitize(login)
    );

    let block = BlockBuilder::resource("github_team_membership", &ident)
        .attr("team_id", team.id)
        .attr_str("username", login)
        .attr_str("role", role.as_str())
        .build();

    hcl::render_entity(
        "github_team_membership",
        &ident,
        &team.name,
        format!("{}:{login}", team.id),
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
    fn renders_team_id_bare_and_login_quoted() {
        let text = render(&team(), "alice", TeamRole::Maintainer);

        assert_eq!(
            text,
            "# terraform import github_team_membership.Platform-alice 9001:alice\n\
             resource \"github_team_membership\" \"Platform-alice\" {\n\
             \x20 team_id = 9001\n\
             \x20 username = \"alice\"\n\
             \x20 role = \"maintainer\"\n\
             }\n\n"
        );
    }

    #[test]
    fn member_role_renders_as_member() {
        let text = render(&team(), "bob", TeamRole::Member);
        assert!(text.contains("role = \"member\""));
    }

    #[test]
    fn leading_digit_team_name_warns() {
        let numbered = Team {
            name: "24x7".to_string(),
            ..team()
        };
        let text = render(&numbered, "alice", TeamRole::Member);
        assert!(text.starts_with("# WARNING"));
        assert!(text.contains("use this identifier instead _24x7-alice"));
    }
}
