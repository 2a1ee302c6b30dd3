//! Organization team export.

use std::io::Write;

use tracing::debug;

use super::{ExportContext, ExportError};
use crate::github::team;
use crate::github::types::Team;
use crate::hcl::{self, BlockBuilder};
use crate::identifier;

pub const FILE_NAME: &str = "github_team.tf";

/// Export every team in the organization.
pub async fn export(ctx: &ExportContext) -> Result<(), ExportError> {
    debug!("Getting team data");

    let teams = team::list_teams(ctx.client(), ctx.org()).await?;
    let mut output = ctx.create_output(FILE_NAME)?;

    for team in teams {
        debug!(team = %team.name, "Processing team");
        output.write_all(render(&team).as_bytes())?;
    }

    Ok(())
}

/// Render one `github_team` block and import comment.
///
/// Teams import by numeric id, not by name.
pub fn render(team: &Team) -> String {
    let ident = identifier::sanitize(&team.name);
    let parent_id = team.parent.as_ref().map(|p| p.id.to_string());

    let block = BlockBuilder::resource("github_team", &ident)
        .attr_str("name", &team.name)
        .attr_str_opt("description", team.description.as_deref())
        .attr_str_opt("privacy", team.privacy.as_deref())
        .attr_str_opt("parent_team_id", parent_id.as_deref())
        .attr_str_opt("ldap_dn", team.ldap_dn.as_deref())
        .build();

    hcl::render_entity("github_team", &ident, &team.name, team.id, block)
}
