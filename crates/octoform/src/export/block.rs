//! Organization blocked-user export.

use std::io::Write;

use tracing::{debug, info};

use super::{ExportContext, ExportError};
use crate::github::org;
use crate::hcl::{self, BlockBuilder};
use crate::identifier;

pub const FILE_NAME: &str = "github_organization_blocks.tf";

/// Export every user blocked by the organization.
///
/// When no users are blocked, no output file is created at all.
pub async fn export(ctx: &ExportContext) -> Result<(), ExportError> {
    debug!("Getting organization blocked users data");

    let users = org::list_blocked_users(ctx.client(), ctx.org()).await?;

    if users.is_empty() {
        info!("No blocked users found");
        return Ok(());
    }

    let mut output = ctx.create_output(FILE_NAME)?;
    for user in users {
        debug!(user = %user.login, "Processing user block");
        output.write_all(render(&user.login).as_bytes())?;
    }

    Ok(())
}

/// Render one `github_organization_block` block and import comment.
pub fn render(login: &str) -> String {
    let ident = identifier::sanitize(login);
    let block = BlockBuilder::resource("github_organization_block", &ident)
        .attr_str("username", login)
        .build();

    hcl::render_entity("github_organization_block", &ident, login, &ident, block)
}
