//! Organization membership export.

use std::io::Write;

use tracing::{debug, error};

use super::{ExportContext, ExportError};
use crate::github::org;
use crate::hcl::{self, BlockBuilder};
use crate::identifier;

pub const FILE_NAME: &str = "github_membership.tf";

/// Export every organization member with its role.
///
/// The per-member role lookup can fail independently of the member listing;
/// such a failure skips that member and continues.
pub async fn export(ctx: &ExportContext) -> Result<(), ExportError> {
    debug!("Getting membership data");

    let members = org::list_members(ctx.client(), ctx.org()).await?;
    let mut output = ctx.create_output(FILE_NAME)?;

    for member in members {
        debug!(member = %member.login, "Processing membership");

        let membership = match org::get_membership(ctx.client(), ctx.org(), &member.login).await {
            Ok(membership) => membership,
            Err(e) => {
                error!(member = %member.login, error = %e, "Role lookup failed, skipping member");
                continue;
            }
        };

        let text = render(ctx.org(), &member.login, &membership.role);
        output.write_all(text.as_bytes())?;
    }

    Ok(())
}

/// Render one member's `github_membership` block and import comment.
pub fn render(org: &str, username: &str, role: &str) -> String {
    let ident = identifier::sanitize(username);
    let block = BlockBuilder::resource("github_membership", &ident)
        .attr_str("username", username)
        .attr_str("role", role)
        .build();

    hcl::render_entity(
        "github_membership",
        &ident,
        username,
        format!("{org}:{ident}"),
        block,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_import_comment_and_block() {
        let text = render("octo-org", "alice", "member");

        assert_eq!(
            text,
            "# terraform import github_membership.alice octo-org:alice\n\
             resource \"github_membership\" \"alice\" {\n\
             \x20 username = \"alice\"\n\
             \x20 role = \"member\"\n\
             }\n\n"
        );
    }

    #[test]
    fn sanitizes_the_login_in_identifier_and_address() {
        let text = render("octo-org", "mr.robot", "admin");

        assert!(text.contains("# terraform import github_membership.mr_robot octo-org:mr_robot\n"));
        assert!(text.contains("resource \"github_membership\" \"mr_robot\""));
        // The attribute keeps the real login.
        assert!(text.contains("username = \"mr.robot\""));
    }

    #[test]
    fn leading_digit_login_gets_a_warning() {
        let text = render("octo-org", "1coolguy", "member");

        assert!(text.starts_with(
            "# WARNING this resource has an invalid identifier when used with Terraform 0.12+\n\
             # Suggestion: use this identifier instead _1coolguy\n"
        ));
    }
}
