//! Repository branch export.

use std::io::Write;

use tracing::debug;

use super::{ExportContext, ExportError};
use crate::github::repo;
use crate::hcl::{self, BlockBuilder};
use crate::identifier;

pub const FILE_NAME: &str = "github_repository_branch.tf";

/// The source branch and commit of a branch are not exposed by the listing
/// endpoint, so the generated blocks assume the provider defaults.
pub const FILE_HEADER: &str = "\
# WARNING: source_branch and source_sha are not emitted, so their provider defaults apply
# as per https://registry.terraform.io/providers/hashicorp/github/latest/docs/resources/branch
";

/// Export every branch of every repository in the organization.
pub async fn export(ctx: &ExportContext) -> Result<(), ExportError> {
    debug!("Getting repository branches data");

    let repos = repo::list_org_repos(ctx.client(), ctx.org()).await?;
    let mut output = ctx.create_output(FILE_NAME)?;
    output.write_all(FILE_HEADER.as_bytes())?;

    for repo in &repos {
        let branches = repo::list_branches(ctx.client(), ctx.org(), &repo.name).await?;

        for branch in branches {
            debug!(repository = %repo.name, branch = %branch.name, "Processing branch");
            output.write_all(render(&repo.name, &branch.name).as_bytes())?;
        }
    }

    Ok(())
}

/// Render one `github_repository_branch` block and import comment.
pub fn render(repo_name: &str, branch_name: &str) -> String {
    let repo_ident = identifier::sanitize(repo_name);
    let ident = format!("{repo_ident}-{}", identifier::sanitize(branch_name));

    let block = BlockBuilder::resource("github_repository_branch", &ident)
        .attr_str("repository", repo_name)
        .attr_str("branch", branch_name)
        .build();

    hcl::render_entity(
        "github_repository_branch",
        &ident,
        repo_name,
        format!("{repo_ident}:{branch_name}"),
        block,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_repository_and_branch() {
        let text = render("tooling", "main");

        assert_eq!(
            text,
            "# terraform import github_repository_branch.tooling-main tooling:main\n\
             resource \"github_repository_branch\" \"tooling-main\" {\n\
             \x20 repository = \"tooling\"\n\
             \x20 branch = \"main\"\n\
             }\n\n"
        );
    }

    #[test]
    fn branch_names_are_sanitized_in_the_identifier_only() {
        let text = render("tooling", "release 1.0");

        assert!(text.contains("resource \"github_repository_branch\" \"tooling-release_1_0\""));
        // The import address and attribute keep the real branch name.
        assert!(text.contains(
            "# terraform import github_repository_branch.tooling-release_1_0 tooling:release 1.0\n"
        ));
        assert!(text.contains("branch = \"release 1.0\""));
    }

    #[test]
    fn warning_follows_the_repository_name() {
        let text = render("1-legacy", "main");
        assert!(text.starts_with("# WARNING"));
        assert!(text.contains("use this identifier instead _1-legacy-main"));
    }
}
