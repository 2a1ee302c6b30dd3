//! Repository collaborator export.
//!
//! Collaborators split across two output files by affiliation class: users
//! added from outside the organization, and direct organization members. The
//! API's `direct` listing includes outside collaborators too, so the two sets
//! are partitioned before rendering (see [`crate::collaborator`]).

use std::io::Write;

use tracing::debug;

use super::{ExportContext, ExportError};
use crate::collaborator::partition;
use crate::github::repo;
use crate::github::types::{Affiliation, Collaborator};
use crate::hcl::{self, BlockBuilder};
use crate::identifier;
use crate::permission::PermissionLevel;

pub const FILE_NAME: &str = "github_repository_collaborator.tf";
pub const EXTERNAL_FILE_NAME: &str = "github_repository_external_collaborator.tf";

/// Export every repository's collaborators, one file per affiliation class.
///
/// Collaborators whose permission record has no flag set hold no effective
/// access and are skipped.
pub async fn export(ctx: &ExportContext) -> Result<(), ExportError> {
    debug!("Getting repository collaborator data");

    let repos = repo::list_org_repos(ctx.client(), ctx.org()).await?;

    let mut external_output = ctx.create_output(EXTERNAL_FILE_NAME)?;
    let mut direct_output = ctx.create_output(FILE_NAME)?;

    for repo in &repos {
        let outside =
            repo::list_collaborators(ctx.client(), ctx.org(), &repo.name, Affiliation::Outside)
                .await?;
        let direct =
            repo::list_collaborators(ctx.client(), ctx.org(), &repo.name, Affiliation::Direct)
                .await?;

        let (external, direct_only) = partition(outside, direct);

        write_set(&mut external_output, &repo.name, &external, Affiliation::Outside)?;
        write_set(&mut direct_output, &repo.name, &direct_only, Affiliation::Direct)?;
    }

    Ok(())
}

fn write_set(
    output: &mut impl Write,
    repo_name: &str,
    collaborators: &[Collaborator],
    affiliation: Affiliation,
) -> Result<(), ExportError> {
    for collaborator in collaborators {
        debug!(
            repository = repo_name,
            collaborator = %collaborator.login,
            affiliation = affiliation.as_str(),
            "Processing repository collaborator"
        );

        let Some(level) = collaborator.permissions.resolve() else {
            debug!(
                repository = repo_name,
                collaborator = %collaborator.login,
                "No effective permission, skipping"
            );
            continue;
        };

        output.write_all(render(repo_name, &collaborator.login, level).as_bytes())?;
    }

    Ok(())
}

/// Render one `github_repository_collaborator` block and import comment.
pub fn render(repo_name: &str, login: &str, permission: PermissionLevel) -> String {
    let ident = format!(
        "{}-{}",
        identifier::sanitize(repo_name),
        identifier::sanitize(login)
    );

    let block = BlockBuilder::resource("github_repository_collaborator", &ident)
        .attr_str("repository", repo_name)
        .attr_str("username", login)
        .attr_str("permission", permission.as_str())
        .build();

    hcl::render_entity(
        "github_repository_collaborator",
        &ident,
        repo_name,
        format!("{repo_name}:{login}"),
        block,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::PermissionRecord;

    fn collaborator(login: &str, permissions: PermissionRecord) -> Collaborator {
        Collaborator {
            login: login.to_string(),
            permissions,
        }
    }

    fn push_only() -> PermissionRecord {
        PermissionRecord {
            push: true,
            ..Default::default()
        }
    }

    #[test]
    fn renders_the_resolved_permission() {
        let text = render("tooling", "alice", PermissionLevel::Maintain);

        assert_eq!(
            text,
            "# terraform import github_repository_collaborator.tooling-alice tooling:alice\n\
             resource \"github_repository_collaborator\" \"tooling-alice\" {\n\
             \x20 repository = \"tooling\"\n\
             \x20 username = \"alice\"\n\
             \x20 permission = \"maintain\"\n\
             }\n\n"
        );
    }

    #[test]
    fn dual_listed_collaborator_lands_only_in_the_external_file() {
        let outside = vec![collaborator("alice", push_only())];
        let direct = vec![
            collaborator("alice", push_only()),
            collaborator("bob", push_only()),
        ];

        let (external, direct_only) = partition(outside, direct);

        let mut external_file = Vec::new();
        let mut direct_file = Vec::new();
        write_set(&mut external_file, "tooling", &external, Affiliation::Outside).unwrap();
        write_set(&mut direct_file, "tooling", &direct_only, Affiliation::Direct).unwrap();

        let external_file = String::from_utf8(external_file).unwrap();
        let direct_file = String::from_utf8(direct_file).unwrap();

        assert!(external_file.contains("username = \"alice\""));
        assert!(!direct_file.contains("username = \"alice\""));
        assert!(direct_file.contains("username = \"bob\""));
    }

    #[test]
    fn collaborator_without_permissions_is_skipped() {
        let set = vec![collaborator("ghost", PermissionRecord::default())];

        let mut out = Vec::new();
        write_set(&mut out, "tooling", &set, Affiliation::Direct).unwrap();

        assert!(out.is_empty());
    }
}
