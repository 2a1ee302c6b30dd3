//! Repository export.

use std::io::Write;

use tracing::debug;

use super::{ExportContext, ExportError};
use crate::github::repo;
use crate::github::types::Repository;
use crate::hcl::{self, BlockBuilder};
use crate::identifier;

pub const FILE_NAME: &str = "github_repository.tf";

/// Export every repository owned by the organization.
pub async fn export(ctx: &ExportContext) -> Result<(), ExportError> {
    debug!("Getting repository data");

    let repos = repo::list_org_repos(ctx.client(), ctx.org()).await?;
    let mut output = ctx.create_output(FILE_NAME)?;

    for repo in repos {
        debug!(name = %repo.name, "Processing repository");
        output.write_all(render(&repo).as_bytes())?;
    }

    Ok(())
}

/// Render one `github_repository` block and import comment.
///
/// `private` is only meaningful when the API reports no visibility string;
/// newer payloads carry `visibility` and the block then uses that instead.
pub fn render(repo: &Repository) -> String {
    let ident = identifier::sanitize(&repo.name);

    let mut block = BlockBuilder::resource("github_repository", &ident)
        .attr_str("name", &repo.name)
        .attr_str_opt("description", repo.description.as_deref())
        .attr_str_opt("homepage_url", repo.homepage.as_deref());

    block = match repo.visibility.as_deref() {
        Some(visibility) if !visibility.is_empty() => block.attr_str("visibility", visibility),
        _ => block.attr_flag("private", repo.private),
    };

    let block = block
        .attr_flag("has_downloads", repo.has_downloads)
        .attr_flag("has_issues", repo.has_issues)
        .attr_flag("has_projects", repo.has_projects)
        .attr_flag("has_wiki", repo.has_wiki)
        .attr_flag("is_template", repo.is_template)
        .attr_flag("allow_merge_commit", repo.allow_merge_commit)
        .attr_flag("allow_squash_merge", repo.allow_squash_merge)
        .attr_flag("allow_rebase_merge", repo.allow_rebase_merge)
        .attr_flag("delete_branch_on_merge", repo.delete_branch_on_merge)
        .attr_flag("auto_init", repo.auto_init)
        .attr_str_opt("license_template", repo.license_template.as_deref())
        .attr_str_opt("gitignore_template", repo.gitignore_template.as_deref())
        .attr_flag("archived", repo.archived)
        .attr_list("topics", &repo.topics)
        .build();

    hcl::render_entity("github_repository", &ident, &repo.name, &ident, block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_digit_repository_with_sparse_attributes() {
        let repo = Repository {
            name: "3-repo".to_string(),
            description: Some(String::new()),
            private: true,
            topics: vec!["a".to_string(), "b".to_string()],
            ..Default::default()
        };

        let text = render(&repo);

        assert!(text.starts_with(
            "# WARNING this resource has an invalid identifier when used with Terraform 0.12+\n\
             # Suggestion: use this identifier instead _3-repo\n\
             # terraform import github_repository.3-repo 3-repo\n"
        ));
        assert!(text.contains("name = \"3-repo\""));
        assert!(!text.contains("description"));
        assert!(text.contains("private = true"));
        assert!(text.contains("topics = [ \"a\", \"b\", ]"));
    }

    #[test]
    fn visibility_takes_precedence_over_private() {
        let repo = Repository {
            name: "internal-tool".to_string(),
            visibility: Some("internal".to_string()),
            private: true,
            ..Default::default()
        };

        let text = render(&repo);

        assert!(text.contains("visibility = \"internal\""));
        assert!(!text.contains("private"));
    }

    #[test]
    fn feature_flags_render_only_when_set() {
        let repo = Repository {
            name: "flags".to_string(),
            has_issues: true,
            allow_squash_merge: true,
            delete_branch_on_merge: true,
            ..Default::default()
        };

        let text = render(&repo);

        assert!(text.contains("has_issues = true"));
        assert!(text.contains("allow_squash_merge = true"));
        assert!(text.contains("delete_branch_on_merge = true"));
        assert!(!text.contains("has_wiki"));
        assert!(!text.contains("allow_merge_commit"));
        assert!(!text.contains("archived"));
    }

    #[test]
    fn attribute_order_is_stable() {
        let repo = Repository {
            name: "ordered".to_string(),
            description: Some("a tool".to_string()),
            homepage: Some("https://example.com".to_string()),
            private: true,
            has_issues: true,
            archived: true,
            topics: vec!["x".to_string()],
            ..Default::default()
        };

        let text = render(&repo);

        let positions: Vec<usize> = [
            "name = ",
            "description = ",
            "homepage_url = ",
            "private = ",
            "has_issues = ",
            "archived = ",
            "topics = ",
        ]
        .iter()
        .map(|needle| text.find(needle).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn license_and_gitignore_templates_are_quoted() {
        let repo = Repository {
            name: "templated".to_string(),
            license_template: Some("mit".to_string()),
            gitignore_template: Some("Rust".to_string()),
            ..Default::default()
        };

        let text = render(&repo);

        assert!(text.contains("license_template = \"mit\""));
        assert!(text.contains("gitignore_template = \"Rust\""));
    }
}
