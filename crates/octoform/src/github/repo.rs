//! Repository-level operations: listing repositories and their branches,
//! collaborators, and webhooks.

use octocrab::Octocrab;
use tracing::debug;

use super::error::GitHubError;
use super::pagination::{PAGE_SIZE, fetch_all};
use super::types::{Affiliation, Branch, Collaborator, Repository, Webhook};

/// List every repository owned by the organization.
pub async fn list_org_repos(
    client: &Octocrab,
    org: &str,
) -> Result<Vec<Repository>, GitHubError> {
    debug!(org, "Listing organization repositories");
    fetch_all(client, |page| {
        format!("/orgs/{org}/repos?per_page={PAGE_SIZE}&page={page}")
    })
    .await
}

/// List every branch of one repository.
pub async fn list_branches(
    client: &Octocrab,
    org: &str,
    repo: &str,
) -> Result<Vec<Branch>, GitHubError> {
    debug!(org, repo, "Listing repository branches");
    fetch_all(client, |page| {
        format!("/repos/{org}/{repo}/branches?per_page={PAGE_SIZE}&page={page}")
    })
    .await
}

/// List one repository's collaborators, filtered by affiliation class.
///
/// Note that the `direct` listing also includes outside collaborators; see
/// [`crate::collaborator::partition`] for the disambiguation.
pub async fn list_collaborators(
    client: &Octocrab,
    org: &str,
    repo: &str,
    affiliation: Affiliation,
) -> Result<Vec<Collaborator>, GitHubError> {
    debug!(org, repo, affiliation = affiliation.as_str(), "Listing collaborators");
    fetch_all(client, |page| {
        format!(
            "/repos/{org}/{repo}/collaborators?affiliation={}&per_page={PAGE_SIZE}&page={page}",
            affiliation.as_str()
        )
    })
    .await
}

/// List every webhook configured on one repository.
pub async fn list_hooks(
    client: &Octocrab,
    org: &str,
    repo: &str,
) -> Result<Vec<Webhook>, GitHubError> {
    debug!(org, repo, "Listing repository webhooks");
    fetch_all(client, |page| {
        format!("/repos/{org}/{repo}/hooks?per_page={PAGE_SIZE}&page={page}")
    })
    .await
}
