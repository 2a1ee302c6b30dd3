//! Organization-level operations: members, membership roles, blocked users.

use octocrab::Octocrab;
use tracing::debug;

use super::error::GitHubError;
use super::pagination::{PAGE_SIZE, fetch_all};
use super::types::{OrgMembership, User};

/// List every member of the organization.
pub async fn list_members(client: &Octocrab, org: &str) -> Result<Vec<User>, GitHubError> {
    debug!(org, "Listing organization members");
    fetch_all(client, |page| {
        format!("/orgs/{org}/members?per_page={PAGE_SIZE}&page={page}")
    })
    .await
}

/// Look up one member's organization role (`admin` or `member`).
pub async fn get_membership(
    client: &Octocrab,
    org: &str,
    username: &str,
) -> Result<OrgMembership, GitHubError> {
    client
        .get(
            format!("/orgs/{org}/memberships/{username}"),
            None::<&()>,
        )
        .await
        .map_err(GitHubError::Api)
}

/// List every user blocked by the organization.
pub async fn list_blocked_users(client: &Octocrab, org: &str) -> Result<Vec<User>, GitHubError> {
    debug!(org, "Listing blocked users");
    fetch_all(client, |page| {
        format!("/orgs/{org}/blocks?per_page={PAGE_SIZE}&page={page}")
    })
    .await
}
