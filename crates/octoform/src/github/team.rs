//! Team-level operations: listing teams and their members and repositories.

use octocrab::Octocrab;
use tracing::debug;

use super::error::GitHubError;
use super::pagination::{PAGE_SIZE, fetch_all};
use super::types::{Team, TeamRepository, TeamRole, User};

/// List every team in the organization.
pub async fn list_teams(client: &Octocrab, org: &str) -> Result<Vec<Team>, GitHubError> {
    debug!(org, "Listing organization teams");
    fetch_all(client, |page| {
        format!("/orgs/{org}/teams?per_page={PAGE_SIZE}&page={page}")
    })
    .await
}

/// List one team's members holding the given role.
pub async fn list_team_members(
    client: &Octocrab,
    org: &str,
    team_slug: &str,
    role: TeamRole,
) -> Result<Vec<User>, GitHubError> {
    debug!(org, team = team_slug, role = role.as_str(), "Listing team members");
    fetch_all(client, |page| {
        format!(
            "/orgs/{org}/teams/{team_slug}/members?role={}&per_page={PAGE_SIZE}&page={page}",
            role.as_str()
        )
    })
    .await
}

/// List every repository one team has access to.
pub async fn list_team_repos(
    client: &Octocrab,
    org: &str,
    team_slug: &str,
) -> Result<Vec<TeamRepository>, GitHubError> {
    debug!(org, team = team_slug, "Listing team repositories");
    fetch_all(client, |page| {
        format!("/orgs/{org}/teams/{team_slug}/repos?per_page={PAGE_SIZE}&page={page}")
    })
    .await
}
