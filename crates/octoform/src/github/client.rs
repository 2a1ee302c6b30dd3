//! GitHub API client creation and the organization preflight check.

use octocrab::Octocrab;

use super::error::GitHubError;

/// Create an authenticated Octocrab instance from a GitHub token.
pub fn create_client(token: &str) -> Result<Octocrab, GitHubError> {
    Octocrab::builder()
        .personal_token(token.to_string())
        .build()
        .map_err(GitHubError::Api)
}

/// Verify that the organization exists and is reachable with this token.
///
/// Run once before exporting so a typo'd organization name fails early with
/// [`GitHubError::OrgNotFound`] instead of once per resource kind.
pub async fn get_org(client: &Octocrab, org: &str) -> Result<(), GitHubError> {
    let result: Result<serde_json::Value, octocrab::Error> =
        client.get(format!("/orgs/{org}"), None::<&()>).await;

    match result {
        Ok(_) => Ok(()),
        Err(octocrab::Error::GitHub { source, .. }) if source.status_code.as_u16() == 404 => {
            Err(GitHubError::OrgNotFound(org.to_string()))
        }
        Err(e) => Err(GitHubError::Api(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_client_accepts_a_token() {
        assert!(create_client("ghp_example").is_ok());
    }
}
