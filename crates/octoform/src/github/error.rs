//! GitHub API error types.

use thiserror::Error;

/// Errors that can occur when talking to the GitHub API.
///
/// A failed page fetch aborts the current resource kind's export; there are
/// no retries.
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    #[error("Organization not found: {0}")]
    OrgNotFound(String),
}
