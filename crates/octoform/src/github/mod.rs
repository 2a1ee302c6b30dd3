//! GitHub API access for the exporter.
//!
//! Everything here is read-only. List endpoints go through the paginated
//! collector in [`pagination`]; payloads deserialize into the semantic types
//! in [`types`] rather than a full SDK model.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for GitHub API operations
//! - [`client`] - Client creation and the organization preflight check
//! - [`pagination`] - The generic paginated collector
//! - [`types`] - Payload types for the consumed endpoints
//! - [`org`] - Members, membership roles, blocked users
//! - [`repo`] - Repositories, branches, collaborators, webhooks
//! - [`team`] - Teams, team members, team repositories

mod client;
mod error;
pub mod org;
mod pagination;
pub mod repo;
pub mod team;
pub mod types;

pub use client::{create_client, get_org};
pub use error::GitHubError;
pub use org::{get_membership, list_blocked_users, list_members};
pub use pagination::{PAGE_SIZE, collect_pages, fetch_all};
pub use repo::{list_branches, list_collaborators, list_hooks, list_org_repos};
pub use team::{list_team_members, list_team_repos, list_teams};
