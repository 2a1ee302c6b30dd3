//! GitHub API payload types.
//!
//! The exporter only needs a handful of fields per entity, so each type below
//! deserializes exactly those fields from the raw REST payloads and ignores
//! the rest. Fields the API may omit are defaulted.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::permission::PermissionRecord;

/// A user as returned by member, collaborator, and blocked-user listings.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub login: String,
}

/// The organization role of one member, from the membership lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct OrgMembership {
    pub role: String,
}

/// A repository as returned by the repositories-by-organization listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub visibility: Option<String>,
    pub private: bool,
    pub has_downloads: bool,
    pub has_issues: bool,
    pub has_projects: bool,
    pub has_wiki: bool,
    pub is_template: bool,
    pub allow_merge_commit: bool,
    pub allow_squash_merge: bool,
    pub allow_rebase_merge: bool,
    pub delete_branch_on_merge: bool,
    pub auto_init: bool,
    pub license_template: Option<String>,
    pub gitignore_template: Option<String>,
    pub archived: bool,
    pub topics: Vec<String>,
}

/// A branch of one repository.
#[derive(Debug, Clone, Deserialize)]
pub struct Branch {
    pub name: String,
}

/// A collaborator on one repository, with the raw permission flags.
#[derive(Debug, Clone, Deserialize)]
pub struct Collaborator {
    pub login: String,
    #[serde(default)]
    pub permissions: PermissionRecord,
}

/// A repository webhook.
///
/// The `config` map is free-form on the wire; it is decoded into a typed
/// configuration during rendering, so a malformed hook fails that one entity
/// instead of the whole export.
#[derive(Debug, Clone, Deserialize)]
pub struct Webhook {
    pub id: u64,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub config: Map<String, Value>,
}

/// An organization team. Parent ids come from the API's own team tree, so a
/// team has at most one parent and cycles cannot occur.
#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub privacy: Option<String>,
    #[serde(default)]
    pub ldap_dn: Option<String>,
    #[serde(default)]
    pub parent: Option<TeamRef>,
}

/// A reference to a parent team.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamRef {
    pub id: u64,
}

/// A repository a team has access to, with the raw permission flags.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamRepository {
    pub name: String,
    #[serde(default)]
    pub permissions: PermissionRecord,
}

/// Collaborator affiliation classes the API can filter a listing by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affiliation {
    /// Added to the repository without being an organization member.
    Outside,
    /// Direct access; the API includes outside collaborators here too.
    Direct,
}

impl Affiliation {
    pub fn as_str(self) -> &'static str {
        match self {
            Affiliation::Outside => "outside",
            Affiliation::Direct => "direct",
        }
    }
}

/// Roles a user can hold within a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamRole {
    Maintainer,
    Member,
}

impl TeamRole {
    pub fn as_str(self) -> &'static str {
        match self {
            TeamRole::Maintainer => "maintainer",
            TeamRole::Member => "member",
        }
    }
}
