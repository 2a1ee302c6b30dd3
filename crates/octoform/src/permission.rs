//! Permission flag resolution.
//!
//! The GitHub API reports a collaborator's or team's access to a repository
//! as a map of boolean flags, one per level. Terraform wants exactly one
//! level name, so the flags are reduced to the highest level that is set.

use serde::Deserialize;

/// The raw permission flags attached to a collaborator or team repository.
///
/// Deserialized straight from the API's `permissions` object. Flags missing
/// from the payload default to false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PermissionRecord {
    pub admin: bool,
    pub maintain: bool,
    pub push: bool,
    pub triage: bool,
    pub pull: bool,
}

/// A single resolved permission level, from highest to lowest precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionLevel {
    Admin,
    Maintain,
    Push,
    Triage,
    Pull,
}

impl PermissionLevel {
    /// The level name as the Terraform provider expects it.
    pub fn as_str(self) -> &'static str {
        match self {
            PermissionLevel::Admin => "admin",
            PermissionLevel::Maintain => "maintain",
            PermissionLevel::Push => "push",
            PermissionLevel::Triage => "triage",
            PermissionLevel::Pull => "pull",
        }
    }
}

impl std::fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PermissionRecord {
    /// Reduce the flag set to the single highest-precedence level.
    ///
    /// The evaluation order admin > maintain > push > triage > pull is a
    /// fixed contract, not an incidental scan order. A record with no flag
    /// set resolves to `None`; callers must skip the relationship instead
    /// of emitting it.
    pub fn resolve(&self) -> Option<PermissionLevel> {
        if self.admin {
            Some(PermissionLevel::Admin)
        } else if self.maintain {
            Some(PermissionLevel::Maintain)
        } else if self.push {
            Some(PermissionLevel::Push)
        } else if self.triage {
            Some(PermissionLevel::Triage)
        } else if self.pull {
            Some(PermissionLevel::Pull)
        } else {
            None
        }
    }
}
