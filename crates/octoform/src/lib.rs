//! Octoform - bootstrap Terraform from an existing GitHub organization.
//!
//! This library reads the live configuration of a GitHub organization and
//! emits equivalent Terraform resource blocks plus matching `terraform
//! import` directives, one output file per resource kind. It is a one-shot,
//! read-only export: nothing is applied, validated, or persisted between
//! runs.
//!
//! # Example
//!
//! ```ignore
//! use octoform::export::{self, ExportContext};
//! use octoform::github;
//!
//! let client = github::create_client(&token)?;
//! github::get_org(&client, "my-org").await?;
//!
//! let ctx = ExportContext::new(client, "my-org", ".");
//! export::export_all(&ctx).await?;
//! ```

pub mod collaborator;
pub mod export;
pub mod github;
pub mod hcl;
pub mod identifier;
pub mod permission;

pub use export::{ExportContext, ExportError};
pub use github::GitHubError;
pub use hcl::RenderError;
pub use permission::{PermissionLevel, PermissionRecord};
