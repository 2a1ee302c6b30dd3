//! Export pipelines, one module per resource kind.
//!
//! Every kind follows the same shape: collect the full entity set through the
//! paginated API, resolve or partition where the kind needs disambiguation,
//! then render entity by entity into the kind's output file. A collection
//! failure aborts the kind; a render failure is logged and skips only the
//! affected entity.

pub mod block;
pub mod branch;
pub mod collaborator;
pub mod membership;
pub mod repository;
pub mod team;
pub mod team_membership;
pub mod team_repository;
pub mod webhook;

use std::fs::File;
use std::path::{Path, PathBuf};

use octocrab::Octocrab;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::github::GitHubError;

/// A resource kind's export failure.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Api(#[from] GitHubError),

    #[error("failed to write output file: {0}")]
    Io(#[from] std::io::Error),

    #[error("{failed} of {total} resource kinds failed to export")]
    Partial { failed: usize, total: usize },
}

/// Everything an export pipeline needs, established once at startup.
///
/// The context is immutable for the run and passed by reference into every
/// pipeline; there is no other shared state across resource kinds.
pub struct ExportContext {
    client: Octocrab,
    org: String,
    out_dir: PathBuf,
}

impl ExportContext {
    pub fn new(client: Octocrab, org: impl Into<String>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            org: org.into(),
            out_dir: out_dir.into(),
        }
    }

    pub fn client(&self) -> &Octocrab {
        &self.client
    }

    pub fn org(&self) -> &str {
        &self.org
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Create (truncating) a resource kind's output file in the output
    /// directory. The handle lives for the duration of that kind's export
    /// and is closed on every exit path when it drops.
    pub(crate) fn create_output(&self, file_name: &str) -> Result<File, ExportError> {
        let path = self.out_dir.join(file_name);
        let file = File::create(&path)?;
        debug!(path = %path.display(), "Created output file");
        Ok(file)
    }
}

/// Export every supported resource kind in a fixed order.
///
/// A kind's failure is logged and does not abort its siblings; if any kind
/// failed, the summary [`ExportError::Partial`] is returned at the end so the
/// caller still exits non-zero.
pub async fn export_all(ctx: &ExportContext) -> Result<(), ExportError> {
    info!(org = ctx.org(), "Exporting all supported resource kinds");

    let results = [
        ("membership", membership::export(ctx).await),
        ("repository", repository::export(ctx).await),
        ("repository collaborator", collaborator::export(ctx).await),
        ("repository webhook", webhook::export(ctx).await),
        ("team", team::export(ctx).await),
        ("team membership", team_membership::export(ctx).await),
        ("team repository", team_repository::export(ctx).await),
    ];

    let total = results.len();
    let mut failed = 0usize;
    for (kind, result) in results {
        if let Err(e) = result {
            error!(kind, error = %e, "Resource kind failed to export");
            failed += 1;
        }
    }

    if failed > 0 {
        Err(ExportError::Partial { failed, total })
    } else {
        Ok(())
    }
}
