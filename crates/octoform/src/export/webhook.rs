//! Repository webhook export.

use std::io::Write;

use serde_json::{Map, Value};
use tracing::{debug, error};

use super::{ExportContext, ExportError};
use crate::github::repo;
use crate::github::types::Webhook;
use crate::hcl::{self, BlockBuilder, RenderError};
use crate::identifier;

pub const FILE_NAME: &str = "github_repository_webhook.tf";

/// The placeholder written in place of a webhook secret. GitHub never
/// discloses a secret after creation, so the generated block can only mark
/// that one exists.
pub const SECRET_PLACEHOLDER: &str = "PLEASE UPDATE ME";

/// The webhook's `config` map, decoded into the fields the block needs.
#[derive(Debug, PartialEq, Eq)]
pub struct WebhookConfig {
    pub url: String,
    pub content_type: String,
    pub insecure_ssl: bool,
    pub has_secret: bool,
}

impl WebhookConfig {
    /// Decode the free-form configuration map.
    ///
    /// The API encodes `insecure_ssl` as the string `"1"` when set; any
    /// other string means off. A map missing `url` or `content_type`, or
    /// carrying them in an unexpected shape, is a render error for that one
    /// webhook.
    pub fn decode(raw: &Map<String, Value>) -> Result<Self, RenderError> {
        let insecure_ssl = match raw.get("insecure_ssl") {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => s == "1",
            Some(_) => {
                return Err(RenderError::UnexpectedConfigShape {
                    field: "insecure_ssl",
                    expected: "a string",
                });
            }
        };

        Ok(Self {
            url: string_field(raw, "url")?,
            content_type: string_field(raw, "content_type")?,
            insecure_ssl,
            has_secret: raw.get("secret").is_some_and(|v| !v.is_null()),
        })
    }
}

fn string_field(raw: &Map<String, Value>, field: &'static str) -> Result<String, RenderError> {
    match raw.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(RenderError::UnexpectedConfigShape {
            field,
            expected: "a string",
        }),
        None => Err(RenderError::MissingConfigField(field)),
    }
}

/// Export every webhook of every repository in the organization.
///
/// A webhook whose configuration map fails to decode is logged and skipped;
/// the rest of the file is still written.
pub async fn export(ctx: &ExportContext) -> Result<(), ExportError> {
    debug!("Getting repository webhooks data");

    let repos = repo::list_org_repos(ctx.client(), ctx.org()).await?;
    let mut output = ctx.create_output(FILE_NAME)?;

    for repo in &repos {
        let webhooks = repo::list_hooks(ctx.client(), ctx.org(), &repo.name).await?;

        for webhook in webhooks {
            debug!(repository = %repo.name, id = webhook.id, "Processing webhook");

            match render(&repo.name, &webhook) {
                Ok(text) => output.write_all(text.as_bytes())?,
                Err(e) => {
                    error!(
                        repository = %repo.name,
                        id = webhook.id,
                        error = %e,
                        "Webhook cannot be rendered, skipping"
                    );
                }
            }
        }
    }

    Ok(())
}

/// Render one `github_repository_webhook` block and import comment.
pub fn render(repo_name: &str, webhook: &Webhook) -> Result<String, RenderError> {
    let config = WebhookConfig::decode(&webhook.config)?;

    let repo_ident = identifier::sanitize(repo_name);
    let ident = format!("{repo_ident}-{}", webhook.id);

    let mut configuration = BlockBuilder::nested("configuration")
        .attr_str("url", &config.url)
        .attr_str("content_type", &config.content_type)
        .attr("insecure_ssl", config.insecure_ssl);
    if config.has_secret {
        configuration = configuration.attr_str("secret", SECRET_PLACEHOLDER);
    }

    let block = BlockBuilder::resource("github_repository_webhook", &ident)
        .attr_str("repository", repo_name)
        .attr("active", webhook.active)
        .attr_list("events", &webhook.events)
        .block(configuration)
        .build();

    Ok(hcl::render_entity(
        "github_repository_webhook",
        &ident,
        repo_name,
        format!("{repo_ident}/{}", webhook.id),
        block,
    ))
}
