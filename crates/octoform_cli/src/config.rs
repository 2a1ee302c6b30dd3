//! Configuration file support for octoform.
//!
//! Configuration is loaded with the following precedence (highest to lowest):
//! 1. CLI flags
//! 2. `GITHUB_TOKEN` / `GITHUB_ORGANIZATION` environment variables (read by clap)
//! 3. Environment variables prefixed with `OCTOFORM_` (e.g., `OCTOFORM_GITHUB_TOKEN`)
//! 4. Config file (~/.config/octoform/config.toml or ./octoform.toml)
//!
//! Example config file:
//! ```toml
//! [github]
//! token = "ghp_..."           # or use GITHUB_TOKEN env var
//! organization = "my-org"     # or use GITHUB_ORGANIZATION env var
//!
//! [output]
//! dir = "./terraform/github"  # optional, defaults to the current directory
//! ```

use std::path::PathBuf;

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub configuration.
    pub github: GitHubConfig,
    /// Output configuration.
    pub output: OutputConfig,
}

/// GitHub configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// GitHub personal access token.
    pub token: Option<String>,
    /// Organization every export is scoped to.
    pub organization: Option<String>,
}

/// Output configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the .tf files are written to.
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration using the config crate's layered approach.
    ///
    /// Sources are loaded in order (later sources override earlier):
    /// 1. XDG config file (~/.config/octoform/config.toml)
    /// 2. Local config file (./octoform.toml)
    /// 3. Environment variables with OCTOFORM_ prefix
    pub fn load() -> Self {
        let mut builder = ConfigBuilder::builder();

        if let Some(proj_dirs) = ProjectDirs::from("", "", "octoform") {
            let xdg_config = proj_dirs.config_dir().join("config.toml");
            if xdg_config.exists() {
                tracing::debug!("Loading config from {:?}", xdg_config);
                builder = builder.add_source(
                    File::from(xdg_config)
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        let local_config = PathBuf::from("octoform.toml");
        if local_config.exists() {
            tracing::debug!("Loading config from ./octoform.toml");
            builder = builder.add_source(
                File::from(local_config)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        // e.g., OCTOFORM_GITHUB_TOKEN -> github.token
        builder = builder.add_source(
            Environment::with_prefix("OCTOFORM")
                .separator("_")
                .try_parsing(true),
        );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<Config>() {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to deserialize config: {}", e);
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to build config: {}", e);
                Config::default()
            }
        }
    }

    /// Get the GitHub token.
    pub fn github_token(&self) -> Option<String> {
        self.github.token.clone()
    }

    /// Get the organization name.
    pub fn organization(&self) -> Option<String> {
        self.github.organization.clone()
    }

    /// Get the output directory.
    pub fn out_dir(&self) -> Option<PathBuf> {
        self.output.dir.clone()
    }

    /// Get the default config file path.
    #[allow(dead_code)]
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "octoform").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_credentials() {
        let config = Config::default();
        assert!(config.github_token().is_none());
        assert!(config.organization().is_none());
        assert!(config.out_dir().is_none());
    }

    #[test]
    fn config_deserializes_from_toml() {
        let toml_content = r#"
            [github]
            token = "ghp_example"
            organization = "octo-org"

            [output]
            dir = "./tf"
        "#;

        let config: Config = ConfigBuilder::builder()
            .add_source(config::File::from_str(toml_content, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.github_token().as_deref(), Some("ghp_example"));
        assert_eq!(config.organization().as_deref(), Some("octo-org"));
        assert_eq!(config.out_dir(), Some(PathBuf::from("./tf")));
    }
}
