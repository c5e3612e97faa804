//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[base]`    | Site metadata (title, author, url, locales)      |
//! | `[content]` | Where records come from (directory or snapshot)  |
//! | `[build]`   | Output paths, data export, post pages, sitemap   |
//! | `[extra]`   | User-defined custom fields                       |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Jacob"
//! description = "Investor and builder"
//! url = "https://jacob.example.com"
//!
//! [content]
//! dir = "content"
//!
//! [build]
//! output = "public"
//!
//! [build.sitemap]
//! enable = true
//!
//! [extra]
//! analytics_id = "G-12345"
//! ```

mod base;
mod build;
mod content;
pub mod defaults;
mod error;

pub use content::ContentSource;

use base::BaseConfig;
use build::BuildConfig;
use content::ContentConfig;
use error::ConfigError;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory (set from `--root`)
    #[serde(skip)]
    pub root: Option<PathBuf>,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Content source
    #[serde(default)]
    pub content: ContentConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = Some(path.to_path_buf())
    }

    /// Directory receiving the exported JSON files.
    pub fn data_dir(&self) -> PathBuf {
        self.build.output.join(&self.build.data)
    }

    /// Directory receiving one `<slug>/index.html` per post.
    pub fn posts_dir(&self) -> PathBuf {
        self.build.output.join(&self.build.posts.path)
    }

    pub fn sitemap_path(&self) -> PathBuf {
        self.build.output.join(&self.build.sitemap.path)
    }

    /// URL segment of post pages, e.g. `writing`.
    pub fn posts_segment(&self) -> String {
        self.build
            .posts
            .path
            .to_string_lossy()
            .trim_matches('/')
            .to_owned()
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        // Determine the final root path based on command
        let base = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => base.join(name),
            _ => base,
        };

        self.update_path_with_root(cli, &root);

        if let Commands::Build { build_args } = &cli.command {
            self.build.clean |= build_args.clean;
            Self::update_option(&mut self.build.sitemap.enable, build_args.sitemap.as_ref());
            if let Some(url) = &build_args.base_url {
                self.base.url = Some(url.clone());
            }
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, cli: &Cli, root: &Path) {
        // Apply CLI overrides first
        Self::update_option(&mut self.content.dir, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        // Normalize root to absolute path
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));

        self.content.dir = Self::normalize_path(&root.join(&self.content.dir));
        self.content.snapshot = Self::normalize_path(&root.join(&self.content.snapshot));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        let is_build = self.cli.is_some_and(Cli::is_build);

        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if is_build && self.build.sitemap.enable {
            if self.base.url.is_none() {
                bail!(ConfigError::Validation(
                    "[base.url] is required for sitemap generation".into()
                ));
            }
            if self.base.locales.is_empty() {
                bail!(ConfigError::Validation(
                    "[base.locales] must not be empty for sitemap generation".into()
                ));
            }
        }

        for (field, path) in [
            ("[build.data]", &self.build.data),
            ("[build.posts.path]", &self.build.posts.path),
            ("[build.sitemap.path]", &self.build.sitemap.path),
        ] {
            if path.as_os_str().is_empty() || path.is_absolute() {
                bail!(ConfigError::Validation(format!(
                    "{field} must be a non-empty path relative to [build.output]"
                )));
            }
        }

        if self.content.source == ContentSource::Snapshot && !self.content.snapshot.is_file() {
            bail!(ConfigError::Validation(format!(
                "[content.snapshot] `{}` not found",
                self.content.snapshot.display()
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
