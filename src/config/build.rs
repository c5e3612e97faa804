//! `[build]` section configuration.
//!
//! Contains output paths, data export, post pages and sitemap settings.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in folio.toml - build pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// output = "public"        # Output directory
/// data = "_data"           # JSON export, relative to output
///
/// [build.posts]
/// path = "writing"         # Post pages, relative to output
///
/// [build.sitemap]
/// enable = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Clear output directory before each build.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,

    /// Data export directory, relative to `output`.
    #[serde(default = "defaults::build::data")]
    #[educe(Default = defaults::build::data())]
    pub data: PathBuf,

    /// Post page rendering.
    #[serde(default)]
    pub posts: PostsConfig,

    /// Sitemap generation settings.
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

/// `[build.posts]` section - rendered post pages.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PostsConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = defaults::r#true())]
    pub enable: bool,

    /// URL segment and output directory of post pages.
    #[serde(default = "defaults::build::posts::path")]
    #[educe(Default = defaults::build::posts::path())]
    pub path: PathBuf,
}

/// `[build.sitemap]` section - sitemap generation.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapConfig {
    /// Enable sitemap generation.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = defaults::r#true())]
    pub enable: bool,

    /// Output path for the sitemap file, relative to `output`.
    #[serde(default = "defaults::build::sitemap::path")]
    #[educe(Default = defaults::build::sitemap::path())]
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_build_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(!config.build.clean);
        assert_eq!(config.build.data, PathBuf::from("_data"));
        assert!(config.build.posts.enable);
        assert_eq!(config.build.posts.path, PathBuf::from("writing"));
        assert!(config.build.sitemap.enable);
        assert_eq!(config.build.sitemap.path, PathBuf::from("sitemap.xml"));
    }

    #[test]
    fn test_build_full() {
        let config: SiteConfig = toml::from_str(
            r#"
            [build]
            output = "dist"
            clean = true
            data = "api"

            [build.posts]
            enable = false
            path = "blog"

            [build.sitemap]
            enable = false
            path = "map.xml"
        "#,
        )
        .unwrap();

        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(config.build.clean);
        assert_eq!(config.build.data, PathBuf::from("api"));
        assert!(!config.build.posts.enable);
        assert_eq!(config.build.posts.path, PathBuf::from("blog"));
        assert!(!config.build.sitemap.enable);
        assert_eq!(config.build.sitemap.path, PathBuf::from("map.xml"));
    }

    #[test]
    fn test_build_unknown_field_rejection() {
        let result: Result<SiteConfig, _> = toml::from_str("[build]\nminify = true\n");
        assert!(result.is_err());
    }
}
