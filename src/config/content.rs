//! `[content]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where content records are read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    /// Content directory with `hero.json`, `posts/<slug>/index.mdoc`, ...
    #[default]
    Files,
    /// Single JSON export of the visual editor.
    Snapshot,
}

/// `[content]` section in folio.toml.
///
/// # Example
/// ```toml
/// [content]
/// dir = "content"
/// source = "snapshot"
/// snapshot = "content.json"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    /// Content directory (used when `source = "files"`).
    #[serde(default = "defaults::content::dir")]
    #[educe(Default = defaults::content::dir())]
    pub dir: PathBuf,

    #[serde(default = "defaults::content::source")]
    #[educe(Default = defaults::content::source())]
    pub source: ContentSource,

    /// Editor snapshot file (used when `source = "snapshot"`).
    #[serde(default = "defaults::content::snapshot")]
    #[educe(Default = defaults::content::snapshot())]
    pub snapshot: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_content_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.content.dir, PathBuf::from("content"));
        assert_eq!(config.content.source, ContentSource::Files);
        assert_eq!(config.content.snapshot, PathBuf::from("content.json"));
    }

    #[test]
    fn test_snapshot_source() {
        let config: SiteConfig = toml::from_str(
            r#"
            [content]
            source = "snapshot"
            snapshot = "export/editor.json"
        "#,
        )
        .unwrap();
        assert_eq!(config.content.source, ContentSource::Snapshot);
        assert_eq!(config.content.snapshot, PathBuf::from("export/editor.json"));
    }

    #[test]
    fn test_unknown_source_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[content]\nsource = \"database\"\n");
        assert!(result.is_err());
    }
}
