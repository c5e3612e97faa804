//! `[base]` section configuration.
//!
//! Contains basic site information like title, author, url and locales.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in folio.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "Jacob"
/// description = "Investor and builder"
/// author = "Jacob"
/// url = "https://jacob.example.com"
/// locales = ["ko", "en"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title, used in page titles.
    pub title: String,

    /// Site description for meta tags.
    pub description: String,

    /// Author name for meta tags.
    #[serde(default = "defaults::base::author")]
    #[educe(Default = defaults::base::author())]
    pub author: String,

    /// Base URL for absolute links in the sitemap.
    /// Required when `[build.sitemap].enable = true`.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// Locale prefixes the site is served under; the first one is the
    /// language of rendered post pages.
    #[serde(default = "defaults::base::locales")]
    #[educe(Default = defaults::base::locales())]
    pub locales: Vec<String>,
}

impl BaseConfig {
    /// Base URL without a trailing slash.
    pub fn url_root(&self) -> Option<&str> {
        self.url.as_deref().map(|url| url.trim_end_matches('/'))
    }

    pub fn primary_locale(&self) -> &str {
        self.locales.first().map_or("en", String::as_str)
    }
}
