//! Sitemap generation.
//!
//! Generates a sitemap.xml listing every localized page for search engine
//! indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/ko</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use folio_content::{PostEntry, derived::parse_date};
use std::fs;

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Pages below each locale prefix; the writing index takes the configured
/// posts segment.
fn static_pages(writing: &str) -> [String; 6] {
    [
        String::new(),
        "/about".into(),
        "/experience".into(),
        "/projects".into(),
        format!("/{writing}"),
        "/contact".into(),
    ]
}

// ============================================================================
// Public API
// ============================================================================

/// Build sitemap if enabled in config.
///
/// `posts` are the published posts of this build; `today` is the `lastmod`
/// of the static pages.
pub fn build_sitemap(config: &SiteConfig, posts: &[PostEntry], today: NaiveDate) -> Result<()> {
    if config.build.sitemap.enable {
        let sitemap = Sitemap::from_site(config, posts, today);
        sitemap.write(config)?;
    }
    Ok(())
}

// ============================================================================
// Sitemap Implementation
// ============================================================================

/// Sitemap data structure
struct Sitemap {
    /// List of URL entries
    urls: Vec<UrlEntry>,
}

/// How often a page is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChangeFreq {
    Weekly,
    Monthly,
}

impl ChangeFreq {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

/// Single URL entry in the sitemap
struct UrlEntry {
    /// Full URL location
    loc: String,
    /// Last modification date (optional, YYYY-MM-DD format)
    lastmod: Option<String>,
    changefreq: ChangeFreq,
    /// Relative priority, 0.0 to 1.0
    priority: f32,
}

impl Sitemap {
    fn from_site(config: &SiteConfig, posts: &[PostEntry], today: NaiveDate) -> Self {
        let base = config.base.url_root().unwrap_or_default();
        let writing = config.posts_segment();
        let today = today.format("%Y-%m-%d").to_string();

        let pages = static_pages(&writing);

        let mut urls = Vec::with_capacity(config.base.locales.len() * (pages.len() + posts.len()));

        for locale in &config.base.locales {
            for page in &pages {
                let home = page.is_empty();
                urls.push(UrlEntry {
                    loc: format!("{base}/{locale}{page}"),
                    lastmod: Some(today.clone()),
                    changefreq: if home { ChangeFreq::Weekly } else { ChangeFreq::Monthly },
                    priority: if home { 1.0 } else { 0.8 },
                });
            }

            for post in posts {
                urls.push(UrlEntry {
                    loc: format!("{base}/{locale}/{writing}/{}", urlencoding::encode(&post.slug)),
                    lastmod: parse_date(&post.date).map(|date| date.format("%Y-%m-%d").to_string()),
                    changefreq: ChangeFreq::Monthly,
                    priority: 0.6,
                });
            }
        }

        Self { urls }
    }

    /// Generate sitemap XML string.
    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            if let Some(lastmod) = entry.lastmod {
                xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
            }
            xml.push_str(&format!(
                "    <changefreq>{}</changefreq>\n",
                entry.changefreq.as_str()
            ));
            xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap to output file.
    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.sitemap_path();
        let count = self.urls.len();
        let xml = self.into_xml();

        if let Some(parent) = sitemap_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&sitemap_path, xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{} ({} urls)", sitemap_path.file_name().unwrap_or_default().to_string_lossy(), count);
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config(locales: &[&str]) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.base.url = Some("https://example.com/".into());
        config.base.locales = locales.iter().map(|l| l.to_string()).collect();
        config
    }

    fn post(slug: &str, date: &str) -> PostEntry {
        PostEntry {
            slug: slug.into(),
            date: date.into(),
            published: true,
            ..Default::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_static_pages_per_locale() {
        let sitemap = Sitemap::from_site(&config(&["ko", "en"]), &[], today());
        let locs: Vec<_> = sitemap.urls.iter().map(|u| u.loc.as_str()).collect();

        assert_eq!(
            locs,
            vec![
                "https://example.com/ko",
                "https://example.com/ko/about",
                "https://example.com/ko/experience",
                "https://example.com/ko/projects",
                "https://example.com/ko/writing",
                "https://example.com/ko/contact",
                "https://example.com/en",
                "https://example.com/en/about",
                "https://example.com/en/experience",
                "https://example.com/en/projects",
                "https://example.com/en/writing",
                "https://example.com/en/contact",
            ]
        );
    }

    #[test]
    fn test_home_priority_and_frequency() {
        let sitemap = Sitemap::from_site(&config(&["en"]), &[], today());
        let home = &sitemap.urls[0];
        assert_eq!(home.priority, 1.0);
        assert_eq!(home.changefreq, ChangeFreq::Weekly);
        assert_eq!(home.lastmod.as_deref(), Some("2025-01-01"));

        let about = &sitemap.urls[1];
        assert_eq!(about.priority, 0.8);
        assert_eq!(about.changefreq, ChangeFreq::Monthly);
    }

    #[test]
    fn test_post_urls() {
        let posts = vec![post("hello world", "2024-03-01T09:00:00Z"), post("undated", "")];
        let sitemap = Sitemap::from_site(&config(&["en"]), &posts, today());
        let post_urls: Vec<_> = sitemap.urls.iter().filter(|u| u.priority == 0.6).collect();

        assert_eq!(post_urls.len(), 2);
        assert_eq!(post_urls[0].loc, "https://example.com/en/writing/hello%20world");
        assert_eq!(post_urls[0].lastmod.as_deref(), Some("2024-03-01"));
        assert_eq!(post_urls[1].lastmod, None);
    }

    #[test]
    fn test_xml_structure() {
        let sitemap = Sitemap::from_site(&config(&["en"]), &[post("a&b", "2024-01-01")], today());
        let xml = sitemap.into_xml();

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<urlset"));
        assert_eq!(lines.last().unwrap().trim(), "</urlset>");
        assert_eq!(xml.matches("<url>").count(), 7);
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<loc>https://example.com/en/writing/a%26b</loc>"));
    }

    #[test]
    fn test_build_sitemap_respects_enable() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&["en"]);
        config.build.output = dir.path().to_path_buf();

        config.build.sitemap.enable = false;
        build_sitemap(&config, &[], today()).unwrap();
        assert!(!dir.path().join("sitemap.xml").exists());

        config.build.sitemap.enable = true;
        build_sitemap(&config, &[], today()).unwrap();
        let xml = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert!(xml.contains("<loc>https://example.com/en/about</loc>"));
    }
}
