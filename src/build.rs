//! Site building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── prepare_output() ──► clean / create output directory
//!     │
//!     ├── Content::all_posts() ──► published posts, newest first
//!     │
//!     ├── rayon::join
//!     │       ├── data::write_to_disk() ──► <output>/_data/*.json
//!     │       └── page::write_posts()   ──► <output>/writing/<slug>/index.html
//!     │
//!     └── sitemap::build_sitemap() ──► <output>/sitemap.xml
//! ```

use crate::{
    config::SiteConfig,
    generator::{data, page, sitemap},
    log,
};
use anyhow::{Context, Result, bail};
use chrono::Local;
use folio_content::Content;
use std::{fs, path::Path};

/// Build the site from `content` into `config.build.output`.
///
/// If `config.build.clean` is true, clears the entire output directory first.
pub fn build_site(config: &SiteConfig, content: &Content) -> Result<()> {
    prepare_output(config)?;

    let posts = content.all_posts();
    log!("build"; "{} published posts", posts.len());

    let (data_result, pages_result) = rayon::join(
        || data::write_to_disk(content, &config.data_dir()),
        || {
            if config.build.posts.enable {
                page::write_posts(config, content, &posts)
            } else {
                Ok(0)
            }
        },
    );
    data_result?;
    pages_result?;

    sitemap::build_sitemap(config, &posts, Local::now().date_naive())?;

    log!("build"; "done: {}", config.build.output.display());
    Ok(())
}

/// Create the output directory, removing it first when cleaning.
fn prepare_output(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;

    if config.build.clean && output.exists() {
        if is_protected(output, config) {
            bail!(
                "Refusing to clean `{}`: it contains the project or its content",
                output.display()
            );
        }
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean {}", output.display()))?;
        log!("build"; "cleaned {}", output.display());
    }

    fs::create_dir_all(output).with_context(|| format!("Failed to create {}", output.display()))
}

/// An output directory that would take sources down with it.
fn is_protected(output: &Path, config: &SiteConfig) -> bool {
    config.get_root().starts_with(output)
        || config.content.dir.starts_with(output)
        || config.config_path.starts_with(output)
}

// ============================================================================
// Tests
// ============================================================================
