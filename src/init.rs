//! Site initialization module.
//!
//! Creates a new portfolio with a default configuration and sample content:
//!
//! ```text
//! <root>/
//! ├── folio.toml
//! ├── .gitignore / .ignore
//! └── content/
//!     ├── hero.json
//!     ├── about.json
//!     ├── experiences/
//!     ├── projects/
//!     └── posts/hello-world/index.mdoc
//! ```

use crate::{config::SiteConfig, generator::data::to_json, log};
use anyhow::{Context, Result, bail};
use chrono::Local;
use folio_content::{AboutRecord, HeroRecord};
use std::{fs, path::Path};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Collection directories under the content root
const CONTENT_DIRS: &[&str] = &["experiences", "projects", "posts"];

const SAMPLE_POST_SLUG: &str = "hello-world";

/// Placeholder so `folio build` works right after `folio init`.
const PLACEHOLDER_URL: &str = "https://example.com";

/// Create a new site with default structure
pub fn new_site(config: &SiteConfig) -> Result<()> {
    let root = config.get_root();

    if !is_dir_empty(root)? {
        bail!(
            "`{}` is not empty. Use `folio init <SITE_NAME>` to create in a subdirectory.",
            root.display()
        );
    }

    fs::create_dir_all(root).with_context(|| format!("Failed to create {}", root.display()))?;
    init_content(&config.content.dir)?;
    init_default_config(&config.config_path)?;

    let output = config.build.output.strip_prefix(root).unwrap_or(&config.build.output);
    init_ignored_files(root, &[output])?;

    log!("init"; "created site at {}", root.display());
    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Write default configuration file
fn init_default_config(path: &Path) -> Result<()> {
    let mut config = SiteConfig::default();
    config.base.title = "My Portfolio".into();
    config.base.description = "Projects, experience and writing".into();
    config.base.url = Some(PLACEHOLDER_URL.into());

    let content = toml::to_string_pretty(&config)?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Create the content tree with default singletons and one sample post.
fn init_content(dir: &Path) -> Result<()> {
    for sub in CONTENT_DIRS {
        let path = dir.join(sub);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }

    fs::write(dir.join("hero.json"), to_json(&HeroRecord::default())?)?;
    fs::write(dir.join("about.json"), to_json(&AboutRecord::default())?)?;

    let post_dir = dir.join("posts").join(SAMPLE_POST_SLUG);
    fs::create_dir_all(&post_dir)
        .with_context(|| format!("Failed to create {}", post_dir.display()))?;
    fs::write(post_dir.join("index.mdoc"), sample_post(&Local::now().format("%Y-%m-%d").to_string()))?;

    Ok(())
}

fn sample_post(date: &str) -> String {
    format!(
        "---
title: Hello, World
description: First post on the new site.
date: {date}
tags:
  - notes
published: true
---

## Why this site

A place for projects, experience and longer notes.

## What comes next

Edit `content/` and run `folio build`.
"
    )
}

/// Initialize .gitignore and .ignore files with specified paths
fn init_ignored_files(root: &Path, paths: &[&Path]) -> Result<()> {
    let content = paths
        .iter()
        .filter_map(|p| p.to_str())
        .collect::<Vec<_>>()
        .join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)?;
        }
    }

    Ok(())
}
