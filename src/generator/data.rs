//! JSON data export for `<output>/_data/*.json`.
//!
//! Every facade listing is written once per build so the presentation layer
//! can consume plain files.

use crate::log;
use anyhow::{Context, Result};
use folio_content::Content;
use serde::Serialize;
use std::{fs, path::Path};

/// Known data files and their generators.
type DataFileGenerator = fn(&Content) -> serde_json::Result<String>;

const DATA_FILES: &[(&str, DataFileGenerator)] = &[
    ("hero.json", hero),
    ("about.json", about),
    ("experiences.json", experiences),
    ("projects.json", projects),
    ("posts.json", posts),
    ("tags.json", tags),
];

fn hero(content: &Content) -> serde_json::Result<String> {
    to_json(&content.hero())
}

fn about(content: &Content) -> serde_json::Result<String> {
    to_json(&content.about())
}

fn experiences(content: &Content) -> serde_json::Result<String> {
    to_json(&content.experiences())
}

fn projects(content: &Content) -> serde_json::Result<String> {
    to_json(&content.projects())
}

fn posts(content: &Content) -> serde_json::Result<String> {
    to_json(&content.all_posts())
}

fn tags(content: &Content) -> serde_json::Result<String> {
    to_json(&content.all_tags())
}

/// Pretty JSON, as written to disk and printed by `folio query`.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Write all data files to disk.
///
/// # Arguments
///
/// * `data_dir` - The full path to the data directory (e.g., `public/_data`)
pub fn write_to_disk(content: &Content, data_dir: &Path) -> Result<()> {
    fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create {}", data_dir.display()))?;

    for (name, generator) in DATA_FILES {
        let path = data_dir.join(name);
        let json = generator(content).with_context(|| format!("Failed to serialize {name}"))?;
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    }

    log!("data"; "{} files", DATA_FILES.len());
    Ok(())
}
