//! Content directory backing.
//!
//! ```text
//! content/
//! ├── hero.json
//! ├── about.json
//! ├── experiences/<slug>/index.json
//! ├── projects/<slug>/index.json
//! └── posts/<slug>/index.mdoc      (or index.md)
//! ```

use super::{RecordStore, found};
use crate::{
    document::parse_post,
    error::StoreError,
    record::{
        AboutRecord, Collection, ExperienceEntry, HeroRecord, PostDocument, ProjectEntry,
        Singleton,
    },
};
use serde::de::DeserializeOwned;
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Data file inside each structured entry directory.
const ENTRY_FILE: &str = "index.json";

/// Document file names tried, in order, inside each post directory.
const DOCUMENT_FILES: &[&str] = &["index.mdoc", "index.md"];

/// Reads records straight from a content directory.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn singleton<T: DeserializeOwned>(&self, singleton: Singleton) -> Result<T, StoreError> {
        let path = self.root.join(format!("{}.json", singleton.name()));
        read_json(&path)
    }

    fn entry_dir(&self, collection: Collection, slug: &str) -> Result<PathBuf, StoreError> {
        if !is_valid_slug(slug) {
            return Err(StoreError::NotFound(format!("{collection}/{slug}")));
        }
        Ok(self.root.join(collection.name()).join(slug))
    }

    fn entry<T: DeserializeOwned>(&self, collection: Collection, slug: &str) -> Result<T, StoreError> {
        let path = self.entry_dir(collection, slug)?.join(ENTRY_FILE);
        read_json(&path)
    }

    fn document(&self, slug: &str) -> Result<PostDocument, StoreError> {
        let dir = self.entry_dir(Collection::Posts, slug)?;

        for name in DOCUMENT_FILES {
            match read_text(&dir.join(name)) {
                Ok(raw) => return parse_post(slug, &raw),
                Err(err) if err.is_not_found() => continue,
                Err(err) => return Err(err),
            }
        }

        Err(StoreError::NotFound(format!("posts/{slug}")))
    }
}

impl RecordStore for FsStore {
    fn list(&self, collection: Collection) -> Vec<String> {
        WalkDir::new(self.root.join(collection.name()))
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_dir())
            .filter_map(|entry| entry.file_name().to_str().map(str::to_owned))
            .filter(|name| !name.starts_with('.'))
            .collect()
    }

    fn hero(&self) -> Option<HeroRecord> {
        found(self.singleton(Singleton::Hero))
    }

    fn about(&self) -> Option<AboutRecord> {
        found(self.singleton(Singleton::About))
    }

    fn experience(&self, slug: &str) -> Option<ExperienceEntry> {
        found(self.entry::<ExperienceEntry>(Collection::Experiences, slug))
            .map(|entry| entry.with_slug(slug))
    }

    fn project(&self, slug: &str) -> Option<ProjectEntry> {
        found(self.entry::<ProjectEntry>(Collection::Projects, slug))
            .map(|entry| entry.with_slug(slug))
    }

    fn post(&self, slug: &str) -> Option<PostDocument> {
        found(self.document(slug))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// A slug names exactly one directory below its collection.
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && slug != ".."
        && !slug.contains(['/', '\\', '\0'])
}

fn read_text(path: &Path) -> Result<String, StoreError> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => StoreError::NotFound(path.display().to_string()),
        _ => StoreError::Io(path.to_path_buf(), err),
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let raw = read_text(path)?;
    serde_json::from_str(&raw).map_err(|err| StoreError::Json(path.display().to_string(), err))
}

// ============================================================================
// Tests
// ============================================================================
