//! Editor reader backing.
//!
//! A [`ContentReader`] hands out loosely typed JSON fields; [`ReaderStore`]
//! decodes them with the same schemas the directory store uses, so both
//! backings produce identical records for identical content.

use super::{RecordStore, found};
use crate::{
    document::FrontMatter,
    error::{SnapshotError, StoreError},
    record::{
        AboutRecord, Collection, ExperienceEntry, HeroRecord, PostDocument, ProjectEntry,
        Singleton,
    },
};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use std::{collections::BTreeMap, fs, path::Path};

/// Key holding a document body inside an entry.
const CONTENT_KEY: &str = "content";

/// Raw field access as offered by a content editor.
pub trait ContentReader: Send + Sync {
    fn singleton(&self, name: &str) -> Option<Value>;

    /// Entry identifiers of a collection, in discovery order.
    fn list(&self, collection: &str) -> Vec<String>;

    fn read(&self, collection: &str, id: &str) -> Option<ReaderEntry>;
}

/// One collection entry: its fields plus an optional document body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReaderEntry {
    pub fields: Value,
    pub content: Option<String>,
}

impl ReaderEntry {
    /// Split an entry object, moving its `content` string out of the fields.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => {
                let content = match fields.remove(CONTENT_KEY) {
                    Some(Value::String(body)) => Some(body),
                    _ => None,
                };
                Self {
                    fields: Value::Object(fields),
                    content,
                }
            }
            other => Self {
                fields: other,
                content: None,
            },
        }
    }
}

// ============================================================================
// Snapshot Reader
// ============================================================================

/// Editor content exported to a single JSON file.
///
/// ```json
/// {
///   "singletons": { "hero": { "name": "..." } },
///   "collections": {
///     "posts": { "hello": { "title": "Hello", "content": "## Intro" } }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SnapshotReader {
    singletons: BTreeMap<String, Value>,
    collections: BTreeMap<String, BTreeMap<String, Value>>,
}

impl SnapshotReader {
    pub fn from_path(path: &Path) -> Result<Self, SnapshotError> {
        let raw =
            fs::read_to_string(path).map_err(|err| SnapshotError::Io(path.to_path_buf(), err))?;
        serde_json::from_str(&raw).map_err(|err| SnapshotError::Json(path.to_path_buf(), err))
    }

    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

impl ContentReader for SnapshotReader {
    fn singleton(&self, name: &str) -> Option<Value> {
        self.singletons.get(name).cloned()
    }

    fn list(&self, collection: &str) -> Vec<String> {
        self.collections
            .get(collection)
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self, collection: &str, id: &str) -> Option<ReaderEntry> {
        self.collections
            .get(collection)?
            .get(id)
            .cloned()
            .map(ReaderEntry::from_value)
    }
}

// ============================================================================
// Reader Store
// ============================================================================

/// [`RecordStore`] over any [`ContentReader`].
#[derive(Debug, Clone)]
pub struct ReaderStore<R> {
    reader: R,
}

impl<R: ContentReader> ReaderStore<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    fn singleton<T: DeserializeOwned>(&self, singleton: Singleton) -> Result<T, StoreError> {
        let name = singleton.name();
        let value = self
            .reader
            .singleton(name)
            .ok_or_else(|| StoreError::NotFound(name.to_owned()))?;
        decode(name, value)
    }

    fn entry(&self, collection: Collection, slug: &str) -> Result<ReaderEntry, StoreError> {
        self.reader
            .read(collection.name(), slug)
            .ok_or_else(|| StoreError::NotFound(format!("{collection}/{slug}")))
    }

    fn fields<T: DeserializeOwned>(&self, collection: Collection, slug: &str) -> Result<T, StoreError> {
        let entry = self.entry(collection, slug)?;
        decode(&format!("{collection}/{slug}"), entry.fields)
    }

    fn document(&self, slug: &str) -> Result<PostDocument, StoreError> {
        let entry = self.entry(Collection::Posts, slug)?;
        let front_matter: FrontMatter = decode(&format!("posts/{slug}"), entry.fields)?;
        let body = entry.content.as_deref().unwrap_or_default().trim().to_owned();
        Ok(front_matter.into_document(slug, body))
    }
}

impl<R: ContentReader> RecordStore for ReaderStore<R> {
    fn list(&self, collection: Collection) -> Vec<String> {
        self.reader.list(collection.name())
    }

    fn hero(&self) -> Option<HeroRecord> {
        found(self.singleton(Singleton::Hero))
    }

    fn about(&self) -> Option<AboutRecord> {
        found(self.singleton(Singleton::About))
    }

    fn experience(&self, slug: &str) -> Option<ExperienceEntry> {
        found(self.fields::<ExperienceEntry>(Collection::Experiences, slug))
            .map(|entry| entry.with_slug(slug))
    }

    fn project(&self, slug: &str) -> Option<ProjectEntry> {
        found(self.fields::<ProjectEntry>(Collection::Projects, slug))
            .map(|entry| entry.with_slug(slug))
    }

    fn post(&self, slug: &str) -> Option<PostDocument> {
        found(self.document(slug))
    }
}

/// Decode reader fields; a `null` entry reads as an empty record.
fn decode<T: DeserializeOwned>(label: &str, value: Value) -> Result<T, StoreError> {
    let value = match value {
        Value::Null => Value::Object(Map::new()),
        other => other,
    };
    serde_json::from_value(value).map_err(|err| StoreError::Json(label.to_owned(), err))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Category;
    use serde_json::json;
    use tempfile::TempDir;

    fn snapshot() -> SnapshotReader {
        SnapshotReader::from_value(json!({
            "singletons": {
                "hero": { "name": "Mina", "tagline": "Backing founders" },
                "about": { "name": "Mina", "journeyParagraphs": ["one"] }
            },
            "collections": {
                "experiences": {
                    "acme": { "role": "Partner", "sortOrder": 1 }
                },
                "projects": {
                    "orbit": { "title": "Orbit", "category": "product" },
                    "broken": { "category": "charity" }
                },
                "posts": {
                    "hello": {
                        "title": "Hello",
                        "date": "2024-01-15",
                        "tags": ["rust"],
                        "content": "\n## Intro\n\nSome words.\n"
                    },
                    "draft": { "published": false, "content": "wip" },
                    "empty": { "date": "2024-02-01" }
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_entry_splits_content() {
        let entry = ReaderEntry::from_value(json!({ "title": "T", "content": "Body" }));
        assert_eq!(entry.content.as_deref(), Some("Body"));
        assert_eq!(entry.fields, json!({ "title": "T" }));
    }

    #[test]
    fn test_snapshot_list_sorted() {
        let reader = snapshot();
        assert_eq!(reader.list("posts"), vec!["draft", "empty", "hello"]);
        assert!(reader.list("unknown").is_empty());
    }

    #[test]
    fn test_singletons() {
        let store = ReaderStore::new(snapshot());
        let hero = store.hero().unwrap();
        assert_eq!(hero.name, "Mina");
        assert_eq!(hero.eyebrow, "Venture Capitalist");
        assert_eq!(store.about().unwrap().journey_paragraphs, vec!["one"]);
    }

    #[test]
    fn test_missing_singleton() {
        let store = ReaderStore::new(SnapshotReader::default());
        assert_eq!(store.hero(), None);
    }

    #[test]
    fn test_collection_entries() {
        let store = ReaderStore::new(snapshot());
        let experience = store.experience("acme").unwrap();
        assert_eq!(experience.company, "acme");
        assert_eq!(experience.sort_order, 1);

        let project = store.project("orbit").unwrap();
        assert_eq!(project.category, Category::Product);
        assert_eq!(store.project("broken"), None);
        assert_eq!(store.project("missing"), None);
    }

    #[test]
    fn test_posts() {
        let store = ReaderStore::new(snapshot());

        let hello = store.post("hello").unwrap();
        assert_eq!(hello.meta.title, "Hello");
        assert_eq!(hello.content, "## Intro\n\nSome words.");
        assert_eq!(hello.meta.reading_time, 1);

        assert!(!store.post("draft").unwrap().meta.published);

        let empty = store.post("empty").unwrap();
        assert_eq!(empty.content, "");
        assert_eq!(empty.meta.reading_time, 0);
        assert_eq!(empty.meta.title, "empty");
    }

    #[test]
    fn test_matches_directory_store() {
        use crate::store::FsStore;

        let dir = TempDir::new().unwrap();
        let post_dir = dir.path().join("posts/hello");
        fs::create_dir_all(&post_dir).unwrap();
        fs::write(
            post_dir.join("index.mdoc"),
            "---\ntitle: Hello\ndate: 2024-01-15\ntags:\n  - rust\n---\n\n## Intro\n\nSome words.\n",
        )
        .unwrap();

        let from_files = FsStore::new(dir.path()).post("hello").unwrap();
        let from_reader = ReaderStore::new(snapshot()).post("hello").unwrap();
        assert_eq!(from_files, from_reader);
    }

    #[test]
    fn test_snapshot_from_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        fs::write(&path, r#"{"singletons": {"hero": {"name": "Mina"}}}"#).unwrap();

        let reader = SnapshotReader::from_path(&path).unwrap();
        assert!(reader.singleton("hero").is_some());
        assert!(reader.list("posts").is_empty());

        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            SnapshotReader::from_path(&path),
            Err(SnapshotError::Json(..))
        ));
        assert!(matches!(
            SnapshotReader::from_path(&dir.path().join("missing.json")),
            Err(SnapshotError::Io(..))
        ));
    }
}
