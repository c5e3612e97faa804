//! Record stores: where content records come from.
//!
//! # Backings
//!
//! | Store           | Source                                            |
//! |-----------------|---------------------------------------------------|
//! | [`FsStore`]     | content directory (`hero.json`, `posts/<id>/...`) |
//! | [`ReaderStore`] | a [`ContentReader`] such as the editor snapshot   |
//!
//! A store answers typed lookups and never fails: an absent record and a
//! malformed one both come back as `None`, after being logged once here.

mod fs;
mod reader;

pub use fs::FsStore;
pub use reader::{ContentReader, ReaderEntry, ReaderStore, SnapshotReader};

use crate::{
    error::StoreError,
    record::{AboutRecord, Collection, ExperienceEntry, HeroRecord, PostDocument, ProjectEntry},
};

/// Typed access to every content record.
pub trait RecordStore: Send + Sync {
    /// Identifiers present in `collection`, in discovery order.
    fn list(&self, collection: Collection) -> Vec<String>;

    fn hero(&self) -> Option<HeroRecord>;

    fn about(&self) -> Option<AboutRecord>;

    fn experience(&self, slug: &str) -> Option<ExperienceEntry>;

    fn project(&self, slug: &str) -> Option<ProjectEntry>;

    /// A post regardless of its `published` flag. Filtering is the facade's job.
    fn post(&self, slug: &str) -> Option<PostDocument>;
}

/// Collapse a lookup result to "found or not", logging why it was not.
pub(crate) fn found<T>(result: Result<T, StoreError>) -> Option<T> {
    match result {
        Ok(record) => Some(record),
        Err(err) if err.is_not_found() => {
            log::debug!("{err}");
            None
        }
        Err(err) => {
            log::warn!("skipping record: {}", error_chain(&err));
            None
        }
    }
}

/// Render an error with its sources, `outer: inner: ...`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_found_passes_records_through() {
        assert_eq!(found::<u8>(Ok(7)), Some(7));
    }

    #[test]
    fn test_found_collapses_errors() {
        assert_eq!(found::<u8>(Err(StoreError::NotFound("x".into()))), None);
        let io = std::io::Error::other("disk on fire");
        assert_eq!(found::<u8>(Err(StoreError::Io(PathBuf::from("x"), io))), None);
    }

    #[test]
    fn test_error_chain_includes_source() {
        let io = std::io::Error::other("disk on fire");
        let err = StoreError::Io(PathBuf::from("hero.json"), io);
        let message = error_chain(&err);
        assert!(message.contains("hero.json"));
        assert!(message.contains("disk on fire"));
    }
}
