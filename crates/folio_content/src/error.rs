//! Error types for record lookups.
//!
//! These never reach callers of the facade: a store collapses every
//! [`StoreError`] into "not found" after logging it.

use std::path::PathBuf;
use thiserror::Error;

/// Why a single record could not be produced.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record `{0}` not found")]
    NotFound(String),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("malformed JSON record `{0}`")]
    Json(String, #[source] serde_json::Error),

    #[error("document `{0}` has no front matter")]
    MissingFrontMatter(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Failure to load an editor snapshot at start-up.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("snapshot `{0}` is not valid JSON")]
    Json(PathBuf, #[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Io(
            PathBuf::from("content/hero.json"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert!(format!("{err}").contains("content/hero.json"));
        assert!(!err.is_not_found());

        let err = StoreError::NotFound("posts/hello".into());
        assert!(format!("{err}").contains("posts/hello"));
        assert!(err.is_not_found());
    }
}
