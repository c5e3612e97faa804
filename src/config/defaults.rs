//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn locales() -> Vec<String> {
        vec!["ko".into(), "en".into()]
    }
}

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    use super::super::ContentSource;
    use std::path::PathBuf;

    pub fn dir() -> PathBuf {
        "content".into()
    }

    pub fn source() -> ContentSource {
        ContentSource::default()
    }

    pub fn snapshot() -> PathBuf {
        "content.json".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn data() -> PathBuf {
        "_data".into()
    }

    pub mod sitemap {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "sitemap.xml".into()
        }
    }

    pub mod posts {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "writing".into()
        }
    }
}
