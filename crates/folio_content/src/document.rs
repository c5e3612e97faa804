//! Document parsing: front matter block plus Markdown body.
//!
//! ```markdown
//! ---
//! title: Hello
//! date: 2024-01-15
//! tags:
//!   - rust
//! published: true
//! ---
//!
//! Body starts here.
//! ```
//!
//! The block between the two `---` lines is decoded as YAML into
//! [`FrontMatter`]. Everything after the closing line is the body, trimmed.
//!
//! Hand-written front matter is not always valid YAML (`title: Rust: a
//! retrospective`). Such a block is read line by line instead: one
//! `key: value` line per scalar field, quotes stripped, and a block of
//! `- item` lines under `tags:`.

use crate::{
    de,
    derived::reading_time,
    error::StoreError,
    record::{PostDocument, PostEntry},
};
use serde::Deserialize;

/// Fence line that opens and closes the front matter block.
pub const DELIMITER: &str = "---";

// ============================================================================
// Splitting
// ============================================================================

/// A raw document split into its metadata block and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document<'a> {
    front_matter: Option<&'a str>,
    body: &'a str,
}

impl<'a> Document<'a> {
    /// Split raw text on the front matter fences.
    ///
    /// Without an opening fence, or with an opening fence that is never
    /// closed, the whole input (trimmed) is the body.
    pub fn parse(raw: &'a str) -> Self {
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

        let Some(rest) = after_opening_fence(raw) else {
            return Self::plain(raw);
        };

        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if line.trim_end() == DELIMITER {
                return Self {
                    front_matter: Some(&rest[..offset]),
                    body: rest[offset + line.len()..].trim(),
                };
            }
            offset += line.len();
        }

        Self::plain(raw)
    }

    fn plain(raw: &'a str) -> Self {
        Self {
            front_matter: None,
            body: raw.trim(),
        }
    }

    /// Raw YAML between the fences, if the document has a fenced block.
    pub fn front_matter(&self) -> Option<&'a str> {
        self.front_matter
    }

    pub fn has_front_matter(&self) -> bool {
        self.front_matter.is_some()
    }

    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Decode the metadata block. A document without one yields the defaults.
    ///
    /// `published` always follows the literal line value, so only `false`
    /// (optionally quoted) hides a post; YAML's `False` or `FALSE` do not.
    pub fn metadata(&self) -> FrontMatter {
        let Some(block) = self.front_matter.filter(|block| !block.trim().is_empty()) else {
            return FrontMatter::default();
        };

        match serde_yaml::from_str::<FrontMatter>(block) {
            Ok(mut meta) => {
                meta.published = is_published(block);
                meta
            }
            Err(err) => {
                log::debug!("front matter is not YAML ({err}), reading it line by line");
                FrontMatter::from_lines(block)
            }
        }
    }
}

/// Return the text after a first line consisting of the fence.
fn after_opening_fence(raw: &str) -> Option<&str> {
    let (first, rest) = match raw.find('\n') {
        Some(pos) => (&raw[..pos], &raw[pos + 1..]),
        None => (raw, ""),
    };
    (first.trim_end() == DELIMITER).then_some(rest)
}

// ============================================================================
// Line-Based Fields
// ============================================================================

/// Value of the first `key: value` line, surrounding quotes stripped.
///
/// The key must start the line; an empty value counts as absent.
fn line_value<'a>(block: &'a str, key: &str) -> Option<&'a str> {
    block.lines().find_map(|line| {
        let value = line.strip_prefix(key)?.strip_prefix(':')?.trim();
        let value = value.strip_prefix(['"', '\'']).unwrap_or(value);
        let value = value.strip_suffix(['"', '\'']).unwrap_or(value).trim();
        (!value.is_empty()).then_some(value)
    })
}

/// Items of the `- item` lines directly under a bare `tags:` line.
fn tag_block(block: &str) -> Vec<String> {
    block
        .lines()
        .skip_while(|line| line.trim_end() != "tags:")
        .skip(1)
        .map_while(|line| line.trim_start().strip_prefix('-'))
        .map(|item| item.trim().to_owned())
        .filter(|item| !item.is_empty())
        .collect()
}

fn is_published(block: &str) -> bool {
    line_value(block, "published") != Some("false")
}

// ============================================================================
// Post Metadata
// ============================================================================

/// Post metadata fields carried in front matter (or in an editor entry).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "de::text")]
    pub title: String,
    #[serde(deserialize_with = "de::text")]
    pub description: String,
    #[serde(deserialize_with = "de::text")]
    pub date: String,
    #[serde(deserialize_with = "de::list")]
    pub tags: Vec<String>,
    /// False only for a literal `false`.
    #[serde(deserialize_with = "de::flag")]
    pub published: bool,
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            date: String::new(),
            tags: Vec::new(),
            published: true,
        }
    }
}

impl FrontMatter {
    /// Read the fields one line at a time.
    fn from_lines(block: &str) -> Self {
        let field = |key| line_value(block, key).unwrap_or_default().to_owned();
        Self {
            title: field("title"),
            description: field("description"),
            date: field("date"),
            tags: tag_block(block),
            published: is_published(block),
        }
    }

    /// Combine with an identifier and body into a full post.
    ///
    /// An empty title falls back to the identifier.
    pub fn into_document(self, slug: &str, content: String) -> PostDocument {
        let title = if self.title.is_empty() {
            slug.to_owned()
        } else {
            self.title
        };

        PostDocument {
            meta: PostEntry {
                slug: slug.to_owned(),
                title,
                description: self.description,
                date: self.date.trim().to_owned(),
                tags: self.tags,
                published: self.published,
                reading_time: reading_time(&content),
            },
            content,
        }
    }
}

/// Parse a stored post document.
///
/// Unlike [`Document::metadata`], a document without a fenced block is
/// rejected here: a post file is expected to carry its metadata.
pub fn parse_post(slug: &str, raw: &str) -> Result<PostDocument, StoreError> {
    let document = Document::parse(raw);
    if !document.has_front_matter() {
        return Err(StoreError::MissingFrontMatter(slug.to_owned()));
    }

    Ok(document
        .metadata()
        .into_document(slug, document.body().to_owned()))
}

// ============================================================================
// Tests
// ============================================================================
