//! Content access layer for a portfolio and blog site.
//!
//! # Pipeline
//!
//! ```text
//! content tree / editor snapshot
//!         │
//!         ▼
//!   RecordStore (FsStore | ReaderStore)   ← document: front matter + body
//!         │
//!         ▼
//!   derived views, table of contents, rendering
//!         │
//!         ▼
//!      Content (facade)
//! ```
//!
//! Reads are fail-open: a record that is absent or malformed is logged and
//! left out of listings, and a singleton falls back to its default.
//!
//! ```no_run
//! use folio_content::Content;
//!
//! let content = Content::from_files("content");
//! for post in content.all_posts() {
//!     println!("{} ({} min)", post.title, post.reading_time);
//! }
//! ```

mod de;
pub mod derived;
pub mod document;
pub mod error;
mod facade;
pub mod record;
pub mod render;
pub mod store;
pub mod toc;

pub use document::{Document, FrontMatter, parse_post};
pub use error::{SnapshotError, StoreError};
pub use facade::Content;
pub use record::{
    AboutRecord, Adjacent, Category, Collection, ExperienceEntry, HeroRecord, PostDocument,
    PostEntry, ProjectEntry, Singleton, SkillGroup, SocialLink, Stat, Status, TocItem,
};
pub use render::{Highlighter, PlainText, RenderedDocument, escape_html, render_html};
pub use store::{ContentReader, FsStore, ReaderEntry, ReaderStore, RecordStore, SnapshotReader};
pub use toc::{slugify, table_of_contents};
