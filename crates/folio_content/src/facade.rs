//! The content facade: one entry point for every consumer.

use crate::{
    derived::{self, sort_by_order, sort_newest_first},
    error::SnapshotError,
    record::{
        AboutRecord, Adjacent, Collection, ExperienceEntry, HeroRecord, PostDocument, PostEntry,
        ProjectEntry, TocItem,
    },
    render::{Highlighter, PlainText, RenderedDocument, render_html},
    store::{ContentReader, FsStore, ReaderStore, RecordStore, SnapshotReader},
    toc,
};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Typed, ordered, publication-filtered access to site content.
///
/// The backing store is fixed at construction.
pub struct Content {
    store: Box<dyn RecordStore>,
    highlighter: Box<dyn Highlighter>,
}

impl Content {
    pub fn new(store: impl RecordStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            highlighter: Box::new(PlainText),
        }
    }

    /// Read from a content directory.
    pub fn from_files(dir: impl Into<PathBuf>) -> Self {
        Self::new(FsStore::new(dir))
    }

    /// Read through an editor reader.
    pub fn from_reader(reader: impl ContentReader + 'static) -> Self {
        Self::new(ReaderStore::new(reader))
    }

    /// Read from an editor snapshot file.
    pub fn from_snapshot(path: &Path) -> Result<Self, SnapshotError> {
        SnapshotReader::from_path(path).map(Self::from_reader)
    }

    pub fn with_highlighter(mut self, highlighter: impl Highlighter + 'static) -> Self {
        self.highlighter = Box::new(highlighter);
        self
    }

    // ========================================================================
    // Singletons
    // ========================================================================

    pub fn hero(&self) -> HeroRecord {
        self.store.hero().unwrap_or_default()
    }

    pub fn about(&self) -> AboutRecord {
        self.store.about().unwrap_or_default()
    }

    // ========================================================================
    // Collections
    // ========================================================================

    /// Experience timeline, ascending `sortOrder`.
    pub fn experiences(&self) -> Vec<ExperienceEntry> {
        let mut entries = self.fan_out(Collection::Experiences, |slug| self.store.experience(slug));
        sort_by_order(&mut entries);
        entries
    }

    /// Projects, ascending `sortOrder`.
    pub fn projects(&self) -> Vec<ProjectEntry> {
        let mut entries = self.fan_out(Collection::Projects, |slug| self.store.project(slug));
        sort_by_order(&mut entries);
        entries
    }

    /// Published posts, newest first.
    pub fn all_posts(&self) -> Vec<PostEntry> {
        let mut posts = self.fan_out(Collection::Posts, |slug| {
            self.store
                .post(slug)
                .filter(|post| post.meta.published)
                .map(|post| post.meta)
        });
        sort_newest_first(&mut posts);
        posts
    }

    /// A published post. Unpublished and missing posts are both `None`.
    pub fn post_by_slug(&self, slug: &str) -> Option<PostDocument> {
        self.store.post(slug).filter(|post| post.meta.published)
    }

    pub fn all_tags(&self) -> Vec<String> {
        derived::tag_universe(&self.all_posts())
    }

    pub fn adjacent_posts(&self, slug: &str) -> Adjacent {
        derived::adjacent(&self.all_posts(), slug)
    }

    pub fn posts_by_tag(&self, tag: &str) -> Vec<PostEntry> {
        derived::filter_by_tag(&self.all_posts(), tag)
    }

    pub fn search_posts(&self, query: &str) -> Vec<PostEntry> {
        derived::search(&self.all_posts(), query)
    }

    // ========================================================================
    // Documents
    // ========================================================================

    pub fn table_of_contents(&self, body: &str) -> Vec<TocItem> {
        toc::table_of_contents(body)
    }

    pub fn render(&self, body: &str) -> RenderedDocument {
        RenderedDocument {
            html: render_html(body, self.highlighter.as_ref()),
            toc: toc::table_of_contents(body),
        }
    }

    /// Look up every entry of `collection` independently, keeping discovery
    /// order and dropping the ones that come back empty.
    fn fan_out<T, F>(&self, collection: Collection, lookup: F) -> Vec<T>
    where
        T: Send,
        F: Fn(&str) -> Option<T> + Sync,
    {
        self.store
            .list(collection)
            .par_iter()
            .filter_map(|slug| lookup(slug.as_str()))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
