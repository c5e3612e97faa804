//! Views computed from records rather than stored in them.
//!
//! | View            | Input             | Output                         |
//! |-----------------|-------------------|--------------------------------|
//! | reading time    | post body         | minutes, `ceil(words / 200)`   |
//! | publication     | posts             | published posts only           |
//! | chronological   | posts             | newest first, undated last     |
//! | sort order      | experiences, etc. | ascending `sortOrder`, stable  |
//! | adjacency       | sorted posts      | older (`prev`) / newer (`next`)|
//! | tag universe    | sorted posts      | distinct tags, sorted          |

use crate::record::{Adjacent, ExperienceEntry, PostEntry, ProjectEntry};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::{cmp::Reverse, collections::BTreeSet};

/// Fixed reading speed used for estimates.
pub const WORDS_PER_MINUTE: usize = 200;

// ============================================================================
// Reading Time
// ============================================================================

/// Count whitespace-separated tokens.
#[inline]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Minutes needed to read `text`, rounded up. An empty text reads in 0.
pub fn reading_time(text: &str) -> u32 {
    word_count(text).div_ceil(WORDS_PER_MINUTE) as u32
}

// ============================================================================
// Ordering
// ============================================================================

/// Local date-time layouts accepted besides a bare day and RFC 3339.
/// `%.f` also matches no fraction at all.
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a post date into a comparable instant.
///
/// Accepts `YYYY-MM-DD`, RFC 3339, and `YYYY-MM-DD[T ]HH:MM:SS[.fff]`
/// without offset.
pub fn parse_date(date: &str) -> Option<NaiveDateTime> {
    let date = date.trim();
    if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return day.and_hms_opt(0, 0, 0);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(date) {
        return Some(instant.naive_utc());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(date, format).ok())
}

/// Sort posts newest first.
///
/// Posts without a parseable date go last. Ties keep their input order.
pub fn sort_newest_first(posts: &mut [PostEntry]) {
    posts.sort_by_cached_key(|post| Reverse(parse_date(&post.date)));
}

/// Entries ordered by an explicit integer key.
pub trait SortOrder {
    fn sort_order(&self) -> i64;
}

impl SortOrder for ExperienceEntry {
    fn sort_order(&self) -> i64 {
        self.sort_order
    }
}

impl SortOrder for ProjectEntry {
    fn sort_order(&self) -> i64 {
        self.sort_order
    }
}

/// Stable ascending sort by `sortOrder`.
pub fn sort_by_order<T: SortOrder>(entries: &mut [T]) {
    entries.sort_by_key(|entry| entry.sort_order());
}

// ============================================================================
// Post Views
// ============================================================================

/// Previous (older) and next (newer) neighbours of `slug`.
///
/// `posts` must already be sorted newest first. An unknown slug has no
/// neighbours.
pub fn adjacent(posts: &[PostEntry], slug: &str) -> Adjacent {
    let Some(index) = posts.iter().position(|post| post.slug == slug) else {
        return Adjacent::default();
    };

    Adjacent {
        prev: posts.get(index + 1).cloned(),
        next: index.checked_sub(1).and_then(|i| posts.get(i)).cloned(),
    }
}

/// Distinct tags across `posts`, case-sensitive, sorted.
pub fn tag_universe(posts: &[PostEntry]) -> Vec<String> {
    posts
        .iter()
        .flat_map(|post| post.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Posts carrying `tag`, compared case-insensitively.
pub fn filter_by_tag(posts: &[PostEntry], tag: &str) -> Vec<PostEntry> {
    let tag = tag.to_lowercase();
    posts
        .iter()
        .filter(|post| post.tags.iter().any(|t| t.to_lowercase() == tag))
        .cloned()
        .collect()
}

/// Posts whose title, description or tags contain `query` (case-insensitive).
pub fn search(posts: &[PostEntry], query: &str) -> Vec<PostEntry> {
    let query = query.to_lowercase();
    let matches = |text: &str| text.to_lowercase().contains(&query);

    posts
        .iter()
        .filter(|post| {
            matches(&post.title)
                || matches(&post.description)
                || post.tags.iter().any(|tag| matches(tag))
        })
        .cloned()
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
