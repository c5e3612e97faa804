//! Heading extraction and anchor slugs.
//!
//! [`slugify`] is the single source of heading identifiers: the table of
//! contents and the rendered `id` attributes both go through it, so every
//! TOC link resolves to an anchor in the page.

use crate::record::TocItem;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use regex::Regex;
use std::sync::LazyLock;

/// Characters other than ASCII lowercase letters, digits, Unicode letters,
/// whitespace and hyphens.
static FORBIDDEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\p{L}\s-]").expect("valid slug pattern"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

static HYPHENS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("valid hyphen pattern"));

/// Markdown extensions enabled for every parse of a post body.
pub(crate) fn markdown_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
}

// ============================================================================
// Slugification
// ============================================================================

/// Convert heading text into a URL fragment.
///
/// Lowercases, drops punctuation and symbols (letters of any script are
/// kept), turns whitespace runs into `-`, collapses repeated hyphens and
/// trims hyphens from both ends. Idempotent.
///
/// | Input                 | Output             |
/// |-----------------------|--------------------|
/// | `Hello, World!`       | `hello-world`      |
/// | `  Rust -- 2024  `    | `rust-2024`        |
/// | `투자 철학`           | `투자-철학`        |
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let kept = FORBIDDEN.replace_all(&lower, "");
    let hyphenated = WHITESPACE.replace_all(&kept, "-");
    let collapsed = HYPHENS.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_owned()
}

// ============================================================================
// Table of Contents
// ============================================================================

/// Map a heading level to a TOC depth. Only levels 2 and 3 are listed.
pub(crate) fn toc_depth(level: HeadingLevel) -> Option<u8> {
    match level {
        HeadingLevel::H2 => Some(2),
        HeadingLevel::H3 => Some(3),
        _ => None,
    }
}

/// List the level 2 and 3 headings of a Markdown body in document order.
///
/// Heading text is plain text: emphasis, links and code spans are reduced to
/// their content.
pub fn table_of_contents(body: &str) -> Vec<TocItem> {
    let mut items = Vec::new();
    let mut current: Option<(u8, String)> = None;

    for event in Parser::new_ext(body, markdown_options()) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = toc_depth(level).map(|depth| (depth, String::new()));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text)) = current.take() {
                    let title = text.trim().to_owned();
                    items.push(TocItem {
                        id: slugify(&title),
                        title,
                        level,
                    });
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push(' ');
                }
            }
            _ => {}
        }
    }

    items
}

// ============================================================================
// Tests
// ============================================================================
