//! Post page rendering.
//!
//! Each published post becomes `<output>/<posts.path>/<slug>/index.html`:
//!
//! ```text
//! <article>
//!   <header>  title, date, reading time, tags
//!   <nav.toc> level 2/3 headings
//!   <div.content> rendered body
//!   <nav.post-nav> older / newer post
//! </article>
//! ```

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use folio_content::{Adjacent, Content, PostDocument, PostEntry, RenderedDocument, derived, escape_html};
use rayon::prelude::*;
use std::{
    fmt::Write as _,
    fs,
    path::{Component, Path},
};

/// Render and write every post of `posts` (already filtered and sorted).
///
/// Returns the number of pages written.
pub fn write_posts(config: &SiteConfig, content: &Content, posts: &[PostEntry]) -> Result<usize> {
    let posts_dir = config.posts_dir();

    let written: Vec<bool> = posts
        .par_iter()
        .map(|entry| {
            if !is_single_component(&entry.slug) {
                log!("warn"; "skipping post with unsafe slug `{}`", entry.slug);
                return Ok(false);
            }
            // Posts can disappear between listing and lookup.
            let Some(post) = content.post_by_slug(&entry.slug) else {
                return Ok(false);
            };

            let rendered = content.render(&post.content);
            let adjacent = derived::adjacent(posts, &entry.slug);
            let html = render_post_page(config, &post, &rendered, &adjacent);

            let dir = posts_dir.join(&entry.slug);
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
            let path = dir.join("index.html");
            fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
            Ok(true)
        })
        .collect::<Result<_>>()?;

    let count = written.into_iter().filter(|ok| *ok).count();
    log!("posts"; "{} pages", count);
    Ok(count)
}

/// A slug usable as one directory name.
fn is_single_component(slug: &str) -> bool {
    let mut components = Path::new(slug).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

// ============================================================================
// HTML
// ============================================================================

/// Full HTML document for one post.
pub fn render_post_page(
    config: &SiteConfig,
    post: &PostDocument,
    rendered: &RenderedDocument,
    adjacent: &Adjacent,
) -> String {
    let meta = &post.meta;
    let title = if config.base.title.is_empty() {
        escape_html(&meta.title)
    } else {
        format!("{} | {}", escape_html(&meta.title), escape_html(&config.base.title))
    };

    let mut html = String::with_capacity(rendered.html.len() + 2048);
    html.push_str("<!DOCTYPE html>\n");
    let _ = writeln!(html, "<html lang=\"{}\">", escape_html(config.base.primary_locale()));
    html.push_str("<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{title}</title>");
    if !meta.description.is_empty() {
        let _ = writeln!(
            html,
            "<meta name=\"description\" content=\"{}\">",
            escape_html(&meta.description)
        );
    }
    html.push_str("</head>\n<body>\n<article>\n");

    push_header(&mut html, meta);
    push_toc(&mut html, rendered);
    let _ = writeln!(html, "<div class=\"content\">\n{}</div>", rendered.html);
    push_post_nav(&mut html, adjacent);

    html.push_str("</article>\n</body>\n</html>\n");
    html
}

fn push_header(html: &mut String, meta: &PostEntry) {
    html.push_str("<header>\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape_html(&meta.title));
    if !meta.date.is_empty() {
        let _ = writeln!(
            html,
            "<time datetime=\"{0}\">{0}</time>",
            escape_html(&meta.date)
        );
    }
    let _ = writeln!(html, "<span class=\"reading-time\">{} min read</span>", meta.reading_time);
    if !meta.tags.is_empty() {
        html.push_str("<ul class=\"tags\">\n");
        for tag in &meta.tags {
            let _ = writeln!(html, "<li>{}</li>", escape_html(tag));
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</header>\n");
}

fn push_toc(html: &mut String, rendered: &RenderedDocument) {
    if rendered.toc.is_empty() {
        return;
    }
    html.push_str("<nav class=\"toc\">\n<ol>\n");
    for item in &rendered.toc {
        let _ = writeln!(
            html,
            "<li class=\"toc-level-{}\"><a href=\"#{}\">{}</a></li>",
            item.level,
            escape_html(&item.id),
            escape_html(&item.title)
        );
    }
    html.push_str("</ol>\n</nav>\n");
}

fn push_post_nav(html: &mut String, adjacent: &Adjacent) {
    if adjacent.prev.is_none() && adjacent.next.is_none() {
        return;
    }
    html.push_str("<nav class=\"post-nav\">\n");
    for (rel, post) in [("prev", &adjacent.prev), ("next", &adjacent.next)] {
        if let Some(post) = post {
            let _ = writeln!(
                html,
                "<a rel=\"{rel}\" href=\"../{}/\">{}</a>",
                urlencoding::encode(&post.slug),
                escape_html(&post.title)
            );
        }
    }
    html.push_str("</nav>\n");
}

// ============================================================================
// Tests
// ============================================================================
