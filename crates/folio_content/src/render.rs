//! Markdown to HTML rendering for post bodies.
//!
//! Extends the stock pulldown-cmark output with:
//!
//! - `id` attributes and a trailing `#` anchor on level 2 and 3 headings,
//!   using the same [`slugify`] as the table of contents
//! - a [`Highlighter`] hook for fenced code blocks
//! - `target="_blank"` on links to external sites

use crate::{
    record::TocItem,
    toc::{markdown_options, slugify, toc_depth},
};
use pulldown_cmark::{CodeBlockKind, CowStr, Event, LinkType, Parser, Tag, TagEnd, html};
use pulldown_cmark_escape::escape_href;
use serde::Serialize;

// ============================================================================
// Highlighting Hook
// ============================================================================

/// Syntax highlighting for fenced code blocks.
pub trait Highlighter: Send + Sync {
    /// Return the HTML to place inside `<code>`, or `None` to fall back to
    /// escaped plain text.
    fn highlight(&self, lang: &str, code: &str) -> Option<String>;
}

/// Leaves every code block as escaped plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl Highlighter for PlainText {
    fn highlight(&self, _lang: &str, _code: &str) -> Option<String> {
        None
    }
}

/// A rendered post body together with its outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub html: String,
    pub toc: Vec<TocItem>,
}

// ============================================================================
// Rendering
// ============================================================================

/// Render a Markdown body to HTML.
pub fn render_html(body: &str, highlighter: &dyn Highlighter) -> String {
    let mut renderer = Renderer::new(highlighter);
    for event in Parser::new_ext(body, markdown_options()) {
        renderer.feed(event);
    }

    let mut out = String::with_capacity(body.len() * 3 / 2);
    html::push_html(&mut out, renderer.events.into_iter());
    out
}

/// Heading being buffered until its text (and so its slug) is known.
struct PendingHeading<'a> {
    depth: u8,
    text: String,
    inner: Vec<Event<'a>>,
}

/// Fenced or indented code block being buffered for the highlighter.
struct PendingCode {
    lang: String,
    source: String,
}

struct Renderer<'a, 'h> {
    highlighter: &'h dyn Highlighter,
    events: Vec<Event<'a>>,
    heading: Option<PendingHeading<'a>>,
    code: Option<PendingCode>,
}

impl<'a, 'h> Renderer<'a, 'h> {
    fn new(highlighter: &'h dyn Highlighter) -> Self {
        Self {
            highlighter,
            events: Vec::new(),
            heading: None,
            code: None,
        }
    }

    fn feed(&mut self, event: Event<'a>) {
        if let Some(code) = self.code.as_mut() {
            match event {
                Event::Text(text) => code.source.push_str(&text),
                Event::End(TagEnd::CodeBlock) => {
                    if let Some(code) = self.code.take() {
                        let html = self.code_block(&code);
                        self.events.push(Event::Html(html.into()));
                    }
                }
                _ => {}
            }
            return;
        }

        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => {
                        info.split_whitespace().next().unwrap_or_default().to_owned()
                    }
                    CodeBlockKind::Indented => String::new(),
                };
                self.code = Some(PendingCode {
                    lang,
                    source: String::new(),
                });
            }
            Event::Start(Tag::Heading { level, .. }) if toc_depth(level).is_some() => {
                self.heading = toc_depth(level).map(|depth| PendingHeading {
                    depth,
                    text: String::new(),
                    inner: Vec::new(),
                });
            }
            Event::End(TagEnd::Heading(_)) if self.heading.is_some() => {
                if let Some(heading) = self.heading.take() {
                    self.close_heading(heading);
                }
            }
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                ..
            }) => {
                self.emit(Event::InlineHtml(open_link(link_type, &dest_url, &title).into()));
            }
            Event::End(TagEnd::Link) => self.emit(Event::InlineHtml(CowStr::Borrowed("</a>"))),
            other => self.emit(other),
        }
    }

    /// Route an event into the pending heading, if any, or the output.
    fn emit(&mut self, event: Event<'a>) {
        let Some(heading) = self.heading.as_mut() else {
            self.events.push(event);
            return;
        };

        match &event {
            Event::Text(text) | Event::Code(text) => heading.text.push_str(text),
            Event::SoftBreak | Event::HardBreak => heading.text.push(' '),
            _ => {}
        }
        heading.inner.push(event);
    }

    fn close_heading(&mut self, heading: PendingHeading<'a>) {
        let tag = format!("h{}", heading.depth);
        let id = escape_html(&slugify(heading.text.trim()));

        self.events
            .push(Event::Html(format!("<{tag} id=\"{id}\">").into()));
        self.events.extend(heading.inner);
        self.events.push(Event::Html(
            format!("<a class=\"anchor\" href=\"#{id}\" aria-hidden=\"true\">#</a></{tag}>\n").into(),
        ));
    }

    fn code_block(&self, code: &PendingCode) -> String {
        let body = self
            .highlighter
            .highlight(&code.lang, &code.source)
            .unwrap_or_else(|| escape_html(&code.source));

        if code.lang.is_empty() {
            format!("<pre><code>{body}</code></pre>\n")
        } else {
            format!(
                "<pre><code class=\"language-{}\">{body}</code></pre>\n",
                escape_html(&code.lang)
            )
        }
    }
}

/// Opening `<a>` tag; external destinations open in a new tab.
fn open_link(link_type: LinkType, dest: &str, title: &str) -> String {
    let mut tag = String::from("<a href=\"");
    if link_type == LinkType::Email {
        tag.push_str("mailto:");
    }
    // Writing into a String cannot fail.
    let _ = escape_href(&mut tag, dest);
    tag.push('"');
    if !title.is_empty() {
        tag.push_str(&format!(" title=\"{}\"", escape_html(title)));
    }
    if dest.starts_with("http") {
        tag.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
    }
    tag.push('>');
    tag
}

/// Escape characters that are special in HTML text and attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ============================================================================
// Tests
// ============================================================================
