//! Markdown to HTML conversion for tutorial bodies.
//!
//! Fenced code blocks are replaced by the [`CodeBlock`](crate::CodeBlock)
//! component. Headings get unique anchor ids and level-2 headings feed the
//! "On this page" list.

use std::collections::HashMap;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use serde::Serialize;

use crate::code_block::render_fenced;

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Heading text.
    pub title: String,
    /// Anchor id for linking.
    pub id: String,
}

/// Result of rendering markdown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedMarkdown {
    /// HTML fragment.
    pub html: String,
    /// Level-2 headings in document order.
    pub toc: Vec<TocEntry>,
}

struct PendingHeading<'a> {
    level: HeadingLevel,
    text: String,
    events: Vec<Event<'a>>,
}

/// Render markdown to HTML.
#[must_use]
pub fn render_markdown(markdown: &str) -> RenderedMarkdown {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options);

    let mut events: Vec<Event<'_>> = Vec::new();
    let mut toc = Vec::new();
    let mut id_counts: HashMap<String, usize> = HashMap::new();
    let mut code: Option<(String, String)> = None;
    let mut heading: Option<PendingHeading<'_>> = None;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let info = match kind {
                    CodeBlockKind::Fenced(info) => info.into_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                code = Some((info, String::new()));
            }
            Event::Text(text) if code.is_some() => {
                if let Some((_, buf)) = code.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((info, buf)) = code.take() {
                    let html = render_fenced(&info, &buf).into_string();
                    events.push(Event::Html(CowStr::from(html)));
                }
            }
            Event::Start(Tag::Heading { level, .. }) => {
                heading = Some(PendingHeading {
                    level,
                    text: String::new(),
                    events: Vec::new(),
                });
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(pending) = heading.take() {
                    let id = unique_id(&mut id_counts, &pending.text);
                    if pending.level == HeadingLevel::H2 {
                        toc.push(TocEntry {
                            title: pending.text.trim().to_owned(),
                            id: id.clone(),
                        });
                    }
                    events.push(Event::Start(Tag::Heading {
                        level: pending.level,
                        id: Some(CowStr::from(id)),
                        classes: Vec::new(),
                        attrs: Vec::new(),
                    }));
                    events.extend(pending.events);
                    events.push(Event::End(TagEnd::Heading(pending.level)));
                }
            }
            other => {
                if let Some(pending) = heading.as_mut() {
                    if let Event::Text(text) | Event::Code(text) = &other {
                        pending.text.push_str(text);
                    }
                    pending.events.push(other);
                } else {
                    events.push(other);
                }
            }
        }
    }

    let mut html = String::with_capacity(markdown.len() * 2);
    pulldown_cmark::html::push_html(&mut html, events.into_iter());

    RenderedMarkdown { html, toc }
}

fn unique_id(counts: &mut HashMap<String, usize>, text: &str) -> String {
    let base = slugify(text);
    let count = counts.entry(base.clone()).or_default();
    let id = match *count {
        0 => base,
        n => format!("{base}-{n}"),
    };
    *count += 1;
    id
}

/// Convert text to URL-safe slug.
///
/// Lowercases, collapses whitespace, dashes and underscores into single
/// dashes, and drops other non-alphanumeric characters.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true;

    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}
