//! Tutorial page.

use academy_site::{Icon, Sidebar, Tutorial};
use maud::{Markup, PreEscaped, html};

use super::{Content, difficulty_badge};

/// Tutorial header, body, "On this page" list and previous/next links.
pub(crate) fn tutorial(tutorial: &Tutorial, sidebar: &Sidebar) -> Content {
    let meta = &tutorial.meta;
    let body = html! {
        article.tutorial {
            header.tutorial-header {
                div.tutorial-section { (meta.section) }
                h1 { (meta.title) }
                div.tutorial-meta {
                    (difficulty_badge(meta.difficulty))
                    span.duration { "Reading time: " (meta.duration) }
                }
            }
            div.tutorial-layout {
                div.prose { (PreEscaped(&tutorial.html)) }
                @if !tutorial.toc.is_empty() {
                    nav.toc aria-label="On this page" {
                        h2 { "On this page" }
                        ul {
                            @for entry in &tutorial.toc {
                                li { a href={ "#" (entry.id) } { (entry.title) } }
                            }
                        }
                    }
                }
            }
            (pager(tutorial, sidebar))
        }
    };

    Content {
        title: Some(meta.title.clone()),
        body,
    }
}

fn pager(tutorial: &Tutorial, sidebar: &Sidebar) -> Markup {
    html! {
        nav.pager aria-label="Tutorial navigation" {
            @if let Some(prev) = &tutorial.prev {
                a.pager-link.pager-prev href=(sidebar.href(&prev.path)) {
                    (Icon::ArrowLeft)
                    span.pager-label { "Previous" }
                    span.pager-title { (prev.title) }
                }
            } @else {
                span {}
            }
            @if let Some(next) = &tutorial.next {
                a.pager-link.pager-next href=(sidebar.href(&next.path)) {
                    span.pager-label { "Next" }
                    span.pager-title { (next.title) }
                    (Icon::ArrowRight)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use academy_site::Site;

    use super::*;

    #[test]
    fn test_tutorial_page() {
        let site = Site::embedded().unwrap();
        let page = site.catalog().tutorial("setup").unwrap();
        let content = tutorial(&page, &site.sidebar(None));
        let html = content.body.into_string();

        assert_eq!(content.title.as_deref(), Some(page.meta.title.as_str()));
        assert!(html.contains("<div class=\"tutorial-section\">Getting Started</div>"));
        assert!(html.contains("On this page"));
        assert!(html.contains("href=\"/tutorials/introduction\""));
        assert!(html.contains("href=\"/tutorials/github-basics\""));
        assert!(html.contains("class=\"code-block\""));
    }

    #[test]
    fn test_first_tutorial_has_no_previous() {
        let site = Site::embedded().unwrap();
        let page = site.catalog().tutorial("introduction").unwrap();
        let html = tutorial(&page, &site.sidebar(None)).body.into_string();
        assert!(!html.contains("pager-prev"));
        assert!(html.contains("pager-next"));
    }
}
