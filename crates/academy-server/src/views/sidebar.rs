//! Learning path sidebar.

use academy_site::{Icon, SidebarView};
use maud::{Markup, html};

/// Render the sidebar.
///
/// Section headers are links to the same page with that section flipped, so
/// toggling works without a script. Collapsed sections keep their items in
/// the markup (hidden) so the script can expand them in place.
pub(crate) fn sidebar(view: &SidebarView) -> Markup {
    html! {
        aside.sidebar {
            div.sidebar-title {
                (Icon::Lightbulb)
                span { (view.title) }
            }
            nav.sidebar-nav aria-label=(view.title) {
                @for section in &view.sections {
                    div.sidebar-section.expanded[section.expanded] data-section=(section.id) {
                        a.sidebar-toggle href=(section.toggle_href)
                            aria-expanded=(section.expanded) {
                            span.sidebar-section-label {
                                (section.icon)
                                span { (section.title) }
                            }
                            span.chevron-open { (Icon::ChevronDown) }
                            span.chevron-closed { (Icon::ChevronRight) }
                        }
                        ul.sidebar-items hidden[!section.expanded] {
                            @for item in &section.items {
                                li {
                                    a.sidebar-link.active[item.active] href=(item.href)
                                        data-path=(item.path)
                                        aria-current=[item.active.then_some("page")] {
                                        (item.title)
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use academy_site::{Navigation, Sidebar};

    use super::*;

    const NAV: &str = "title: Learning Path
sections:
  - id: start
    title: Getting Started
    icon: book-open
    expanded: true
    items:
      - { title: Introduction, path: /tutorials/introduction }
      - { title: Setup, path: /tutorials/setup }
  - id: basics
    title: Basics
    icon: code
    items:
      - { title: Syntax, path: /tutorials/basic-syntax }
  - id: empty
    title: Empty
    icon: zap
";

    fn render(nav: Option<&str>, path: &str) -> String {
        let navigation = Arc::new(Navigation::from_yaml(NAV).unwrap());
        let sidebar = Sidebar::from_query(navigation, nav);
        super::sidebar(&sidebar.view(path)).into_string()
    }

    #[test]
    fn test_default_state() {
        let html = render(None, "/tutorials/introduction");
        assert!(html.contains("<div class=\"sidebar-section expanded\" data-section=\"start\">"));
        assert!(html.contains("<div class=\"sidebar-section\" data-section=\"basics\">"));
        assert!(html.contains("class=\"sidebar-link active\" href=\"/tutorials/introduction\""));
        assert!(html.contains("aria-current=\"page\""));
        assert_eq!(html.matches("aria-current").count(), 1);
    }

    #[test]
    fn test_toggle_links_flip_one_section() {
        let html = render(None, "/tutorials/setup");
        // Collapsing "start" leaves nothing expanded
        assert!(html.contains("href=\"/tutorials/setup?nav=\""));
        // Expanding "basics" keeps "start" open
        assert!(html.contains("href=\"/tutorials/setup?nav=start,basics\""));
    }

    #[test]
    fn test_items_carry_state() {
        let html = render(Some("basics"), "/");
        assert!(html.contains("href=\"/tutorials/basic-syntax?nav=basics\""));
        assert!(html.contains("<ul class=\"sidebar-items\" hidden>"));
        assert!(!html.contains("active"));
    }

    #[test]
    fn test_empty_section_renders() {
        let html = render(Some("empty"), "/");
        assert!(html.contains("data-section=\"empty\""));
        assert!(html.contains("<span>Empty</span>"));
    }
}
