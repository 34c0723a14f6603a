//! HTML views.
//!
//! The shell (header, sidebar, content slot, footer) is the same on every
//! route; only the content slot varies.

mod home;
mod playground;
mod resources;
mod sidebar;
mod status;
mod tutorial;

use academy_site::{Icon, Sidebar};
use chrono::Datelike;
use maud::{DOCTYPE, Markup, html};

pub(crate) use home::{home, projects};
pub(crate) use playground::playground;
pub(crate) use resources::resources;
pub(crate) use status::{error_panel, not_found};
pub(crate) use tutorial::tutorial;

/// Site-wide chrome settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    /// Brand name in the header and document title.
    pub title: String,
    /// Repository linked from the header.
    pub repository_url: String,
}

/// Content slot output.
pub(crate) struct Content {
    /// Page title for the document `<title>`, `None` for the bare site title.
    pub(crate) title: Option<String>,
    pub(crate) body: Markup,
}

/// Header links, in display order.
const NAV_LINKS: [(&str, &str); 4] = [
    ("Tutorials", "/tutorials/introduction"),
    ("Projects", "/projects"),
    ("Playground", "/playground"),
    ("Resources", "/resources"),
];

/// Wrap a content slot in the full page shell.
pub(crate) fn shell(
    config: &ShellConfig,
    sidebar: &Sidebar,
    current_path: &str,
    content: Content,
) -> Markup {
    let document_title = match &content.title {
        Some(title) => format!("{title} | {}", config.title),
        None => config.title.clone(),
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (document_title) }
                link rel="icon" type="image/svg+xml" href=(academy_assets::url("favicon.svg"));
                link rel="stylesheet" href=(academy_assets::url(academy_assets::STYLESHEET));
                script src=(academy_assets::url(academy_assets::SCRIPT)) defer {}
            }
            body {
                div.app {
                    (navbar(config, sidebar))
                    div.layout {
                        (sidebar::sidebar(&sidebar.view(current_path)))
                        main.content id="content" {
                            div.content-inner { (content.body) }
                        }
                    }
                    (footer())
                }
            }
        }
    }
}

fn navbar(config: &ShellConfig, sidebar: &Sidebar) -> Markup {
    let links = html! {
        @for (label, path) in NAV_LINKS {
            a.nav-link href=(sidebar.href(path)) { (label) }
        }
        a.nav-github href=(config.repository_url) target="_blank" rel="noopener noreferrer" {
            (Icon::Github) "GitHub"
        }
    };

    html! {
        header.navbar {
            div.navbar-inner {
                a.brand href=(sidebar.href("/")) {
                    (Icon::Code)
                    span.brand-name { (config.title) }
                }
                nav.navbar-links aria-label="Main" { (links) }
                details.mobile-menu {
                    summary aria-label="Toggle menu" { (Icon::Menu) }
                    nav.mobile-links aria-label="Main" { (links) }
                }
            }
        }
    }
}

fn footer() -> Markup {
    let year = chrono::Utc::now().year();
    html! {
        footer.footer {
            div.footer-inner {
                p.copyright {
                    "© " (year) " "
                    a href="https://mirror.xyz/donkadonk.eth" target="_blank" rel="noopener noreferrer" { "Tin Erispe" }
                    ". All rights reserved."
                }
                div.footer-links {
                    a href="https://github.com/0xdanki" target="_blank" rel="noopener noreferrer" aria-label="GitHub" {
                        (Icon::Github)
                    }
                    a href="https://twitter.com/0xdankiii" target="_blank" rel="noopener noreferrer" aria-label="Twitter" {
                        (Icon::Twitter)
                    }
                    span.tagline {
                        "Made with " span.heart { (Icon::Heart) } " for the Ethereum community in the Philippines"
                    }
                }
            }
        }
    }
}

/// Difficulty badge.
pub(crate) fn difficulty_badge(difficulty: academy_site::Difficulty) -> Markup {
    html! {
        span class={ "badge badge-" (difficulty.class()) } { (difficulty.label()) }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use academy_site::Navigation;

    use super::*;

    fn config() -> ShellConfig {
        ShellConfig {
            title: "ETHPH Academy".to_owned(),
            repository_url: "https://github.com/0xdanki/ethph-academy".to_owned(),
        }
    }

    fn sidebar() -> Sidebar {
        let nav = Navigation::from_yaml(
            "title: Learning Path\nsections:\n  - id: a\n    title: Alpha\n    icon: code\n    expanded: true\n    items:\n      - { title: One, path: /tutorials/one }\n",
        )
        .unwrap();
        Sidebar::new(Arc::new(nav))
    }

    #[test]
    fn test_shell_contains_frame() {
        let html = shell(
            &config(),
            &sidebar(),
            "/tutorials/one",
            Content {
                title: Some("One".to_owned()),
                body: html! { p.marker { "slot" } },
            },
        )
        .into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>One | ETHPH Academy</title>"));
        assert!(html.contains("class=\"navbar\""));
        assert!(html.contains("class=\"sidebar\""));
        assert!(html.contains("<p class=\"marker\">slot</p>"));
        assert!(html.contains("class=\"footer\""));
        assert!(html.contains("href=\"https://github.com/0xdanki/ethph-academy\""));
        assert!(html.contains("href=\"/assets/app.css\""));
    }

    #[test]
    fn test_navbar_links_preserve_sidebar_state() {
        let mut sidebar = sidebar();
        sidebar.toggle_section(0);
        let html = navbar(&config(), &sidebar).into_string();
        assert!(html.contains("href=\"/projects?nav=\""));
        assert!(html.contains("href=\"/?nav=\""));
    }

    #[test]
    fn test_footer_has_current_year() {
        let html = footer().into_string();
        assert!(html.contains(&chrono::Utc::now().year().to_string()));
        assert!(html.contains("for the Ethereum community in the Philippines"));
    }
}
