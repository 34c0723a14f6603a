//! Route resolution and page rendering.
//!
//! A failing content renderer (content error or panic) only replaces the
//! content slot with an error panel; the shell is always rendered.

use std::panic::{AssertUnwindSafe, catch_unwind};

use academy_playground::Playground;
use academy_site::{Page, Resolution, Sidebar, Site};
use axum::http::StatusCode;

use crate::error::RenderError;
use crate::views::{self, Content, ShellConfig};

/// Fully rendered page.
pub(crate) struct RenderedPage {
    pub(crate) status: StatusCode,
    pub(crate) html: String,
    /// Render failure shown in the content slot, if any.
    pub(crate) error: Option<String>,
}

/// Per-request page options beyond the path.
#[derive(Default)]
pub(crate) struct PageOptions<'a> {
    /// Playground template to preload.
    pub(crate) template: Option<&'a str>,
}

/// Resolve `path` and render it inside the shell.
pub(crate) fn render_page(
    site: &Site,
    shell: &ShellConfig,
    path: &str,
    sidebar: &Sidebar,
    options: &PageOptions<'_>,
) -> RenderedPage {
    let (status, content, error) = match site.routes().resolve(path) {
        Resolution::Page(route) => match render_content(site, &route.page, sidebar, options) {
            Ok(content) => (StatusCode::OK, content, None),
            Err(err) => {
                let message = err.to_string();
                tracing::error!(path, error = %message, "Failed to render page");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    views::error_panel(&message),
                    Some(message),
                )
            }
        },
        Resolution::NotFound => {
            tracing::debug!(path, "No route for path");
            (
                StatusCode::NOT_FOUND,
                views::not_found(path, &site.routes().navigate("/", sidebar)),
                None,
            )
        }
    };

    RenderedPage {
        status,
        html: views::shell(shell, sidebar, path, content).into_string(),
        error,
    }
}

fn render_content(
    site: &Site,
    page: &Page,
    sidebar: &Sidebar,
    options: &PageOptions<'_>,
) -> Result<Content, RenderError> {
    catch_unwind(AssertUnwindSafe(|| content_for(site, page, sidebar, options)))
        .map_err(|payload| RenderError::Panic(panic_message(payload.as_ref())))?
}

fn content_for(
    site: &Site,
    page: &Page,
    sidebar: &Sidebar,
    options: &PageOptions<'_>,
) -> Result<Content, RenderError> {
    let catalog = site.catalog();
    Ok(match page {
        Page::Home => views::home(&catalog.home()?, sidebar),
        Page::Tutorial(slug) => views::tutorial(&catalog.tutorial(slug)?, sidebar),
        Page::Projects => views::projects(&catalog.projects()?),
        Page::Resources => views::resources(&catalog.resources()?),
        Page::Playground => {
            let state = options
                .template
                .and_then(|id| Playground::with_template(id).ok())
                .unwrap_or_default();
            views::playground(&state, sidebar)
        }
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use academy_site::{ContentError, ContentSource};

    use super::*;

    struct MapSource(HashMap<&'static str, &'static str>);

    impl ContentSource for MapSource {
        fn read(&self, path: &str) -> Result<String, ContentError> {
            self.0
                .get(path)
                .map(|s| (*s).to_owned())
                .ok_or_else(|| ContentError::NotFound(path.to_owned()))
        }

        fn tutorials(&self) -> Result<Vec<String>, ContentError> {
            Ok(vec!["broken".to_owned()])
        }
    }

    fn shell() -> ShellConfig {
        ShellConfig {
            title: "Academy".to_owned(),
            repository_url: "https://example.com/repo".to_owned(),
        }
    }

    fn broken_site() -> Site {
        let source = MapSource(HashMap::from([
            (
                "navigation.yaml",
                "title: Nav\nsections:\n  - id: a\n    title: A\n    icon: code\n    expanded: true\n    items:\n      - { title: Broken, path: /tutorials/broken }\n",
            ),
            ("tutorials/broken.md", "no frontmatter"),
            ("projects.yaml", "title: [unclosed"),
        ]));
        Site::load(Arc::new(source)).unwrap()
    }

    #[test]
    fn test_render_failure_keeps_shell() {
        let site = broken_site();
        let page = render_page(
            &site,
            &shell(),
            "/tutorials/broken",
            &site.sidebar(None),
            &PageOptions::default(),
        );

        assert_eq!(page.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(page.error.as_deref().unwrap().contains("Missing frontmatter"));
        assert!(page.html.contains("class=\"navbar\""));
        assert!(page.html.contains("class=\"sidebar\""));
        assert!(page.html.contains("class=\"footer\""));
        assert!(page.html.contains("class=\"error-panel\""));
        assert!(page.html.contains("class=\"sidebar-link active\""));
    }

    #[test]
    fn test_malformed_data_file_isolated() {
        let site = broken_site();
        let page = render_page(
            &site,
            &shell(),
            "/projects",
            &site.sidebar(None),
            &PageOptions::default(),
        );
        assert_eq!(page.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(page.html.contains("projects.yaml"));

        // Pages that do not touch the broken files are unaffected
        let page = render_page(
            &site,
            &shell(),
            "/playground",
            &site.sidebar(None),
            &PageOptions::default(),
        );
        assert_eq!(page.status, StatusCode::OK);
    }

    #[test]
    fn test_unknown_path_renders_not_found_in_shell() {
        let site = broken_site();
        let page = render_page(
            &site,
            &shell(),
            "/tutorials/broken/extra",
            &site.sidebar(None),
            &PageOptions::default(),
        );
        assert_eq!(page.status, StatusCode::NOT_FOUND);
        assert!(page.error.is_none());
        assert!(page.html.contains("Page not found"));
        assert!(page.html.contains("class=\"sidebar\""));
        assert!(!page.html.contains("class=\"sidebar-link active\""));
    }

    #[test]
    fn test_panic_becomes_render_error() {
        let result: Result<Content, RenderError> =
            catch_unwind(AssertUnwindSafe(|| -> Result<Content, RenderError> {
                panic!("boom")
            }))
            .map_err(|payload| RenderError::Panic(panic_message(payload.as_ref())))
            .and_then(|r| r);
        assert!(matches!(result, Err(RenderError::Panic(ref m)) if m == "boom"));
    }

    #[test]
    fn test_playground_template_option() {
        let site = Site::embedded().unwrap();
        let page = render_page(
            &site,
            &shell(),
            "/playground",
            &site.sidebar(None),
            &PageOptions {
                template: Some("erc20"),
            },
        );
        assert!(page.html.contains("contract MyToken"));

        let page = render_page(
            &site,
            &shell(),
            "/playground",
            &site.sidebar(None),
            &PageOptions {
                template: Some("unknown"),
            },
        );
        assert!(page.html.contains("contract HelloWorld"));
    }
}
