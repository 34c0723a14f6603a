//! Static route table.
//!
//! Every route is a literal path. Lookup is exact-match only, so `/playground/`
//! and `/playground?x` (without query stripping) do not resolve.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::ContentError;
use crate::sidebar::Sidebar;

/// Page content bound to a route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "slug", rename_all = "lowercase")]
pub enum Page {
    Home,
    Tutorial(String),
    Projects,
    Playground,
    Resources,
}

impl Page {
    /// Short label for listings (e.g., `tutorial:setup`).
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Home => "home".to_owned(),
            Self::Tutorial(slug) => format!("tutorial:{slug}"),
            Self::Projects => "projects".to_owned(),
            Self::Playground => "playground".to_owned(),
            Self::Resources => "resources".to_owned(),
        }
    }
}

/// A path bound to a page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: String,
    pub page: Page,
}

impl Route {
    fn new(path: impl Into<String>, page: Page) -> Self {
        Self {
            path: path.into(),
            page,
        }
    }
}

/// Outcome of resolving a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    Page(&'a Route),
    NotFound,
}

/// Immutable mapping from literal paths to pages.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
    index: HashMap<String, usize>,
}

impl RouteTable {
    /// Build a table from explicit routes, rejecting duplicate paths.
    pub fn new(routes: Vec<Route>) -> Result<Self, ContentError> {
        let mut index = HashMap::with_capacity(routes.len());
        for (i, route) in routes.iter().enumerate() {
            if index.insert(route.path.clone(), i).is_some() {
                return Err(ContentError::DuplicateRoute(route.path.clone()));
            }
        }
        Ok(Self { routes, index })
    }

    /// Standard site table: home, one route per tutorial slug (in the given
    /// order), projects, playground, resources.
    pub fn standard<S: AsRef<str>>(tutorial_slugs: &[S]) -> Result<Self, ContentError> {
        let mut routes = Vec::with_capacity(tutorial_slugs.len() + 4);
        routes.push(Route::new("/", Page::Home));
        for slug in tutorial_slugs {
            let slug = slug.as_ref();
            routes.push(Route::new(
                tutorial_path(slug),
                Page::Tutorial(slug.to_owned()),
            ));
        }
        routes.push(Route::new("/projects", Page::Projects));
        routes.push(Route::new("/playground", Page::Playground));
        routes.push(Route::new("/resources", Page::Resources));
        Self::new(routes)
    }

    /// Look up `path` by exact match.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        self.index
            .get(path)
            .and_then(|&i| self.routes.get(i))
            .map_or(Resolution::NotFound, Resolution::Page)
    }

    /// Link target for a route change to `path`.
    ///
    /// Rendering happens when the new location is resolved; this only builds
    /// the location, carrying the sidebar state along.
    #[must_use]
    pub fn navigate(&self, path: &str, sidebar: &Sidebar) -> String {
        if matches!(self.resolve(path), Resolution::NotFound) {
            tracing::debug!(path, "Navigating to unrouted path");
        }
        sidebar.href(path)
    }

    /// All routes in table order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

/// Route path of a tutorial slug.
#[must_use]
pub fn tutorial_path(slug: &str) -> String {
    format!("/tutorials/{slug}")
}
