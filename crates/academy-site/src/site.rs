//! Site structure: navigation, routes and content, loaded together.

use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::error::ContentError;
use crate::navigation::Navigation;
use crate::routes::{RouteTable, tutorial_path};
use crate::sidebar::Sidebar;
use crate::source::{ContentSource, EmbeddedContent, FsContent};

/// Loaded site.
///
/// Navigation and the route table are built eagerly; page content is read
/// through the [`Catalog`] when a page is rendered.
#[derive(Debug)]
pub struct Site {
    navigation: Arc<Navigation>,
    routes: RouteTable,
    catalog: Catalog,
}

impl Site {
    /// Load a site from any content source.
    ///
    /// Tutorial routes follow the navigation order; tutorials with no sidebar
    /// entry are appended alphabetically.
    pub fn load(source: Arc<dyn ContentSource>) -> Result<Self, ContentError> {
        let navigation = Arc::new(Navigation::from_yaml(&source.read("navigation.yaml")?)?);

        let mut remaining = source.tutorials()?;
        let mut slugs = Vec::with_capacity(remaining.len());
        for item in navigation.items() {
            if let Some(pos) = remaining.iter().position(|s| tutorial_path(s) == item.path) {
                slugs.push(remaining.remove(pos));
            }
        }
        for slug in &remaining {
            tracing::debug!(slug = %slug, "Tutorial has no sidebar entry");
        }
        slugs.extend(remaining);

        let routes = RouteTable::standard(&slugs)?;
        tracing::info!(routes = routes.routes().len(), "Loaded site");

        Ok(Self {
            catalog: Catalog::new(source, Arc::clone(&navigation)),
            navigation,
            routes,
        })
    }

    /// Load the content compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::load(Arc::new(EmbeddedContent))
    }

    /// Load the embedded content, or a content directory if one is given.
    pub fn from_content_dir(content_dir: Option<PathBuf>) -> Result<Self, ContentError> {
        match content_dir {
            Some(dir) => Self::load(Arc::new(FsContent::new(dir))),
            None => Self::embedded(),
        }
    }

    /// Navigation configuration.
    #[must_use]
    pub fn navigation(&self) -> &Arc<Navigation> {
        &self.navigation
    }

    /// Route table.
    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Page content.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Sidebar state from an optional `nav` query value.
    #[must_use]
    pub fn sidebar(&self, nav: Option<&str>) -> Sidebar {
        Sidebar::from_query(Arc::clone(&self.navigation), nav)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::routes::{Page, Resolution};

    #[test]
    fn test_embedded_site_routes_match_navigation() {
        let site = Site::embedded().unwrap();
        for item in site.navigation().items() {
            assert!(
                matches!(site.routes().resolve(&item.path), Resolution::Page(_)),
                "{} has no route",
                item.path
            );
        }
        // home, 27 tutorials, projects, playground, resources
        assert_eq!(site.routes().routes().len(), 31);
    }

    #[test]
    fn test_embedded_tutorial_routes_follow_navigation_order() {
        let site = Site::embedded().unwrap();
        let tutorial_paths: Vec<&str> = site
            .routes()
            .routes()
            .iter()
            .filter(|r| matches!(r.page, Page::Tutorial(_)))
            .map(|r| r.path.as_str())
            .collect();
        let nav_paths: Vec<&str> = site.navigation().items().map(|i| i.path.as_str()).collect();
        assert_eq!(tutorial_paths, nav_paths);
    }

    #[test]
    fn test_embedded_tutorials_render() {
        let site = Site::embedded().unwrap();
        for route in site.routes().routes() {
            if let Page::Tutorial(slug) = &route.page {
                let tutorial = site.catalog().tutorial(slug).unwrap();
                let section = site
                    .navigation()
                    .sections
                    .iter()
                    .find(|s| s.items.iter().any(|i| i.path == route.path))
                    .unwrap();
                assert_eq!(tutorial.meta.section, section.title, "{slug}");
                assert!(!tutorial.toc.is_empty(), "{slug} has no sections");
            }
        }
    }

    #[test]
    fn test_embedded_data_files_parse() {
        let site = Site::embedded().unwrap();
        let home = site.catalog().home().unwrap();
        assert_eq!(home.featured.cards.len(), 6);
        for card in &home.featured.cards {
            assert!(matches!(site.routes().resolve(&card.path), Resolution::Page(_)));
        }
        assert_eq!(site.catalog().projects().unwrap().projects.len(), 6);
        assert!(!site.catalog().resources().unwrap().resources.is_empty());
    }

    #[test]
    fn test_introduction_neighbors() {
        let site = Site::embedded().unwrap();
        let tutorial = site.catalog().tutorial("introduction").unwrap();
        assert!(tutorial.prev.is_none());
        assert_eq!(
            tutorial.next.map(|i| i.title),
            Some("Development Environment".to_owned())
        );
    }

    #[test]
    fn test_default_sidebar_expands_getting_started_only() {
        let site = Site::embedded().unwrap();
        let view = site.sidebar(None).view("/tutorials/introduction");
        let expanded: Vec<&str> = view
            .sections
            .iter()
            .filter(|s| s.expanded)
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(expanded, vec!["Getting Started"]);
        assert!(view.sections[0].items[0].active);
        assert_eq!(view.sections[0].items[0].title, "Introduction to Solidity");
    }

    #[test]
    fn test_fs_site_appends_unlisted_tutorials() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("tutorials")).unwrap();
        std::fs::write(
            dir.path().join("navigation.yaml"),
            "title: Nav\nsections:\n  - id: a\n    title: A\n    icon: code\n    items:\n      - { title: Z, path: /tutorials/zeta }\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("tutorials/alpha.md"), "").unwrap();
        std::fs::write(dir.path().join("tutorials/zeta.md"), "").unwrap();

        let site = Site::from_content_dir(Some(dir.path().to_path_buf())).unwrap();
        let paths: Vec<&str> = site.routes().routes().iter().map(|r| r.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "/",
                "/tutorials/zeta",
                "/tutorials/alpha",
                "/projects",
                "/playground",
                "/resources",
            ]
        );
    }

    #[test]
    fn test_missing_navigation_fails_load() {
        let dir = tempfile::tempdir().unwrap();
        let err = Site::from_content_dir(Some(dir.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, ContentError::NotFound(ref p) if p == "navigation.yaml"));
    }
}
