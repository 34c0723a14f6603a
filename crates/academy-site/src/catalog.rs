//! Page content loading.
//!
//! Everything except navigation is parsed on demand, so a malformed tutorial
//! or data file only breaks the page that uses it.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::ContentError;
use crate::frontmatter;
use crate::markdown::render_markdown;
use crate::navigation::Navigation;
use crate::pages::{HomePage, ProjectsPage, ResourcesPage, Tutorial, TutorialMeta};
use crate::routes::tutorial_path;
use crate::source::ContentSource;

/// Content pages backed by a [`ContentSource`].
#[derive(Clone)]
pub struct Catalog {
    source: Arc<dyn ContentSource>,
    navigation: Arc<Navigation>,
}

impl Catalog {
    pub(crate) fn new(source: Arc<dyn ContentSource>, navigation: Arc<Navigation>) -> Self {
        Self { source, navigation }
    }

    /// Load and render a tutorial.
    ///
    /// Previous/next links follow the flattened navigation order.
    pub fn tutorial(&self, slug: &str) -> Result<Tutorial, ContentError> {
        let path = format!("tutorials/{slug}.md");
        let raw = self.source.read(&path)?;
        let (meta, body) = frontmatter::parse::<TutorialMeta>(&path, &raw)?;
        let rendered = render_markdown(&body);
        let (prev, next) = self.navigation.neighbors(&tutorial_path(slug));

        Ok(Tutorial {
            slug: slug.to_owned(),
            meta,
            html: rendered.html,
            toc: rendered.toc,
            prev: prev.cloned(),
            next: next.cloned(),
        })
    }

    /// Home page content.
    pub fn home(&self) -> Result<HomePage, ContentError> {
        self.load_yaml("home.yaml")
    }

    /// Projects page content.
    pub fn projects(&self) -> Result<ProjectsPage, ContentError> {
        self.load_yaml("projects.yaml")
    }

    /// Resources page content.
    pub fn resources(&self) -> Result<ResourcesPage, ContentError> {
        self.load_yaml("resources.yaml")
    }

    fn load_yaml<T: DeserializeOwned>(&self, path: &str) -> Result<T, ContentError> {
        let raw = self.source.read(path)?;
        serde_yaml::from_str(&raw).map_err(|e| ContentError::yaml(path, e))
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::pages::Difficulty;

    struct MapSource(HashMap<&'static str, &'static str>);

    impl ContentSource for MapSource {
        fn read(&self, path: &str) -> Result<String, ContentError> {
            self.0
                .get(path)
                .map(|s| (*s).to_owned())
                .ok_or_else(|| ContentError::NotFound(path.to_owned()))
        }

        fn tutorials(&self) -> Result<Vec<String>, ContentError> {
            Ok(Vec::new())
        }
    }

    const NAV: &str = "title: Nav\nsections:\n  - id: a\n    title: A\n    icon: code\n    items:\n      - { title: One, path: /tutorials/one }\n      - { title: Two, path: /tutorials/two }\n";

    fn catalog(files: &[(&'static str, &'static str)]) -> Catalog {
        let source = MapSource(files.iter().copied().collect());
        Catalog::new(
            Arc::new(source),
            Arc::new(Navigation::from_yaml(NAV).unwrap()),
        )
    }

    #[test]
    fn test_tutorial_renders_with_neighbors() {
        let catalog = catalog(&[(
            "tutorials/two.md",
            "---\ntitle: Two\nsection: A\ndifficulty: Intermediate\nduration: \"~5 min\"\n---\n\nIntro\n\n## Step\n",
        )]);

        let tutorial = catalog.tutorial("two").unwrap();
        assert_eq!(tutorial.meta.title, "Two");
        assert_eq!(tutorial.meta.difficulty, Difficulty::Intermediate);
        assert_eq!(tutorial.meta.duration, "~5 min");
        assert!(tutorial.html.contains("<p>Intro</p>"));
        assert_eq!(tutorial.toc.len(), 1);
        assert_eq!(tutorial.prev.map(|i| i.path), Some("/tutorials/one".to_owned()));
        assert!(tutorial.next.is_none());
    }

    #[test]
    fn test_tutorial_outside_navigation_has_no_neighbors() {
        let catalog = catalog(&[(
            "tutorials/extra.md",
            "---\ntitle: Extra\nsection: A\ndifficulty: Beginner\nduration: 1 min\n---\nBody",
        )]);
        let tutorial = catalog.tutorial("extra").unwrap();
        assert!(tutorial.prev.is_none());
        assert!(tutorial.next.is_none());
    }

    #[test]
    fn test_tutorial_errors_are_isolated() {
        let catalog = catalog(&[
            ("tutorials/bad.md", "---\ntitle: [unclosed\n---\nBody"),
            ("tutorials/bare.md", "# No frontmatter"),
        ]);
        assert!(matches!(catalog.tutorial("bad"), Err(ContentError::Yaml { .. })));
        assert!(matches!(
            catalog.tutorial("bare"),
            Err(ContentError::MissingFrontmatter(_))
        ));
        assert!(matches!(catalog.tutorial("missing"), Err(ContentError::NotFound(_))));
    }

    #[test]
    fn test_malformed_data_file() {
        let catalog = catalog(&[("projects.yaml", "projects: nope")]);
        let err = catalog.projects().unwrap_err();
        assert!(err.to_string().contains("projects.yaml"));
    }
}
