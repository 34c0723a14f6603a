//! Sidebar navigation tree.
//!
//! The tree is static configuration: an ordered list of sections, each holding
//! an ordered list of items. Order is display order and is never re-sorted,
//! since it encodes the learning path. Expansion state lives in
//! [`Sidebar`](crate::Sidebar), not here.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::icon::Icon;

/// A single sidebar link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display label.
    pub title: String,
    /// Route path (e.g., `/tutorials/setup`).
    pub path: String,
}

/// A labeled, independently collapsible group of links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSection {
    /// Stable key used to address the section in sidebar state.
    pub id: String,
    /// Display label.
    pub title: String,
    /// Glyph shown next to the title.
    pub icon: Icon,
    /// Authored default expansion state.
    #[serde(default)]
    pub expanded: bool,
    /// Links in display order.
    #[serde(default)]
    pub items: Vec<NavItem>,
}

/// Immutable navigation configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    /// Heading shown above the sections.
    pub title: String,
    /// Sections in display order.
    pub sections: Vec<NavSection>,
}

impl Navigation {
    /// Parse navigation from its YAML form.
    ///
    /// Section ids must be unique because sidebar state is keyed by them.
    /// Duplicate item paths are tolerated but logged.
    pub fn from_yaml(yaml: &str) -> Result<Self, ContentError> {
        let navigation: Self =
            serde_yaml::from_str(yaml).map_err(|e| ContentError::yaml("navigation.yaml", e))?;

        let mut ids = HashSet::new();
        for section in &navigation.sections {
            if !ids.insert(section.id.as_str()) {
                return Err(ContentError::DuplicateSection(section.id.clone()));
            }
        }

        let mut paths = HashSet::new();
        for item in navigation.items() {
            if !paths.insert(item.path.as_str()) {
                tracing::warn!(path = %item.path, "Navigation item path appears more than once");
            }
        }

        Ok(navigation)
    }

    /// All items across all sections, in display order.
    pub fn items(&self) -> impl Iterator<Item = &NavItem> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }

    /// Find the first item linking to `path`.
    #[must_use]
    pub fn find_item(&self, path: &str) -> Option<&NavItem> {
        self.items().find(|item| item.path == path)
    }

    /// Items immediately before and after `path` in the flattened learning path.
    #[must_use]
    pub fn neighbors(&self, path: &str) -> (Option<&NavItem>, Option<&NavItem>) {
        let items: Vec<&NavItem> = self.items().collect();
        let Some(index) = items.iter().position(|item| item.path == path) else {
            return (None, None);
        };
        let prev = index.checked_sub(1).and_then(|i| items.get(i).copied());
        let next = items.get(index + 1).copied();
        (prev, next)
    }

    /// Index of the section with the given id.
    #[must_use]
    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }
}

/// Returns true iff `path` is the current route.
///
/// Exact string comparison: no prefix matching, no trailing-slash normalization.
#[must_use]
pub fn is_active(path: &str, current: &str) -> bool {
    path == current
}
