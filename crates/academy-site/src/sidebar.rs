//! Sidebar expansion state.
//!
//! Each section is an independent two-state machine (collapsed/expanded)
//! that changes only through an explicit toggle. State is keyed by section id
//! and round-trips through the `nav` query parameter so that a plain URL
//! always yields the authored defaults.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;

use crate::icon::Icon;
use crate::navigation::{Navigation, is_active};

/// Query parameter carrying the expanded section ids.
pub const NAV_QUERY_PARAM: &str = "nav";

/// Transient view state of the sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sidebar {
    navigation: Arc<Navigation>,
    expanded: BTreeSet<String>,
}

impl Sidebar {
    /// Sidebar with every section at its authored default.
    #[must_use]
    pub fn new(navigation: Arc<Navigation>) -> Self {
        let expanded = Self::defaults(&navigation);
        Self {
            navigation,
            expanded,
        }
    }

    /// Restore sidebar state from a `nav` query value.
    ///
    /// `None` yields the defaults. `Some("")` means every section collapsed.
    /// Unknown ids are ignored.
    #[must_use]
    pub fn from_query(navigation: Arc<Navigation>, value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::new(navigation);
        };
        let expanded = value
            .split(',')
            .map(str::trim)
            .filter(|id| navigation.section_index(id).is_some())
            .map(str::to_owned)
            .collect();
        Self {
            navigation,
            expanded,
        }
    }

    fn defaults(navigation: &Navigation) -> BTreeSet<String> {
        navigation
            .sections
            .iter()
            .filter(|s| s.expanded)
            .map(|s| s.id.clone())
            .collect()
    }

    /// The navigation this sidebar presents.
    #[must_use]
    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    /// Flip the section at `index`. Out-of-range indices are ignored.
    pub fn toggle_section(&mut self, index: usize) {
        let Some(section) = self.navigation.sections.get(index) else {
            return;
        };
        if !self.expanded.remove(&section.id) {
            self.expanded.insert(section.id.clone());
        }
    }

    /// Flip the section with the given id. Unknown ids are ignored.
    pub fn toggle_by_id(&mut self, id: &str) {
        if let Some(index) = self.navigation.section_index(id) {
            self.toggle_section(index);
        }
    }

    /// Copy of this sidebar with the section at `index` flipped.
    #[must_use]
    pub fn toggled(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.toggle_section(index);
        next
    }

    /// Whether the section at `index` is expanded.
    #[must_use]
    pub fn is_expanded(&self, index: usize) -> bool {
        self.navigation
            .sections
            .get(index)
            .is_some_and(|s| self.expanded.contains(&s.id))
    }

    /// Whether the state equals the authored defaults.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.expanded == Self::defaults(&self.navigation)
    }

    /// `nav` query value, or `None` when the state equals the defaults.
    ///
    /// Ids are listed in section order.
    #[must_use]
    pub fn query_value(&self) -> Option<String> {
        if self.is_default() {
            return None;
        }
        let ids: Vec<&str> = self
            .navigation
            .sections
            .iter()
            .filter(|s| self.expanded.contains(&s.id))
            .map(|s| s.id.as_str())
            .collect();
        Some(ids.join(","))
    }

    /// Link target for `path` that preserves the current sidebar state.
    #[must_use]
    pub fn href(&self, path: &str) -> String {
        match self.query_value() {
            Some(value) => format!("{path}?{NAV_QUERY_PARAM}={value}"),
            None => path.to_owned(),
        }
    }

    /// Presentation model for the page at `current_path`.
    #[must_use]
    pub fn view(&self, current_path: &str) -> SidebarView {
        let sections = self
            .navigation
            .sections
            .iter()
            .enumerate()
            .map(|(index, section)| SectionView {
                id: section.id.clone(),
                title: section.title.clone(),
                icon: section.icon,
                expanded: self.is_expanded(index),
                toggle_href: self.toggled(index).href(current_path),
                items: section
                    .items
                    .iter()
                    .map(|item| ItemView {
                        title: item.title.clone(),
                        path: item.path.clone(),
                        href: self.href(&item.path),
                        active: is_active(&item.path, current_path),
                    })
                    .collect(),
            })
            .collect();

        SidebarView {
            title: self.navigation.title.clone(),
            current_path: current_path.to_owned(),
            sections,
        }
    }
}

/// Rendered sidebar state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarView {
    /// Heading above the sections.
    pub title: String,
    /// Route the view was built for.
    pub current_path: String,
    /// Sections in display order.
    pub sections: Vec<SectionView>,
}

/// Rendered section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView {
    /// Stable section id.
    pub id: String,
    /// Display label.
    pub title: String,
    /// Section glyph.
    pub icon: Icon,
    /// Current expansion state.
    pub expanded: bool,
    /// Link that reloads the current page with this section flipped.
    pub toggle_href: String,
    /// Links in display order.
    pub items: Vec<ItemView>,
}

/// Rendered link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    /// Display label.
    pub title: String,
    /// Route path.
    pub path: String,
    /// Link target preserving sidebar state.
    pub href: String,
    /// True iff `path` is the current route.
    pub active: bool,
}
