//! Content data models.
//!
//! These mirror the YAML data files and tutorial frontmatter. They carry no
//! behaviour beyond deserialization; rendering lives in the server views.

use serde::{Deserialize, Serialize};

use crate::icon::Icon;
use crate::markdown::TocEntry;
use crate::navigation::NavItem;

/// Learner level of a tutorial or project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Lowercase name for CSS classes.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

/// Tutorial frontmatter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TutorialMeta {
    pub title: String,
    /// Sidebar section label shown above the title.
    pub section: String,
    pub difficulty: Difficulty,
    /// Reading time label (e.g., `~20 min`).
    pub duration: String,
}

/// A rendered tutorial page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tutorial {
    pub slug: String,
    pub meta: TutorialMeta,
    /// Rendered body HTML.
    pub html: String,
    pub toc: Vec<TocEntry>,
    /// Previous step in the learning path.
    pub prev: Option<NavItem>,
    /// Next step in the learning path.
    pub next: Option<NavItem>,
}

/// Home page content (`home.yaml`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HomePage {
    pub hero: Hero,
    pub featured: Featured,
    pub purpose: FeatureGrid,
    pub deploy: DeployGuide,
    pub cta: CallToAction,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Hero {
    /// Accent-coloured leading words of the headline.
    pub highlight: String,
    pub title: String,
    pub lead: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Featured {
    pub title: String,
    pub lead: String,
    pub cards: Vec<TutorialCard>,
}

/// Link card for a tutorial.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TutorialCard {
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub difficulty: Difficulty,
    pub duration: String,
    pub path: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FeatureGrid {
    pub title: String,
    pub lead: String,
    pub features: Vec<Feature>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Feature {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

/// Fork-and-deploy section of the home page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DeployGuide {
    pub title: String,
    pub lead: String,
    pub features: Vec<Feature>,
    pub guide_title: String,
    pub steps: Vec<DeployStep>,
    pub ideas: Callout,
    pub help: Note,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DeployStep {
    pub title: String,
    pub lead: String,
    /// Shell command shown above the items.
    #[serde(default)]
    pub command: Option<String>,
    /// Inline markdown list items.
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Callout {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Note {
    pub title: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CallToAction {
    pub title: String,
    pub lead: String,
    pub label: String,
}

/// Projects page content (`projects.yaml`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsPage {
    pub title: String,
    pub lead: String,
    pub projects: Vec<Project>,
}

/// Community project card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Cover image URL.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
}

/// Resources page content (`resources.yaml`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcesPage {
    pub title: String,
    pub lead: String,
    pub resources: Vec<Resource>,
}

impl ResourcesPage {
    /// Resources grouped by category in [`ResourceCategory::ALL`] order.
    ///
    /// Empty categories are kept so the page layout stays stable.
    #[must_use]
    pub fn grouped(&self) -> Vec<(ResourceCategory, Vec<&Resource>)> {
        ResourceCategory::ALL
            .iter()
            .map(|&category| {
                let items = self
                    .resources
                    .iter()
                    .filter(|r| r.category == category)
                    .collect();
                (category, items)
            })
            .collect()
    }
}

/// External learning resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub description: String,
    pub url: String,
    pub icon: Icon,
    pub category: ResourceCategory,
}

/// Resource category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    Documentation,
    Tutorial,
    Tool,
    Community,
    Security,
    Book,
}

impl ResourceCategory {
    /// Display order.
    pub const ALL: [Self; 6] = [
        Self::Documentation,
        Self::Tutorial,
        Self::Tool,
        Self::Community,
        Self::Security,
        Self::Book,
    ];

    /// Heading label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Documentation => "Documentation",
            Self::Tutorial => "Tutorials",
            Self::Tool => "Tools",
            Self::Community => "Community",
            Self::Security => "Security",
            Self::Book => "Books & Publications",
        }
    }

    /// Lowercase name for CSS classes and anchors.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Documentation => "documentation",
            Self::Tutorial => "tutorial",
            Self::Tool => "tool",
            Self::Community => "community",
            Self::Security => "security",
            Self::Book => "book",
        }
    }
}
