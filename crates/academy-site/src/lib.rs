//! Site structure and content for the academy.
//!
//! This crate provides:
//! - [`Navigation`]: the static learning-path tree shown in the sidebar
//! - [`Sidebar`]: per-request expansion state of the navigation sections
//! - [`RouteTable`]: exact-match mapping from URL paths to [`Page`]s
//! - [`Catalog`]: tutorials (markdown with frontmatter) and data pages
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use academy_site::{Resolution, Site};
//!
//! let site = Site::embedded()?;
//!
//! if let Resolution::Page(route) = site.routes().resolve("/tutorials/setup") {
//!     println!("{}", route.page.label());
//! }
//!
//! let sidebar = site.sidebar(None);
//! let view = sidebar.view("/tutorials/setup");
//! # Ok(())
//! # }
//! ```

mod catalog;
mod code_block;
mod error;
mod frontmatter;
mod icon;
mod markdown;
mod navigation;
mod pages;
mod routes;
mod sidebar;
mod site;
mod source;

pub use catalog::Catalog;
pub use code_block::{CodeBlock, DEFAULT_LANGUAGE};
pub use error::ContentError;
pub use icon::Icon;
pub use markdown::{RenderedMarkdown, TocEntry, render_markdown, slugify};
pub use navigation::{NavItem, NavSection, Navigation, is_active};
pub use pages::{
    CallToAction, Callout, DeployGuide, DeployStep, Difficulty, Feature, FeatureGrid, Featured,
    Hero, HomePage, Note, Project, ProjectsPage, Resource, ResourceCategory, ResourcesPage,
    Tutorial, TutorialCard, TutorialMeta,
};
pub use routes::{Page, Resolution, Route, RouteTable, tutorial_path};
pub use sidebar::{ItemView, NAV_QUERY_PARAM, SectionView, Sidebar, SidebarView};
pub use site::Site;
pub use source::{ContentSource, EmbeddedContent, FsContent};
