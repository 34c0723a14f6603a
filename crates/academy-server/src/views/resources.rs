//! Resources directory.

use academy_site::{Icon, ResourcesPage};
use maud::html;

use super::Content;

/// Resources grouped by category, with a legend linking to each group.
pub(crate) fn resources(page: &ResourcesPage) -> Content {
    let groups = page.grouped();
    let body = html! {
        header.page-header {
            h1 { (page.title) }
            p.lead { (page.lead) }
        }
        nav.legend aria-label="Categories" {
            @for (category, items) in &groups {
                @if !items.is_empty() {
                    a class={ "legend-item category-" (category.class()) }
                        href={ "#" (category.class()) } {
                        (category.label())
                    }
                }
            }
        }
        @for (category, items) in &groups {
            @if !items.is_empty() {
                section.resource-group id=(category.class()) {
                    h2 { (category.label()) }
                    div.resource-grid {
                        @for resource in items {
                            a class={ "card resource-card category-" (category.class()) }
                                href=(resource.url) target="_blank" rel="noopener noreferrer" {
                                span.card-icon { (resource.icon) }
                                div {
                                    h3 { (resource.title) " " (Icon::ExternalLink) }
                                    p { (resource.description) }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    Content {
        title: Some(page.title.clone()),
        body,
    }
}
