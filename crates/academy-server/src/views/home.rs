//! Home and projects pages.

use academy_site::{
    CallToAction, DeployGuide, Feature, HomePage, Icon, Project, ProjectsPage, Sidebar,
    TutorialCard,
};
use maud::{Markup, html};

use super::{Content, difficulty_badge};

/// Landing page.
pub(crate) fn home(page: &HomePage, sidebar: &Sidebar) -> Content {
    let start = sidebar.href("/tutorials/introduction");
    let body = html! {
        section.hero {
            span.hero-highlight { (page.hero.highlight) }
            h1 { (page.hero.title) }
            p.lead { (page.hero.lead) }
            div.hero-actions {
                a.button.button-primary href=(start) { "Start Learning" (Icon::ArrowRight) }
                a.button.button-secondary href=(sidebar.href("/playground")) { "Try Playground" }
            }
        }
        section.home-section {
            h2 { (page.featured.title) }
            p.lead { (page.featured.lead) }
            div.card-grid {
                @for card in &page.featured.cards {
                    (tutorial_card(card, sidebar))
                }
            }
        }
        section.home-section {
            h2 { (page.purpose.title) }
            p.lead { (page.purpose.lead) }
            (feature_grid(&page.purpose.features))
        }
        (deploy_guide(&page.deploy))
        (call_to_action(&page.cta, &start))
    };

    Content { title: None, body }
}

/// Tutorial card: icon, title, description, difficulty and duration.
fn tutorial_card(card: &TutorialCard, sidebar: &Sidebar) -> Markup {
    html! {
        a.card.tutorial-card href=(sidebar.href(&card.path)) {
            div.card-header {
                span.card-icon { (card.icon) }
                h3 { (card.title) }
            }
            p { (card.description) }
            div.card-footer {
                (difficulty_badge(card.difficulty))
                span.duration { (card.duration) }
                span.card-arrow { (Icon::ArrowRight) }
            }
        }
    }
}

fn feature_grid(features: &[Feature]) -> Markup {
    html! {
        div.feature-grid {
            @for feature in features {
                div.feature {
                    span.feature-icon { (feature.icon) }
                    h3 { (feature.title) }
                    p { (feature.description) }
                }
            }
        }
    }
}

fn deploy_guide(guide: &DeployGuide) -> Markup {
    html! {
        section.home-section.deploy {
            h2 { (guide.title) }
            p.lead { (guide.lead) }
            (feature_grid(&guide.features))
            h3 { (guide.guide_title) }
            ol.deploy-steps {
                @for step in &guide.steps {
                    li {
                        h4 { (step.title) }
                        p { (step.lead) }
                        @if let Some(command) = &step.command {
                            pre.command { code { (command) } }
                        }
                        @if !step.items.is_empty() {
                            ul {
                                @for item in &step.items { li { (item) } }
                            }
                        }
                    }
                }
            }
            div.callout {
                h4 { (guide.ideas.title) }
                ul {
                    @for item in &guide.ideas.items { li { (item) } }
                }
            }
            div.note {
                h4 { (guide.help.title) }
                p { (guide.help.text) }
            }
        }
    }
}

fn call_to_action(cta: &CallToAction, href: &str) -> Markup {
    html! {
        section.cta {
            h2 { (cta.title) }
            p { (cta.lead) }
            a.button.button-light href=(href) { (cta.label) }
        }
    }
}

/// Community projects page.
pub(crate) fn projects(page: &ProjectsPage) -> Content {
    let body = html! {
        header.page-header {
            h1 { (page.title) }
            p.lead { (page.lead) }
        }
        div.card-grid {
            @for project in &page.projects {
                (project_card(project))
            }
        }
    };

    Content {
        title: Some(page.title.clone()),
        body,
    }
}

fn project_card(project: &Project) -> Markup {
    html! {
        article.card.project-card {
            div.project-image {
                img src=(project.image) alt=(project.title) loading="lazy";
                (difficulty_badge(project.difficulty))
            }
            div.project-body {
                div.project-title {
                    h3 { (project.title) }
                    @if let Some(github) = &project.github {
                        a href=(github) target="_blank" rel="noopener noreferrer" aria-label="Source on GitHub" {
                            (Icon::ExternalLink)
                        }
                    }
                }
                p { (project.description) }
                div.tags {
                    @for category in &project.categories {
                        span.tag { (category) }
                    }
                }
                @if let Some(creator) = &project.creator {
                    p.creator { "Created by: " (creator) }
                }
            }
        }
    }
}
