//! Not-found page and render error panel.

use maud::html;

use super::Content;

/// Content slot for a path with no route.
pub(crate) fn not_found(path: &str, home_href: &str) -> Content {
    let body = html! {
        section.status-page {
            p.status-code { "404" }
            h1 { "Page not found" }
            p { "There is no page at " code { (path) } "." }
            a.button.button-primary href=(home_href) { "Back to home" }
        }
    };

    Content {
        title: Some("Page not found".to_owned()),
        body,
    }
}

/// Content slot shown when a page fails to render.
pub(crate) fn error_panel(message: &str) -> Content {
    let body = html! {
        div.error-panel role="alert" {
            h1 { "This page failed to render" }
            p { "The rest of the site still works. Pick another page from the navigation." }
            pre { (message) }
        }
    };

    Content {
        title: Some("Error".to_owned()),
        body,
    }
}
