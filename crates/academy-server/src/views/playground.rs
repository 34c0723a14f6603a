//! Playground page.
//!
//! The page renders the initial state; `app.js` drives a playground session
//! through the JSON API (or a local fallback when no server is available).

use academy_playground::{Playground, TEMPLATES};
use academy_site::{Icon, Sidebar};
use maud::{PreEscaped, html};

use super::Content;

const STEPS: [(&str, &str); 5] = [
    ("Select a Template", "from the options above or start from scratch"),
    ("Edit the Code", "in the editor to experiment with Solidity"),
    ("Click Compile", "to check your code for errors"),
    ("View Results", "in the output panel below the editor"),
    ("Download", "your code when you're ready to use it"),
];

/// Template picker, editor, output panel and usage notes.
pub(crate) fn playground(state: &Playground, sidebar: &Sidebar) -> Content {
    let selected = state.template();
    let base = sidebar.href("/playground");
    let separator = if base.contains('?') { '&' } else { '?' };
    let snapshot = state.snapshot();

    let body = html! {
        header.page-header {
            h1 { "Solidity Playground" }
            p.lead {
                "Experiment with Solidity code in our interactive playground. "
                "Write, edit, and test your smart contracts without any setup."
            }
        }
        div.template-picker {
            @for template in TEMPLATES {
                a.template-button.selected[template.id == selected.id]
                    href={ (base) (separator) "template=" (template.id) }
                    data-template=(template.id) {
                    (template.name)
                }
            }
        }
        div.template-info {
            h2 data-template-name { (selected.name) }
            p data-template-description { (selected.description) }
        }
        div.playground data-playground data-template=(selected.id) {
            div.editor-toolbar {
                span.editor-title { "Solidity Editor" }
                div.editor-actions {
                    button.action-compile type="button" data-action="compile" title="Compile"
                        disabled[!snapshot.can_compile] {
                        (Icon::Play)
                    }
                    button.action-download type="button" data-action="download" title="Download" {
                        (Icon::Download)
                    }
                    button.action-reset type="button" data-action="reset" title="Reset" {
                        (Icon::Trash)
                    }
                }
            }
            textarea.editor data-editor spellcheck="false" aria-label="Solidity source" rows="24" {
                (snapshot.source)
            }
            div.output data-output data-status=(status_name(&snapshot.result)) {
                pre { (snapshot.output) }
            }
        }
        script type="application/json" data-templates { (PreEscaped(templates_json())) }
        section.how-to {
            h2 { "How to Use the Playground" }
            ol {
                @for (title, text) in STEPS {
                    li { strong { (title) } " " (text) }
                }
            }
        }
    };

    Content {
        title: Some("Playground".to_owned()),
        body,
    }
}

/// Template catalog for the offline fallback in `app.js`.
fn templates_json() -> String {
    serde_json::to_string(TEMPLATES)
        .unwrap_or_else(|_| "[]".to_owned())
        .replace("</", "<\\/")
}

fn status_name(result: &academy_playground::CompileResult) -> &'static str {
    use academy_playground::CompileResult;

    match result {
        CompileResult::Idle => "idle",
        CompileResult::Compiling => "compiling",
        CompileResult::Succeeded(_) => "succeeded",
        CompileResult::Failed(_) => "failed",
    }
}
