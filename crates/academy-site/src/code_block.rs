//! Read-only code block component.

use std::collections::HashMap;

use maud::{Markup, Render, html};

use crate::icon::Icon;

/// Language assumed when a fence carries no info string.
pub const DEFAULT_LANGUAGE: &str = "solidity";

/// Formatted source listing with an optional title bar and a copy button.
///
/// The copy action is wired up client-side through the `data-copy` button;
/// failures are reported to the browser console only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeBlock<'a> {
    /// Source text.
    pub code: &'a str,
    /// Language tag (e.g., `solidity`, `bash`).
    pub language: &'a str,
    /// Optional file name shown in the title bar.
    pub title: Option<&'a str>,
    /// Whether to show a line-number gutter.
    pub line_numbers: bool,
}

impl<'a> CodeBlock<'a> {
    /// Code block with default options.
    #[must_use]
    pub fn new(code: &'a str) -> Self {
        Self {
            code,
            language: DEFAULT_LANGUAGE,
            title: None,
            line_numbers: true,
        }
    }
}

impl Render for CodeBlock<'_> {
    fn render(&self) -> Markup {
        let code = self.code.strip_suffix('\n').unwrap_or(self.code);
        html! {
            div.code-block data-language=(self.language) {
                @if let Some(title) = self.title {
                    div.code-block-title {
                        span { (title) }
                        (copy_button())
                    }
                } @else {
                    div.code-block-floating { (copy_button()) }
                }
                pre.code-block-body.with-line-numbers[self.line_numbers] {
                    code class={ "language-" (self.language) } {
                        @for (index, line) in code.split('\n').enumerate() {
                            span.line {
                                @if self.line_numbers {
                                    span.line-number aria-hidden="true" { (index + 1) }
                                }
                                span.line-content { (line) }
                            }
                            "\n"
                        }
                    }
                }
            }
        }
    }
}

fn copy_button() -> Markup {
    html! {
        button.copy-button type="button" data-copy aria-label="Copy code" title="Copy code" {
            span.copy-idle { (Icon::Copy) }
            span.copy-done { (Icon::Check) }
        }
    }
}

/// Parse a fence info string into language and attributes.
///
/// Format: `language [key=value ...]`, e.g. `solidity title=Token.sol lines=false`.
#[must_use]
pub(crate) fn parse_fence_info(info: &str) -> (String, HashMap<String, String>) {
    let mut parts = info.split_whitespace();
    let language = parts.next().unwrap_or(DEFAULT_LANGUAGE).to_owned();

    let mut attrs = HashMap::new();
    for part in parts {
        if let Some((key, value)) = part.split_once('=') {
            let value = value.trim_matches('"').trim_matches('\'');
            attrs.insert(key.to_owned(), value.to_owned());
        }
    }

    (language, attrs)
}

/// Render a fenced block from its info string and body.
pub(crate) fn render_fenced(info: &str, code: &str) -> Markup {
    let (language, attrs) = parse_fence_info(info);
    CodeBlock {
        code,
        language: &language,
        title: attrs.get("title").map(String::as_str),
        line_numbers: attrs.get("lines").is_none_or(|v| v != "false"),
    }
    .render()
}
