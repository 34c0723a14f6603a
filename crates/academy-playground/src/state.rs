//! Playground editor state machine.
//!
//! ```text
//!            begin_compile              complete_compile
//!   Idle ─────────────────► Compiling ─────────────────► Succeeded | Failed
//!    ▲                          │                                │
//!    └──── select_template / reset (from any state) ◄────────────┘
//! ```
//!
//! Every transition that invalidates an in-flight compile bumps a generation
//! counter. A [`CompileTicket`] carries the generation it was issued for, and
//! its result is discarded if the state has moved on since.

use serde::Serialize;

use crate::compiler::CompileOutcome;
use crate::error::PlaygroundError;
use crate::templates::{Template, default_template, find_template};

/// Output panel text before any compile.
pub const IDLE_MESSAGE: &str = "Compile your code to see the output here";

/// Output panel text while a compile is in flight.
pub const COMPILING_MESSAGE: &str = "Compiling...";

/// File name offered by [`Playground::download`].
pub const DOWNLOAD_FILENAME: &str = "Contract.sol";

/// Compile status shown in the output panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum CompileResult {
    Idle,
    Compiling,
    Succeeded(String),
    Failed(String),
}

impl CompileResult {
    /// Text for the output panel.
    #[must_use]
    pub fn output_text(&self) -> &str {
        match self {
            Self::Idle => IDLE_MESSAGE,
            Self::Compiling => COMPILING_MESSAGE,
            Self::Succeeded(message) | Self::Failed(message) => message,
        }
    }

    fn from_outcome(outcome: CompileOutcome) -> Self {
        match outcome {
            CompileOutcome::Success => Self::Succeeded(outcome.message().to_owned()),
            CompileOutcome::Failure => Self::Failed(outcome.message().to_owned()),
        }
    }
}

/// Claim on a started compile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileTicket {
    generation: u64,
    source: String,
}

impl CompileTicket {
    /// Source text captured when the compile started.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Generation the ticket was issued for.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Source text packaged as a file download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    pub filename: &'static str,
    pub content_type: &'static str,
    pub content: String,
}

/// Serializable view of a playground.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundSnapshot {
    /// Selected template id.
    pub template: &'static str,
    pub source: String,
    pub result: CompileResult,
    /// Output panel text for `result`.
    pub output: String,
    /// False while a compile is in flight.
    pub can_compile: bool,
}

/// Editor buffer, selected template and compile status of one widget.
#[derive(Clone, Debug)]
pub struct Playground {
    template: &'static Template,
    source: String,
    result: CompileResult,
    generation: u64,
}

impl Default for Playground {
    fn default() -> Self {
        Self::new()
    }
}

impl Playground {
    /// Create a playground with the default template loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::from_template(default_template())
    }

    /// Create a playground with the given template loaded.
    pub fn with_template(id: &str) -> Result<Self, PlaygroundError> {
        find_template(id)
            .map(Self::from_template)
            .ok_or_else(|| PlaygroundError::UnknownTemplate(id.to_owned()))
    }

    fn from_template(template: &'static Template) -> Self {
        Self {
            template,
            source: template.source.to_owned(),
            result: CompileResult::Idle,
            generation: 0,
        }
    }

    /// Currently selected template.
    #[must_use]
    pub fn template(&self) -> &'static Template {
        self.template
    }

    /// Current editor buffer.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Current compile status.
    #[must_use]
    pub fn result(&self) -> &CompileResult {
        &self.result
    }

    /// Load a template, replacing the buffer and clearing the result.
    ///
    /// An unknown id leaves the state untouched.
    pub fn select_template(&mut self, id: &str) -> Result<(), PlaygroundError> {
        let template =
            find_template(id).ok_or_else(|| PlaygroundError::UnknownTemplate(id.to_owned()))?;
        self.template = template;
        self.restore();
        Ok(())
    }

    /// Replace the buffer. The last compile result stays visible.
    pub fn edit_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    /// Whether the compile trigger is enabled.
    #[must_use]
    pub fn can_compile(&self) -> bool {
        self.result != CompileResult::Compiling
    }

    /// Enter `Compiling` and hand out a ticket for the current buffer.
    ///
    /// Returns `None` if a compile is already in flight.
    pub fn begin_compile(&mut self) -> Option<CompileTicket> {
        if !self.can_compile() {
            return None;
        }
        self.generation += 1;
        self.result = CompileResult::Compiling;
        Some(CompileTicket {
            generation: self.generation,
            source: self.source.clone(),
        })
    }

    /// Apply a compile outcome.
    ///
    /// Returns false, leaving the state untouched, if the ticket is stale.
    pub fn complete_compile(&mut self, ticket: &CompileTicket, outcome: CompileOutcome) -> bool {
        if ticket.generation != self.generation || self.result != CompileResult::Compiling {
            return false;
        }
        self.result = CompileResult::from_outcome(outcome);
        true
    }

    /// Restore the selected template's source and clear the result.
    pub fn reset(&mut self) {
        self.restore();
    }

    fn restore(&mut self) {
        self.generation += 1;
        self.source = self.template.source.to_owned();
        self.result = CompileResult::Idle;
    }

    /// Package the buffer as `Contract.sol`.
    #[must_use]
    pub fn download(&self) -> Download {
        Download {
            filename: DOWNLOAD_FILENAME,
            content_type: "text/plain",
            content: self.source.clone(),
        }
    }

    /// Serializable view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> PlaygroundSnapshot {
        PlaygroundSnapshot {
            template: self.template.id,
            source: self.source.clone(),
            result: self.result.clone(),
            output: self.result.output_text().to_owned(),
            can_compile: self.can_compile(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::compiler::{FAILURE_MESSAGE, SUCCESS_MESSAGE};
    use crate::templates::TEMPLATES;

    #[test]
    fn test_new_loads_default_template() {
        let playground = Playground::new();
        assert_eq!(playground.template().id, "hello-world");
        assert_eq!(playground.source(), default_template().source);
        assert_eq!(playground.result(), &CompileResult::Idle);
        assert!(playground.can_compile());
    }

    #[test]
    fn test_select_template_resets_from_any_state() {
        for template in TEMPLATES {
            let mut succeeded = Playground::new();
            succeeded.edit_source("edited");
            let ticket = succeeded.begin_compile().unwrap();
            succeeded.complete_compile(&ticket, CompileOutcome::Success);

            let mut compiling = Playground::new();
            compiling.begin_compile();

            let mut failed = Playground::new();
            let ticket = failed.begin_compile().unwrap();
            failed.complete_compile(&ticket, CompileOutcome::Failure);

            for mut playground in [Playground::new(), succeeded, compiling, failed] {
                playground.select_template(template.id).unwrap();
                assert_eq!(playground.source(), template.source);
                assert_eq!(playground.result(), &CompileResult::Idle);
                assert_eq!(playground.template().id, template.id);
            }
        }
    }

    #[test]
    fn test_select_erc20_template() {
        let mut playground = Playground::new();
        playground.select_template("erc20").unwrap();
        assert_eq!(playground.source(), include_str!("../templates/erc20.sol"));
        assert_eq!(playground.result(), &CompileResult::Idle);
    }

    #[test]
    fn test_select_unknown_template_leaves_state() {
        let mut playground = Playground::new();
        playground.edit_source("my code");
        let ticket = playground.begin_compile().unwrap();

        let err = playground.select_template("vyper").unwrap_err();
        assert!(matches!(err, PlaygroundError::UnknownTemplate(ref id) if id == "vyper"));
        assert_eq!(playground.source(), "my code");
        assert_eq!(playground.result(), &CompileResult::Compiling);
        assert!(playground.complete_compile(&ticket, CompileOutcome::Success));
    }

    #[test]
    fn test_edit_keeps_stale_result() {
        let mut playground = Playground::new();
        let ticket = playground.begin_compile().unwrap();
        playground.complete_compile(&ticket, CompileOutcome::Success);
        playground.edit_source("contract B {}");
        assert_eq!(
            playground.result(),
            &CompileResult::Succeeded(SUCCESS_MESSAGE.to_owned())
        );
        assert_eq!(playground.source(), "contract B {}");
    }

    #[test]
    fn test_begin_compile_while_compiling_is_rejected() {
        let mut playground = Playground::new();
        let first = playground.begin_compile().unwrap();
        assert!(!playground.can_compile());
        assert!(playground.begin_compile().is_none());

        assert!(playground.complete_compile(&first, CompileOutcome::Failure));
        assert!(!playground.complete_compile(&first, CompileOutcome::Success));
        assert_eq!(
            playground.result(),
            &CompileResult::Failed(FAILURE_MESSAGE.to_owned())
        );
    }

    #[test]
    fn test_ticket_captures_source() {
        let mut playground = Playground::new();
        playground.edit_source("before");
        let ticket = playground.begin_compile().unwrap();
        playground.edit_source("after");
        assert_eq!(ticket.source(), "before");
        assert!(playground.complete_compile(&ticket, CompileOutcome::Success));
    }

    #[test]
    fn test_stale_ticket_after_template_change() {
        let mut playground = Playground::new();
        let ticket = playground.begin_compile().unwrap();
        playground.select_template("dao").unwrap();
        assert!(!playground.complete_compile(&ticket, CompileOutcome::Failure));
        assert_eq!(playground.result(), &CompileResult::Idle);
    }

    #[test]
    fn test_stale_ticket_after_reset_and_recompile() {
        let mut playground = Playground::new();
        let old = playground.begin_compile().unwrap();
        playground.reset();
        let new = playground.begin_compile().unwrap();

        assert!(!playground.complete_compile(&old, CompileOutcome::Failure));
        assert_eq!(playground.result(), &CompileResult::Compiling);
        assert!(playground.complete_compile(&new, CompileOutcome::Success));
        assert_eq!(
            playground.result(),
            &CompileResult::Succeeded(SUCCESS_MESSAGE.to_owned())
        );
    }

    #[test]
    fn test_reset_restores_selected_template() {
        let mut playground = Playground::with_template("nft").unwrap();
        playground.edit_source("scratch");
        playground.reset();
        assert_eq!(playground.source(), include_str!("../templates/nft.sol"));
        assert_eq!(playground.result(), &CompileResult::Idle);
    }

    #[test]
    fn test_with_unknown_template() {
        assert!(matches!(
            Playground::with_template("nope"),
            Err(PlaygroundError::UnknownTemplate(_))
        ));
    }

    #[test]
    fn test_download_does_not_mutate() {
        let mut playground = Playground::new();
        playground.edit_source("pragma solidity ^0.8.0;");
        let download = playground.download();
        assert_eq!(
            download,
            Download {
                filename: "Contract.sol",
                content_type: "text/plain",
                content: "pragma solidity ^0.8.0;".to_owned(),
            }
        );
        assert_eq!(playground.result(), &CompileResult::Idle);
    }

    #[test]
    fn test_output_text() {
        assert_eq!(
            CompileResult::Idle.output_text(),
            "Compile your code to see the output here"
        );
        assert_eq!(CompileResult::Compiling.output_text(), "Compiling...");
        assert_eq!(CompileResult::Failed("x".to_owned()).output_text(), "x");
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut playground = Playground::new();
        playground.begin_compile();
        let json = serde_json::to_value(playground.snapshot()).unwrap();
        assert_eq!(json["template"], "hello-world");
        assert_eq!(json["result"]["status"], "compiling");
        assert_eq!(json["output"], "Compiling...");
        assert_eq!(json["canCompile"], false);

        let ticket = CompileTicket {
            generation: playground.generation,
            source: String::new(),
        };
        playground.complete_compile(&ticket, CompileOutcome::Failure);
        let json = serde_json::to_value(playground.snapshot()).unwrap();
        assert_eq!(json["result"]["status"], "failed");
        assert_eq!(json["result"]["message"], FAILURE_MESSAGE);
        assert_eq!(json["canCompile"], true);
    }
}
