//! Mock Solidity playground.
//!
//! Nothing here compiles Solidity. The playground keeps an editor buffer
//! seeded from a small template registry and simulates a compile: after a
//! fixed delay the result is a failure if the source contains `error`, and a
//! random failure 10% of the time otherwise.
//!
//! - [`Playground`]: the synchronous state machine for one widget
//! - [`MockCompiler`]: delay plus decision rule, with an injectable [`FailureRoll`]
//! - [`PlaygroundSession`]: a playground driving its compile as a tokio task
//! - [`SessionRegistry`]: sessions keyed by id with idle expiry

mod compiler;
mod error;
mod registry;
mod session;
mod state;
mod templates;

pub use compiler::{
    CompileOutcome, DEFAULT_DELAY, DEFAULT_FAILURE_RATE, ERROR_TRIGGER, FAILURE_MESSAGE,
    FailureRoll, FixedRoll, MockCompiler, RandomFailure, SUCCESS_MESSAGE,
};
pub use error::PlaygroundError;
pub use registry::SessionRegistry;
pub use session::{PlaygroundSession, SessionSnapshot};
pub use state::{
    COMPILING_MESSAGE, CompileResult, CompileTicket, DOWNLOAD_FILENAME, Download, IDLE_MESSAGE,
    Playground, PlaygroundSnapshot,
};
pub use templates::{TEMPLATES, Template, default_template, find_template};
