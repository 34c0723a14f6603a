//! Simulated compiler.
//!
//! Nothing is parsed or compiled. After a fixed delay the outcome is decided
//! by two rules: a source containing the literal substring `error` always
//! fails, and any other source fails when the injected [`FailureRoll`] says
//! so (10% of the time with the default [`RandomFailure`]).

use std::sync::Arc;
use std::time::Duration;

use rand::RngExt;
use serde::Serialize;

/// Substring that makes a compile fail deterministically (case-sensitive).
pub const ERROR_TRIGGER: &str = "error";

/// Output shown after a successful compile.
pub const SUCCESS_MESSAGE: &str = "Compilation successful! Contract ready for deployment.";

/// Output shown after a failed compile.
pub const FAILURE_MESSAGE: &str = "Error: Something went wrong in your code. Check for syntax errors.";

/// Default probability that a clean source still fails.
pub const DEFAULT_FAILURE_RATE: f64 = 0.1;

/// Default simulated latency.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Result of a simulated compile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompileOutcome {
    Success,
    Failure,
}

impl CompileOutcome {
    /// Output panel message for this outcome.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Success => SUCCESS_MESSAGE,
            Self::Failure => FAILURE_MESSAGE,
        }
    }
}

/// Source of the random noise applied to clean sources.
pub trait FailureRoll: Send + Sync {
    /// Returns true if this compile should fail.
    fn roll(&self) -> bool;
}

/// Fails with a fixed probability using the thread-local RNG.
#[derive(Clone, Copy, Debug)]
pub struct RandomFailure {
    rate: f64,
}

impl RandomFailure {
    /// Create a roll failing with probability `rate`, clamped to `[0, 1]`.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        let rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
        Self { rate }
    }
}

impl Default for RandomFailure {
    fn default() -> Self {
        Self::new(DEFAULT_FAILURE_RATE)
    }
}

impl FailureRoll for RandomFailure {
    fn roll(&self) -> bool {
        rand::rng().random_bool(self.rate)
    }
}

/// Always returns the same decision.
#[derive(Clone, Copy, Debug)]
pub struct FixedRoll(pub bool);

impl FailureRoll for FixedRoll {
    fn roll(&self) -> bool {
        self.0
    }
}

/// Mock compiler with injectable latency and randomness.
#[derive(Clone)]
pub struct MockCompiler {
    delay: Duration,
    roll: Arc<dyn FailureRoll>,
}

impl MockCompiler {
    /// Create a compiler with the given delay and failure roll.
    #[must_use]
    pub fn new(delay: Duration, roll: Arc<dyn FailureRoll>) -> Self {
        Self { delay, roll }
    }

    /// Create a compiler that fails clean sources at random with `failure_rate`.
    #[must_use]
    pub fn with_failure_rate(delay: Duration, failure_rate: f64) -> Self {
        Self::new(delay, Arc::new(RandomFailure::new(failure_rate)))
    }

    /// Simulated latency.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Decide the outcome for `source` without waiting.
    #[must_use]
    pub fn judge(&self, source: &str) -> CompileOutcome {
        if source.contains(ERROR_TRIGGER) || self.roll.roll() {
            CompileOutcome::Failure
        } else {
            CompileOutcome::Success
        }
    }

    /// Wait for the simulated delay, then judge `source`.
    pub async fn compile(&self, source: &str) -> CompileOutcome {
        tokio::time::sleep(self.delay).await;
        self.judge(source)
    }
}

impl Default for MockCompiler {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY, Arc::new(RandomFailure::default()))
    }
}

impl std::fmt::Debug for MockCompiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockCompiler")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}
