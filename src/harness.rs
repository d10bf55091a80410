//! Run and phase boundary signals for an external measurement harness.
use std::sync::Arc;

use tracing::info;

use crate::args::HarnessKind;

/// Phase code sent once the client is set up and about to start warmup.
pub const RUN_STARTED_CODE: u32 = 20;
/// Phase code sent when warmup finished and measurement begins.
pub const WARMUP_COMPLETE_CODE: u32 = 4;

/// Receives boundary notifications. Implementations must not block.
pub trait HarnessSignal: Send + Sync {
    fn run_started(&self, code: u32);

    fn warmup_complete(&self, code: u32);

    /// Called during measurement with the number of results received so far.
    fn progress(&self, completed: usize);
}

/// Default backend; ignores every signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHarness;

impl HarnessSignal for NoopHarness {
    fn run_started(&self, _code: u32) {}

    fn warmup_complete(&self, _code: u32) {}

    fn progress(&self, _completed: usize) {}
}

/// Emits each signal as a structured log event under the `harness` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHarness;

impl HarnessSignal for LogHarness {
    fn run_started(&self, code: u32) {
        info!(target: "harness", phase_code = code, counter = 0_usize, "run started");
    }

    fn warmup_complete(&self, code: u32) {
        info!(target: "harness", phase_code = code, counter = 0_usize, "warmup complete");
    }

    fn progress(&self, completed: usize) {
        info!(target: "harness", phase_code = 0_u32, counter = completed, "work end");
    }
}

#[must_use]
pub fn build_harness(kind: HarnessKind) -> Arc<dyn HarnessSignal> {
    match kind {
        HarnessKind::None => Arc::new(NoopHarness),
        HarnessKind::Log => Arc::new(LogHarness),
    }
}

