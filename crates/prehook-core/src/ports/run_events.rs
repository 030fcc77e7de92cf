//! Progress events emitted while a run is in flight.

use crate::domain::HookResult;

/// Progress of a run.
#[derive(Debug, Clone)]
pub enum RunEvent {
    /// A hook is about to be evaluated.
    HookStarted { id: String, name: String },
    /// A hook finished (including skips).
    HookFinished(HookResult),
    /// The short-circuit flag stopped the run after `id` failed.
    StoppedEarly { id: String, remaining: usize },
}

/// Trait for receiving run progress.
///
/// # Implementations
///
/// - `NoopRunEvents` - For tests and JSON output
/// - The CLI's terminal printer
pub trait RunEventSink: Send + Sync {
    /// Receive an event. Must not block.
    fn emit(&self, event: RunEvent);
}

/// A sink that discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRunEvents;

impl RunEventSink for NoopRunEvents {
    fn emit(&self, _event: RunEvent) {
        // Intentionally do nothing
    }
}
