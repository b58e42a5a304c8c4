//! Scheduling context for selection rule evaluation.

use crate::models::Process;

/// Runtime scheduling state passed to selection rules.
///
/// All times are in ticks relative to the simulation epoch (t=0).
#[derive(Debug, Clone, Copy, Default)]
pub struct SchedulingContext {
    /// Current simulation clock.
    pub current_time: i64,
}

impl SchedulingContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: i64) -> Self {
        Self { current_time }
    }

    /// Whether `process` has arrived by the current clock.
    #[inline]
    pub fn is_arrived(&self, process: &Process) -> bool {
        process.has_arrived(self.current_time)
    }
}
