//! Built-in selection rules.
//!
//! # Score Convention
//! All rules return lower scores for higher priority processes.

use super::{RuleScore, SchedulingContext, SelectionRule};
use crate::models::Process;

/// Shortest Processing Time.
///
/// Prioritizes processes with the smaller total burst. This is the
/// ordering behind non-preemptive SJF.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// First In First Out.
///
/// Prioritizes processes that arrived earlier.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl SelectionRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spt() {
        let ctx = SchedulingContext::at_time(0);
        let short = Process::new(1, 5, 2);
        let long = Process::new(2, 0, 9);
        assert!(ShortestBurst.evaluate(&short, &ctx) < ShortestBurst.evaluate(&long, &ctx));
    }

    #[test]
    fn test_fifo() {
        let ctx = SchedulingContext::at_time(0);
        let early = Process::new(1, 0, 9);
        let late = Process::new(2, 4, 1);
        assert!(EarliestArrival.evaluate(&early, &ctx) < EarliestArrival.evaluate(&late, &ctx));
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(ShortestBurst.name(), "SPT");
        assert_eq!(EarliestArrival.description(), "First In First Out");
    }
}
