//! Rule engine for multi-criteria selection.
//!
//! Applies selection rules in sequence: the first rule decides, later
//! rules only break its ties.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{SchedulingContext, SelectionRule};
use crate::models::Process;

/// A composable rule engine for process selection.
///
/// Processes tied on every rule keep the order they were given in.
///
/// # Example
/// ```
/// use sched_sim::dispatching::{RuleEngine, SchedulingContext};
/// use sched_sim::dispatching::rules;
/// use sched_sim::models::Process;
///
/// let engine = RuleEngine::new().with_rule(rules::EarliestArrival);
/// let processes = vec![Process::new(1, 4, 1), Process::new(2, 0, 1)];
/// let order = engine.sort_indices(&processes, &SchedulingContext::at_time(0));
/// assert_eq!(order, vec![1, 0]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when earlier rules tie.
    pub fn with_tie_breaker<R: SelectionRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts processes by priority (highest priority first).
    ///
    /// Returns indices into `processes`. The sort is stable, so fully tied
    /// processes keep their input order.
    pub fn sort_indices(&self, processes: &[Process], context: &SchedulingContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b], context));
        indices
    }

    /// Returns the index of the highest-priority process.
    ///
    /// Among fully tied processes the earliest one in `processes` wins.
    pub fn select_best(&self, processes: &[Process], context: &SchedulingContext) -> Option<usize> {
        self.select_best_where(processes, context, |_| true)
    }

    /// Like [`select_best`](Self::select_best), restricted to processes
    /// accepted by `eligible`.
    pub fn select_best_where<F>(
        &self,
        processes: &[Process],
        context: &SchedulingContext,
        eligible: F,
    ) -> Option<usize>
    where
        F: Fn(&Process) -> bool,
    {
        let mut best: Option<usize> = None;
        for (idx, process) in processes.iter().enumerate() {
            if !eligible(process) {
                continue;
            }
            best = match best {
                Some(b) if self.compare(process, &processes[b], context) != Ordering::Less => {
                    Some(b)
                }
                _ => Some(idx),
            };
        }
        best
    }

    fn compare(&self, a: &Process, b: &Process, context: &SchedulingContext) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a, context).cmp(&rule.evaluate(b, context));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    #[test]
    fn test_spt_ordering() {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 0, 1),
            Process::new(3, 0, 3),
        ];
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);

        assert_eq!(engine.sort_indices(&processes, &ctx), vec![1, 2, 0]);
    }

    #[test]
    fn test_sequential_with_tie_breaker() {
        let processes = vec![
            Process::new(1, 3, 4),
            Process::new(2, 1, 4), // same burst, earlier arrival
        ];
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new()
            .with_rule(rules::ShortestBurst)
            .with_tie_breaker(rules::EarliestArrival);

        assert_eq!(engine.select_best(&processes, &ctx), Some(1));
    }

    #[test]
    fn test_input_order_is_stable() {
        let processes = vec![
            Process::new(9, 0, 2),
            Process::new(4, 0, 2),
            Process::new(6, 0, 2),
        ];
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::EarliestArrival);

        assert_eq!(engine.sort_indices(&processes, &ctx), vec![0, 1, 2]);
        assert_eq!(engine.select_best(&processes, &ctx), Some(0));
    }

    #[test]
    fn test_select_best_where() {
        let processes = vec![Process::new(1, 10, 1), Process::new(2, 0, 6)];
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);

        assert_eq!(engine.select_best(&processes, &ctx), Some(0));
        assert_eq!(
            engine.select_best_where(&processes, &ctx, |p| ctx.is_arrived(p)),
            Some(1)
        );
        assert_eq!(engine.select_best_where(&processes, &ctx, |_| false), None);
    }

    #[test]
    fn test_rule_names() {
        let engine = RuleEngine::new()
            .with_rule(rules::ShortestBurst)
            .with_tie_breaker(rules::EarliestArrival);
        assert_eq!(engine.rule_names(), vec!["SPT", "FIFO"]);
    }

    #[test]
    fn test_empty() {
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        assert!(engine.sort_indices(&[], &ctx).is_empty());
        assert!(engine.select_best(&[], &ctx).is_none());
    }
}
