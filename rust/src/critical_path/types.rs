//! Types for critical path calculation.

use crate::graph::TaskId;

/// `late_start - early_start`, clamped to the `i64` range.
pub fn slack_between(late_start: u64, early_start: u64) -> i64 {
    let slack = i128::from(late_start) - i128::from(early_start);
    slack.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// Per-task timing information, in whole time units from project start.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskTiming {
    /// Longest duration-weighted path ending at this task (inclusive).
    pub critical_cost: u64,
    /// Earliest possible start time (from forward pass).
    pub early_start: u64,
    /// Earliest possible finish time (from forward pass).
    pub early_finish: u64,
    /// `total_duration - critical_cost`.
    pub late_start: u64,
    pub late_finish: u64,
}

impl TaskTiming {
    /// Slack = late_start - early_start.
    pub fn slack(&self) -> i64 {
        slack_between(self.late_start, self.early_start)
    }
}

/// Result of the critical path passes over a whole task graph.
#[derive(Clone, Debug, Default)]
pub struct CriticalPathResult {
    /// Timings indexed by [`TaskId`].
    pub timings: Vec<TaskTiming>,
    /// Dependencies-first order the passes ran in.
    pub topological_order: Vec<TaskId>,
    /// Maximum critical cost over all tasks, 0 when there are none.
    pub total_duration: u64,
}
