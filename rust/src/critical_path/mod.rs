//! Critical path method over a whole task set.
//!
//! Per task this computes the critical cost (longest duration-weighted path
//! ending at the task), early and late intervals, and the project duration.
//! Cyclic dependencies abort the evaluation.

mod calculation;
mod engine;
mod types;

pub use calculation::{
    calculate_critical_path, critical_costs, early_intervals, topological_order, total_duration,
};
pub use engine::{evaluate, CriticalPathEngine};
pub use types::{slack_between, CriticalPathResult, TaskTiming};
