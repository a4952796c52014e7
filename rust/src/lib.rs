//! Critical path planning with crew demand measurement.
//!
//! Given tasks with durations, precedence dependencies and crew sizes, this
//! crate computes each task's critical cost and early/late intervals, the total
//! project duration, a deterministic execution order, and the peak number of
//! crew members needed at the same time.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod config;
pub mod critical_path;
mod error;
pub mod graph;
pub mod leveling;
pub mod logging;
mod models;
pub mod sorting;

pub use config::{PlanConfig, TieBreak};
pub use critical_path::{evaluate, CriticalPathEngine, CriticalPathResult, TaskTiming};
pub use error::{DataError, PlanError};
pub use graph::{TaskGraph, TaskId};
pub use leveling::{demand_profile, peak_crew_demand, DemandInterval};
pub use models::{Crew, EvaluatedTask, Schedule, TaskDefinition};

/// Evaluate a task plan.
///
/// # Arguments
/// * `tasks` - Task definitions; identifiers must be unique and every dependency must exist
/// * `config` - Evaluation configuration (tie break, verbosity)
///
/// # Returns
/// * Schedule with tasks in execution order and the total duration
///
/// # Raises
/// * ValueError for invalid task data, a circular dependency, a duration overflow or a bad configuration
#[pyfunction]
#[pyo3(signature = (tasks, config=None))]
fn evaluate_plan(tasks: Vec<TaskDefinition>, config: Option<PlanConfig>) -> PyResult<Schedule> {
    let engine = CriticalPathEngine::new(config.unwrap_or_default());

    match engine.evaluate(&tasks) {
        Ok(schedule) => Ok(schedule),
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
    }
}

/// The crew_planner Python module.
#[pymodule]
fn crew_planner(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<Crew>()?;
    m.add_class::<TaskDefinition>()?;
    m.add_class::<EvaluatedTask>()?;
    m.add_class::<Schedule>()?;
    m.add_class::<DemandInterval>()?;

    // Config types
    m.add_class::<PlanConfig>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(evaluate_plan, m)?)?;

    Ok(())
}
