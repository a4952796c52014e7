//! Resource leveling: simultaneous crew demand over the early schedule.
//!
//! Every distinct early start and early finish is a breakpoint. Adjacent
//! breakpoints bound half-open elementary intervals; since no task starts or
//! ends strictly inside one, demand is constant across each of them and the
//! peak is the largest interval total.

use pyo3::prelude::*;

use crate::models::EvaluatedTask;

/// One elementary interval `[start, end)` and the crew needed during it.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemandInterval {
    #[pyo3(get)]
    pub start: u64,
    #[pyo3(get)]
    pub end: u64,
    #[pyo3(get)]
    pub demand: u64,
}

#[pymethods]
impl DemandInterval {
    fn __repr__(&self) -> String {
        format!(
            "DemandInterval(start={}, end={}, demand={})",
            self.start, self.end, self.demand
        )
    }
}

/// Sorted, distinct early start/finish values of all tasks.
fn breakpoints(tasks: &[EvaluatedTask]) -> Vec<u64> {
    let mut points: Vec<u64> = tasks
        .iter()
        .flat_map(|task| [task.early_start, task.early_finish])
        .collect();
    points.sort_unstable();
    points.dedup();
    points
}

/// Crew demand for each elementary interval, in time order.
///
/// A task contributes its crew size to every interval lying inside its
/// `[early_start, early_finish)` range. Tasks without a crew contribute 0 and
/// zero-length tasks cover no interval. Fewer than two breakpoints give an
/// empty profile.
pub fn demand_profile(tasks: &[EvaluatedTask]) -> Vec<DemandInterval> {
    let points = breakpoints(tasks);
    if points.len() < 2 {
        return Vec::new();
    }

    // Difference array over breakpoint positions: +crew where a task starts,
    // -crew where it finishes.
    let mut delta = vec![0i64; points.len()];
    for task in tasks {
        let crew = i64::from(task.crew_size());
        if crew == 0 || task.early_finish <= task.early_start {
            continue;
        }
        if let (Ok(first), Ok(last)) = (
            points.binary_search(&task.early_start),
            points.binary_search(&task.early_finish),
        ) {
            delta[first] += crew;
            delta[last] -= crew;
        }
    }

    let mut running = 0i64;
    points
        .windows(2)
        .zip(delta)
        .map(|(bounds, change)| {
            running += change;
            DemandInterval {
                start: bounds[0],
                end: bounds[1],
                demand: running.max(0) as u64,
            }
        })
        .collect()
}

/// Maximum crew members needed at the same time, 0 for no intervals.
pub fn peak_crew_demand(tasks: &[EvaluatedTask]) -> u64 {
    demand_profile(tasks)
        .iter()
        .map(|interval| interval.demand)
        .max()
        .unwrap_or(0)
}
