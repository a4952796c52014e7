//! Critical path calculation using a topological order and forward passes.

use std::collections::VecDeque;

use crate::error::PlanError;
use crate::graph::{TaskGraph, TaskId};
use crate::{log_debug, log_passes};

use super::types::{CriticalPathResult, TaskTiming};

/// Order tasks so that every task comes after all of its predecessors (Kahn's algorithm).
///
/// The queue is seeded with source tasks in input order, so the result is
/// deterministic for a given input. If some tasks never reach in-degree zero
/// they sit on or behind a cycle and the whole calculation fails.
pub fn topological_order(graph: &TaskGraph<'_>) -> Result<Vec<TaskId>, PlanError> {
    let mut in_degree: Vec<usize> = graph
        .ids()
        .map(|id| graph.predecessors(id).len())
        .collect();

    let mut queue: VecDeque<TaskId> = graph.sources().into();
    let mut order: Vec<TaskId> = Vec::with_capacity(graph.len());

    while let Some(id) = queue.pop_front() {
        order.push(id);

        for &successor in graph.successors(id) {
            let degree = &mut in_degree[successor as usize];
            *degree -= 1;
            if *degree == 0 {
                queue.push_back(successor);
            }
        }
    }

    if order.len() != graph.len() {
        let blocked: Vec<TaskId> = graph
            .ids()
            .filter(|&id| in_degree[id as usize] > 0)
            .collect();
        return Err(PlanError::CyclicDependency(graph.sorted_names(&blocked)));
    }

    Ok(order)
}

/// `base + duration of id`, failing when the sum does not fit in a `u64`.
fn add_duration(graph: &TaskGraph<'_>, id: TaskId, base: u64) -> Result<u64, PlanError> {
    let task = graph.task(id);
    base
        .checked_add(task.duration)
        .ok_or_else(|| PlanError::DurationOverflow(task.id.clone()))
}

/// Critical cost of every task: its duration plus the largest critical cost
/// among its predecessors (0 for sources).
///
/// `order` must be a topological order of `graph`.
pub fn critical_costs(graph: &TaskGraph<'_>, order: &[TaskId]) -> Result<Vec<u64>, PlanError> {
    let mut costs = vec![0u64; graph.len()];

    for &id in order {
        let longest_before = graph
            .predecessors(id)
            .iter()
            .map(|&pred| costs[pred as usize])
            .max()
            .unwrap_or(0);
        costs[id as usize] = add_duration(graph, id, longest_before)?;
    }

    Ok(costs)
}

/// Earliest (start, finish) of every task.
///
/// Sources start at 0. Each task, once final, pushes its earliest finish
/// along its successor edges; a successor's earliest start only ever rises.
/// Visiting in topological order means each task is final when visited.
pub fn early_intervals(
    graph: &TaskGraph<'_>,
    order: &[TaskId],
) -> Result<Vec<(u64, u64)>, PlanError> {
    let mut intervals = vec![(0u64, 0u64); graph.len()];

    for &id in order {
        let idx = id as usize;
        let early_finish = add_duration(graph, id, intervals[idx].0)?;
        intervals[idx].1 = early_finish;

        for &successor in graph.successors(id) {
            let start = &mut intervals[successor as usize].0;
            if early_finish > *start {
                *start = early_finish;
            }
        }
    }

    Ok(intervals)
}

/// Project duration: the largest critical cost, 0 for no tasks.
pub fn total_duration(critical_costs: &[u64]) -> u64 {
    critical_costs.iter().copied().max().unwrap_or(0)
}

/// Run all passes over the graph.
///
/// Late intervals are derived from the project duration:
/// `late_start = total_duration - critical_cost`, `late_finish = late_start + cost`.
///
/// # Errors
/// * `PlanError::CyclicDependency` if the graph has a cycle
/// * `PlanError::DurationOverflow` if a path's summed durations exceed `u64::MAX`
pub fn calculate_critical_path(
    graph: &TaskGraph<'_>,
    verbosity: u8,
) -> Result<CriticalPathResult, PlanError> {
    let order = topological_order(graph)?;
    log_passes!(verbosity, "Topological order covers {} tasks", order.len());

    let costs = critical_costs(graph, &order)?;
    let total = total_duration(&costs);
    let early = early_intervals(graph, &order)?;
    log_passes!(verbosity, "Critical cost pass done, total duration {}", total);

    let timings = graph
        .ids()
        .map(|id| -> Result<TaskTiming, PlanError> {
            let idx = id as usize;
            let cost = graph.task(id).duration;
            let critical_cost = costs[idx];
            let (early_start, early_finish) = early[idx];
            let late_start = total - critical_cost;

            log_debug!(
                verbosity,
                "  {}: cost={} critical={} early=[{}-{}] late_start={}",
                graph.task(id).id,
                cost,
                critical_cost,
                early_start,
                early_finish,
                late_start
            );

            Ok(TaskTiming {
                critical_cost,
                early_start,
                early_finish,
                late_start,
                late_finish: add_duration(graph, id, late_start)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CriticalPathResult {
        timings,
        topological_order: order,
        total_duration: total,
    })
}
