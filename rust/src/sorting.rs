//! Execution ordering of evaluated tasks.
//!
//! Tasks run in ascending early start. Ties are broken by either:
//! - `Identifier`: lexicographic task id, so the sequence does not depend on input order
//! - `InputOrder`: position of the task in the input collection

use crate::config::TieBreak;
use crate::critical_path::TaskTiming;
use crate::graph::{TaskGraph, TaskId};

/// Secondary key for tasks sharing an early start.
///
/// Derived `Ord` compares the variant first, so keys built with different tie
/// breaks still order consistently with `Eq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TieKey<'a> {
    Identifier(&'a str),
    InputOrder(TaskId),
}

/// Sort key for execution ordering: (early_start, tie).
///
/// Implements `Ord` so tasks can be sorted (lower = runs earlier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExecutionKey<'a> {
    pub early_start: u64,
    pub tie: TieKey<'a>,
}

/// Compute the execution key for one task.
pub fn execution_key<'a>(
    graph: &TaskGraph<'a>,
    timings: &[TaskTiming],
    id: TaskId,
    tie_break: TieBreak,
) -> ExecutionKey<'a> {
    let tie = match tie_break {
        TieBreak::Identifier => TieKey::Identifier(graph.task(id).id.as_str()),
        TieBreak::InputOrder => TieKey::InputOrder(id),
    };
    ExecutionKey {
        early_start: timings[id as usize].early_start,
        tie,
    }
}

/// All task indices of `graph` in execution order.
pub fn execution_order(
    graph: &TaskGraph<'_>,
    timings: &[TaskTiming],
    tie_break: TieBreak,
) -> Vec<TaskId> {
    let mut keyed: Vec<(ExecutionKey<'_>, TaskId)> = graph
        .ids()
        .map(|id| (execution_key(graph, timings, id, tie_break), id))
        .collect();

    keyed.sort_unstable();
    keyed.into_iter().map(|(_, id)| id).collect()
}
