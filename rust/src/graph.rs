//! Task graph construction: resolves dependency identifiers into an index-based arena.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::DataError;
use crate::models::TaskDefinition;

/// Node index in a [`TaskGraph`]; follows input order.
pub type TaskId = u32;

/// Precedence graph over a borrowed slice of task definitions.
///
/// Predecessors and successors are stored as index lists per node, so the
/// graph has no reference cycles and lives only as long as one evaluation.
#[derive(Debug)]
pub struct TaskGraph<'a> {
    tasks: &'a [TaskDefinition],
    index: FxHashMap<&'a str, TaskId>,
    predecessors: Vec<Vec<TaskId>>,
    successors: Vec<Vec<TaskId>>,
}

impl<'a> TaskGraph<'a> {
    /// Build the graph, failing on empty or duplicate identifiers and on
    /// dependencies that name no task. Repeated dependencies collapse to one edge.
    pub fn build(tasks: &'a [TaskDefinition]) -> Result<Self, DataError> {
        let n = tasks.len();
        let mut index: FxHashMap<&str, TaskId> =
            FxHashMap::with_capacity_and_hasher(n, Default::default());

        for (position, task) in tasks.iter().enumerate() {
            if task.id.is_empty() {
                return Err(DataError::EmptyIdentifier);
            }
            if index.insert(task.id.as_str(), position as TaskId).is_some() {
                return Err(DataError::DuplicateTask(task.id.clone()));
            }
        }

        let mut predecessors: Vec<Vec<TaskId>> = vec![Vec::new(); n];
        let mut successors: Vec<Vec<TaskId>> = vec![Vec::new(); n];
        let mut seen: FxHashSet<TaskId> = FxHashSet::default();

        for (position, task) in tasks.iter().enumerate() {
            seen.clear();
            for dependency in &task.dependencies {
                let Some(&dep_id) = index.get(dependency.as_str()) else {
                    return Err(DataError::UnknownDependency {
                        task: task.id.clone(),
                        dependency: dependency.clone(),
                    });
                };
                if !seen.insert(dep_id) {
                    continue;
                }
                predecessors[position].push(dep_id);
                successors[dep_id as usize].push(position as TaskId);
            }
        }

        Ok(Self {
            tasks,
            index,
            predecessors,
            successors,
        })
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[inline]
    pub fn task(&self, id: TaskId) -> &'a TaskDefinition {
        let tasks: &'a [TaskDefinition] = self.tasks;
        &tasks[id as usize]
    }

    #[inline]
    pub fn get_id(&self, task_id: &str) -> Option<TaskId> {
        self.index.get(task_id).copied()
    }

    #[inline]
    pub fn predecessors(&self, id: TaskId) -> &[TaskId] {
        &self.predecessors[id as usize]
    }

    #[inline]
    pub fn successors(&self, id: TaskId) -> &[TaskId] {
        &self.successors[id as usize]
    }

    /// All node indices in input order.
    pub fn ids(&self) -> impl Iterator<Item = TaskId> {
        0..self.tasks.len() as TaskId
    }

    /// Tasks with no predecessors, in input order.
    pub fn sources(&self) -> Vec<TaskId> {
        self.ids()
            .filter(|&id| self.predecessors(id).is_empty())
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.predecessors.iter().map(Vec::len).sum()
    }

    /// Identifiers for a list of node indices, sorted.
    pub fn sorted_names(&self, ids: &[TaskId]) -> Vec<String> {
        let mut names: Vec<String> = ids.iter().map(|&id| self.task(id).id.clone()).collect();
        names.sort();
        names
    }
}
