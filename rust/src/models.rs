//! Core data types for plan evaluation.

use pyo3::prelude::*;

use crate::critical_path::slack_between;
use crate::leveling::{self, DemandInterval};

/// Crew a task needs for its whole duration.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crew {
    #[pyo3(get, set)]
    pub name: String,
    #[pyo3(get, set)]
    pub assignment: u32,
}

#[pymethods]
impl Crew {
    #[new]
    fn new(name: String, assignment: u32) -> Self {
        Self { name, assignment }
    }

    fn __repr__(&self) -> String {
        format!("Crew(name={:?}, assignment={})", self.name, self.assignment)
    }
}

/// A task as supplied by the caller.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskDefinition {
    #[pyo3(get, set)]
    pub id: String,
    #[pyo3(get, set)]
    pub operation_name: String,
    #[pyo3(get, set)]
    pub element_name: String,
    #[pyo3(get, set)]
    pub duration: u64,
    #[pyo3(get, set)]
    pub crew: Option<Crew>,
    /// Identifiers of tasks that must finish before this one starts.
    #[pyo3(get, set)]
    pub dependencies: Vec<String>,
}

impl TaskDefinition {
    /// Crew headcount, 0 when the task has no crew.
    pub fn crew_size(&self) -> u32 {
        self.crew.as_ref().map_or(0, |crew| crew.assignment)
    }

    pub fn display_name(&self) -> String {
        format!("{}:{}", self.operation_name, self.element_name)
    }
}

#[pymethods]
impl TaskDefinition {
    #[new]
    #[pyo3(signature = (
        id,
        duration,
        dependencies=Vec::new(),
        crew=None,
        operation_name=String::new(),
        element_name=String::new()
    ))]
    fn new(
        id: String,
        duration: u64,
        dependencies: Vec<String>,
        crew: Option<Crew>,
        operation_name: String,
        element_name: String,
    ) -> Self {
        Self {
            id,
            operation_name,
            element_name,
            duration,
            crew,
            dependencies,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "TaskDefinition(id={:?}, duration={}, crew={}, deps={})",
            self.id,
            self.duration,
            self.crew_size(),
            self.dependencies.len()
        )
    }
}

/// A task with its computed timings, valid for one evaluation.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluatedTask {
    #[pyo3(get)]
    pub task: TaskDefinition,
    #[pyo3(get)]
    pub cost: u64,
    /// Length of the longest duration-weighted path ending at this task.
    #[pyo3(get)]
    pub critical_cost: u64,
    #[pyo3(get)]
    pub early_start: u64,
    #[pyo3(get)]
    pub early_finish: u64,
    #[pyo3(get)]
    pub late_start: u64,
    #[pyo3(get)]
    pub late_finish: u64,
    /// Direct predecessors, sorted by identifier.
    #[pyo3(get)]
    pub predecessors: Vec<String>,
    /// Direct successors, sorted by identifier.
    #[pyo3(get)]
    pub successors: Vec<String>,
}

#[pymethods]
impl EvaluatedTask {
    #[getter]
    pub fn id(&self) -> &str {
        &self.task.id
    }

    #[getter]
    pub fn crew_size(&self) -> u32 {
        self.task.crew_size()
    }

    /// `late_start - early_start`, clamped to the `i64` range.
    pub fn slack(&self) -> i64 {
        slack_between(self.late_start, self.early_start)
    }

    fn __repr__(&self) -> String {
        format!(
            "EvaluatedTask(id={:?}, early=[{}-{}], critical_cost={})",
            self.task.id, self.early_start, self.early_finish, self.critical_cost
        )
    }
}

/// Result of one evaluation: tasks in execution order plus the project duration.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schedule {
    #[pyo3(get)]
    pub tasks: Vec<EvaluatedTask>,
    #[pyo3(get)]
    pub total_duration: u64,
}

#[pymethods]
impl Schedule {
    /// Maximum crew members needed at the same time.
    pub fn peak_crew_demand(&self) -> u64 {
        leveling::peak_crew_demand(&self.tasks)
    }

    /// Crew demand over every elementary interval of the timeline.
    pub fn demand_profile(&self) -> Vec<DemandInterval> {
        leveling::demand_profile(&self.tasks)
    }

    fn __len__(&self) -> usize {
        self.tasks.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Schedule(tasks={}, total_duration={})",
            self.tasks.len(),
            self.total_duration
        )
    }
}
