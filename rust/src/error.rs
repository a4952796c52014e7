//! Error types for plan evaluation.

use thiserror::Error;

/// Problems in the task definitions, found while building the task graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("Task identifier must not be empty")]
    EmptyIdentifier,
    #[error("Duplicate task identifier: {0}")]
    DuplicateTask(String),
    #[error("Task {task} depends on unknown task {dependency}")]
    UnknownDependency { task: String, dependency: String },
}

/// Errors that abort a plan evaluation. No partial schedule is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("Invalid task data: {0}")]
    Data(#[from] DataError),
    /// Identifiers of the tasks that could not be ordered, sorted.
    #[error("Cyclic dependency detected among tasks: {}", .0.join(", "))]
    CyclicDependency(Vec<String>),
    /// Identifier of the task whose finish time does not fit in a `u64`.
    #[error("Summed durations overflow at task {0}")]
    DurationOverflow(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_dependency_message() {
        let err: PlanError = DataError::UnknownDependency {
            task: "b".to_string(),
            dependency: "zz".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid task data: Task b depends on unknown task zz"
        );
    }

    #[test]
    fn test_overflow_message_names_task() {
        let err = PlanError::DurationOverflow("b".to_string());
        assert_eq!(err.to_string(), "Summed durations overflow at task b");
    }

    #[test]
    fn test_cycle_message_lists_tasks() {
        let err = PlanError::CyclicDependency(vec!["x".to_string(), "y".to_string()]);
        assert_eq!(err.to_string(), "Cyclic dependency detected among tasks: x, y");
    }
}
