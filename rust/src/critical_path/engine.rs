//! Plan evaluation: graph construction, critical path passes and execution ordering.

use crate::config::PlanConfig;
use crate::error::PlanError;
use crate::graph::{TaskGraph, TaskId};
use crate::models::{EvaluatedTask, Schedule, TaskDefinition};
use crate::sorting::execution_order;
use crate::{log_passes, log_summary};

use super::calculation::calculate_critical_path;
use super::types::TaskTiming;

/// Evaluates task definitions into an ordered [`Schedule`].
///
/// The engine holds configuration only. Every call to [`evaluate`](Self::evaluate)
/// builds a fresh graph, so one engine can serve independent evaluations,
/// including concurrent ones.
#[derive(Clone, Debug, Default)]
pub struct CriticalPathEngine {
    config: PlanConfig,
}

impl CriticalPathEngine {
    pub fn new(config: PlanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Compute critical costs, early and late intervals, total duration and
    /// execution order for `tasks`.
    ///
    /// # Errors
    /// * `PlanError::Data` for empty, duplicate or unknown identifiers
    /// * `PlanError::CyclicDependency` if the dependencies form a cycle
    /// * `PlanError::DurationOverflow` if summed durations exceed `u64::MAX`
    /// * `PlanError::InvalidConfig` for an unknown tie break
    pub fn evaluate(&self, tasks: &[TaskDefinition]) -> Result<Schedule, PlanError> {
        let verbosity = self.config.verbosity;
        let tie_break = self.config.tie_break()?;

        let graph = TaskGraph::build(tasks)?;
        log_passes!(
            verbosity,
            "Task graph: {} tasks, {} edges, {} sources",
            graph.len(),
            graph.edge_count(),
            graph.sources().len()
        );

        let result = calculate_critical_path(&graph, verbosity)?;
        let order = execution_order(&graph, &result.timings, tie_break);

        let evaluated: Vec<EvaluatedTask> = order
            .iter()
            .map(|&id| evaluated_task(&graph, id, &result.timings[id as usize]))
            .collect();

        log_summary!(
            verbosity,
            "Evaluated {} tasks, total duration {}",
            evaluated.len(),
            result.total_duration
        );

        Ok(Schedule {
            tasks: evaluated,
            total_duration: result.total_duration,
        })
    }
}

fn evaluated_task(graph: &TaskGraph<'_>, id: TaskId, timing: &TaskTiming) -> EvaluatedTask {
    let task = graph.task(id);
    EvaluatedTask {
        task: task.clone(),
        cost: task.duration,
        critical_cost: timing.critical_cost,
        early_start: timing.early_start,
        early_finish: timing.early_finish,
        late_start: timing.late_start,
        late_finish: timing.late_finish,
        predecessors: graph.sorted_names(graph.predecessors(id)),
        successors: graph.sorted_names(graph.successors(id)),
    }
}

/// Evaluate `tasks` with the default configuration.
pub fn evaluate(tasks: &[TaskDefinition]) -> Result<Schedule, PlanError> {
    CriticalPathEngine::default().evaluate(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;
    use crate::models::Crew;

    fn make_task(id: &str, duration: u64, deps: Vec<&str>) -> TaskDefinition {
        TaskDefinition {
            id: id.to_string(),
            operation_name: "build".to_string(),
            element_name: id.to_uppercase(),
            duration,
            crew: Some(Crew {
                name: "team".to_string(),
                assignment: 1,
            }),
            dependencies: deps.into_iter().map(String::from).collect(),
        }
    }

    fn sequence(schedule: &Schedule) -> String {
        schedule
            .tasks
            .iter()
            .map(|t| t.task.id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn timed_sequence(schedule: &Schedule) -> String {
        schedule
            .tasks
            .iter()
            .map(|t| format!("{}[{}-{}]", t.task.id, t.early_start, t.early_finish))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn one_flow() -> Vec<TaskDefinition> {
        vec![
            make_task("C", 4, vec!["B"]),
            make_task("B", 3, vec!["A"]),
            make_task("A", 5, vec![]),
        ]
    }

    fn two_flows() -> Vec<TaskDefinition> {
        vec![
            make_task("C", 4, vec!["B"]),
            make_task("B", 20, vec!["A"]),
            make_task("A", 5, vec![]),
            make_task("D", 2, vec!["E"]),
            make_task("E", 3, vec![]),
        ]
    }

    #[test]
    fn test_one_flow() {
        let schedule = evaluate(&one_flow()).unwrap();

        assert_eq!(schedule.total_duration, 12);
        assert_eq!(sequence(&schedule), "A, B, C");
        assert_eq!(timed_sequence(&schedule), "A[0-5], B[5-8], C[8-12]");
        assert_eq!(schedule.peak_crew_demand(), 1);
    }

    #[test]
    fn test_two_task_flows() {
        let schedule = evaluate(&two_flows()).unwrap();

        assert_eq!(schedule.total_duration, 29);
        assert_eq!(sequence(&schedule), "A, E, D, B, C");
        assert_eq!(
            timed_sequence(&schedule),
            "A[0-5], E[0-3], D[3-5], B[5-25], C[25-29]"
        );
        // flow E -> D overlaps flow A -> B -> C during task A
        assert_eq!(schedule.peak_crew_demand(), 2);
    }

    #[test]
    fn test_input_order_tie_break() {
        let engine = CriticalPathEngine::new(PlanConfig {
            tie_break: "input_order".to_string(),
            verbosity: 0,
        });
        let tasks = vec![
            make_task("E", 3, vec![]),
            make_task("A", 5, vec![]),
            make_task("D", 2, vec!["E"]),
        ];
        let schedule = engine.evaluate(&tasks).unwrap();
        assert_eq!(sequence(&schedule), "E, A, D");
    }

    #[test]
    fn test_relations_and_late_intervals() {
        let schedule = evaluate(&one_flow()).unwrap();
        let b = &schedule.tasks[1];

        assert_eq!(b.task.id, "B");
        assert_eq!(b.predecessors, vec!["A".to_string()]);
        assert_eq!(b.successors, vec!["C".to_string()]);
        assert_eq!(b.cost, 3);
        assert_eq!(b.critical_cost, 8);
        assert_eq!((b.late_start, b.late_finish), (4, 7));
        assert_eq!(b.slack(), -1);
    }

    #[test]
    fn test_schedule_invariants() {
        let schedule = evaluate(&two_flows()).unwrap();
        let finish_of = |id: &str| {
            schedule
                .tasks
                .iter()
                .find(|t| t.task.id == id)
                .map(|t| t.early_finish)
                .unwrap()
        };

        for task in &schedule.tasks {
            assert_eq!(task.early_finish, task.early_start + task.task.duration);
            assert_eq!(task.late_finish, task.late_start + task.cost);
            for pred in &task.predecessors {
                assert!(task.early_start >= finish_of(pred));
            }
        }
        let max_critical = schedule.tasks.iter().map(|t| t.critical_cost).max();
        assert_eq!(max_critical, Some(schedule.total_duration));
    }

    #[test]
    fn test_cyclic_input_fails() {
        let tasks = vec![make_task("X", 1, vec!["Y"]), make_task("Y", 2, vec!["X"])];
        let err = evaluate(&tasks).unwrap_err();
        assert_eq!(
            err,
            PlanError::CyclicDependency(vec!["X".to_string(), "Y".to_string()])
        );
    }

    #[test]
    fn test_duration_overflow_fails() {
        let half = u64::MAX / 2 + 1;
        let tasks = vec![make_task("a", half, vec![]), make_task("b", half, vec!["a"])];
        assert_eq!(
            evaluate(&tasks).unwrap_err(),
            PlanError::DurationOverflow("b".to_string())
        );
    }

    #[test]
    fn test_unknown_dependency_fails() {
        let tasks = vec![make_task("A", 1, vec!["nope"])];
        assert_eq!(
            evaluate(&tasks).unwrap_err(),
            PlanError::Data(DataError::UnknownDependency {
                task: "A".to_string(),
                dependency: "nope".to_string(),
            })
        );
    }

    #[test]
    fn test_invalid_tie_break_fails() {
        let engine = CriticalPathEngine::new(PlanConfig {
            tie_break: "by_cost".to_string(),
            verbosity: 0,
        });
        assert!(matches!(
            engine.evaluate(&one_flow()),
            Err(PlanError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        let schedule = evaluate(&[]).unwrap();
        assert!(schedule.tasks.is_empty());
        assert_eq!(schedule.total_duration, 0);
        assert_eq!(schedule.peak_crew_demand(), 0);
    }

    #[test]
    fn test_reevaluation_is_identical() {
        let engine = CriticalPathEngine::default();
        let tasks = two_flows();
        let first = engine.evaluate(&tasks).unwrap();
        let second = engine.evaluate(&tasks).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.peak_crew_demand(), second.peak_crew_demand());
    }

    #[test]
    fn test_permuted_input_gives_same_schedule() {
        let tasks = two_flows();
        let baseline = evaluate(&tasks).unwrap();

        let mut reversed = tasks.clone();
        reversed.reverse();
        let mut rotated = tasks.clone();
        rotated.rotate_left(2);

        for permutation in [reversed, rotated] {
            let schedule = evaluate(&permutation).unwrap();
            assert_eq!(schedule.total_duration, baseline.total_duration);
            assert_eq!(schedule.peak_crew_demand(), baseline.peak_crew_demand());
            assert_eq!(timed_sequence(&schedule), timed_sequence(&baseline));
        }
    }

    #[test]
    fn test_verbose_evaluation() {
        let engine = CriticalPathEngine::new(PlanConfig {
            tie_break: "identifier".to_string(),
            verbosity: crate::logging::VERBOSITY_DEBUG,
        });
        let schedule = engine.evaluate(&one_flow()).unwrap();
        assert_eq!(schedule.total_duration, 12);
    }
}
