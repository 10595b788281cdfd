//! Add Dependency - Declare that one task blocks another
//!
//! The dependency graph is snapshotted from `find_all` and handed to
//! the entity; there is no process-wide registry. Both ends of the
//! edge must exist before the domain check runs.

use tracker_domain::repository::task_repository::TaskRepository;
use tracker_domain::{DependencyGraph, TaskId};

use crate::dto::{AddDependencyDto, TaskResponseDto};
use crate::error::UseCaseError;

pub struct AddDependencyUseCase<T: TaskRepository> {
    tasks: T,
}

impl<T: TaskRepository> AddDependencyUseCase<T> {
    pub fn new(tasks: T) -> Self {
        Self { tasks }
    }

    pub fn execute(&mut self, input: AddDependencyDto) -> Result<TaskResponseDto, UseCaseError> {
        let task_id = TaskId::new(input.task_id);
        let dependency_id = TaskId::new(input.depends_on);

        let mut task = self
            .tasks
            .find_by_id(&task_id)?
            .ok_or_else(|| UseCaseError::TaskNotFound {
                id: task_id.as_str().to_string(),
            })?;

        if !self.tasks.exists(&dependency_id)? {
            return Err(UseCaseError::TaskNotFound {
                id: dependency_id.as_str().to_string(),
            });
        }

        let graph = DependencyGraph::from_tasks(&self.tasks.find_all()?);
        task.add_dependency(dependency_id, &graph)?;

        self.tasks.save(&task)?;
        Ok(TaskResponseDto::from_domain(&task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::InMemoryTasks;
    use tracker_domain::{Task, TaskError};

    fn seeded(ids: &[&str]) -> InMemoryTasks {
        let mut tasks = InMemoryTasks::default();
        for id in ids {
            tasks
                .save(&Task::new(TaskId::new(*id), format!("Task {}", id)).unwrap())
                .unwrap();
        }
        tasks
    }

    fn edge(use_case: &mut AddDependencyUseCase<InMemoryTasks>, task: &str, dep: &str)
        -> Result<TaskResponseDto, UseCaseError>
    {
        use_case.execute(AddDependencyDto {
            task_id: task.to_string(),
            depends_on: dep.to_string(),
        })
    }

    #[test]
    fn test_add_dependency() {
        let mut use_case = AddDependencyUseCase::new(seeded(&["t-a", "t-b"]));

        let response = edge(&mut use_case, "t-b", "t-a").unwrap();
        assert_eq!(response.dependencies, vec!["t-a".to_string()]);
    }

    #[test]
    fn test_reverse_edge_rejected_as_cycle() {
        let mut use_case = AddDependencyUseCase::new(seeded(&["t-a", "t-b"]));

        edge(&mut use_case, "t-b", "t-a").unwrap();
        let err = edge(&mut use_case, "t-a", "t-b").unwrap_err();

        assert!(matches!(
            err,
            UseCaseError::Task(TaskError::CyclicDependency { .. })
        ));
    }

    #[test]
    fn test_transitive_cycle_rejected() {
        let mut use_case = AddDependencyUseCase::new(seeded(&["t-a", "t-b", "t-c"]));

        // c depends on b, b depends on a
        edge(&mut use_case, "t-c", "t-b").unwrap();
        edge(&mut use_case, "t-b", "t-a").unwrap();

        // a depending on c would close the loop
        let err = edge(&mut use_case, "t-a", "t-c").unwrap_err();
        assert!(matches!(
            err,
            UseCaseError::Task(TaskError::CyclicDependency { .. })
        ));
    }

    #[test]
    fn test_self_dependency_rejected() {
        let mut use_case = AddDependencyUseCase::new(seeded(&["t-a"]));

        let err = edge(&mut use_case, "t-a", "t-a").unwrap_err();
        assert!(matches!(
            err,
            UseCaseError::Task(TaskError::SelfDependency { .. })
        ));
    }

    #[test]
    fn test_unknown_dependency_target() {
        let mut use_case = AddDependencyUseCase::new(seeded(&["t-a"]));

        let err = edge(&mut use_case, "t-a", "t-404").unwrap_err();
        assert!(matches!(err, UseCaseError::TaskNotFound { id } if id == "t-404"));
    }
}
