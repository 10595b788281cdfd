//! Complete Task - Attempt the `Completed` transition
//!
//! The whole task set is snapshotted so the entity can see its
//! dependencies' statuses. Blocked completions surface the blocking
//! ids unchanged.

use tracker_domain::repository::task_repository::TaskRepository;
use tracker_domain::{DependencyGraph, TaskId};

use crate::dto::TaskResponseDto;
use crate::error::UseCaseError;

pub struct CompleteTaskUseCase<T: TaskRepository> {
    tasks: T,
}

impl<T: TaskRepository> CompleteTaskUseCase<T> {
    pub fn new(tasks: T) -> Self {
        Self { tasks }
    }

    pub fn execute(&mut self, task_id: &str) -> Result<TaskResponseDto, UseCaseError> {
        let task_id = TaskId::new(task_id);

        let mut task = self
            .tasks
            .find_by_id(&task_id)?
            .ok_or_else(|| UseCaseError::TaskNotFound {
                id: task_id.as_str().to_string(),
            })?;

        let graph = DependencyGraph::from_tasks(&self.tasks.find_all()?);
        task.mark_completed(&graph)?;

        self.tasks.save(&task)?;
        Ok(TaskResponseDto::from_domain(&task))
    }
}
