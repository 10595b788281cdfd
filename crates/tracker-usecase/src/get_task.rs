//! Get Task - Read-side lookup by id

use tracker_domain::repository::task_repository::TaskRepository;
use tracker_domain::TaskId;

use crate::dto::TaskResponseDto;
use crate::error::UseCaseError;

pub struct GetTaskUseCase<T: TaskRepository> {
    tasks: T,
}

impl<T: TaskRepository> GetTaskUseCase<T> {
    pub fn new(tasks: T) -> Self {
        Self { tasks }
    }

    pub fn execute(&self, task_id: &str) -> Result<TaskResponseDto, UseCaseError> {
        let task_id = TaskId::new(task_id);

        let task = self
            .tasks
            .find_by_id(&task_id)?
            .ok_or_else(|| UseCaseError::TaskNotFound {
                id: task_id.as_str().to_string(),
            })?;

        Ok(TaskResponseDto::from_domain(&task))
    }
}
