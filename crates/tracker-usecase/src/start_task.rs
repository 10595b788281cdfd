//! Start Task - The optional `Open` → `InProgress` transition

use tracker_domain::repository::task_repository::TaskRepository;
use tracker_domain::TaskId;

use crate::dto::TaskResponseDto;
use crate::error::UseCaseError;

pub struct StartTaskUseCase<T: TaskRepository> {
    tasks: T,
}

impl<T: TaskRepository> StartTaskUseCase<T> {
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

        task.start()?;

        self.tasks.save(&task)?;
        Ok(TaskResponseDto::from_domain(&task))
    }
}
