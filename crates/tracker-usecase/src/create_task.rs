//! Create Task - Register a new work item
//!
//! Generates the identity here, not in the adapter: ids are part of the
//! application's contract with the domain.

use uuid::Uuid;

use tracker_domain::repository::task_repository::TaskRepository;
use tracker_domain::{Task, TaskId, TaskPriority};

use crate::dto::{CreateTaskDto, TaskResponseDto};
use crate::error::UseCaseError;

pub struct CreateTaskUseCase<T: TaskRepository> {
    tasks: T,
}

impl<T: TaskRepository> CreateTaskUseCase<T> {
    pub fn new(tasks: T) -> Self {
        Self { tasks }
    }

    pub fn execute(&mut self, input: CreateTaskDto) -> Result<TaskResponseDto, UseCaseError> {
        let priority = match input.priority {
            Some(raw) => TaskPriority::parse(&raw)
                .ok_or(UseCaseError::InvalidPriority { value: raw })?,
            None => TaskPriority::default(),
        };

        let id = TaskId::new(Uuid::new_v4().to_string());
        let mut task = Task::new(id, input.title)?.with_priority(priority);
        if let Some(description) = input.description {
            task = task.with_description(description);
        }

        self.tasks.save(&task)?;
        Ok(TaskResponseDto::from_domain(&task))
    }
}
