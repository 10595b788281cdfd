//! Assign Task - Attach a member to a task as assignee
//!
//! The member is resolved through its own repository first, so the
//! task only ever stores an id that is known to exist at assignment
//! time.

use tracker_domain::repository::member_repository::MemberRepository;
use tracker_domain::repository::task_repository::TaskRepository;
use tracker_domain::{TaskId, UserId};

use crate::dto::{AssignTaskDto, TaskResponseDto};
use crate::error::UseCaseError;

pub struct AssignTaskUseCase<T: TaskRepository, M: MemberRepository> {
    tasks: T,
    members: M,
}

impl<T: TaskRepository, M: MemberRepository> AssignTaskUseCase<T, M> {
    pub fn new(tasks: T, members: M) -> Self {
        Self { tasks, members }
    }

    pub fn execute(&mut self, input: AssignTaskDto) -> Result<TaskResponseDto, UseCaseError> {
        let task_id = TaskId::new(input.task_id);
        let member_id = UserId::new(input.member_id);

        let mut task = self
            .tasks
            .find_by_id(&task_id)?
            .ok_or_else(|| UseCaseError::TaskNotFound {
                id: task_id.as_str().to_string(),
            })?;

        let member = self
            .members
            .find_by_id(&member_id)?
            .ok_or_else(|| UseCaseError::MemberNotFound {
                id: member_id.as_str().to_string(),
            })?;

        task.assign_to(member.id().clone())?;
        self.tasks.save(&task)?;
        Ok(TaskResponseDto::from_domain(&task))
    }
}
