//! # Task Tracker Use Case Layer
//!
//! Application-specific business rules. Each use case follows the same
//! shape: validate the inbound DTO, load entities through repository
//! ports, invoke exactly one domain operation, persist through the same
//! port, and map the result to a response DTO.
//!
//! Domain errors are never swallowed here - they propagate unchanged to
//! the adapter boundary, which translates them to protocol-specific
//! responses.

pub mod add_dependency;
pub mod assign_task;
pub mod complete_task;
pub mod create_task;
pub mod dto;
pub mod error;
pub mod get_task;
pub mod register_member;
pub mod start_task;

pub use add_dependency::AddDependencyUseCase;
pub use assign_task::AssignTaskUseCase;
pub use complete_task::CompleteTaskUseCase;
pub use create_task::CreateTaskUseCase;
pub use error::UseCaseError;
pub use get_task::GetTaskUseCase;
pub use register_member::RegisterMemberUseCase;
pub use start_task::StartTaskUseCase;

#[cfg(test)]
pub(crate) mod test_support {
    //! Plain HashMap-backed ports for use case tests.

    use std::collections::HashMap;

    use tracker_domain::repository::member_repository::MemberRepository;
    use tracker_domain::repository::task_repository::{RepositoryError, TaskRepository};
    use tracker_domain::{Member, Task, TaskId, UserId};

    #[derive(Default)]
    pub struct InMemoryTasks {
        tasks: HashMap<String, Task>,
    }

    impl TaskRepository for InMemoryTasks {
        fn save(&mut self, task: &Task) -> Result<(), RepositoryError> {
            self.tasks
                .insert(task.id().as_str().to_string(), task.clone());
            Ok(())
        }

        fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, RepositoryError> {
            Ok(self.tasks.get(id.as_str()).cloned())
        }

        fn find_all(&self) -> Result<Vec<Task>, RepositoryError> {
            Ok(self.tasks.values().cloned().collect())
        }

        fn count(&self) -> Result<usize, RepositoryError> {
            Ok(self.tasks.len())
        }
    }

    #[derive(Default)]
    pub struct InMemoryMembers {
        members: HashMap<String, Member>,
    }

    impl MemberRepository for InMemoryMembers {
        fn save(&mut self, member: &Member) -> Result<(), RepositoryError> {
            self.members
                .insert(member.id().as_str().to_string(), member.clone());
            Ok(())
        }

        fn find_by_id(&self, id: &UserId) -> Result<Option<Member>, RepositoryError> {
            Ok(self.members.get(id.as_str()).cloned())
        }

        fn find_all(&self) -> Result<Vec<Member>, RepositoryError> {
            Ok(self.members.values().cloned().collect())
        }
    }
}
