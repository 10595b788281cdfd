//! Member Repository - Abstract persistence for Members
//!
//! Used by use cases to resolve an assignee id before attaching it to
//! a task.

use crate::model::member::{Member, UserId};
use crate::repository::task_repository::RepositoryError;

/// Member Repository Trait
///
/// This is a PORT in hexagonal architecture.
pub trait MemberRepository {
    /// Save a member (create or update)
    fn save(&mut self, member: &Member) -> Result<(), RepositoryError>;

    /// Find a member by ID
    fn find_by_id(&self, id: &UserId) -> Result<Option<Member>, RepositoryError>;

    /// List all members
    fn find_all(&self) -> Result<Vec<Member>, RepositoryError>;

    /// Check if a member exists
    fn exists(&self, id: &UserId) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id)?.is_some())
    }
}
