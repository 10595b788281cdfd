//! Task Repository - Abstract persistence for Tasks
//!
//! This trait defines what operations the domain needs.
//! How they're implemented (SQL, file, memory) is not our concern here.

use crate::model::member::UserId;
use crate::model::task::{Task, TaskId};

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Entity not found
    NotFound { id: String },
    /// Failed to persist
    Persistence { message: String },
    /// The store detected a stale version on save. The core surfaces
    /// this unchanged; retrying is the adapter caller's decision.
    Conflict { id: String },
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::NotFound { id } => {
                write!(f, "Entity not found: {}", id)
            }
            RepositoryError::Persistence { message } => {
                write!(f, "Persistence error: {}", message)
            }
            RepositoryError::Conflict { id } => {
                write!(f, "Concurrent modification for entity: {}", id)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Task Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// The domain defines what it needs; adapters provide implementations.
///
/// Note: No async here - that's an implementation detail.
/// If you need async, wrap this in an async adapter.
pub trait TaskRepository {
    /// Save a task (create or update)
    fn save(&mut self, task: &Task) -> Result<(), RepositoryError>;

    /// Find a task by ID
    fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, RepositoryError>;

    /// All tasks visible to the caller. Used to snapshot the
    /// dependency graph for cycle detection.
    fn find_all(&self) -> Result<Vec<Task>, RepositoryError>;

    /// Find tasks assigned to a member
    fn find_by_assignee(&self, assignee: &UserId) -> Result<Vec<Task>, RepositoryError> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|t| t.assignee() == Some(assignee))
            .collect())
    }

    /// Check if a task exists
    fn exists(&self, id: &TaskId) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id)?.is_some())
    }

    /// Count all tasks
    fn count(&self) -> Result<usize, RepositoryError>;
}
