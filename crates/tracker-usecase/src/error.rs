//! Error taxonomy for the application layer
//!
//! Repository lookup misses map to the `*NotFound` variants; everything
//! the domain rejects is forwarded transparently.

use thiserror::Error;

use tracker_domain::repository::task_repository::RepositoryError;
use tracker_domain::{MemberError, TaskError};

/// Errors surfaced by use cases
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Task not found: {id}")]
    TaskNotFound { id: String },

    #[error("Member not found: {id}")]
    MemberNotFound { id: String },

    #[error("Unknown priority: {value}")]
    InvalidPriority { value: String },

    #[error(transparent)]
    Task(#[from] TaskError),

    #[error(transparent)]
    Member(#[from] MemberError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
