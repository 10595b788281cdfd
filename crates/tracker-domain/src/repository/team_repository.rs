//! Team Repository - Abstract persistence for Teams
//!
//! Team↔task ownership lives in the application layer; this port only
//! persists the team aggregate itself (name plus member ids).

use crate::model::team::{Team, TeamId};
use crate::repository::task_repository::RepositoryError;

/// Team Repository Trait
///
/// This is a PORT in hexagonal architecture.
pub trait TeamRepository {
    /// Save a team (create or update)
    fn save(&mut self, team: &Team) -> Result<(), RepositoryError>;

    /// Find a team by ID
    fn find_by_id(&self, id: &TeamId) -> Result<Option<Team>, RepositoryError>;

    /// Check if a team exists
    fn exists(&self, id: &TeamId) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id)?.is_some())
    }
}
