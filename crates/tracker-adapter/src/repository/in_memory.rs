//! In-Memory Repository Implementations
//!
//! Simple in-memory implementations of the repository traits.
//! Useful for testing and development. Handles are cheap clones over a
//! shared map, so several use cases can be wired to the same store.
//!
//! The port contract allows `save` to fail with
//! `RepositoryError::Conflict` when a store detects a stale version;
//! this adapter keeps no version column and never raises it.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracker_domain::model::member::{Member, UserId};
use tracker_domain::model::task::{Task, TaskId};
use tracker_domain::model::team::{Team, TeamId};
use tracker_domain::repository::member_repository::MemberRepository;
use tracker_domain::repository::task_repository::{RepositoryError, TaskRepository};
use tracker_domain::repository::team_repository::TeamRepository;

fn lock_poisoned() -> RepositoryError {
    RepositoryError::Persistence {
        message: "Failed to acquire lock".to_string(),
    }
}

/// In-memory Task Repository
///
/// Thread-safe implementation using RwLock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<String, Task>>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn save(&mut self, task: &Task) -> Result<(), RepositoryError> {
        let mut tasks = self.tasks.write().map_err(|_| lock_poisoned())?;
        tasks.insert(task.id().as_str().to_string(), task.clone());
        Ok(())
    }

    fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, RepositoryError> {
        let tasks = self.tasks.read().map_err(|_| lock_poisoned())?;
        Ok(tasks.get(id.as_str()).cloned())
    }

    fn find_all(&self) -> Result<Vec<Task>, RepositoryError> {
        let tasks = self.tasks.read().map_err(|_| lock_poisoned())?;
        Ok(tasks.values().cloned().collect())
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        let tasks = self.tasks.read().map_err(|_| lock_poisoned())?;
        Ok(tasks.len())
    }
}

/// In-memory Member Repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryMemberRepository {
    members: Arc<RwLock<HashMap<String, Member>>>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MemberRepository for InMemoryMemberRepository {
    fn save(&mut self, member: &Member) -> Result<(), RepositoryError> {
        let mut members = self.members.write().map_err(|_| lock_poisoned())?;
        members.insert(member.id().as_str().to_string(), member.clone());
        Ok(())
    }

    fn find_by_id(&self, id: &UserId) -> Result<Option<Member>, RepositoryError> {
        let members = self.members.read().map_err(|_| lock_poisoned())?;
        Ok(members.get(id.as_str()).cloned())
    }

    fn find_all(&self) -> Result<Vec<Member>, RepositoryError> {
        let members = self.members.read().map_err(|_| lock_poisoned())?;
        Ok(members.values().cloned().collect())
    }
}

/// In-memory Team Repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryTeamRepository {
    teams: Arc<RwLock<HashMap<String, Team>>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TeamRepository for InMemoryTeamRepository {
    fn save(&mut self, team: &Team) -> Result<(), RepositoryError> {
        let mut teams = self.teams.write().map_err(|_| lock_poisoned())?;
        teams.insert(team.id().as_str().to_string(), team.clone());
        Ok(())
    }

    fn find_by_id(&self, id: &TeamId) -> Result<Option<Team>, RepositoryError> {
        let teams = self.teams.read().map_err(|_| lock_poisoned())?;
        Ok(teams.get(id.as_str()).cloned())
    }
}
