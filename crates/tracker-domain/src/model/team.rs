//! Team - A named group of members
//!
//! Team is an Entity. It holds member ids only; which tasks belong to a
//! team is tracked by the application layer, keeping Task decoupled
//! from Team.

use std::collections::HashSet;

use super::member::UserId;

/// Unique identifier for a Team
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TeamId(String);

impl TeamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for TeamId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team - A group of members
#[derive(Debug, Clone)]
pub struct Team {
    /// Unique identifier (Entity identity)
    id: TeamId,
    /// Display name
    name: String,
    /// Members, referenced by id only
    members: HashSet<UserId>,
}

impl Team {
    /// Create a new empty Team
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            members: HashSet::new(),
        }
    }

    pub fn id(&self) -> &TeamId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn member_ids(&self) -> impl Iterator<Item = &UserId> {
        self.members.iter()
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn is_member(&self, id: &UserId) -> bool {
        self.members.contains(id)
    }

    /// Add a member. Returns true if the member was not already present.
    pub fn add_member(&mut self, id: UserId) -> bool {
        self.members.insert(id)
    }

    /// Remove a member. Returns true if the member was present.
    pub fn remove_member(&mut self, id: &UserId) -> bool {
        self.members.remove(id)
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        // Entity equality: same ID = same entity
        self.id == other.id
    }
}

impl Eq for Team {}
