//! Member - A person on the team
//!
//! Member is an Entity (has identity). Tasks reference a Member as
//! assignee by `UserId` only - the back-reference is not ownership.

/// Unique identifier for a Member
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Member - A team member who can be assigned tasks
#[derive(Debug, Clone)]
pub struct Member {
    /// Unique identifier (Entity identity)
    id: UserId,
    /// Display name
    name: String,
    /// Contact address
    email: String,
}

impl Member {
    /// Create a new Member
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, MemberError> {
        let name = name.into();
        let email = email.into();
        if name.trim().is_empty() {
            return Err(MemberError::EmptyField { field: "name" });
        }
        if email.trim().is_empty() {
            return Err(MemberError::EmptyField { field: "email" });
        }
        Ok(Self { id, name, email })
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        // Entity equality: same ID = same entity
        self.id == other.id
    }
}

impl Eq for Member {}

/// Errors that can occur during Member operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberError {
    EmptyField { field: &'static str },
}

impl core::fmt::Display for MemberError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MemberError::EmptyField { field } => {
                write!(f, "Member {} cannot be empty", field)
            }
        }
    }
}

impl std::error::Error for MemberError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_creation() {
        let member = Member::new(UserId::new("u-001"), "Ada", "ada@example.com").unwrap();

        assert_eq!(member.id().as_str(), "u-001");
        assert_eq!(member.name(), "Ada");
        assert_eq!(member.email(), "ada@example.com");
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert_eq!(
            Member::new(UserId::new("u-002"), " ", "b@example.com").unwrap_err(),
            MemberError::EmptyField { field: "name" }
        );
        assert_eq!(
            Member::new(UserId::new("u-003"), "Grace", "").unwrap_err(),
            MemberError::EmptyField { field: "email" }
        );
    }

    #[test]
    fn test_entity_equality() {
        let a = Member::new(UserId::new("u-004"), "Ada", "ada@example.com").unwrap();
        let b = Member::new(UserId::new("u-004"), "Ada L.", "lovelace@example.com").unwrap();

        assert_eq!(a, b);
    }
}
