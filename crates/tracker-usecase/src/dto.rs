//! Boundary DTOs
//!
//! Plain data records used only to cross the application boundary.
//! No domain entity ever crosses it directly: inbound commands carry
//! raw strings, outbound responses are built with `from_domain`.

use serde::{Deserialize, Serialize};

use tracker_domain::{Member, Task};

/// Command: create a new task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskDto {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// One of `low`, `medium`, `high`, `urgent`. Defaults to `medium`.
    #[serde(default)]
    pub priority: Option<String>,
}

/// Command: assign a task to a member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignTaskDto {
    pub task_id: String,
    pub member_id: String,
}

/// Command: declare that one task depends on another
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddDependencyDto {
    pub task_id: String,
    pub depends_on: String,
}

/// Command: register a new team member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterMemberDto {
    pub name: String,
    pub email: String,
}

/// Response: a registered member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberResponseDto {
    pub member_id: String,
    pub name: String,
    pub email: String,
}

impl MemberResponseDto {
    pub fn from_domain(member: &Member) -> Self {
        Self {
            member_id: member.id().as_str().to_string(),
            name: member.name().to_string(),
            email: member.email().to_string(),
        }
    }
}

/// Response: the state of a task after an operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResponseDto {
    pub task_id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub assignee_id: Option<String>,
    pub dependencies: Vec<String>,
}

impl TaskResponseDto {
    /// Map a domain entity to its boundary representation
    pub fn from_domain(task: &Task) -> Self {
        Self {
            task_id: task.id().as_str().to_string(),
            title: task.title().to_string(),
            description: task.description().map(str::to_string),
            status: task.status().as_str().to_string(),
            priority: task.priority().as_str().to_string(),
            assignee_id: task.assignee().map(|id| id.as_str().to_string()),
            dependencies: task
                .dependencies()
                .iter()
                .map(|id| id.as_str().to_string())
                .collect(),
        }
    }
}
