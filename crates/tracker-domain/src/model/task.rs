//! Task - A work item in the team tracker
//!
//! A Task is an Entity (has identity that persists through changes).
//! Even if the title, assignee or status changes, it's still the
//! "same" task.
//!
//! Other entities are referenced by identifier only (assignee by
//! `UserId`, dependencies by `TaskId`) - never as embedded objects.
//! The owning repository is the single place to resolve them.

use super::member::UserId;
use super::task_priority::TaskPriority;
use super::task_status::TaskStatus;
use crate::service::dependency_graph::DependencyGraph;

/// Unique identifier for a Task
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for TaskId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task - The central entity of the tracker
///
/// Invariants protected here:
/// - the title is never blank
/// - `Completed` is terminal: no mutation is accepted afterwards
/// - a task never depends on itself, and never closes a dependency cycle
/// - a task only completes once every dependency is `Completed`
#[derive(Debug, Clone)]
pub struct Task {
    /// Unique identifier (Entity identity)
    id: TaskId,
    /// Short human-readable summary, never blank
    title: String,
    /// Optional longer description
    description: Option<String>,
    /// Current lifecycle state
    status: TaskStatus,
    /// How urgent this task is
    priority: TaskPriority,
    /// Who is responsible, if anyone (reference by id, not ownership)
    assignee: Option<UserId>,
    /// Tasks that must reach `Completed` before this one may
    dependencies: Vec<TaskId>,
}

impl Task {
    /// Create a new Task in the `Open` state
    pub fn new(id: TaskId, title: impl Into<String>) -> Result<Self, TaskError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        Ok(Self {
            id,
            title,
            description: None,
            status: TaskStatus::Open,
            priority: TaskPriority::default(),
            assignee: None,
            dependencies: Vec::new(),
        })
    }

    /// Builder: set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: set the priority
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn priority(&self) -> TaskPriority {
        self.priority
    }

    pub fn assignee(&self) -> Option<&UserId> {
        self.assignee.as_ref()
    }

    pub fn dependencies(&self) -> &[TaskId] {
        &self.dependencies
    }

    pub fn is_assigned(&self) -> bool {
        self.assignee.is_some()
    }

    // ========== Mutations ==========

    /// Assign this task to a team member
    pub fn assign_to(&mut self, member_id: UserId) -> Result<(), TaskError> {
        self.ensure_not_completed()?;
        self.assignee = Some(member_id);
        Ok(())
    }

    /// Remove the current assignment
    pub fn unassign(&mut self) -> Result<(), TaskError> {
        self.ensure_not_completed()?;
        self.assignee = None;
        Ok(())
    }

    /// Declare that this task depends on another
    ///
    /// The caller supplies a [`DependencyGraph`] snapshot of the tasks it
    /// can see; the edge is rejected if it would close a cycle. Adding an
    /// edge that is already present is a no-op.
    pub fn add_dependency(
        &mut self,
        dependency: TaskId,
        graph: &DependencyGraph,
    ) -> Result<(), TaskError> {
        self.ensure_not_completed()?;
        if dependency == self.id {
            return Err(TaskError::SelfDependency { id: dependency });
        }
        if graph.would_close_cycle(&self.id, &dependency) {
            return Err(TaskError::CyclicDependency {
                task: self.id.clone(),
                dependency,
            });
        }
        if !self.dependencies.contains(&dependency) {
            self.dependencies.push(dependency);
        }
        Ok(())
    }

    // ========== State Transitions ==========

    /// Mark the task as being worked on (`Open` → `InProgress`)
    pub fn start(&mut self) -> Result<(), TaskError> {
        if !self.status.can_transition_to(TaskStatus::InProgress) {
            return Err(TaskError::InvalidState {
                status: self.status,
            });
        }
        self.status = TaskStatus::InProgress;
        Ok(())
    }

    /// Mark the task as completed
    ///
    /// Fails with [`TaskError::UnresolvedDependency`] listing the blocking
    /// task ids while any dependency is not `Completed` in the supplied
    /// snapshot. `Open` → `Completed` directly is allowed; `InProgress` is
    /// an optional intermediate state.
    pub fn mark_completed(&mut self, graph: &DependencyGraph) -> Result<(), TaskError> {
        self.ensure_not_completed()?;
        let blocking = graph.blocking(&self.dependencies);
        if !blocking.is_empty() {
            return Err(TaskError::UnresolvedDependency { blocking });
        }
        self.status = TaskStatus::Completed;
        Ok(())
    }

    fn ensure_not_completed(&self) -> Result<(), TaskError> {
        if self.status.is_terminal() {
            return Err(TaskError::InvalidState {
                status: self.status,
            });
        }
        Ok(())
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        // Entity equality: same ID = same entity
        self.id == other.id
    }
}

impl Eq for Task {}

/// Errors that can occur during Task operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// The title was blank at construction
    EmptyTitle,
    /// The task's current status forbids the requested operation
    InvalidState { status: TaskStatus },
    /// A task may not depend on itself
    SelfDependency { id: TaskId },
    /// Adding the edge would close a cycle in the dependency graph
    CyclicDependency { task: TaskId, dependency: TaskId },
    /// Completion is blocked by dependencies that are not yet completed
    UnresolvedDependency { blocking: Vec<TaskId> },
}

impl core::fmt::Display for TaskError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TaskError::EmptyTitle => write!(f, "Task title cannot be empty"),
            TaskError::InvalidState { status } => {
                write!(f, "Operation not allowed while task is {}", status)
            }
            TaskError::SelfDependency { id } => {
                write!(f, "Task {} cannot depend on itself", id)
            }
            TaskError::CyclicDependency { task, dependency } => {
                write!(
                    f,
                    "Task {} cannot depend on {}: the edge would close a cycle",
                    task, dependency
                )
            }
            TaskError::UnresolvedDependency { blocking } => {
                let ids: Vec<&str> = blocking.iter().map(|id| id.as_str()).collect();
                write!(f, "Completion blocked by: {}", ids.join(", "))
            }
        }
    }
}

impl std::error::Error for TaskError {}
