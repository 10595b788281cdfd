//! TaskStatus - The lifecycle state of a Task
//!
//! TaskStatus is a Value Object - two statuses with the same variant are
//! equal. The transition table is the state machine of the tracker:
//! `Completed` is terminal, nothing leaves it.

/// Valid states for a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    /// Created, nobody has started work yet
    Open,
    /// Currently being worked on
    InProgress,
    /// Done. Terminal - no transitions leave this state.
    Completed,
}

impl TaskStatus {
    /// Check if a transition to `next` is valid.
    ///
    /// `InProgress` is optional: a task may go straight from `Open`
    /// to `Completed` once its dependencies are satisfied.
    pub fn can_transition_to(&self, next: TaskStatus) -> bool {
        matches!(
            (self, next),
            (TaskStatus::Open, TaskStatus::InProgress)
                | (TaskStatus::Open, TaskStatus::Completed)
                | (TaskStatus::InProgress, TaskStatus::Completed)
        )
    }

    /// Terminal states accept no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }

    /// Stable name used at the DTO boundary
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Open => "open",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }
}

impl core::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        assert!(TaskStatus::Open.can_transition_to(TaskStatus::InProgress));
        assert!(TaskStatus::Open.can_transition_to(TaskStatus::Completed));
        assert!(TaskStatus::InProgress.can_transition_to(TaskStatus::Completed));

        // Nothing leaves Completed
        assert!(!TaskStatus::Completed.can_transition_to(TaskStatus::Open));
        assert!(!TaskStatus::Completed.can_transition_to(TaskStatus::InProgress));
        assert!(!TaskStatus::Completed.can_transition_to(TaskStatus::Completed));
    }

    #[test]
    fn test_terminal() {
        assert!(TaskStatus::Completed.is_terminal());
        assert!(!TaskStatus::Open.is_terminal());
        assert!(!TaskStatus::InProgress.is_terminal());
    }
}
