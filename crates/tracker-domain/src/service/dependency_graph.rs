//! Dependency Graph - Reachability checks over task dependencies
//!
//! Tasks are nodes; a dependency edge A → B means "B must complete
//! before A". The graph is an explicit snapshot built by the caller
//! (typically a use case, from `TaskRepository::find_all`), never a
//! process-wide registry. This is pure domain logic - no I/O, no
//! shared state.

use std::collections::{HashMap, HashSet};

use crate::model::task::{Task, TaskId};
use crate::model::task_status::TaskStatus;

/// A point-in-time view of every task's status and outgoing edges
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: HashMap<TaskId, Node>,
}

#[derive(Debug, Clone)]
struct Node {
    status: TaskStatus,
    dependencies: Vec<TaskId>,
}

impl DependencyGraph {
    /// Build a snapshot from the tasks visible to the caller
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let nodes = tasks
            .iter()
            .map(|task| {
                (
                    task.id().clone(),
                    Node {
                        status: task.status(),
                        dependencies: task.dependencies().to_vec(),
                    },
                )
            })
            .collect();
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Is `to` reachable from `from` along dependency edges?
    ///
    /// Iterative depth-first search with a visited set, O(V+E). Task
    /// counts are small (tens to low thousands), so a fresh traversal
    /// per check is fine.
    pub fn reaches(&self, from: &TaskId, to: &TaskId) -> bool {
        if from == to {
            return true;
        }
        let mut visited: HashSet<&TaskId> = HashSet::new();
        let mut stack: Vec<&TaskId> = vec![from];

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            let Some(node) = self.nodes.get(current) else {
                continue;
            };
            for dep in &node.dependencies {
                if dep == to {
                    return true;
                }
                stack.push(dep);
            }
        }
        false
    }

    /// Would the edge "`task` depends on `dependency`" close a cycle?
    ///
    /// It would exactly when `task` is already reachable from
    /// `dependency` over existing edges.
    pub fn would_close_cycle(&self, task: &TaskId, dependency: &TaskId) -> bool {
        self.reaches(dependency, task)
    }

    /// The subset of `dependencies` that is not `Completed` in this
    /// snapshot. Ids unknown to the snapshot count as blocking: an
    /// unresolvable dependency can never be proven complete.
    pub fn blocking(&self, dependencies: &[TaskId]) -> Vec<TaskId> {
        dependencies
            .iter()
            .filter(|&id| {
                self.nodes
                    .get(id)
                    .map(|node| node.status != TaskStatus::Completed)
                    .unwrap_or(true)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a chain t-0 ← t-1 ← ... where each task depends on the
    /// previous one.
    fn chain(len: usize) -> Vec<Task> {
        let mut tasks: Vec<Task> = Vec::new();
        for i in 0..len {
            let mut task = Task::new(TaskId::new(format!("t-{}", i)), format!("Step {}", i))
                .unwrap();
            if i > 0 {
                let graph = DependencyGraph::from_tasks(&tasks);
                task.add_dependency(TaskId::new(format!("t-{}", i - 1)), &graph)
                    .unwrap();
            }
            tasks.push(task);
        }
        tasks
    }

    #[test]
    fn test_direct_reachability() {
        let tasks = chain(2);
        let graph = DependencyGraph::from_tasks(&tasks);

        assert!(graph.reaches(&TaskId::new("t-1"), &TaskId::new("t-0")));
        assert!(!graph.reaches(&TaskId::new("t-0"), &TaskId::new("t-1")));
    }

    #[test]
    fn test_transitive_reachability() {
        let tasks = chain(4);
        let graph = DependencyGraph::from_tasks(&tasks);

        assert!(graph.reaches(&TaskId::new("t-3"), &TaskId::new("t-0")));
        assert!(!graph.reaches(&TaskId::new("t-0"), &TaskId::new("t-3")));
    }

    #[test]
    fn test_reverse_edge_would_close_cycle() {
        let tasks = chain(3);
        let graph = DependencyGraph::from_tasks(&tasks);

        // t-2 already depends (transitively) on t-0, so t-0 may not
        // depend on t-2
        assert!(graph.would_close_cycle(&TaskId::new("t-0"), &TaskId::new("t-2")));
        // A fresh edge in the same direction is fine
        assert!(!graph.would_close_cycle(&TaskId::new("t-2"), &TaskId::new("t-1")));
    }

    #[test]
    fn test_cycle_rejected_through_entity() {
        let mut tasks = chain(2);
        let graph = DependencyGraph::from_tasks(&tasks);

        // t-1 depends on t-0; the reverse edge must be rejected
        let err = tasks[0]
            .add_dependency(TaskId::new("t-1"), &graph)
            .unwrap_err();
        assert_eq!(
            err,
            crate::model::task::TaskError::CyclicDependency {
                task: TaskId::new("t-0"),
                dependency: TaskId::new("t-1"),
            }
        );
    }

    #[test]
    fn test_blocking_lists_incomplete_dependencies() {
        let mut tasks = chain(3);
        let graph = DependencyGraph::from_tasks(&tasks);
        tasks[0].mark_completed(&graph).unwrap();

        let graph = DependencyGraph::from_tasks(&tasks);
        // t-1 depends on the now-completed t-0
        assert!(graph.blocking(tasks[1].dependencies()).is_empty());
        // t-2 depends on the still-open t-1
        assert_eq!(
            graph.blocking(tasks[2].dependencies()),
            vec![TaskId::new("t-1")]
        );
    }

    #[test]
    fn test_unknown_id_blocks() {
        let graph = DependencyGraph::default();
        assert_eq!(
            graph.blocking(&[TaskId::new("t-ghost")]),
            vec![TaskId::new("t-ghost")]
        );
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        // top depends on left and right, both depend on bottom
        let bottom = Task::new(TaskId::new("bottom"), "Bottom").unwrap();
        let mut left = Task::new(TaskId::new("left"), "Left").unwrap();
        let mut right = Task::new(TaskId::new("right"), "Right").unwrap();
        let mut top = Task::new(TaskId::new("top"), "Top").unwrap();

        let graph = DependencyGraph::from_tasks(&[bottom.clone()]);
        left.add_dependency(TaskId::new("bottom"), &graph).unwrap();
        right.add_dependency(TaskId::new("bottom"), &graph).unwrap();

        let graph =
            DependencyGraph::from_tasks(&[bottom.clone(), left.clone(), right.clone()]);
        top.add_dependency(TaskId::new("left"), &graph).unwrap();
        let graph = DependencyGraph::from_tasks(&[
            bottom.clone(),
            left.clone(),
            right.clone(),
            top.clone(),
        ]);
        top.add_dependency(TaskId::new("right"), &graph).unwrap();

        let graph = DependencyGraph::from_tasks(&[bottom, left, right, top.clone()]);
        // Sharing a transitive dependency is fine; only a back edge cycles
        assert!(graph.would_close_cycle(&TaskId::new("bottom"), &TaskId::new("top")));
        assert_eq!(top.dependencies().len(), 2);
    }
}
