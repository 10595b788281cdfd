//! # Task Tracker Domain Layer
//!
//! The heart of the tracker - pure business logic with zero external
//! dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Entities & Value Objects                      ││
//! │  │  repository/- Trait definitions (not implementations)       ││
//! │  │  service/   - Domain services (DependencyGraph)             ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Golden Rule
//!
//! **This crate has ZERO external dependencies.**
//!
//! If the web framework changes, this crate doesn't change.
//! If we switch from in-memory storage to PostgreSQL, this crate
//! doesn't change.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    member::{Member, MemberError, UserId},
    task::{Task, TaskError, TaskId},
    task_priority::TaskPriority,
    task_status::TaskStatus,
    team::{Team, TeamId},
};

pub use repository::{
    member_repository::MemberRepository,
    task_repository::{RepositoryError, TaskRepository},
    team_repository::TeamRepository,
};

pub use service::dependency_graph::DependencyGraph;
