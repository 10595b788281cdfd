//! Domain Models - The vocabulary of the tracker
//!
//! These types represent the "Ubiquitous Language" of the team task
//! tracker. Every name here should match how we talk about the system.

pub mod member;
pub mod task;
pub mod task_priority;
pub mod task_status;
pub mod team;
