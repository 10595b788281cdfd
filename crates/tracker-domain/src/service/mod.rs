//! Domain Services - Business logic that doesn't belong to a single entity
//!
//! Services operate on multiple entities and contain the "verbs" of the
//! domain that span more than one aggregate.

pub mod dependency_graph;
