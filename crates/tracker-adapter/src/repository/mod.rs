//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from tracker-domain.

pub mod in_memory;
