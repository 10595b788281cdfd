//! # Task Tracker Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `repository/` - Persistence implementations of the domain ports
//!
//! Inbound adapters (HTTP controllers, CLI) and outbound notification
//! senders live outside this workspace; they consume the use case layer
//! and translate its errors to protocol-specific responses.

pub mod repository;
