//! Taskboard: a task-management backend.
//!
//! Users create tasks with a due date, push the due date back when work slips,
//! and mark tasks complete. Completion is one-way.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//! - **Services**: Use cases orchestrating domain and ports
//!
//! # Modules
//!
//! - [`task`]: Task entity, repository port, adapters and use cases
//! - [`user`]: User identity referenced as task owner
//! - [`http`]: JSON-over-HTTP surface built on axum
//! - [`config`]: Environment-driven settings
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod http;
pub mod task;
pub mod telemetry;
pub mod user;
