//! Task management for the task board.
//!
//! Tasks are created for a user with a due date, may have that due date
//! extended any number of times, and are completed exactly once. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
