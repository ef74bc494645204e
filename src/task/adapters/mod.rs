//! Adapter implementations for task ports.
//!
//! - [`memory`]: in-process storage for tests and database-less runs
//! - [`postgres`]: `PostgreSQL` storage through Diesel

pub mod memory;
pub mod postgres;
