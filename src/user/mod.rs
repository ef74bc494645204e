//! User identity for task ownership.
//!
//! Users are referenced by tasks through [`domain::UserId`]. Only the domain
//! value and its validation live here; user persistence is owned elsewhere.

pub mod domain;
