//! Shared primitives for the Star Wars API workspace.
//!
//! Holds the id/timestamp aliases used by every table, the domain error
//! type, and the serde helpers used by the partial-update DTOs.

pub mod error;
pub mod patch;
pub mod types;
