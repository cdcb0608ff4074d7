//! Shared response bodies for API handlers.

use serde::Serialize;
use starwars_core::types::DbId;

/// Single-field acknowledgement returned by delete routes.
///
/// Serializes as `{ "message": "Deleted planet 3" }`.
#[derive(Debug, Serialize)]
pub struct Status {
    pub message: String,
}

impl Status {
    /// Acknowledge removal of the `kind` record with the given id.
    pub fn deleted(kind: &str, id: DbId) -> Self {
        Self {
            message: format!("Deleted {kind} {id}"),
        }
    }
}
