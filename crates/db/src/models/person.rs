//! Person entity model and DTOs.
//!
//! `planet_id` is a bare reference to `planets.id`. It is stored as given and
//! never checked against the `planets` table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use starwars_core::patch;
use starwars_core::types::{DbId, Timestamp};

/// A person row from the `people` table. Also the response shape.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub name: String,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub planet_id: Option<DbId>,
    pub created_date: Timestamp,
    pub updated_date: Timestamp,
    pub url: String,
}

/// DTO for creating a new person.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePerson {
    pub name: String,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub planet_id: Option<DbId>,
    pub url: String,
}

/// DTO for partially updating a person. See [`UpdatePlanet`] for the
/// absent/null rules.
///
/// [`UpdatePlanet`]: crate::models::planet::UpdatePlanet
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePerson {
    #[serde(default, deserialize_with = "patch::non_null")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub height: Option<Option<i32>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub mass: Option<Option<i32>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub hair_color: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub skin_color: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub eye_color: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub birth_year: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub gender: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub planet_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "patch::non_null")]
    pub url: Option<String>,
}
