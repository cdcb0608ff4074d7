//! Planet entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use starwars_core::patch;
use starwars_core::types::{DbId, Timestamp};

/// A planet row from the `planets` table. Also the response shape.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Planet {
    pub id: DbId,
    pub name: String,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub diameter: Option<i32>,
    pub climate: Option<String>,
    pub gravity: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<String>,
    pub population: Option<i64>,
    pub created_date: Timestamp,
    pub updated_date: Timestamp,
    pub url: String,
}

/// DTO for creating a new planet. `id` and the timestamps are generated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePlanet {
    pub name: String,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub diameter: Option<i32>,
    pub climate: Option<String>,
    pub gravity: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<String>,
    pub population: Option<i64>,
    pub url: String,
}

/// DTO for partially updating a planet. Omitted keys keep their stored value;
/// an explicit `null` clears a nullable column.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlanet {
    #[serde(default, deserialize_with = "patch::non_null")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub rotation_period: Option<Option<i32>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub orbital_period: Option<Option<i32>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub diameter: Option<Option<i32>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub climate: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub gravity: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub terrain: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub surface_water: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub population: Option<Option<i64>>,
    #[serde(default, deserialize_with = "patch::non_null")]
    pub url: Option<String>,
}
