//! Repository for the `planets` table.

use sqlx::PgPool;
use starwars_core::patch::bind_pair;
use starwars_core::types::DbId;

use crate::models::planet::{CreatePlanet, Planet, UpdatePlanet};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, rotation_period, orbital_period, diameter, climate, gravity, \
     terrain, surface_water, population, created_date, updated_date, url";

/// Provides CRUD operations for planets.
pub struct PlanetRepo;

impl PlanetRepo {
    /// Insert a new planet, returning the created row with its generated id
    /// and timestamps.
    pub async fn create(pool: &PgPool, input: &CreatePlanet) -> Result<Planet, sqlx::Error> {
        let query = format!(
            "INSERT INTO planets
                (name, rotation_period, orbital_period, diameter, climate, gravity,
                 terrain, surface_water, population, url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Planet>(&query)
            .bind(&input.name)
            .bind(input.rotation_period)
            .bind(input.orbital_period)
            .bind(input.diameter)
            .bind(&input.climate)
            .bind(&input.gravity)
            .bind(&input.terrain)
            .bind(&input.surface_water)
            .bind(input.population)
            .bind(&input.url)
            .fetch_one(pool)
            .await
    }

    /// Find a planet by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets WHERE id = $1");
        sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all planets in insertion (id) order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets ORDER BY id");
        sqlx::query_as::<_, Planet>(&query).fetch_all(pool).await
    }

    /// Overwrite the supplied fields of a planet and refresh `updated_date`.
    ///
    /// Returns the number of rows touched; `0` when no planet has this id.
    /// Nullable columns use `CASE WHEN <provided> THEN <value>` so an explicit
    /// `null` can clear them, NOT NULL columns use `COALESCE`.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdatePlanet) -> Result<u64, sqlx::Error> {
        let (rotation_period_set, rotation_period) = bind_pair(&input.rotation_period);
        let (orbital_period_set, orbital_period) = bind_pair(&input.orbital_period);
        let (diameter_set, diameter) = bind_pair(&input.diameter);
        let (climate_set, climate) = bind_pair(&input.climate);
        let (gravity_set, gravity) = bind_pair(&input.gravity);
        let (terrain_set, terrain) = bind_pair(&input.terrain);
        let (surface_water_set, surface_water) = bind_pair(&input.surface_water);
        let (population_set, population) = bind_pair(&input.population);

        let result = sqlx::query(
            "UPDATE planets SET
                name            = COALESCE($2, name),
                rotation_period = CASE WHEN $3 THEN $4 ELSE rotation_period END,
                orbital_period  = CASE WHEN $5 THEN $6 ELSE orbital_period END,
                diameter        = CASE WHEN $7 THEN $8 ELSE diameter END,
                climate         = CASE WHEN $9 THEN $10 ELSE climate END,
                gravity         = CASE WHEN $11 THEN $12 ELSE gravity END,
                terrain         = CASE WHEN $13 THEN $14 ELSE terrain END,
                surface_water   = CASE WHEN $15 THEN $16 ELSE surface_water END,
                population      = CASE WHEN $17 THEN $18 ELSE population END,
                url             = COALESCE($19, url),
                updated_date    = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(rotation_period_set)
        .bind(rotation_period)
        .bind(orbital_period_set)
        .bind(orbital_period)
        .bind(diameter_set)
        .bind(diameter)
        .bind(climate_set)
        .bind(climate)
        .bind(gravity_set)
        .bind(gravity)
        .bind(terrain_set)
        .bind(terrain)
        .bind(surface_water_set)
        .bind(surface_water)
        .bind(population_set)
        .bind(population)
        .bind(&input.url)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete a planet by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM planets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
