//! Repository for the `people` table.

use sqlx::PgPool;
use starwars_core::patch::bind_pair;
use starwars_core::types::DbId;

use crate::models::person::{CreatePerson, Person, UpdatePerson};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, height, mass, hair_color, skin_color, eye_color, birth_year, \
     gender, planet_id, created_date, updated_date, url";

/// Provides CRUD operations for people.
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a new person, returning the created row.
    ///
    /// `planet_id` is written as given; it is not checked against `planets`.
    pub async fn create(pool: &PgPool, input: &CreatePerson) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO people
                (name, height, mass, hair_color, skin_color, eye_color, birth_year,
                 gender, planet_id, url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.name)
            .bind(input.height)
            .bind(input.mass)
            .bind(&input.hair_color)
            .bind(&input.skin_color)
            .bind(&input.eye_color)
            .bind(&input.birth_year)
            .bind(&input.gender)
            .bind(input.planet_id)
            .bind(&input.url)
            .fetch_one(pool)
            .await
    }

    /// Find a person by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM people WHERE id = $1");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all people in insertion (id) order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM people ORDER BY id");
        sqlx::query_as::<_, Person>(&query).fetch_all(pool).await
    }

    /// Overwrite the supplied fields of a person and refresh `updated_date`.
    ///
    /// Returns the number of rows touched; `0` when no person has this id.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdatePerson) -> Result<u64, sqlx::Error> {
        let (height_set, height) = bind_pair(&input.height);
        let (mass_set, mass) = bind_pair(&input.mass);
        let (hair_color_set, hair_color) = bind_pair(&input.hair_color);
        let (skin_color_set, skin_color) = bind_pair(&input.skin_color);
        let (eye_color_set, eye_color) = bind_pair(&input.eye_color);
        let (birth_year_set, birth_year) = bind_pair(&input.birth_year);
        let (gender_set, gender) = bind_pair(&input.gender);
        let (planet_id_set, planet_id) = bind_pair(&input.planet_id);

        let result = sqlx::query(
            "UPDATE people SET
                name         = COALESCE($2, name),
                height       = CASE WHEN $3 THEN $4 ELSE height END,
                mass         = CASE WHEN $5 THEN $6 ELSE mass END,
                hair_color   = CASE WHEN $7 THEN $8 ELSE hair_color END,
                skin_color   = CASE WHEN $9 THEN $10 ELSE skin_color END,
                eye_color    = CASE WHEN $11 THEN $12 ELSE eye_color END,
                birth_year   = CASE WHEN $13 THEN $14 ELSE birth_year END,
                gender       = CASE WHEN $15 THEN $16 ELSE gender END,
                planet_id    = CASE WHEN $17 THEN $18 ELSE planet_id END,
                url          = COALESCE($19, url),
                updated_date = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(height_set)
        .bind(height)
        .bind(mass_set)
        .bind(mass)
        .bind(hair_color_set)
        .bind(hair_color)
        .bind(skin_color_set)
        .bind(skin_color)
        .bind(eye_color_set)
        .bind(eye_color)
        .bind(birth_year_set)
        .bind(birth_year)
        .bind(gender_set)
        .bind(gender)
        .bind(planet_id_set)
        .bind(planet_id)
        .bind(&input.url)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete a person by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM people WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
