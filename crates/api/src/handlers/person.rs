//! Handlers for the `/people` routes.

use axum::extract::State;
use axum::Json;
use starwars_db::models::person::{CreatePerson, Person, UpdatePerson};
use starwars_db::repositories::PersonRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidJson};
use crate::response::Status;
use crate::state::AppState;

const ENTITY: &str = "Person";

/// GET /people
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Person>>> {
    let people = PersonRepo::list(&state.pool).await?;
    Ok(Json(people))
}

/// POST /people
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreatePerson>,
) -> AppResult<Json<Person>> {
    let person = PersonRepo::create(&state.pool, &input).await?;
    tracing::info!(person_id = person.id, planet_id = ?person.planet_id, "Person created");
    Ok(Json(person))
}

/// GET /people/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Person>> {
    let person = PersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(person))
}

/// PUT /people/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<UpdatePerson>,
) -> AppResult<Json<Person>> {
    let touched = PersonRepo::update(&state.pool, id, &input).await?;
    tracing::debug!(person_id = id, touched, "Person update applied");

    let person = PersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(person))
}

/// DELETE /people/{id}
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<Json<Status>> {
    if PersonRepo::delete(&state.pool, id).await? {
        tracing::info!(person_id = id, "Person deleted");
        Ok(Json(Status::deleted("person", id)))
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}
