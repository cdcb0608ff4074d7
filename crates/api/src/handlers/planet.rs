//! Handlers for the planet routes.

use axum::extract::State;
use axum::Json;
use starwars_db::models::planet::{CreatePlanet, Planet, UpdatePlanet};
use starwars_db::repositories::PlanetRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidJson};
use crate::response::Status;
use crate::state::AppState;

const ENTITY: &str = "Planet";

/// GET /planets
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Planet>>> {
    let planets = PlanetRepo::list(&state.pool).await?;
    Ok(Json(planets))
}

/// POST /planet
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreatePlanet>,
) -> AppResult<Json<Planet>> {
    let planet = PlanetRepo::create(&state.pool, &input).await?;
    tracing::info!(planet_id = planet.id, name = %planet.name, "Planet created");
    Ok(Json(planet))
}

/// GET /planet/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Planet>> {
    let planet = PlanetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(planet))
}

/// PUT /planet/{id}
///
/// The update runs first and the row is then re-read, so an unknown id
/// touches nothing and is reported by the follow-up lookup.
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<UpdatePlanet>,
) -> AppResult<Json<Planet>> {
    let touched = PlanetRepo::update(&state.pool, id, &input).await?;
    tracing::debug!(planet_id = id, touched, "Planet update applied");

    let planet = PlanetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(planet))
}

/// DELETE /planet/{id}
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<Json<Status>> {
    let deleted = PlanetRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(planet_id = id, "Planet deleted");
        Ok(Json(Status::deleted("planet", id)))
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}
