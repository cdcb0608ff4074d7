//! Route definitions for planets.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::planet;
use crate::state::AppState;

/// Planet routes. The collection is plural, single records are not.
///
/// ```text
/// GET    /planets        -> list
/// POST   /planet         -> create
/// GET    /planet/{id}    -> get_by_id
/// PUT    /planet/{id}    -> update
/// DELETE /planet/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/planets", get(planet::list))
        .route("/planet", post(planet::create))
        .route(
            "/planet/{id}",
            get(planet::get_by_id)
                .put(planet::update)
                .delete(planet::delete),
        )
}
