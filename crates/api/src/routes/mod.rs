pub mod health;
pub mod person;
pub mod planet;

use axum::Router;

use crate::state::AppState;

/// Build the CRUD route tree. Mounted at the root path, next to `/health`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(planet::router())
        .merge(person::router())
}
