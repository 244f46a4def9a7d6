//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod currencies;
pub mod dice;
pub mod health;
pub mod palette;
pub mod password;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(currencies::routes())
        .merge(password::routes())
        .merge(dice::routes())
        .merge(palette::routes())
}
