//! Dice roller routes.

use axum::{Json, Router, routing::post};
use cambio_core::dice::DieFace;
use serde::Serialize;
use tracing::debug;

use crate::AppState;

/// Creates the dice routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/dice/roll", post(roll))
}

/// Response for a roll.
#[derive(Debug, Serialize)]
pub struct RollResponse {
    /// Face that came up.
    pub face: DieFace,
}

/// POST `/dice/roll` - Roll one die.
async fn roll() -> Json<RollResponse> {
    let face = DieFace::roll(&mut rand::rng());
    debug!(face = face.value(), "Rolled die");
    Json(RollResponse { face })
}
