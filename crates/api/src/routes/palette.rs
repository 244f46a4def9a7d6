//! Color changer routes.

use axum::{Json, Router, routing::get};
use cambio_core::palette::ShapePalette;
use tracing::debug;

use crate::AppState;

/// Creates the palette routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/palette", get(default_palette).post(random_palette))
}

/// GET `/palette` - The starting palette.
async fn default_palette() -> Json<ShapePalette> {
    Json(ShapePalette::default())
}

/// POST `/palette` - A fresh random palette.
async fn random_palette() -> Json<ShapePalette> {
    let palette = ShapePalette::random(&mut rand::rng());
    debug!(background = %palette.background, "Generated palette");
    Json(palette)
}
