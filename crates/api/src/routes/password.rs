//! Password generator routes.

use axum::{Json, Router, extract::State, routing::post};
use cambio_core::password::{PasswordError, PasswordOptions, PasswordPolicy};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{AppState, error::ApiError};

/// Creates the password generator routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/password", post(generate_password))
}

/// Length field as sent by a form (text) or a typed client (number).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LengthInput {
    /// Numeric length.
    Number(usize),
    /// Raw text length.
    Text(String),
}

/// Request body for generating a password.
#[derive(Debug, Deserialize)]
pub struct PasswordRequest {
    /// Desired length.
    #[serde(default)]
    pub length: Option<LengthInput>,
    /// Enabled character classes.
    #[serde(flatten)]
    pub options: PasswordOptions,
}

/// Response with a generated password.
#[derive(Debug, Serialize)]
pub struct PasswordResponse {
    /// The generated password.
    pub password: String,
}

fn resolve_length(
    policy: &PasswordPolicy,
    input: Option<&LengthInput>,
) -> Result<usize, PasswordError> {
    match input {
        None => Err(PasswordError::LengthRequired),
        Some(LengthInput::Number(length)) => policy.check_length(*length).map(|()| *length),
        Some(LengthInput::Text(raw)) => policy.parse_length(raw),
    }
}

/// POST `/password` - Generate a password.
async fn generate_password(
    State(state): State<AppState>,
    Json(payload): Json<PasswordRequest>,
) -> Result<Json<PasswordResponse>, ApiError> {
    let policy = state.passwords;
    let password = resolve_length(&policy, payload.length.as_ref())
        .and_then(|length| policy.generate(length, &payload.options, &mut rand::rng()))
        .inspect_err(|e| warn!(error = %e, "Password generation rejected"))?;

    info!(length = password.len(), "Generated password");
    Ok(Json(PasswordResponse { password }))
}
