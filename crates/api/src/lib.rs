//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes, one group per screen
//! - `ApiError`, mapping domain errors to JSON responses

pub mod error;
pub mod routes;

use axum::Router;
use cambio_core::currency::{CurrencyService, CurrencyTable, MAX_DISPLAY_DECIMALS};
use cambio_core::password::PasswordPolicy;
use cambio_shared::{AppConfig, AppError, AppResult};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Currency table and conversion.
    pub currencies: CurrencyService,
    /// Password length bounds.
    pub passwords: PasswordPolicy,
    /// Pair used when a conversion request omits `from` or `to`.
    pub default_pair: (String, String),
}

impl AppState {
    /// Builds state from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the currency table is invalid, a default
    /// currency is not in it, `display_decimals` exceeds what `Decimal` can
    /// show, or the password length bounds are inverted.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let converter = &config.converter;
        let table = CurrencyTable::from_config(&converter.currencies)?;
        for code in [&converter.default_from, &converter.default_to] {
            if !table.contains(code) {
                return Err(AppError::Config(format!(
                    "default currency {code} is not in the currency table"
                )));
            }
        }

        if converter.display_decimals > MAX_DISPLAY_DECIMALS {
            return Err(AppError::Config(format!(
                "display_decimals must be at most {MAX_DISPLAY_DECIMALS}, got {}",
                converter.display_decimals
            )));
        }

        let password = &config.password;
        if password.min_length > password.max_length {
            return Err(AppError::Config(format!(
                "password min_length {} exceeds max_length {}",
                password.min_length, password.max_length
            )));
        }

        Ok(Self {
            currencies: CurrencyService::new(table, converter.display_decimals),
            passwords: PasswordPolicy::from(&config.password),
            default_pair: (converter.default_from.clone(), converter.default_to.clone()),
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            currencies: CurrencyService::builtin(),
            passwords: PasswordPolicy::default(),
            default_pair: ("KRW".to_string(), "USD".to_string()),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
