//! Currency converter routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use cambio_core::currency::{self, Conversion, CurrencyRecord, sanitize_amount_text};
use cambio_shared::AppError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{AppState, error::ApiError};

/// Creates the currency converter routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/currencies", get(list_currencies))
        .route("/currencies/{code}", get(get_currency))
        .route("/convert", get(convert))
        .route("/convert/swap", post(swap))
        .route("/amount/sanitize", post(sanitize))
}

/// Response for the currency list.
#[derive(Debug, Serialize)]
pub struct CurrencyListResponse {
    /// Records in table order.
    pub currencies: Vec<CurrencyRecord>,
}

/// Query parameters for a conversion.
#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    /// Raw amount text as typed.
    #[serde(default)]
    pub amount: String,
    /// Source currency code (defaults to the configured source).
    pub from: Option<String>,
    /// Target currency code (defaults to the configured target).
    pub to: Option<String>,
}

/// Request body for swapping a pair.
#[derive(Debug, Deserialize)]
pub struct SwapRequest {
    /// Current source code.
    pub from: String,
    /// Current target code.
    pub to: String,
    /// Current amount text; when non-empty the swapped pair is converted.
    #[serde(default)]
    pub amount: Option<String>,
}

/// Why the swapped pair could not be converted.
#[derive(Debug, Serialize)]
pub struct SwapConversionError {
    /// Error code, as in error responses.
    pub code: &'static str,
    /// Message for the amount field.
    pub message: String,
}

/// Response for a swap.
///
/// The pair is always swapped; a bad amount or code only clears `conversion`.
#[derive(Debug, Serialize)]
pub struct SwapResponse {
    /// New source code.
    pub from: String,
    /// New target code.
    pub to: String,
    /// Conversion with the swapped pair, if an amount was given and valid.
    pub conversion: Option<Conversion>,
    /// Set when an amount was given but could not be converted.
    pub error: Option<SwapConversionError>,
}

/// Request and response body for sanitizing amount text.
#[derive(Debug, Serialize, Deserialize)]
pub struct AmountText {
    /// Amount text.
    pub text: String,
}

/// GET `/currencies` - List all currencies.
async fn list_currencies(State(state): State<AppState>) -> Json<CurrencyListResponse> {
    Json(CurrencyListResponse {
        currencies: state.currencies.table().records().to_vec(),
    })
}

/// GET `/currencies/{code}` - Get one currency.
async fn get_currency(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<CurrencyRecord>, ApiError> {
    let record = state.currencies.find(&code).inspect_err(|e| {
        warn!(error = %e, code = %code, "Currency lookup failed");
    })?;
    Ok(Json(record.clone()))
}

/// GET `/convert` - Convert an amount between two currencies.
///
/// `amount` is parsed strictly as sent; it does not go through the
/// keystroke filter, so `"12abc"` is rejected rather than read as 12.
async fn convert(
    State(state): State<AppState>,
    Query(query): Query<ConvertQuery>,
) -> Result<Json<Conversion>, ApiError> {
    let from = query.from.unwrap_or_else(|| state.default_pair.0.clone());
    let to = query.to.unwrap_or_else(|| state.default_pair.1.clone());

    let conversion = state
        .currencies
        .convert_text(&query.amount, &from, &to)
        .inspect_err(|e| {
            warn!(error = %e, from = %from, to = %to, "Conversion rejected");
        })?;

    debug!(
        from = %conversion.from,
        to = %conversion.to,
        amount = %conversion.amount,
        value = %conversion.value,
        "Converted amount"
    );
    Ok(Json(conversion))
}

/// POST `/convert/swap` - Swap a pair and re-convert the amount.
async fn swap(
    State(state): State<AppState>,
    Json(payload): Json<SwapRequest>,
) -> Json<SwapResponse> {
    let (from, to) = currency::swap(payload.from.as_str(), payload.to.as_str());

    let outcome = match payload.amount.as_deref() {
        Some(amount) if !amount.trim().is_empty() => {
            Some(state.currencies.convert_text(amount, from, to))
        }
        _ => None,
    };

    let (conversion, error) = match outcome {
        Some(Ok(conversion)) => (Some(conversion), None),
        Some(Err(e)) => {
            warn!(error = %e, from = %from, to = %to, "Conversion after swap rejected");
            let err = AppError::from(e);
            (
                None,
                Some(SwapConversionError {
                    code: err.error_code(),
                    message: err.message().to_string(),
                }),
            )
        }
        None => (None, None),
    };

    Json(SwapResponse {
        from: from.to_string(),
        to: to.to_string(),
        conversion,
        error,
    })
}

/// POST `/amount/sanitize` - Apply the per-keystroke amount filter.
async fn sanitize(Json(payload): Json<AmountText>) -> Json<AmountText> {
    Json(AmountText {
        text: sanitize_amount_text(&payload.text),
    })
}
