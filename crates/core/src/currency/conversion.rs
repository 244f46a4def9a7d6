//! Currency conversion logic.
//!
//! CRITICAL: Conversion is routed through USD as the pivot:
//! - `amount / from.value_in_usd` gives the USD amount
//! - multiplying by `to.value_in_usd` gives the target amount
//! - the unrounded value is kept; rounding happens only for display

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::Serialize;

use super::record::CurrencyRecord;

/// Converts an amount from one currency to another via USD.
///
/// Same-code conversions return `amount` untouched instead of dividing and
/// multiplying by the same rate.
///
/// Callers must pass a validated amount and records from a validated table;
/// this function never fails.
#[must_use]
pub fn convert(amount: Decimal, from: &CurrencyRecord, to: &CurrencyRecord) -> Decimal {
    if from.code == to.code {
        return amount;
    }
    let amount_in_usd = amount / from.value_in_usd;
    amount_in_usd * to.value_in_usd
}

/// Swaps a source/target pair.
#[must_use]
pub fn swap<T>(from: T, to: T) -> (T, T) {
    (to, from)
}

/// Largest scale `Decimal` can hold, and so the most display decimals.
pub const MAX_DISPLAY_DECIMALS: u32 = 28;

/// Rounds half away from zero and pads to exactly `decimal_places`.
///
/// `decimal_places` must not exceed [`MAX_DISPLAY_DECIMALS`]; larger values
/// are capped there.
#[must_use]
pub fn format_amount(value: Decimal, decimal_places: u32) -> String {
    let mut rounded =
        value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimal_places);
    rounded.to_string()
}

/// A single conversion request, consumed as soon as it is executed.
#[derive(Debug, Clone, Copy)]
pub struct ConversionRequest<'a> {
    /// Validated positive amount in the source currency.
    pub amount: Decimal,
    /// Source currency.
    pub from: &'a CurrencyRecord,
    /// Target currency.
    pub to: &'a CurrencyRecord,
}

impl<'a> ConversionRequest<'a> {
    /// Creates a new request.
    #[must_use]
    pub const fn new(amount: Decimal, from: &'a CurrencyRecord, to: &'a CurrencyRecord) -> Self {
        Self { amount, from, to }
    }

    /// Runs the conversion and formats it for display.
    #[must_use]
    pub fn execute(self, decimal_places: u32) -> Conversion {
        let value = convert(self.amount, self.from, self.to);
        let formatted = format_amount(value, decimal_places);
        Conversion {
            amount: self.amount,
            from: self.from.code.clone(),
            to: self.to.code.clone(),
            value,
            display: format!("{} {formatted}", self.to.symbol),
            formatted,
            symbol: self.to.symbol.clone(),
        }
    }
}

/// Result of a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// Amount in the source currency.
    pub amount: Decimal,
    /// Source currency code.
    pub from: String,
    /// Target currency code.
    pub to: String,
    /// Unrounded amount in the target currency.
    pub value: Decimal,
    /// `value` rounded and padded to the display precision.
    pub formatted: String,
    /// Target currency symbol.
    pub symbol: String,
    /// `"{symbol} {formatted}"`, e.g. `"₩ 134000.00"`.
    pub display: String,
}
