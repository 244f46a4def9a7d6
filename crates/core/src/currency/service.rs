//! Currency service for conversion operations.
//!
//! This module provides the main service interface for currency operations:
//! table lookup, amount validation and conversion with display formatting.

use std::sync::Arc;

use rust_decimal::Decimal;

use super::conversion::{Conversion, ConversionRequest};
use super::error::ConversionError;
use super::input::validate_amount_input;
use super::record::CurrencyRecord;
use super::table::CurrencyTable;

/// Default number of decimal places for displayed amounts.
pub const DEFAULT_DISPLAY_DECIMALS: u32 = 2;

/// Currency service over a shared, read-only table.
///
/// Cloning is cheap; clones share the same table.
#[derive(Debug, Clone)]
pub struct CurrencyService {
    table: Arc<CurrencyTable>,
    display_decimals: u32,
}

impl CurrencyService {
    /// Creates a service over `table`.
    #[must_use]
    pub fn new(table: CurrencyTable, display_decimals: u32) -> Self {
        Self {
            table: Arc::new(table),
            display_decimals,
        }
    }

    /// Service over the built-in table with two display decimals.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(CurrencyTable::builtin(), DEFAULT_DISPLAY_DECIMALS)
    }

    /// The underlying table.
    #[must_use]
    pub fn table(&self) -> &CurrencyTable {
        &self.table
    }

    /// Decimal places used for `Conversion::formatted`.
    #[must_use]
    pub const fn display_decimals(&self) -> u32 {
        self.display_decimals
    }

    /// Looks up a currency by code.
    pub fn find(&self, code: &str) -> Result<&CurrencyRecord, ConversionError> {
        self.table.find(code)
    }

    /// Converts an already validated amount between two codes.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use cambio_core::currency::CurrencyService;
    ///
    /// let service = CurrencyService::builtin();
    /// let conversion = service.convert(dec!(100), "USD", "KRW").unwrap();
    /// assert_eq!(conversion.display, "₩ 134000.00");
    /// ```
    pub fn convert(
        &self,
        amount: Decimal,
        from_code: &str,
        to_code: &str,
    ) -> Result<Conversion, ConversionError> {
        let from = self.table.find(from_code)?;
        let to = self.table.find(to_code)?;
        Ok(ConversionRequest::new(amount, from, to).execute(self.display_decimals))
    }

    /// Validates raw amount text, then converts it.
    ///
    /// Input errors are reported before unknown currency codes.
    pub fn convert_text(
        &self,
        raw_amount: &str,
        from_code: &str,
        to_code: &str,
    ) -> Result<Conversion, ConversionError> {
        let amount = validate_amount_input(raw_amount)?;
        self.convert(amount, from_code, to_code)
    }
}

impl Default for CurrencyService {
    fn default() -> Self {
        Self::builtin()
    }
}
