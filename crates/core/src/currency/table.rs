//! The currency table.
//!
//! Built once at start-up and never mutated. Construction enforces the
//! invariants every conversion relies on: unique codes and strictly positive
//! rates within a bounded range, so `amount / from * to` stays inside
//! `Decimal` for every accepted amount.

use std::collections::HashSet;

use cambio_shared::CurrencyConfig;
use rust_decimal::Decimal;

use super::error::{ConversionError, TableError};
use super::record::CurrencyRecord;

/// Smallest accepted `value_in_usd` (0.000001).
pub const MIN_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 6);

/// Largest accepted `value_in_usd` (1,000,000).
pub const MAX_RATE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Ordered, immutable set of currency records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyTable {
    records: Vec<CurrencyRecord>,
}

impl CurrencyTable {
    /// Builds a table, validating codes and rates.
    pub fn from_records(records: Vec<CurrencyRecord>) -> Result<Self, TableError> {
        if records.is_empty() {
            return Err(TableError::Empty);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if record.code.trim().is_empty() {
                return Err(TableError::BlankCode(position));
            }
            if !seen.insert(record.code.as_str()) {
                return Err(TableError::DuplicateCode(record.code.clone()));
            }
            if record.value_in_usd <= Decimal::ZERO {
                return Err(TableError::NonPositiveRate {
                    code: record.code.clone(),
                    rate: record.value_in_usd,
                });
            }
            if record.value_in_usd < MIN_RATE || record.value_in_usd > MAX_RATE {
                return Err(TableError::RateOutOfRange {
                    code: record.code.clone(),
                    rate: record.value_in_usd,
                    min: MIN_RATE,
                    max: MAX_RATE,
                });
            }
        }

        Ok(Self { records })
    }

    /// Builds a table from config entries, falling back to the built-in
    /// table when the list is empty.
    pub fn from_config(currencies: &[CurrencyConfig]) -> Result<Self, TableError> {
        if currencies.is_empty() {
            return Ok(Self::builtin());
        }
        Self::from_records(currencies.iter().map(CurrencyRecord::from).collect())
    }

    /// The built-in table: USD, EUR, GBP, JPY, INR, KRW.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            records: vec![
                CurrencyRecord::new("USD", Decimal::new(100, 2), "$", "US Dollar", Some("🇺🇸")),
                CurrencyRecord::new("EUR", Decimal::new(92, 2), "€", "Euro", Some("🇪🇺")),
                CurrencyRecord::new("GBP", Decimal::new(79, 2), "£", "British Pound", Some("🇬🇧")),
                CurrencyRecord::new("JPY", Decimal::new(14950, 2), "¥", "Japanese Yen", Some("🇯🇵")),
                CurrencyRecord::new("INR", Decimal::new(8325, 2), "₹", "Indian Rupee", Some("🇮🇳")),
                CurrencyRecord::new(
                    "KRW",
                    Decimal::new(134_000, 2),
                    "₩",
                    "South Korean Won",
                    Some("🇰🇷"),
                ),
            ],
        }
    }

    /// Looks up a record by exact code.
    pub fn find(&self, code: &str) -> Result<&CurrencyRecord, ConversionError> {
        self.records
            .iter()
            .find(|record| record.code == code)
            .ok_or_else(|| ConversionError::CurrencyNotFound(code.to_string()))
    }

    /// Returns true if the code is in the table.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.records.iter().any(|record| record.code == code)
    }

    /// Iterates records in table order.
    pub fn iter(&self) -> impl Iterator<Item = &CurrencyRecord> {
        self.records.iter()
    }

    /// Records as a slice, in table order.
    #[must_use]
    pub fn records(&self) -> &[CurrencyRecord] {
        &self.records
    }

    /// Currency codes in table order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.code.as_str())
    }

    /// Every record except `code`, in table order.
    pub fn others<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a CurrencyRecord> + 'a {
        self.records.iter().filter(move |record| record.code != code)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed table; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self::builtin()
    }
}
