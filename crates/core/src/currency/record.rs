//! Currency record type.

use cambio_shared::CurrencyConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the currency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyRecord {
    /// Currency code, case-sensitive primary key (e.g. "USD").
    pub code: String,
    /// Units of this currency per 1 USD. USD itself is 1.
    pub value_in_usd: Decimal,
    /// Display symbol, not unique.
    pub symbol: String,
    /// Display name.
    pub full_name: String,
    /// Optional flag glyph.
    pub flag: Option<String>,
}

impl CurrencyRecord {
    /// Creates a new currency record.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        value_in_usd: Decimal,
        symbol: impl Into<String>,
        full_name: impl Into<String>,
        flag: Option<&str>,
    ) -> Self {
        Self {
            code: code.into(),
            value_in_usd,
            symbol: symbol.into(),
            full_name: full_name.into(),
            flag: flag.map(str::to_string),
        }
    }
}

impl From<&CurrencyConfig> for CurrencyRecord {
    fn from(config: &CurrencyConfig) -> Self {
        Self {
            code: config.code.clone(),
            value_in_usd: config.value_in_usd,
            symbol: config.symbol.clone(),
            full_name: config.full_name.clone(),
            flag: config.flag.clone(),
        }
    }
}
