//! Currency table, conversion and amount input rules.

pub mod conversion;
pub mod error;
pub mod input;
pub mod record;
pub mod service;
pub mod session;
pub mod table;

#[cfg(test)]
mod props;

pub use conversion::{
    Conversion, ConversionRequest, MAX_DISPLAY_DECIMALS, convert, format_amount, swap,
};
pub use error::{ConversionError, TableError};
pub use input::{MAX_AMOUNT, MIN_AMOUNT, sanitize_amount_text, validate_amount_input};
pub use record::CurrencyRecord;
pub use service::{CurrencyService, DEFAULT_DISPLAY_DECIMALS};
pub use session::ConverterSession;
pub use table::{CurrencyTable, MAX_RATE, MIN_RATE};
