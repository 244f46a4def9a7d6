//! Currency error types.

use cambio_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while turning user input into a conversion.
///
/// Every variant is recoverable by the user correcting the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Input was blank after trimming.
    #[error("amount is empty")]
    EmptyInput,

    /// Input does not parse as a finite number.
    #[error("amount is not a number")]
    NotANumber,

    /// Input parsed to zero or a negative value.
    #[error("amount must be positive")]
    NonPositive,

    /// Input exceeds the largest accepted amount.
    #[error("amount exceeds {max}")]
    AmountTooLarge {
        /// Largest accepted amount.
        max: Decimal,
    },

    /// Input is positive but finer than the smallest representable amount.
    #[error("amount is below {min}")]
    AmountTooSmall {
        /// Smallest accepted amount.
        min: Decimal,
    },

    /// Currency code is not in the table.
    #[error("currency not found: {0}")]
    CurrencyNotFound(String),
}

impl ConversionError {
    /// Message shown next to the amount field.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyInput => "Please enter an amount",
            Self::NotANumber | Self::NonPositive => "Enter a valid positive number",
            Self::AmountTooLarge { .. } => "Amount is too large",
            Self::AmountTooSmall { .. } => "Amount is too small",
            Self::CurrencyNotFound(_) => "Currency data unavailable",
        }
    }
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::CurrencyNotFound(code) => {
                Self::NotFound(format!("Currency data unavailable: {code}"))
            }
            other => Self::Validation(other.user_message().to_string()),
        }
    }
}

/// Errors raised while building a currency table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Table has no records.
    #[error("currency table is empty")]
    Empty,

    /// Code is empty or whitespace.
    #[error("currency code is blank at position {0}")]
    BlankCode(usize),

    /// Two records share a code.
    #[error("duplicate currency code: {0}")]
    DuplicateCode(String),

    /// Rate is zero or negative.
    #[error("rate for {code} must be positive, got {rate}")]
    NonPositiveRate {
        /// Offending code.
        code: String,
        /// Offending rate.
        rate: Decimal,
    },

    /// Rate is positive but outside the supported range.
    #[error("rate for {code} is outside [{min}, {max}], got {rate}")]
    RateOutOfRange {
        /// Offending code.
        code: String,
        /// Offending rate.
        rate: Decimal,
        /// Smallest accepted rate.
        min: Decimal,
        /// Largest accepted rate.
        max: Decimal,
    },
}

impl From<TableError> for AppError {
    fn from(err: TableError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ConversionError::EmptyInput.user_message(),
            "Please enter an amount"
        );
        assert_eq!(
            ConversionError::NotANumber.user_message(),
            "Enter a valid positive number"
        );
        assert_eq!(
            ConversionError::NonPositive.user_message(),
            "Enter a valid positive number"
        );
        assert_eq!(
            ConversionError::AmountTooSmall { min: dec!(0.1) }.user_message(),
            "Amount is too small"
        );
        assert_eq!(
            ConversionError::CurrencyNotFound("XYZ".into()).user_message(),
            "Currency data unavailable"
        );
    }

    #[test]
    fn test_into_app_error() {
        let err: AppError = ConversionError::EmptyInput.into();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Please enter an amount");

        let err: AppError = ConversionError::CurrencyNotFound("XYZ".into()).into();
        assert_eq!(err.status_code(), 404);
        assert!(err.message().contains("XYZ"));

        let err: AppError = TableError::DuplicateCode("USD".into()).into();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_table_error_display() {
        let err = TableError::NonPositiveRate {
            code: "EUR".into(),
            rate: dec!(-1),
        };
        assert_eq!(err.to_string(), "rate for EUR must be positive, got -1");
    }
}
