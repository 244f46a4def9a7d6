//! Property-based tests for currency operations.
//!
//! - Identity: converting into the same currency returns the amount
//! - Round trip: converting there and back returns the amount
//! - Linearity: doubling the amount doubles the result
//! - Sanitized text only ever holds digits and at most one point

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::{convert, format_amount};
use super::input::{sanitize_amount_text, validate_amount_input};
use super::record::CurrencyRecord;
use super::table::CurrencyTable;

/// Tolerance for Decimal division rounding (28 significant digits).
fn epsilon() -> Decimal {
    Decimal::new(1, 12)
}

/// Strategy to generate positive amounts (0.01 to 1,000,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to pick a record from the built-in table.
fn builtin_record() -> impl Strategy<Value = CurrencyRecord> {
    prop::sample::select(CurrencyTable::builtin().records().to_vec())
}

fn approx_eq(left: Decimal, right: Decimal) -> bool {
    let diff = (left - right).abs();
    let scale = left.abs().max(Decimal::ONE);
    diff <= epsilon() * scale
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Converting into the same currency returns the amount exactly.
    #[test]
    fn prop_identity(amount in positive_amount(), currency in builtin_record()) {
        prop_assert_eq!(convert(amount, &currency, &currency), amount);
    }

    /// Converting a -> b -> a returns the original amount.
    #[test]
    fn prop_round_trip(
        amount in positive_amount(),
        a in builtin_record(),
        b in builtin_record(),
    ) {
        let there = convert(amount, &a, &b);
        let back = convert(there, &b, &a);
        prop_assert!(
            approx_eq(back, amount),
            "{} {} -> {} {} -> {} {}",
            amount, a.code, there, b.code, back, a.code
        );
    }

    /// convert(2x) == 2 * convert(x).
    #[test]
    fn prop_linear_in_amount(
        amount in positive_amount(),
        a in builtin_record(),
        b in builtin_record(),
    ) {
        let two = Decimal::TWO;
        let doubled = convert(amount * two, &a, &b);
        let twice = convert(amount, &a, &b) * two;
        prop_assert!(approx_eq(doubled, twice), "{} vs {}", doubled, twice);
    }

    /// Positive amounts convert to positive results.
    #[test]
    fn prop_positive_in_positive_out(
        amount in positive_amount(),
        a in builtin_record(),
        b in builtin_record(),
    ) {
        prop_assert!(convert(amount, &a, &b) > Decimal::ZERO);
    }

    /// Formatted output always has exactly two decimals.
    #[test]
    fn prop_format_has_two_decimals(
        amount in positive_amount(),
        a in builtin_record(),
        b in builtin_record(),
    ) {
        let formatted = format_amount(convert(amount, &a, &b), 2);
        let (_, fraction) = formatted.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), 2);
    }

    /// Sanitized text holds only ASCII digits and at most one point.
    #[test]
    fn prop_sanitize_charset(raw in ".*") {
        let sanitized = sanitize_amount_text(&raw);
        prop_assert!(sanitized.chars().all(|c| c.is_ascii_digit() || c == '.'));
        prop_assert!(sanitized.matches('.').count() <= 1);
    }

    /// Sanitizing twice gives the same text as sanitizing once.
    #[test]
    fn prop_sanitize_idempotent(raw in "[0-9a-z.,-]{0,12}") {
        let once = sanitize_amount_text(&raw);
        prop_assert_eq!(sanitize_amount_text(&once), once.clone());
    }

    /// Non-empty sanitized text always parses as a number.
    #[test]
    fn prop_sanitized_text_parses(raw in "[0-9.]{1,12}") {
        let sanitized = sanitize_amount_text(&raw);
        if let Err(err) = validate_amount_input(&sanitized) {
            prop_assert_ne!(err, super::error::ConversionError::NotANumber);
        }
    }
}
