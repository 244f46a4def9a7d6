//! Amount input rules.
//!
//! Two stages: `sanitize_amount_text` runs on every keystroke and only ever
//! removes or rewrites characters; `validate_amount_input` runs on submit and
//! turns the text into a positive `Decimal`.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::error::ConversionError;

/// Smallest accepted amount (10^-28, the finest `Decimal` scale).
pub const MIN_AMOUNT: Decimal = Decimal::from_parts(1, 0, 0, false, 28);

/// Largest accepted amount (10^15).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Filters raw text into a numeric-safe amount string.
///
/// Steps, in order:
/// 1. drop everything except ASCII digits and `.`
/// 2. keep only `first.second` when there is more than one `.`
/// 3. without a `.`, collapse leading zeros (`"007"` -> `"7"`, `"00"` -> `"0"`)
/// 4. a bare `"."` becomes `"0."`
#[must_use]
pub fn sanitize_amount_text(raw: &str) -> String {
    let mut sanitized: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut parts = sanitized.split('.');
    let integer_part = parts.next().unwrap_or_default().to_string();
    let fraction_part = parts.next().map(str::to_string);
    let has_extra_point = parts.next().is_some();
    if let (Some(fraction), true) = (fraction_part, has_extra_point) {
        sanitized = format!("{integer_part}.{fraction}");
    }

    if integer_part.starts_with('0') && integer_part.len() > 1 && !sanitized.contains('.') {
        let trimmed = integer_part.trim_start_matches('0');
        sanitized = if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        };
    }

    if sanitized == "." {
        sanitized = "0.".to_string();
    }

    sanitized
}

/// Parses submitted amount text into a positive amount.
///
/// Accepts an optional sign, a leading or trailing point (`".5"`, `"5."`)
/// and exponent notation (`"1e3"`). Positive values finer than
/// [`MIN_AMOUNT`] are reported as `AmountTooSmall` rather than rounded to zero.
pub fn validate_amount_input(raw: &str) -> Result<Decimal, ConversionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    let amount = parse_decimal(trimmed)?;
    if amount <= Decimal::ZERO {
        return Err(ConversionError::NonPositive);
    }
    if amount > MAX_AMOUNT {
        return Err(ConversionError::AmountTooLarge { max: MAX_AMOUNT });
    }
    Ok(amount)
}

fn parse_decimal(text: &str) -> Result<Decimal, ConversionError> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    if !unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return Err(ConversionError::NotANumber);
    }

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(index) => (&unsigned[..index], Some(&unsigned[index + 1..])),
        None => (unsigned, None),
    };

    let mantissa = mantissa.strip_suffix('.').unwrap_or(mantissa);
    if mantissa.is_empty() || !mantissa.bytes().any(|b| b.is_ascii_digit()) {
        return Err(ConversionError::NotANumber);
    }
    if mantissa.contains(['+', '-']) || mantissa.matches('.').count() > 1 {
        return Err(ConversionError::NotANumber);
    }

    if let Some(exp) = exponent {
        let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConversionError::NotANumber);
        }
    }

    // Non-zero digits that still come out as zero fell below Decimal's scale.
    let significant = mantissa.bytes().any(|b| matches!(b, b'1'..=b'9'));
    if !significant {
        return Ok(Decimal::ZERO);
    }
    let underflow = || {
        if negative {
            ConversionError::NonPositive
        } else {
            ConversionError::AmountTooSmall { min: MIN_AMOUNT }
        }
    };

    let sign = if negative { "-" } else { "" };
    let integer_is_zero = mantissa
        .split('.')
        .next()
        .unwrap_or_default()
        .bytes()
        .all(|b| b == b'0');
    let mantissa = if mantissa.starts_with('.') {
        format!("{sign}0{mantissa}")
    } else {
        format!("{sign}{mantissa}")
    };

    let value = match exponent {
        None => Decimal::from_str(&mantissa).map_err(|_| {
            if integer_is_zero {
                underflow()
            } else {
                ConversionError::NotANumber
            }
        })?,
        Some(exp) => Decimal::from_scientific(&format!("{mantissa}e{exp}")).map_err(|_| {
            if exp.starts_with('-') {
                underflow()
            } else {
                ConversionError::NotANumber
            }
        })?,
    };

    if value.is_zero() {
        return Err(underflow());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("12a3.4.5", "123.4")]
    #[case("007", "7")]
    #[case("0", "0")]
    #[case(".", "0.")]
    #[case("00", "0")]
    #[case("000", "0")]
    #[case("", "")]
    #[case("1.2.3", "1.2")]
    #[case("$1,000", "1000")]
    #[case("-5", "5")]
    #[case("0.5", "0.5")]
    #[case("00.5", "00.5")]
    #[case("..", "0.")]
    #[case("12.", "12.")]
    #[case("١٢٣", "")]
    fn test_sanitize_amount_text(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(sanitize_amount_text(raw), expected);
    }

    #[test]
    fn test_sanitize_is_idempotent_on_clean_input() {
        for raw in ["7", "12.5", "0.", "100"] {
            assert_eq!(sanitize_amount_text(&sanitize_amount_text(raw)), raw);
        }
    }

    #[rstest]
    #[case("", ConversionError::EmptyInput)]
    #[case("   ", ConversionError::EmptyInput)]
    #[case("abc", ConversionError::NotANumber)]
    #[case(".", ConversionError::NotANumber)]
    #[case("1.2.3", ConversionError::NotANumber)]
    #[case("12abc", ConversionError::NotANumber)]
    #[case("1_000", ConversionError::NotANumber)]
    #[case("--5", ConversionError::NotANumber)]
    #[case("1e", ConversionError::NotANumber)]
    #[case("1e400", ConversionError::NotANumber)]
    #[case("-5", ConversionError::NonPositive)]
    #[case("0", ConversionError::NonPositive)]
    #[case("0.", ConversionError::NonPositive)]
    #[case("-0", ConversionError::NonPositive)]
    #[case("1000000000000001", ConversionError::AmountTooLarge { max: MAX_AMOUNT })]
    #[case("0.00000000000000000000000000001", ConversionError::AmountTooSmall { min: MIN_AMOUNT })]
    #[case("1e-29", ConversionError::AmountTooSmall { min: MIN_AMOUNT })]
    #[case("5E-40", ConversionError::AmountTooSmall { min: MIN_AMOUNT })]
    #[case("-1e-29", ConversionError::NonPositive)]
    #[case("0e-40", ConversionError::NonPositive)]
    fn test_validate_amount_input_errors(#[case] raw: &str, #[case] expected: ConversionError) {
        assert_eq!(validate_amount_input(raw), Err(expected));
    }

    #[rstest]
    #[case("12.5", dec!(12.5))]
    #[case(" 100 ", dec!(100))]
    #[case("5.", dec!(5))]
    #[case(".5", dec!(0.5))]
    #[case("+3", dec!(3))]
    #[case("1e3", dec!(1000))]
    #[case("2.5E-1", dec!(0.25))]
    #[case("1000000000000000", dec!(1000000000000000))]
    #[case("0.0000000000000000000000000001", MIN_AMOUNT)]
    #[case("1e-28", MIN_AMOUNT)]
    fn test_validate_amount_input_ok(#[case] raw: &str, #[case] expected: Decimal) {
        assert_eq!(validate_amount_input(raw), Ok(expected));
    }

    #[test]
    fn test_amount_bounds() {
        assert_eq!(MAX_AMOUNT, dec!(1000000000000000));
        assert_eq!(MIN_AMOUNT, dec!(0.0000000000000000000000000001));
    }
}
