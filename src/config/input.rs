//! Normalisation of user-typed numbers before they reach the engine

use crate::projection::MAX_PROJECTION_YEARS;

/// Parse a typed amount such as "10,000", "4.5" or "5%".
///
/// Thousands separators are ignored and the longest leading decimal number is
/// taken, so trailing text is dropped. Anything without a leading number, and
/// anything that is not finite (including "inf"), becomes 0.
pub fn parse_amount(text: &str) -> f64 {
    let cleaned: String = text.trim_start().chars().filter(|c| *c != ',').collect();
    let prefix = &cleaned[..numeric_prefix_len(&cleaned)];
    match prefix.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Byte length of the leading `[+-]digits[.digits][e[+-]digits]` run
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    end
}

/// Parse a typed horizon in years, truncating fractions and clamping to
/// `0..=MAX_PROJECTION_YEARS`
pub fn parse_years(text: &str) -> u32 {
    let years = parse_amount(text);
    if years > 0.0 {
        years.trunc().min(MAX_PROJECTION_YEARS as f64) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("10,000"), 10_000.0);
        assert_eq!(parse_amount(" 1,234.5 "), 1_234.5);
        assert_eq!(parse_amount("-3"), -3.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
    }

    #[test]
    fn test_parse_amount_leading_number() {
        assert_eq!(parse_amount("5%"), 5.0);
        assert_eq!(parse_amount("12abc"), 12.0);
        assert_eq!(parse_amount("2,500 dollars"), 2_500.0);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("3."), 3.0);
        assert_eq!(parse_amount("1.5e3x"), 1_500.0);
        assert_eq!(parse_amount("7e"), 7.0);
        assert_eq!(parse_amount("-.25"), -0.25);
        assert_eq!(parse_amount("."), 0.0);
        assert_eq!(parse_amount("-"), 0.0);
    }

    #[test]
    fn test_parse_amount_rejects_infinity() {
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("infinity"), 0.0);
        assert_eq!(parse_amount("-Infinity"), 0.0);
        assert_eq!(parse_amount("1e999"), 0.0);
    }

    #[test]
    fn test_parse_years() {
        assert_eq!(parse_years("20"), 20);
        assert_eq!(parse_years("7.9"), 7);
        assert_eq!(parse_years("-2"), 0);
        assert_eq!(parse_years(""), 0);
        assert_eq!(parse_years("inf"), 0);
        assert_eq!(parse_years("10 years"), 10);
    }

    #[test]
    fn test_parse_years_capped_to_representable_horizon() {
        assert_eq!(parse_years("400000000"), MAX_PROJECTION_YEARS);
        assert_eq!(parse_years("1e12"), MAX_PROJECTION_YEARS);
    }
}
