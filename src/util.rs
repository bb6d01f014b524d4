// Field validators and small formatting helpers.
//
// This module centralizes all the per-column parsing so the rest of the code
// can assume clean, typed values. Every validator is strict: it either
// returns the normalized value or a `FieldError` naming the column and the
// offending text.
use crate::error::{Field, FieldError, FieldErrorKind};
use crate::types::Ctr;
use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};

/// Most significant digits a CTR may carry; keeps the exact product in `u128`.
const MAX_CTR_DIGITS: usize = 18;

/// Parse a date written strictly as `MM/DD/YYYY`.
///
/// - Two-digit month, two-digit day, four-digit year, `/` separators.
/// - No surrounding whitespace, no other separators or formats.
/// - Month/day combinations that do not exist (`02/30/2020`) are rejected.
pub fn parse_date(s: &str) -> Result<NaiveDate, FieldError> {
    let b = s.as_bytes();
    let shaped = b.len() == 10
        && b[2] == b'/'
        && b[5] == b'/'
        && b
            .iter()
            .enumerate()
            .all(|(i, c)| i == 2 || i == 5 || c.is_ascii_digit());
    if !shaped {
        return Err(FieldError::new(Field::Date, s, FieldErrorKind::DateFormat));
    }
    // The shape is right, so chrono can only object to the calendar values.
    NaiveDate::parse_from_str(s, "%m/%d/%Y")
        .map_err(|_| FieldError::new(Field::Date, s, FieldErrorKind::DateOutOfRange))
}

/// Trim a subdivision name and reject it if nothing is left.
///
/// Whether the name is known is the resolver's business, not this function's.
pub fn parse_subdivision(s: &str) -> Result<&str, FieldError> {
    let name = s.trim();
    if name.is_empty() {
        return Err(FieldError::new(Field::Subdivision, s, FieldErrorKind::Empty));
    }
    Ok(name)
}

/// Parse a plain non-negative integer: ASCII digits only, no sign, no
/// separators, no decimal point.
pub fn parse_impressions(s: &str) -> Result<u64, FieldError> {
    let err = |reason| FieldError::new(Field::Impressions, s, reason);
    if s.is_empty() {
        return Err(err(FieldErrorKind::Empty));
    }
    if let Some(rest) = s.strip_prefix('-') {
        if !rest.is_empty() && rest.bytes().all(|c| c.is_ascii_digit()) {
            return Err(err(FieldErrorKind::Negative));
        }
        return Err(err(FieldErrorKind::NotAnInteger));
    }
    if !s.bytes().all(|c| c.is_ascii_digit()) {
        return Err(err(FieldErrorKind::NotAnInteger));
    }
    // Only digits remain, so the sole failure left is overflow.
    s.parse::<u64>().map_err(|_| err(FieldErrorKind::TooLarge))
}

/// Parse a percentage such as `"3.5%"` into an exact decimal.
///
/// The numeric part must be digits with at most one `.` (`"5"`, `"5."`,
/// `".5"`, `"0.25"`), immediately followed by `%`. Values above 100% are
/// rejected.
pub fn parse_ctr(s: &str) -> Result<Ctr, FieldError> {
    let err = |reason| FieldError::new(Field::Ctr, s, reason);
    let number = s
        .strip_suffix('%')
        .ok_or_else(|| err(FieldErrorKind::MissingPercent))?;

    let (int_part, frac_part) = match number.split_once('.') {
        Some((i, f)) => (i, f),
        None => (number, ""),
    };
    let all_digits = |p: &str| p.bytes().all(|c| c.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty())
        || !all_digits(int_part)
        || !all_digits(frac_part)
    {
        return Err(err(FieldErrorKind::NotADecimal));
    }

    // Trailing fractional zeros and leading integer zeros carry no value.
    let frac_part = frac_part.trim_end_matches('0');
    let int_part = int_part.trim_start_matches('0');
    if int_part.len() + frac_part.len() > MAX_CTR_DIGITS {
        return Err(err(FieldErrorKind::NotADecimal));
    }

    let digits = int_part
        .bytes()
        .chain(frac_part.bytes())
        .fold(0u64, |acc, c| acc * 10 + u64::from(c - b'0'));
    let ctr = Ctr {
        digits,
        scale: frac_part.len() as u32,
    };

    if u128::from(ctr.digits) > 100 * 10u128.pow(ctr.scale) {
        return Err(err(FieldErrorKind::CtrOutOfRange));
    }
    Ok(ctr)
}

/// Clicks implied by `impressions` at the given CTR, rounded half to even.
///
/// The product is computed exactly on integers, so `round(2.5) == 2` and
/// `round(3.5) == 4` hold without floating-point drift.
pub fn round_clicks(impressions: u64, ctr: Ctr) -> u64 {
    let numerator = u128::from(impressions) * u128::from(ctr.digits);
    let denominator = 100 * 10u128.pow(ctr.scale);
    let quotient = numerator / denominator;
    let twice_remainder = 2 * (numerator % denominator);
    let rounded = match twice_remainder.cmp(&denominator) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal => quotient + (quotient & 1),
    };
    // A CTR of at most 100% never yields more clicks than impressions.
    u64::try_from(rounded).unwrap_or(u64::MAX)
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Thin wrapper around `num-format` for counts in console messages
    // (e.g., `9,855 rows aggregated`).
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctr(s: &str) -> Ctr {
        parse_ctr(s).unwrap()
    }

    // ==================== Date ====================

    #[test]
    fn date_accepts_strict_format() {
        assert_eq!(
            parse_date("01/02/2020").unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 2).unwrap()
        );
        assert_eq!(
            parse_date("02/29/2020").unwrap(),
            NaiveDate::from_ymd_opt(2020, 2, 29).unwrap()
        );
    }

    #[test]
    fn date_rejects_other_shapes() {
        for bad in ["1/2/2020", "2020-01-02", "01-02-2020", "01/02/20", " 01/02/2020", "0a/02/2020", ""] {
            let e = parse_date(bad).unwrap_err();
            assert_eq!(e.reason, FieldErrorKind::DateFormat, "{bad}");
            assert_eq!(e.field, Field::Date);
            assert_eq!(e.value, bad);
        }
    }

    #[test]
    fn date_accepts_any_four_digit_year() {
        assert_eq!(
            parse_date("01/01/0000").unwrap(),
            NaiveDate::from_ymd_opt(0, 1, 1).unwrap()
        );
        assert_eq!(
            parse_date("12/31/9999").unwrap(),
            NaiveDate::from_ymd_opt(9999, 12, 31).unwrap()
        );
    }

    #[test]
    fn date_rejects_impossible_calendar_days() {
        for bad in ["13/40/2020", "00/10/2020", "02/30/2020", "02/29/2019", "04/31/2021"] {
            assert_eq!(
                parse_date(bad).unwrap_err().reason,
                FieldErrorKind::DateOutOfRange,
                "{bad}"
            );
        }
    }

    // ==================== Subdivision ====================

    #[test]
    fn subdivision_is_trimmed() {
        assert_eq!(parse_subdivision("  Texas ").unwrap(), "Texas");
    }

    #[test]
    fn blank_subdivision_is_rejected() {
        assert_eq!(parse_subdivision("   ").unwrap_err().reason, FieldErrorKind::Empty);
        assert_eq!(parse_subdivision("").unwrap_err().reason, FieldErrorKind::Empty);
    }

    // ==================== Impressions ====================

    #[test]
    fn impressions_accepts_digits() {
        assert_eq!(parse_impressions("0").unwrap(), 0);
        assert_eq!(parse_impressions("1500").unwrap(), 1500);
        assert_eq!(parse_impressions("007").unwrap(), 7);
    }

    #[test]
    fn impressions_rejections() {
        assert_eq!(parse_impressions("").unwrap_err().reason, FieldErrorKind::Empty);
        assert_eq!(parse_impressions("-5").unwrap_err().reason, FieldErrorKind::Negative);
        assert_eq!(parse_impressions("-").unwrap_err().reason, FieldErrorKind::NotAnInteger);
        assert_eq!(parse_impressions("1,000").unwrap_err().reason, FieldErrorKind::NotAnInteger);
        assert_eq!(parse_impressions("10.0").unwrap_err().reason, FieldErrorKind::NotAnInteger);
        assert_eq!(parse_impressions("+10").unwrap_err().reason, FieldErrorKind::NotAnInteger);
        assert_eq!(parse_impressions("ten").unwrap_err().reason, FieldErrorKind::NotAnInteger);
        assert_eq!(
            parse_impressions("99999999999999999999").unwrap_err().reason,
            FieldErrorKind::TooLarge
        );
    }

    // ==================== CTR ====================

    #[test]
    fn ctr_parses_exact_decimal() {
        assert_eq!(ctr("3.5%"), Ctr { digits: 35, scale: 1 });
        assert_eq!(ctr("5%"), Ctr { digits: 5, scale: 0 });
        assert_eq!(ctr("0.250%"), Ctr { digits: 25, scale: 2 });
        assert_eq!(ctr(".5%"), Ctr { digits: 5, scale: 1 });
        assert_eq!(ctr("5.%"), Ctr { digits: 5, scale: 0 });
        assert_eq!(ctr("100%"), Ctr { digits: 100, scale: 0 });
    }

    #[test]
    fn ctr_requires_percent_sign() {
        assert_eq!(parse_ctr("3.5").unwrap_err().reason, FieldErrorKind::MissingPercent);
        assert_eq!(parse_ctr("%3.5").unwrap_err().reason, FieldErrorKind::MissingPercent);
        assert_eq!(parse_ctr("3.5% ").unwrap_err().reason, FieldErrorKind::MissingPercent);
    }

    #[test]
    fn ctr_rejects_non_decimal_prefix() {
        for bad in ["%", ".%", "-1%", "1.2.3%", "abc%", "1e2%", " 5%", "NaN%"] {
            assert_eq!(parse_ctr(bad).unwrap_err().reason, FieldErrorKind::NotADecimal, "{bad}");
        }
    }

    #[test]
    fn ctr_above_hundred_percent_is_out_of_range() {
        assert_eq!(parse_ctr("100.01%").unwrap_err().reason, FieldErrorKind::CtrOutOfRange);
        assert_eq!(parse_ctr("250%").unwrap_err().reason, FieldErrorKind::CtrOutOfRange);
        assert!(parse_ctr("100.000%").is_ok());
    }

    // ==================== Rounding ====================

    #[test]
    fn clicks_round_half_to_even() {
        // 50 * 5% = 2.5 -> 2, 70 * 5% = 3.5 -> 4
        assert_eq!(round_clicks(50, ctr("5%")), 2);
        assert_eq!(round_clicks(70, ctr("5%")), 4);
        // 10 * 25% = 2.5 -> 2, 10 * 35% = 3.5 -> 4
        assert_eq!(round_clicks(10, ctr("25%")), 2);
        assert_eq!(round_clicks(10, ctr("35%")), 4);
    }

    #[test]
    fn clicks_round_to_nearest_off_the_midpoint() {
        assert_eq!(round_clicks(100, ctr("5%")), 5);
        assert_eq!(round_clicks(33, ctr("10%")), 3); // 3.3
        assert_eq!(round_clicks(37, ctr("10%")), 4); // 3.7
        assert_eq!(round_clicks(1000, ctr("0.05%")), 0); // 0.5 -> 0
        assert_eq!(round_clicks(3000, ctr("0.05%")), 2); // 1.5 -> 2
        assert_eq!(round_clicks(0, ctr("50%")), 0);
    }

    #[test]
    fn full_ctr_never_exceeds_impressions() {
        assert_eq!(round_clicks(u64::MAX, ctr("100%")), u64::MAX);
        assert_eq!(round_clicks(1234, ctr("100%")), 1234);
    }

    #[test]
    fn format_int_inserts_separators() {
        assert_eq!(format_int(9855), "9,855");
        assert_eq!(format_int(12), "12");
    }
}
