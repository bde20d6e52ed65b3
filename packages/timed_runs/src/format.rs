//! Rendering of floating point timings with a fixed number of significant digits.

use std::num::NonZero;

use new_zealand::nz;

/// Significant digits used for every timing printed to the console.
pub const SIGNIFICANT_DIGITS: NonZero<usize> = nz!(8);

/// Column width of the results table and of the timing in per-run progress lines.
pub(crate) const COLUMN_WIDTH: usize = 14;

/// Formats `value` in "general" notation, rounded to `digits` significant digits.
///
/// Fixed-point notation is used when the decimal exponent of the rounded value is at least -4
/// and less than `digits - 1`, scientific notation otherwise. Trailing zeros are removed, although
/// fixed-point output always keeps at least one digit after the decimal point. Scientific output
/// uses a signed exponent of at least two digits.
///
/// # Examples
///
/// ```
/// use new_zealand::nz;
/// use timed_runs::format_significant;
///
/// assert_eq!(format_significant(1.58129594, nz!(8)), "1.5812959");
/// assert_eq!(format_significant(0.000375785631, nz!(8)), "0.00037578563");
/// assert_eq!(format_significant(2.0, nz!(8)), "2.0");
/// assert_eq!(format_significant(0.000001, nz!(8)), "1e-06");
/// ```
#[must_use]
pub fn format_significant(value: f64, digits: NonZero<usize>) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    if value.is_infinite() {
        return if value.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }

    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let fraction_digits = digits.get().saturating_sub(1);

    // Scientific rendering performs the rounding for us and tells us the resulting exponent.
    let scientific = format!("{value:.fraction_digits$e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .expect("scientific formatting of a finite float always contains an exponent");
    let exponent: i64 = exponent
        .parse()
        .expect("scientific formatting of a finite float always has an integer exponent");

    let fraction_digits = i64::try_from(fraction_digits).unwrap_or(i64::MAX);

    if exponent < -4 || exponent >= fraction_digits {
        let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
        let sign = if exponent < 0 { '-' } else { '+' };

        return format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs());
    }

    let decimals = usize::try_from(fraction_digits.saturating_sub(exponent))
        .expect("exponent is below the fraction digit count in this branch, so this is positive");

    let mut fixed = format!("{value:.decimals$}");

    let trimmed_len = fixed.trim_end_matches('0').len();
    fixed.truncate(trimmed_len);

    if fixed.ends_with('.') {
        fixed.push('0');
    }

    fixed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eight(value: f64) -> String {
        format_significant(value, SIGNIFICANT_DIGITS)
    }

    #[test]
    fn fixed_notation_rounds_to_significant_digits() {
        assert_eq!(eight(1.58129594), "1.5812959");
        assert_eq!(eight(1.64288701234), "1.642887");
        assert_eq!(eight(0.00012926069123), "0.00012926069");
        assert_eq!(eight(0.0082054839), "0.0082054839");
    }

    #[test]
    fn fixed_notation_keeps_one_fraction_digit() {
        assert_eq!(eight(2.0), "2.0");
        assert_eq!(eight(1_234_567.0), "1234567.0");
        assert_eq!(eight(0.5), "0.5");
    }

    #[test]
    fn rounding_can_bump_the_exponent() {
        assert_eq!(eight(9.999_999_999), "10.0");
    }

    #[test]
    fn scientific_notation_outside_fixed_range() {
        assert_eq!(eight(0.000001), "1e-06");
        assert_eq!(eight(1.23456789e-5), "1.2345679e-05");
        assert_eq!(eight(123_456_789.5), "1.2345679e+08");
        assert_eq!(eight(12_345_678.0), "1.2345678e+07");
        assert_eq!(eight(1.5e120), "1.5e+120");
    }

    #[test]
    fn special_values() {
        assert_eq!(eight(0.0), "0.0");
        assert_eq!(eight(-0.0), "-0.0");
        assert_eq!(eight(f64::NAN), "nan");
        assert_eq!(eight(f64::INFINITY), "inf");
        assert_eq!(eight(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn negative_values() {
        assert_eq!(eight(-1.5), "-1.5");
        assert_eq!(eight(-0.000001), "-1e-06");
    }

    #[test]
    fn fewer_digits() {
        assert_eq!(format_significant(1.23456, nz!(3)), "1.23");
        assert_eq!(format_significant(1234.0, nz!(3)), "1.23e+03");
        assert_eq!(format_significant(7.0, nz!(1)), "7e+00");
        assert_eq!(format_significant(0.25, nz!(2)), "0.25");
    }
}
