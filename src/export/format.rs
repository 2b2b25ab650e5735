//! Number formatting for exports and reports.
//!
//! Derived figures are rounded through `rust_decimal` so that ties round half
//! away from zero on the exact binary value, the way a spreadsheet user expects
//! `toFixed`-style output to behave.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds `value` to `dp` decimal places, half away from zero.
///
/// Returns `None` when the value is not finite or is too large for a
/// `Decimal` to hold at `dp` places (above roughly `7.9e26` for two places).
///
/// # Examples
///
/// ```
/// use productivity_impact::export::round_dp;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_dp(0.125, 2), Some(Decimal::new(13, 2)));
/// assert_eq!(round_dp(-26156.254, 2), Some(Decimal::new(-2615625, 2)));
/// assert_eq!(round_dp(1e30, 2), None);
/// ```
pub fn round_dp(value: f64, dp: u32) -> Option<Decimal> {
    let mut rounded = Decimal::from_f64_retain(value)?
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    (rounded.scale() == dp).then_some(rounded)
}

/// Formats `value` with exactly `dp` decimal places.
///
/// Values beyond `Decimal` range are whole numbers in `f64`, so the exact
/// binary expansion is printed instead.
pub fn fixed(value: f64, dp: u32) -> String {
    match round_dp(value, dp) {
        Some(rounded) => rounded.to_string(),
        None => format!("{:.*}", dp as usize, value),
    }
}

/// Formats a raw number in its shortest form (`45000`, `7.5`).
pub fn plain(value: f64) -> String {
    value.to_string()
}

/// Formats a currency amount as `$1,234.56`, or `-$1,234.56` when negative.
///
/// # Examples
///
/// ```
/// use productivity_impact::export::format_currency;
///
/// assert_eq!(format_currency(45000.0), "$45,000.00");
/// assert_eq!(format_currency(-26156.25), "-$26,156.25");
/// ```
pub fn format_currency(value: f64) -> String {
    let digits = fixed(value.abs(), 2);
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let is_nonzero = digits.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if value < 0.0 && is_nonzero { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(whole), fraction)
}

/// Formats an hour count as `12.3 hrs`.
pub fn format_hours(value: f64) -> String {
    format!("{} hrs", fixed(value, 1))
}

/// Formats a percentage with `dp` decimal places and a `%` suffix.
pub fn format_percent(value: f64, dp: u32) -> String {
    format!("{}%", fixed(value, dp))
}

/// Renders a flag as `Yes` or `No`.
pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_pads_to_requested_places() {
        assert_eq!(fixed(45000.0, 2), "45000.00");
        assert_eq!(fixed(61.25, 2), "61.25");
        assert_eq!(fixed(4.1, 2), "4.10");
    }

    #[test]
    fn test_fixed_rounds_exact_ties_away_from_zero() {
        assert_eq!(fixed(0.125, 2), "0.13");
        assert_eq!(fixed(-0.125, 2), "-0.13");
    }

    #[test]
    fn test_fixed_rounds_binary_value_not_decimal_literal() {
        // 2.675 is stored just below the tie.
        assert_eq!(fixed(2.675, 2), "2.67");
    }

    #[test]
    fn test_fixed_with_one_place() {
        assert_eq!(fixed(-775.0, 1), "-775.0");
        assert_eq!(fixed(4.68, 1), "4.7");
    }

    #[test]
    fn test_plain_uses_shortest_form() {
        assert_eq!(plain(45000.0), "45000");
        assert_eq!(plain(7.5), "7.5");
        assert_eq!(plain(1750.0), "1750");
    }

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-26156250.0), "-$26,156,250.00");
    }

    #[test]
    fn test_format_currency_small_negative_rounds_to_plain_zero() {
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_fixed_beyond_decimal_range_keeps_magnitude() {
        let huge = 2f64.powi(100);
        assert_eq!(fixed(-huge, 2), "-1267650600228229401496703205376.00");
        assert_eq!(
            format_currency(-huge),
            "-$1,267,650,600,228,229,401,496,703,205,376.00"
        );
        assert_eq!(round_dp(-huge, 2), None);
    }

    #[test]
    fn test_fixed_when_places_do_not_fit_in_decimal() {
        let huge = 2f64.powi(95);
        assert_eq!(fixed(huge, 2), "39614081257132168796771975168.00");
        assert_eq!(fixed(huge, 0), "39614081257132168796771975168");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(-775.0), "-775.0 hrs");
        assert_eq!(format_hours(1745.32), "1745.3 hrs");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(61.25, 1), "61.3%");
        assert_eq!(format_percent(0.267428, 2), "0.27%");
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
