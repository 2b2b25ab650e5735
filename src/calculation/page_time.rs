//! Expected page time (EPT) options.
//!
//! EPT is chosen from a fixed set of values between 0.3 and 4.0 seconds in
//! 0.1 second steps. Anything else is rejected by the throughput engine.

/// Smallest permitted EPT, in tenths of a second.
pub const MIN_PAGE_TIME_TENTHS: u32 = 3;

/// Largest permitted EPT, in tenths of a second.
pub const MAX_PAGE_TIME_TENTHS: u32 = 40;

const PAGE_TIME_TOLERANCE: f64 = 1e-9;

/// Returns every permitted EPT value in seconds, slowest first.
///
/// # Examples
///
/// ```
/// use productivity_impact::calculation::expected_page_time_options;
///
/// let options = expected_page_time_options();
/// assert_eq!(options.len(), 38);
/// assert_eq!(options[0], 4.0);
/// assert_eq!(options[37], 0.3);
/// ```
pub fn expected_page_time_options() -> Vec<f64> {
    (MIN_PAGE_TIME_TENTHS..=MAX_PAGE_TIME_TENTHS)
        .rev()
        .map(|tenths| f64::from(tenths) / 10.0)
        .collect()
}

/// Returns true when `seconds` is one of the permitted EPT values.
///
/// Values within 1e-9 of a permitted step are accepted so that sums such as
/// `0.1 + 0.2` still match 0.3.
///
/// # Examples
///
/// ```
/// use productivity_impact::calculation::is_valid_page_time;
///
/// assert!(is_valid_page_time(2.4));
/// assert!(!is_valid_page_time(2.45));
/// assert!(!is_valid_page_time(0.2));
/// ```
pub fn is_valid_page_time(seconds: f64) -> bool {
    if !seconds.is_finite() {
        return false;
    }

    let tenths = (seconds * 10.0).round();
    let in_range =
        tenths >= f64::from(MIN_PAGE_TIME_TENTHS) && tenths <= f64::from(MAX_PAGE_TIME_TENTHS);

    in_range && (seconds - tenths / 10.0).abs() < PAGE_TIME_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_cover_every_tenth_between_bounds() {
        let options = expected_page_time_options();
        assert_eq!(options.len(), 38);
        assert_eq!(options.first(), Some(&4.0));
        assert_eq!(options.last(), Some(&0.3));
        assert!(options.contains(&2.4));
        assert!(options.iter().all(|&o| is_valid_page_time(o)));
    }

    #[test]
    fn test_options_are_strictly_descending() {
        let options = expected_page_time_options();
        assert!(options.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(is_valid_page_time(0.3));
        assert!(is_valid_page_time(4.0));
    }

    #[test]
    fn test_values_outside_range_rejected() {
        assert!(!is_valid_page_time(0.2));
        assert!(!is_valid_page_time(4.1));
        assert!(!is_valid_page_time(0.0));
        assert!(!is_valid_page_time(-1.0));
    }

    #[test]
    fn test_values_between_steps_rejected() {
        assert!(!is_valid_page_time(2.45));
        assert!(!is_valid_page_time(1.01));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        assert!(!is_valid_page_time(f64::NAN));
        assert!(!is_valid_page_time(f64::INFINITY));
    }

    #[test]
    fn test_accumulated_float_error_tolerated() {
        assert!(is_valid_page_time(0.1 + 0.2));
    }
}
