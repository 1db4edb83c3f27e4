//! Number formatting for dashboard cards, charts and lists.
//!
//! All rounding is half away from zero (`f64::round`), matching the usual
//! currency display convention. Non-finite input formats as zero.

/// Round to the nearest integer, half away from zero.
pub fn round_half_away(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    value.round() as i64
}

/// Insert a comma every 3 digits from the right.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Whole-dollar currency string.
///
/// ```
/// use frontend::shared::number_format::format_currency;
/// assert_eq!(format_currency(1234.56), "$1,235");
/// ```
pub fn format_currency(value: f64) -> String {
    let rounded = round_half_away(value);
    let body = group_thousands(rounded.unsigned_abs());
    if rounded < 0 {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// Thousands-grouped integer.
///
/// ```
/// use frontend::shared::number_format::format_count;
/// assert_eq!(format_count(1234567.0), "1,234,567");
/// ```
pub fn format_count(value: f64) -> String {
    let rounded = round_half_away(value);
    let body = group_thousands(rounded.unsigned_abs());
    if rounded < 0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// Short currency for chart axes: `$950`, `$12K`, `$3.9M`.
///
/// The unit is picked after rounding, so `999_999` is `$1.0M`, not `$1000K`.
pub fn format_compact_currency(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    if abs >= 999_500.0 {
        format!("{}${:.1}M", sign, abs / 1_000_000.0)
    } else if abs >= 999.5 {
        format!("{}${}K", sign, round_half_away(abs / 1_000.0))
    } else {
        format_currency(value)
    }
}

/// Share of `part` in `total` as a whole percent.
///
/// Each share is rounded on its own, so a set of shares may not add up to
/// exactly 100.
pub fn share_percent(part: f64, total: f64) -> i64 {
    if !(total > 0.0) || !part.is_finite() || !total.is_finite() {
        return 0;
    }
    round_half_away(part / total * 100.0)
}

/// Pie label in the form `"<name>: <pct>%"`.
pub fn format_share_label(name: &str, part: f64, total: f64) -> String {
    format!("{}: {}%", name, share_percent(part, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.56), "$1,235");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.49), "$999");
        assert_eq!(format_currency(10032628.85), "$10,032,629");
        assert_eq!(format_currency(-1234.56), "-$1,235");
    }

    #[test]
    fn test_format_currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(0.5), "$1");
        assert_eq!(format_currency(2.5), "$3");
        assert_eq!(format_currency(-0.5), "-$1");
        assert_eq!(format_currency(-0.4), "$0");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1234567.0), "1,234,567");
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(999.0), "999");
        assert_eq!(format_count(1000.0), "1,000");
        assert_eq!(format_count(-1234.0), "-1,234");
    }

    #[test]
    fn test_non_finite_formats_as_zero() {
        assert_eq!(format_currency(f64::NAN), "$0");
        assert_eq!(format_count(f64::INFINITY), "0");
        assert_eq!(share_percent(f64::NAN, 10.0), 0);
    }

    #[test]
    fn test_format_compact_currency() {
        assert_eq!(format_compact_currency(950.0), "$950");
        assert_eq!(format_compact_currency(12_400.0), "$12K");
        assert_eq!(format_compact_currency(3_919_615.66), "$3.9M");
        assert_eq!(format_compact_currency(-2_500.0), "-$3K");
    }

    #[test]
    fn test_compact_unit_follows_rounding() {
        assert_eq!(format_compact_currency(999_999.0), "$1.0M");
        assert_eq!(format_compact_currency(999_500.0), "$1.0M");
        assert_eq!(format_compact_currency(999_499.0), "$999K");
        assert_eq!(format_compact_currency(999.6), "$1K");
        assert_eq!(format_compact_currency(999.4), "$999");
        assert_eq!(format_compact_currency(-999_999.0), "-$1.0M");
    }

    #[test]
    fn test_share_labels() {
        assert_eq!(format_share_label("X", 300.0, 400.0), "X: 75%");
        assert_eq!(format_share_label("Y", 100.0, 400.0), "Y: 25%");
        assert_eq!(share_percent(5.0, 0.0), 0);
    }

    #[test]
    fn test_shares_are_rounded_independently() {
        // 1/3 each: 33 + 33 + 33, no renormalization to 100
        let total = 3.0;
        let shares: Vec<i64> = [1.0, 1.0, 1.0]
            .iter()
            .map(|v| share_percent(*v, total))
            .collect();
        assert_eq!(shares, vec![33, 33, 33]);
        // 1/8 = 12.5 rounds up
        assert_eq!(share_percent(1.0, 8.0), 13);
    }
}
