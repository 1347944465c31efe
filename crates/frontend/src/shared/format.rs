//! Number formatting for cards, tooltips and axis labels.

/// Signed currency with thousands separators and two decimals: `-$1,234.56`.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}${}.{}", sign, group_thousands(int_part), frac_part)
}

/// Whole number with thousands separators, no currency sign: `1,234`.
pub fn format_count(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{}{}", sign, group_thousands(&digits))
}

/// Two-decimal percentage, `+`-prefixed when positive: `+3.50%`, `-3.50%`.
pub fn format_percent(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

/// Axis shorthand in thousands: `$12k`, `-$98k`, `0`.
pub fn format_axis_currency_k(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${:.0}k", sign, value.abs() / 1000.0)
}

/// Axis shorthand in thousands without a unit: `125k`, `-98k`, `0`.
pub fn format_axis_k(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{:.0}k", value / 1000.0)
}

/// Whole-dollar axis label: `$804`, `-$1,811`.
pub fn format_axis_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(&format!("{:.0}", value.abs())))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands_and_keeps_two_decimals() {
        assert_eq!(format_currency(125_000.0), "$125,000.00");
        assert_eq!(format_currency(1_234.5), "$1,234.50");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn currency_prefixes_the_sign_before_the_dollar() {
        assert_eq!(format_currency(-200.0), "-$200.00");
        assert_eq!(format_currency(-1_862.31), "-$1,862.31");
    }

    #[test]
    fn count_has_no_sign_and_no_decimals() {
        assert_eq!(format_count(40.0), "40");
        assert_eq!(format_count(9_994.0), "9,994");
        assert_eq!(format_count(4.2), "4");
    }

    #[test]
    fn percent_signs_positive_values_only() {
        assert_eq!(format_percent(-3.5), "-3.50%");
        assert_eq!(format_percent(3.5), "+3.50%");
        assert_eq!(format_percent(0.0), "0.00%");
    }

    #[test]
    fn axis_shorthand_collapses_zero() {
        assert_eq!(format_axis_currency_k(0.0), "0");
        assert_eq!(format_axis_currency_k(125_000.0), "$125k");
        assert_eq!(format_axis_currency_k(-98_000.0), "-$98k");
        assert_eq!(format_axis_k(0.0), "0");
        assert_eq!(format_axis_k(125_000.0), "125k");
        assert_eq!(format_axis_currency(-1_811.0), "-$1,811");
    }
}
