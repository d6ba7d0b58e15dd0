use chrono::{DateTime, Utc};

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Percentages as the backend sends them, without trailing zeros.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    let fixed = format!("{value:.2}");
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use quiz_core::time::fixed_now;

    use super::*;

    #[test]
    fn formats_fixed_timestamp() {
        assert_eq!(format_datetime(fixed_now()), "2023-11-14 22:13 UTC");
    }

    #[test]
    fn percentage_drops_trailing_zeros() {
        assert_eq!(format_percentage(66.67), "66.67");
        assert_eq!(format_percentage(50.0), "50");
        assert_eq!(format_percentage(12.5), "12.5");
        assert_eq!(format_percentage(0.0), "0");
    }
}
