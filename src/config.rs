use chrono::{Datelike, Local, NaiveDate};

/// Resolve the year the grid is laid out for. A missing, non-numeric, or
/// out-of-calendar-range value falls back to the current year; a bad value is
/// never an error.
pub fn resolve_year(raw: Option<&str>) -> i32 {
    raw.and_then(|s| s.trim().parse::<i32>().ok())
        .filter(|&year| NaiveDate::from_ymd_opt(year, 1, 1).is_some())
        .unwrap_or_else(current_year)
}

fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_year_is_used() {
        assert_eq!(resolve_year(Some("2025")), 2025);
        assert_eq!(resolve_year(Some("1999")), 1999);
    }

    #[test]
    fn surrounding_whitespace_is_accepted() {
        assert_eq!(resolve_year(Some(" 2024 ")), 2024);
    }

    #[test]
    fn missing_year_defaults_to_current() {
        assert_eq!(resolve_year(None), current_year());
    }

    #[test]
    fn non_numeric_year_defaults_to_current() {
        assert_eq!(resolve_year(Some("next")), current_year());
        assert_eq!(resolve_year(Some("")), current_year());
        assert_eq!(resolve_year(Some("20 25")), current_year());
    }

    #[test]
    fn out_of_range_year_defaults_to_current() {
        // Far outside what chrono can represent as a date.
        assert_eq!(resolve_year(Some("1000000")), current_year());
    }
}
