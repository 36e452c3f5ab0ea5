//! Date helpers
//!
//! Slip dates travel as `YYYY-MM-DD` strings; parsing and the day/month/year
//! display form used by `{{date}}` live here.

use chrono::NaiveDate;

use super::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Format a date for display on a slip (day/month/year)
pub fn display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let d = parse_date("2025-03-09").unwrap();
        assert_eq!(display_date(d), "09/03/2025");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_date("09/03/2025").is_err());
        assert!(parse_date("").is_err());
    }
}
