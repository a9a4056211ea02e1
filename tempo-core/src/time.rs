//! Date helpers: deadline parsing and whole-day distances.

use anyhow::Result;
use chrono::NaiveDate;

/// Parse a deadline like "2026-09-05" into a calendar date.
pub fn parse_deadline(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("invalid deadline '{s}' (expected YYYY-MM-DD): {e}"))
}

/// Signed whole days from `today` to `deadline`.
///
/// Both sides are calendar dates, so the difference is always an exact
/// number of days; negative means the deadline already passed.
pub fn days_until(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_deadline() {
        let d = parse_deadline("2026-09-05").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2026, 9, 5).unwrap());
    }

    #[test]
    fn test_parse_deadline_rejects_garbage() {
        assert!(parse_deadline("tomorrow").is_err());
        assert!(parse_deadline("05/09/2026").is_err());
        assert!(parse_deadline("").is_err());
    }

    #[test]
    fn test_days_until_signs() {
        let today = parse_deadline("2026-08-29").unwrap();
        assert_eq!(days_until(parse_deadline("2026-09-01").unwrap(), today), 3);
        assert_eq!(days_until(today, today), 0);
        assert_eq!(days_until(parse_deadline("2026-08-27").unwrap(), today), -2);
    }
}
