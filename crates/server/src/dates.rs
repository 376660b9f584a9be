use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Format matching JavaScript's `Date.toDateString()`, which is how dates
/// have always been rendered to clients of this API
const DATE_STRING_FORMAT: &str = "%a %b %d %Y";

/// Parses a `YYYY-MM-DD` calendar date. Anything else is treated as absent
/// by callers, never as an error.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Anchors a calendar date at UTC midnight, the instant explicit dates are
/// stored at and range bounds compare against
pub fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

pub fn date_string(instant: DateTime<Utc>) -> String {
    instant.format(DATE_STRING_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_calendar_dates() {
        let date = parse_calendar_date("2023-01-01").expect("valid date");
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        // Surrounding whitespace is tolerated, form values often carry it
        assert!(parse_calendar_date(" 2023-12-31 ").is_some());
    }

    #[test]
    fn garbage_dates_read_as_absent() {
        assert!(parse_calendar_date("").is_none());
        assert!(parse_calendar_date("yesterday").is_none());
        assert!(parse_calendar_date("2023-13-40").is_none());
        assert!(parse_calendar_date("01/01/2023").is_none());
    }

    #[test]
    fn renders_like_js_to_date_string() {
        let date = midnight_utc(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(date_string(date), "Sun Jan 01 2023");

        let date = midnight_utc(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(date_string(date), "Thu Feb 29 2024");
    }

    #[test]
    fn midnight_anchor_is_utc() {
        let instant = midnight_utc(NaiveDate::from_ymd_opt(2023, 6, 15).unwrap());
        assert_eq!(instant.to_rfc3339(), "2023-06-15T00:00:00+00:00");
    }
}
