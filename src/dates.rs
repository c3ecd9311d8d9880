//! Incident-date parsing.
//!
//! Report dates arrive in several shapes depending on how much the source
//! redacts: full US-style dates with or without a time component, ISO
//! dates, and the month-year form (`"JUL-2021"`) left when the day of
//! month is withheld.

use chrono::NaiveDate;

/// Formats tried in order against a trimmed incident-date value.
const DATE_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d",
    "%d-%b-%Y",
];

/// Parses an incident date, returning `None` for anything unparseable.
///
/// Day-redacted month-year values are pinned to the first of the month,
/// which is exact for monthly bucketing. Empty and malformed values yield
/// `None` rather than an epoch date.
pub fn parse_incident_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }

    // Day-redacted form, e.g. "JUL-2021".
    NaiveDate::parse_from_str(&format!("01-{value}"), "%d-%b-%Y").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_incident_date("2023-01-15"), Some(ymd(2023, 1, 15)));
    }

    #[test]
    fn test_parse_us_date_with_and_without_time() {
        assert_eq!(parse_incident_date("08/03/2021"), Some(ymd(2021, 8, 3)));
        assert_eq!(parse_incident_date("8/3/2021"), Some(ymd(2021, 8, 3)));
        assert_eq!(
            parse_incident_date("07/22/2021 14:05"),
            Some(ymd(2021, 7, 22))
        );
    }

    #[test]
    fn test_parse_day_month_year() {
        assert_eq!(parse_incident_date("15-JUL-2021"), Some(ymd(2021, 7, 15)));
    }

    #[test]
    fn test_month_year_pins_first_of_month() {
        assert_eq!(parse_incident_date("JUL-2021"), Some(ymd(2021, 7, 1)));
        assert_eq!(parse_incident_date("Dec-2022"), Some(ymd(2022, 12, 1)));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(parse_incident_date(" 2021-05-14 "), Some(ymd(2021, 5, 14)));
    }

    #[test]
    fn test_unparseable_values_are_none_not_epoch() {
        assert_eq!(parse_incident_date(""), None);
        assert_eq!(parse_incident_date("   "), None);
        assert_eq!(parse_incident_date("not reported"), None);
        assert_eq!(parse_incident_date("2021/07"), None);
    }
}
