//! Field-keyed incident report records.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::dates::parse_incident_date;

/// Column holding the date of the incident.
pub const INCIDENT_DATE: &str = "Incident Date";

/// Column holding the alleged injury severity category.
pub const INJURY_SEVERITY: &str = "Highest Injury Severity Alleged";

/// One report row, keyed by the column names from its file's header.
///
/// Every column of the row is preserved; the aggregators only consume the
/// two named above. Columns missing from a short row are simply absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncidentRecord {
    fields: HashMap<String, String>,
}

impl IncidentRecord {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Raw field value by column name.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// The incident date, if the field is present and parseable.
    pub fn incident_date(&self) -> Option<NaiveDate> {
        self.get(INCIDENT_DATE).and_then(parse_incident_date)
    }

    /// The raw severity value, which may be empty or a sentinel like
    /// `"Unknown"`. Filtering is the severity aggregator's policy.
    pub fn severity(&self) -> Option<&str> {
        self.get(INJURY_SEVERITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> IncidentRecord {
        IncidentRecord::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_get_returns_raw_value() {
        let r = record(&[("City", "San Francisco"), (INJURY_SEVERITY, "Minor")]);
        assert_eq!(r.get("City"), Some("San Francisco"));
        assert_eq!(r.get("State"), None);
    }

    #[test]
    fn test_incident_date_parses_valid_value() {
        let r = record(&[(INCIDENT_DATE, "2021-07-22")]);
        assert_eq!(
            r.incident_date(),
            NaiveDate::from_ymd_opt(2021, 7, 22)
        );
    }

    #[test]
    fn test_incident_date_none_when_missing_or_invalid() {
        assert_eq!(record(&[]).incident_date(), None);
        assert_eq!(record(&[(INCIDENT_DATE, "")]).incident_date(), None);
        assert_eq!(
            record(&[(INCIDENT_DATE, "not reported")]).incident_date(),
            None
        );
    }

    #[test]
    fn test_severity_is_unfiltered() {
        assert_eq!(
            record(&[(INJURY_SEVERITY, "Unknown")]).severity(),
            Some("Unknown")
        );
        assert_eq!(record(&[(INJURY_SEVERITY, "")]).severity(), Some(""));
        assert_eq!(record(&[]).severity(), None);
    }
}
