//! Output types consumed by the dashboard's chart layer.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Grouping key for the month containing `date`, `"YYYY-MM"`. Zero-padded,
/// so lexicographic order is chronological order.
pub fn month_sort_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// One calendar month of combined incident counts: a bar on the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthBucket {
    /// `"2021-07"`, the grouping and sorting key.
    pub sort_key: String,
    /// `"Jul 2021"`, shown in tooltips and legends.
    pub label: String,
    /// `"07-2021"`, shown on the x axis.
    pub axis_label: String,
    pub count: usize,
}

impl MonthBucket {
    /// Zero-count bucket for the month containing `date`, with all labels
    /// precomputed. Labels never change after creation.
    pub fn for_month(date: NaiveDate) -> Self {
        Self {
            sort_key: month_sort_key(date),
            label: date.format("%b %Y").to_string(),
            axis_label: date.format("%m-%Y").to_string(),
            count: 0,
        }
    }
}

/// Incident count for one severity value: a pie-chart slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub value: usize,
}

/// Per-feed severity breakdown. `total` is the number of records counted,
/// equal to the sum of the individual values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeveritySummary {
    pub counts: Vec<CategoryCount>,
    pub total: usize,
}

/// The composite result handed to the chart layer: monthly counts over the
/// union of both feeds, severity breakdowns per feed.
#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub generated_at: DateTime<Utc>,
    pub monthly: Vec<MonthBucket>,
    pub ads: SeveritySummary,
    pub adas: SeveritySummary,
}

/// Single-feed summary produced by the `analyze` command.
#[derive(Debug, Serialize)]
pub struct FeedSummary {
    pub source: String,
    pub records: usize,
    pub monthly: Vec<MonthBucket>,
    pub severity: SeveritySummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_month_labels() {
        let date = NaiveDate::from_ymd_opt(2021, 7, 22).unwrap();
        let bucket = MonthBucket::for_month(date);

        assert_eq!(bucket.sort_key, "2021-07");
        assert_eq!(bucket.label, "Jul 2021");
        assert_eq!(bucket.axis_label, "07-2021");
        assert_eq!(bucket.count, 0);
    }

    #[test]
    fn test_sort_key_is_zero_padded() {
        let jan = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        let dec = NaiveDate::from_ymd_opt(2022, 12, 31).unwrap();

        assert_eq!(month_sort_key(jan), "2023-01");
        assert!(month_sort_key(dec) < month_sort_key(jan));
    }
}
