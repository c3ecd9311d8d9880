//! Monthly incident counting across the combined feeds.

use std::collections::HashMap;

use crate::aggregate::types::{MonthBucket, month_sort_key};
use crate::records::IncidentRecord;

/// Buckets every record with a parseable incident date by calendar month
/// and returns the buckets in chronological order.
///
/// The first record that opens a month fixes the bucket's labels; later
/// records only increment the count. Records without a parseable date
/// contribute to no bucket.
pub fn monthly_counts<'a, I>(records: I) -> Vec<MonthBucket>
where
    I: IntoIterator<Item = &'a IncidentRecord>,
{
    let mut buckets: HashMap<String, MonthBucket> = HashMap::new();

    for record in records {
        let Some(date) = record.incident_date() else {
            continue;
        };

        let bucket = buckets
            .entry(month_sort_key(date))
            .or_insert_with(|| MonthBucket::for_month(date));
        bucket.count += 1;
    }

    let mut months: Vec<MonthBucket> = buckets.into_values().collect();
    months.sort_by(|a, b| a.sort_key.cmp(&b.sort_key));
    months
}
