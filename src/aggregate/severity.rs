//! Injury-severity breakdown for a single feed.

use std::collections::HashMap;

use crate::aggregate::types::{CategoryCount, SeveritySummary};
use crate::records::IncidentRecord;

/// Severity values excluded from a breakdown unless the caller overrides
/// the set. `"Unknown"` is a reporting placeholder, not a category.
pub const DEFAULT_EXCLUDED_SEVERITIES: &[&str] = &["Unknown"];

/// Counts records per literal severity value, skipping records whose
/// severity field is absent, empty, or listed in `excluded`.
///
/// The order of the returned counts is unspecified; the total equals the
/// number of records that were counted.
pub fn severity_counts<'a, I>(records: I, excluded: &[&str]) -> SeveritySummary
where
    I: IntoIterator<Item = &'a IncidentRecord>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();

    for record in records {
        let Some(severity) = record.severity() else {
            continue;
        };
        if severity.is_empty() || excluded.contains(&severity) {
            continue;
        }

        *counts.entry(severity.to_string()).or_insert(0) += 1;
    }

    let total = counts.values().sum();
    let counts = counts
        .into_iter()
        .map(|(name, value)| CategoryCount { name, value })
        .collect();

    SeveritySummary { counts, total }
}
