//! Incident aggregation into chart-ready structures.
//!
//! `monthly` buckets the union of both feeds by calendar month for the bar
//! chart; `severity` breaks one feed down by alleged injury severity for
//! its pie chart. Both produce the plain value types in `types`, which
//! serialize directly into the dashboard artifact.

pub mod monthly;
pub mod severity;
pub mod types;
