//! End-to-end dashboard build: fetch both feeds, parse, aggregate.

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::aggregate::monthly::monthly_counts;
use crate::aggregate::severity::{DEFAULT_EXCLUDED_SEVERITIES, severity_counts};
use crate::aggregate::types::DashboardData;
use crate::fetch::{HttpClient, fetch_text};
use crate::parser::parse_records;

/// Default location of the ADS incident-report feed.
pub const ADS_FEED_URL: &str =
    "https://static.nhtsa.gov/odi/ffdd/sgo-2021-01/SGO-2021-01_Incident_Reports_ADS.csv";

/// Default location of the ADAS incident-report feed.
pub const ADAS_FEED_URL: &str =
    "https://static.nhtsa.gov/odi/ffdd/sgo-2021-01/SGO-2021-01_Incident_Reports_ADAS.csv";

/// Dashboard lifecycle as the rendering layer sees it. Exactly one state
/// holds at a time: the page starts from `Loading` and flips to whichever
/// of the other two the pipeline resolves to.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ViewState {
    Loading,
    Ready { data: DashboardData },
    Failed { message: String },
}

impl From<Result<DashboardData>> for ViewState {
    fn from(result: Result<DashboardData>) -> Self {
        match result {
            Ok(data) => ViewState::Ready { data },
            Err(e) => ViewState::Failed {
                message: e.to_string(),
            },
        }
    }
}

/// Fetches both feeds concurrently and builds the composite dashboard data.
///
/// Both fetches are fired together and both must succeed; a failure of
/// either (including a non-2xx status) fails the whole build before any
/// aggregation happens. No retry is attempted.
pub async fn load<C: HttpClient>(
    client: &C,
    ads_url: &str,
    adas_url: &str,
) -> Result<DashboardData> {
    let (ads, adas) = tokio::join!(fetch_text(client, ads_url), fetch_text(client, adas_url));

    let ads_csv = ads.map_err(|e| anyhow::anyhow!("ADS feed: {e}"))?;
    let adas_csv = adas.map_err(|e| anyhow::anyhow!("ADAS feed: {e}"))?;

    build_dashboard(&ads_csv, &adas_csv)
}

/// Pure aggregation step: two CSV texts in, chart-ready structures out.
///
/// Monthly counts run over the union of both feeds' records; severity
/// breakdowns run per feed with the default exclusions.
pub fn build_dashboard(ads_csv: &str, adas_csv: &str) -> Result<DashboardData> {
    let ads = parse_records(ads_csv)?;
    let adas = parse_records(adas_csv)?;
    info!(
        ads_records = ads.len(),
        adas_records = adas.len(),
        "Feeds parsed"
    );

    let monthly = monthly_counts(ads.iter().chain(adas.iter()));
    let ads_severity = severity_counts(&ads, DEFAULT_EXCLUDED_SEVERITIES);
    let adas_severity = severity_counts(&adas, DEFAULT_EXCLUDED_SEVERITIES);

    Ok(DashboardData {
        generated_at: Utc::now(),
        monthly,
        ads: ads_severity,
        adas: adas_severity,
    })
}
