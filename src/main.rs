//! CLI entry point for the incident dashboard builder.
//!
//! Provides subcommands for building the two-feed dashboard artifact and
//! for aggregating a single feed from a file or URL.

use anyhow::Result;
use clap::{Parser, Subcommand};
use incident_dash::aggregate::monthly::monthly_counts;
use incident_dash::aggregate::severity::{DEFAULT_EXCLUDED_SEVERITIES, severity_counts};
use incident_dash::aggregate::types::FeedSummary;
use incident_dash::pipeline::{ADAS_FEED_URL, ADS_FEED_URL, ViewState, load};
use incident_dash::{
    fetch::{BasicClient, fetch_text},
    output::{print_json, write_json},
    parser::parse_records,
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "incident_dash")]
#[command(about = "A tool to aggregate vehicle incident reports into chart-ready dashboard data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch both incident feeds and write the dashboard JSON artifact
    Build {
        /// URL of the ADS incident-report CSV
        #[arg(long, default_value = ADS_FEED_URL)]
        ads_url: String,

        /// URL of the ADAS incident-report CSV
        #[arg(long, default_value = ADAS_FEED_URL)]
        adas_url: String,

        /// File to write the dashboard JSON to
        #[arg(short, long, default_value = "dashboard.json")]
        output: String,
    },
    /// Aggregate a single feed from a file or URL and print its summary
    Analyze {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// Optional file to write the summary JSON to instead of printing
        #[arg(short, long)]
        output: Option<String>,

        /// Severity values to exclude from the breakdown (default: Unknown)
        #[arg(long, value_name = "VALUE")]
        exclude: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/incident_dash.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("incident_dash.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            ads_url,
            adas_url,
            output,
        } => {
            let client = BasicClient::new();
            let state = ViewState::from(load(&client, &ads_url, &adas_url).await);

            // The artifact is written in every outcome so the page can
            // render either the data or the error state.
            write_json(&output, &state)?;

            match state {
                ViewState::Ready { data } => {
                    info!(
                        months = data.monthly.len(),
                        ads_total = data.ads.total,
                        adas_total = data.adas.total,
                        artifact = %output,
                        "Dashboard data built"
                    );
                }
                ViewState::Failed { message } => {
                    error!(artifact = %output, error = %message, "Dashboard build failed");
                    anyhow::bail!(message);
                }
                // The pipeline resolves to Ready or Failed; Loading is the
                // page's initial state before the artifact lands.
                ViewState::Loading => {}
            }
        }
        Commands::Analyze {
            source,
            output,
            exclude,
        } => {
            let text = fetch_source(&source).await?;
            let records = parse_records(&text)?;
            info!(records = records.len(), "Feed parsed");

            let excluded: Vec<&str> = if exclude.is_empty() {
                DEFAULT_EXCLUDED_SEVERITIES.to_vec()
            } else {
                exclude.iter().map(String::as_str).collect()
            };

            let summary = FeedSummary {
                records: records.len(),
                monthly: monthly_counts(&records),
                severity: severity_counts(&records, &excluded),
                source,
            };

            match output {
                Some(path) => write_json(&path, &summary)?,
                None => print_json(&summary)?,
            }
        }
    }

    Ok(())
}

/// Loads feed text from a local file path or fetches it over HTTP.
#[tracing::instrument(fields(source = %source))]
async fn fetch_source(source: &str) -> Result<String> {
    let text = if source.starts_with("http") {
        let client = BasicClient::new();
        fetch_text(&client, source).await?
    } else {
        std::fs::read_to_string(source)?
    };
    Ok(text)
}
