//! Output surfaces for aggregated data: log printing and the JSON artifact
//! the dashboard page reads.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Logs a serializable aggregate as pretty-printed JSON.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Writes a serializable aggregate as pretty-printed JSON to `path`,
/// creating parent directories as needed. The previous artifact, if any,
/// is replaced whole.
pub fn write_json(path: &str, value: &impl Serialize) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let body = serde_json::to_string_pretty(value)?;
    std::fs::write(path, body)?;
    debug!(path, "JSON artifact written");

    Ok(())
}
