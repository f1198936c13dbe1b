//! Download `UnicodeData.txt` and write the character dataset.
//!
//! Usage: `glyphtone-fetch [OUTPUT]`. `OUTPUT` defaults to `GLYPHTONE_DATA`
//! (or `data/unicode_data.json`); `GLYPHTONE_UCD_URL` overrides the source.

use std::path::PathBuf;

use anyhow::Context;
use glyphtone_server::{AppConfig, telemetry};
use glyphtone_ucd::{Dataset, parse_unicode_data};

const UNICODE_DATA_URL: &str = "https://www.unicode.org/Public/15.1.0/ucd/UnicodeData.txt";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let output = std::env::args()
        .nth(1)
        .map_or_else(|| AppConfig::default().data_path, PathBuf::from);
    let url = std::env::var("GLYPHTONE_UCD_URL").unwrap_or_else(|_| UNICODE_DATA_URL.to_string());

    tracing::info!(%url, "downloading Unicode data");
    let text = reqwest::get(&url)
        .await
        .and_then(reqwest::Response::error_for_status)
        .with_context(|| format!("failed to download {url}"))?
        .text()
        .await
        .context("failed to read response body")?;

    let records = parse_unicode_data(&text)?;
    Dataset::write(&output, &records)?;

    tracing::info!(
        records = records.len(),
        path = %output.display(),
        "character dataset written"
    );
    Ok(())
}
