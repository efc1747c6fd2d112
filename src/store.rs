// src/store.rs
//
// One pretty-printed JSON file per market. The only policy here is the
// stale-data safeguard: an empty new result never overwrites a non-empty
// prior file, so the frontend keeps showing yesterday's deals instead of a
// blank page when the API has a bad day.

use crate::errors::RunError;
use crate::output::MarketOutput;
use log::{info, warn};
use std::fs;
use std::path::Path;

/// Write the market output, honoring the safeguard. Returns true when the
/// file was written, false when the old file was kept.
pub fn persist_market_output(
    dir: &Path,
    filename: &str,
    output: &MarketOutput,
) -> Result<bool, RunError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);

    if output.deals.is_empty() {
        let prior = existing_deal_count(&path);
        if prior > 0 {
            warn!(
                "⚠️ {}: new result is empty but {} has {prior} deals, keeping old file",
                output.market_id,
                path.display()
            );
            return Ok(false);
        }
    }

    let json = serde_json::to_string_pretty(output)?;
    fs::write(&path, json)?;
    info!(
        "✅ {}: wrote {} deals to {}",
        output.market_id,
        output.deals.len(),
        path.display()
    );
    Ok(true)
}

/// Deal count in a previously persisted file. Missing or unparseable files
/// count as zero, which makes them safe to overwrite.
pub fn existing_deal_count(path: &Path) -> usize {
    let Ok(text) = fs::read_to_string(path) else {
        return 0;
    };
    let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) else {
        return 0;
    };
    value["deals"].as_array().map(|a| a.len()).unwrap_or(0)
}
