use super::dashboard;
use crate::core::prediction::AssetPrediction;
use anyhow::Result;

/// Renders the dashboard for the bundled sample record, no backend needed.
pub fn run() -> Result<()> {
    let sample = AssetPrediction::sample();
    println!("{}", dashboard::render(&sample)?);
    Ok(())
}
