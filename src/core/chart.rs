//! Reshapes prediction prices into the labeled projection series.

use crate::core::prediction::AssetPrediction;
use serde::Serialize;

/// Fixed horizon labels, in render order.
pub const CHART_LABELS: [&str; 3] = ["Today", "7 Days", "90 Days"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: f64,
}

/// Produces the three (label, value) points for the projection chart.
///
/// Values pass through unchanged, non-finite ones included; this is a pure
/// reshaping step with no validation.
pub fn projection_series(latest: f64, short_term: f64, mid_term: f64) -> Vec<ChartPoint> {
    CHART_LABELS
        .into_iter()
        .zip([latest, short_term, mid_term])
        .map(|(label, value)| ChartPoint { label, value })
        .collect()
}

pub fn from_prediction(prediction: &AssetPrediction) -> Vec<ChartPoint> {
    projection_series(
        prediction.latest_price,
        prediction.short_term_prediction,
        prediction.mid_term_prediction,
    )
}
