//! Core business logic abstractions

pub mod chart;
pub mod config;
pub mod insights;
pub mod log;
pub mod prediction;
pub mod recommend;

// Re-export main types for cleaner imports
pub use chart::{ChartPoint, projection_series};
pub use prediction::{AssetPrediction, AssetType, PredictionProvider};
pub use recommend::{Action, Recommendation, RiskLevel};
