use serde::{Deserialize, Serialize};

/// One billing-relevant usage event as reported by the activity endpoint.
///
/// Field names on the wire differ from ours; the renames below match the
/// response body of `/v1/dashboard/activity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub user_id: String,
    #[serde(rename = "snapshot_id")]
    pub model: String,
    #[serde(rename = "n_context_tokens_total")]
    pub context_tokens: u64,
    #[serde(rename = "n_generated_tokens_total")]
    pub generated_tokens: u64,
    #[serde(rename = "aggregation_timestamp")]
    pub timestamp: i64,
}

/// Per-1000-token unit prices for one model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub input_per_1k: f64,
    pub output_per_1k: f64,
}

/// One row of the on-disk pricing file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRow {
    pub model: String,
    pub input_per_1k: f64,
    pub output_per_1k: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub api_key: String,
    pub organization_key: String,
}

/// Inclusive ISO `YYYY-MM-DD` date pair sent as query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Cumulative cost for one user, in first-occurrence order of `user_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTotal {
    pub user_id: String,
    pub total_cost: f64,
}

/// One row of the per-day cost table, derived from a single record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLine {
    pub date: String,
    pub cost: f64,
    pub model: String,
    pub user_id: String,
}

/// Chart dataset for one user: per-record costs in input order plus the
/// user's stable display color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSeries {
    pub user_id: String,
    pub color: String,
    pub costs: Vec<f64>,
}

/// The full derived aggregate, recomputed from scratch on every load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    pub totals: Vec<UserTotal>,
    pub series: Vec<UserSeries>,
    pub lines: Vec<CostLine>,
    pub labels: Vec<String>,
    pub skipped_unknown_models: u64,
    pub unknown_models: Vec<String>,
}

impl CostReport {
    pub fn grand_total(&self) -> f64 {
        self.totals.iter().map(|row| row.total_cost).sum()
    }
}
