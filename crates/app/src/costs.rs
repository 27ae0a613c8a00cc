use thiserror::Error;

use crate::error::AppError;
use crate::pricing::PriceTable;
use dashboard_core::UsageRecord;

/// A record named a model the price table does not know about.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no price entry for model {0}")]
pub struct UnknownModel(pub String);

impl From<UnknownModel> for AppError {
    fn from(err: UnknownModel) -> Self {
        AppError::Message(err.to_string())
    }
}

/// Monetary cost of one usage record. Unrounded; two-decimal rounding is a
/// render-time concern.
pub fn record_cost(
    record: &UsageRecord,
    table: &PriceTable,
) -> std::result::Result<f64, UnknownModel> {
    let entry = table
        .entry(&record.model)
        .ok_or_else(|| UnknownModel(record.model.clone()))?;
    Ok(entry.input_per_1k * (record.context_tokens as f64 / 1000.0)
        + entry.output_per_1k * (record.generated_tokens as f64 / 1000.0))
}
